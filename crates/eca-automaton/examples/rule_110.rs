//! Rule 110 played through the tokio player into an in-memory raster.
//!
//! Run with:
//! ```bash
//! cargo run --example rule_110 -p eca-automaton
//! ```

use eca_automaton::{PlaybackConfig, Player, RasterRenderer, SimulationParams};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let params = SimulationParams::new(110, 64, 32)?;
    let (player, handle) = Player::new(params, PlaybackConfig::instant(), RasterRenderer::new());

    let controller = player.autoplay().exit_on_complete(true).run().await;
    drop(handle);

    print!("{}", controller.renderer().to_ascii(params.width()));
    println!(
        "rule {} finished in state {} after {} generations",
        params.rule(),
        controller.animation(),
        controller.state().current_step()
    );
    Ok(())
}
