//! Terminal playback command.
//!
//! Drives a [`Player`] whose renderer prints one line per generation, so the
//! terminal's own scrollback plays the role of the canvas.

use std::io;

use anyhow::{Context, Result};
use eca_automaton::{AnimationState, PlaybackConfig, Player, SimulationParams};
use tracing::{debug, info};

use crate::terminal::{Glyphs, TerminalRenderer};

/// Play `params` to stdout until completion or Ctrl-C.
pub async fn execute(
    params: SimulationParams,
    playback: PlaybackConfig,
    glyphs: Glyphs,
) -> Result<()> {
    debug!(
        rule = params.rule().value(),
        width = params.width(),
        steps = params.steps(),
        tick_delay_ms = playback.tick_delay_ms,
        "run_command_start"
    );

    let renderer = TerminalRenderer::new(io::stdout(), glyphs);
    let (player, handle) = Player::new(params, playback, renderer);
    let run = player.exit_on_complete(true).autoplay().run();
    tokio::pin!(run);

    let controller = tokio::select! {
        controller = &mut run => controller,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted");
            handle.shutdown();
            run.await
        }
    };

    let animation = controller.animation();
    let (state, mut renderer, _) = controller.into_parts();
    if let Some(err) = renderer.take_error() {
        // A closed pipe (e.g. `eca run | head`) just ends the output early.
        if err.kind() != io::ErrorKind::BrokenPipe {
            return Err(err).context("Failed to write generation to stdout");
        }
    }

    info!(
        step = state.current_step(),
        steps = state.steps(),
        rows = renderer.rows_written(),
        scroll = renderer.last_scroll(),
        completed = animation == AnimationState::Completed,
        "run_command_done"
    );
    Ok(())
}
