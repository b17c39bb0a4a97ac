//! Desktop player with the default parameters (rule 110, width 100, 150 steps).
//!
//! Run with:
//! ```bash
//! cargo run --example native -p eca-viz
//! ```

use eca_automaton::{PlaybackConfig, SimulationParams};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();
    eca_viz::run_native(SimulationParams::default(), PlaybackConfig::default())
}
