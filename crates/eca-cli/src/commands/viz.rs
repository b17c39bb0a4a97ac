//! Native desktop window command.

use anyhow::Result;
use eca_automaton::{PlaybackConfig, SimulationParams};

/// Open the egui player and block until the window closes.
#[cfg(feature = "viz")]
pub fn execute(params: SimulationParams, playback: PlaybackConfig) -> Result<()> {
    tracing::debug!(
        rule = params.rule().value(),
        width = params.width(),
        steps = params.steps(),
        cell_size = playback.cell_size,
        "viz_command_start"
    );
    println!("🖼️  Launching automaton window (rule {})...", params.rule());
    println!("   Space to play/pause, R to reset");

    eca_viz::run_native(params, playback)
        .map_err(|e| anyhow::anyhow!("Failed to open window: {e}"))
}

#[cfg(not(feature = "viz"))]
pub fn execute(_params: SimulationParams, _playback: PlaybackConfig) -> Result<()> {
    anyhow::bail!("This build has no desktop window. Rebuild with `--features viz`, or use `eca run`.")
}
