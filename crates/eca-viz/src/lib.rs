//! egui desktop player for elementary cellular automata.
//!
//! The window hosts an [`eca_automaton::AnimationController`] whose renderer
//! is an in-memory raster painted every frame, and whose timer is polled by
//! the frame loop.

mod app;
mod canvas;
mod frame_timer;
mod top_bar;

pub use app::EcaApp;
pub use canvas::{rows_in_view, CanvasStyle};
pub use frame_timer::FrameTimer;
pub use top_bar::{TopBarAction, TopBarState};

use eca_automaton::{PlaybackConfig, SimulationParams};

/// Open the native window and block until it is closed.
pub fn run_native(params: SimulationParams, config: PlaybackConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Elementary Cellular Automaton (Play/Pause)"),
        ..Default::default()
    };

    eframe::run_native(
        "Elementary Cellular Automaton",
        options,
        Box::new(move |cc| Ok(Box::new(EcaApp::new(cc, params, config)))),
    )
}
