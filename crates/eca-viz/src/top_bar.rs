//! Top bar with the parameter fields and playback buttons.

use egui::{Context, RichText};

use eca_automaton::{AnimationState, SimulationParams};

/// Action requested from the top bar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Toggle,
    Reset,
}

/// Text typed into the entry fields; only parsed when Reset is pressed.
#[derive(Debug, Clone)]
pub struct TopBarState {
    pub rule: String,
    pub width: String,
    pub steps: String,
    /// Message from the last rejected reset.
    pub error: Option<String>,
    /// Keep the newest row in view while playing.
    pub follow: bool,
}

impl TopBarState {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            rule: params.rule().to_string(),
            width: params.width().to_string(),
            steps: params.steps().to_string(),
            error: None,
            follow: true,
        }
    }

    /// Render the bar. `progress` is `(step, steps)`.
    pub fn show(
        &mut self,
        ctx: &Context,
        animation: AnimationState,
        progress: (usize, usize),
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame {
                inner_margin: egui::Margin {
                    left: 12,
                    right: 12,
                    top: 6,
                    bottom: 6,
                },
                fill: egui::Color32::from_rgb(236, 236, 236),
                ..Default::default()
            })
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Rule (0-255):");
                    ui.add(egui::TextEdit::singleline(&mut self.rule).desired_width(40.0));
                    ui.label("Width:");
                    ui.add(egui::TextEdit::singleline(&mut self.width).desired_width(40.0));
                    ui.label("Steps:");
                    ui.add(egui::TextEdit::singleline(&mut self.steps).desired_width(40.0));

                    ui.separator();

                    let toggle = ui.add_enabled(
                        animation != AnimationState::Completed,
                        egui::Button::new(animation.toggle_label()),
                    );
                    if toggle.clicked() {
                        action = Some(TopBarAction::Toggle);
                    }
                    if ui.button("Reset").clicked() {
                        action = Some(TopBarAction::Reset);
                    }

                    ui.separator();
                    ui.checkbox(&mut self.follow, "Follow");
                    ui.label(
                        RichText::new(format!("{} · {}/{}", animation, progress.0, progress.1))
                            .monospace(),
                    );
                });

                if let Some(err) = &self.error {
                    ui.label(RichText::new(err).color(egui::Color32::from_rgb(200, 30, 30)));
                }
            });

        action
    }
}
