//! Desktop player application.

use std::time::Instant;

use eframe::{App, CreationContext};
use egui::{Context, Key};
use tracing::{debug, warn};

use eca_automaton::{AnimationController, PlaybackConfig, RasterRenderer, SimulationParams};

use crate::canvas::{self, CanvasStyle};
use crate::frame_timer::FrameTimer;
use crate::top_bar::{TopBarAction, TopBarState};

/// egui application hosting one automaton controller.
pub struct EcaApp {
    controller: AnimationController<RasterRenderer, FrameTimer>,
    top_bar: TopBarState,
    style: CanvasStyle,
}

impl EcaApp {
    pub fn new(cc: &CreationContext<'_>, params: SimulationParams, config: PlaybackConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_params(params, config)
    }

    /// Build without a window, e.g. for tests.
    pub fn with_params(params: SimulationParams, config: PlaybackConfig) -> Self {
        Self {
            controller: AnimationController::new(
                params,
                config,
                RasterRenderer::new(),
                FrameTimer::new(),
            ),
            top_bar: TopBarState::new(params),
            style: CanvasStyle::default(),
        }
    }

    pub fn controller(&self) -> &AnimationController<RasterRenderer, FrameTimer> {
        &self.controller
    }

    pub fn top_bar_mut(&mut self) -> &mut TopBarState {
        &mut self.top_bar
    }

    /// Apply a top bar action.
    pub fn apply(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::Toggle => {
                let state = self.controller.toggle();
                debug!(%state, "toggle_pressed");
            }
            TopBarAction::Reset => {
                let TopBarState {
                    rule, width, steps, ..
                } = &self.top_bar;
                match self.controller.reset_from_text(rule, width, steps) {
                    Ok(()) => self.top_bar.error = None,
                    Err(e) => {
                        warn!(error = %e, "reset_failed");
                        self.top_bar.error = Some(format!(
                            "Please enter valid integers for rule (0-255), width and steps: {e}"
                        ));
                    }
                }
            }
        }
    }

    /// Run the tick that is due, if any. Returns whether one ran.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        match self.controller.timer_mut().poll(now) {
            Some(ticket) => {
                self.controller.on_tick(ticket);
                true
            }
            None => false,
        }
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        // Leave keys alone while an entry field is being edited.
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let (space, reset) = ctx.input(|i| (i.key_pressed(Key::Space), i.key_pressed(Key::R)));
        if space {
            self.apply(TopBarAction::Toggle);
        }
        if reset {
            self.apply(TopBarAction::Reset);
        }
    }
}

impl App for EcaApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_tick(now);

        self.handle_shortcuts(ctx);

        let state = self.controller.state();
        let progress = (state.current_step(), state.steps());
        if let Some(action) = self
            .top_bar
            .show(ctx, self.controller.animation(), progress)
        {
            self.apply(action);
        }

        let follow = self.top_bar.follow && self.controller.animation().is_playing();
        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::show(ui, self.controller.renderer(), self.style, follow);
        });

        if let Some(wait) = self.controller.timer().time_until(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
