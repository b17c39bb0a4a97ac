//! The playback state machine.
//!
//! `AnimationController` owns the simulation state, the renderer and the one
//! tick timer. Every transition is a method call that runs to completion:
//!
//! ```text
//! Idle/Paused --play--> Playing --pause--> Paused
//! Playing --tick (steps left)--> Playing   draw, evolve, scroll, re-arm
//! Playing --tick (last step)---> Completed
//! any --reset--> Idle                     disarm, rebuild, clear
//! ```

use std::time::Duration;

use eca_core::SimulationParams;
use tracing::{debug, info, trace, warn};

use crate::config::PlaybackConfig;
use crate::error::AutomatonResult;
use crate::render::Renderer;
use crate::state::{AnimationState, SimulationState};
use crate::timer::{TickTicket, TickTimer};

/// What a delivered tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Drew row `row` and advanced; another tick is armed.
    Advanced { row: usize },
    /// Drew the final row (or found nothing left) and entered `Completed`.
    Completed,
    /// The ticket was cancelled by a pause or reset; nothing happened.
    Stale,
}

/// Drives an automaton through its generations on a timer.
pub struct AnimationController<R, T> {
    state: SimulationState,
    animation: AnimationState,
    config: PlaybackConfig,
    renderer: R,
    timer: T,
    /// The only ticket `on_tick` will honor.
    pending: Option<TickTicket>,
    next_ticket: TickTicket,
}

impl<R: Renderer, T: TickTimer> AnimationController<R, T> {
    /// Create a controller in `Idle` with a freshly prepared renderer.
    pub fn new(params: SimulationParams, config: PlaybackConfig, renderer: R, timer: T) -> Self {
        let mut controller = Self {
            state: SimulationState::new(params),
            animation: AnimationState::Idle,
            config,
            renderer,
            timer,
            pending: None,
            next_ticket: TickTicket::first(),
        };
        controller.prepare_renderer();
        controller
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn params(&self) -> SimulationParams {
        self.state.params()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Ticket of the tick currently armed, if any.
    pub fn pending_tick(&self) -> Option<TickTicket> {
        self.pending
    }

    pub fn into_parts(self) -> (SimulationState, R, T) {
        (self.state, self.renderer, self.timer)
    }

    /// Start or resume playback. No-op while playing or once completed.
    pub fn play(&mut self) -> AnimationState {
        if !self.animation.can_play() {
            debug!(state = %self.animation, "play_ignored");
            return self.animation;
        }
        info!(
            rule = %self.state.rule(),
            step = self.state.current_step(),
            steps = self.state.steps(),
            "playback_started"
        );
        self.animation = AnimationState::Playing;
        // The first tick runs right away; later ones wait the configured delay.
        self.schedule(Duration::ZERO);
        self.animation
    }

    /// Stop playback, cancelling the pending tick. No-op unless playing.
    pub fn pause(&mut self) -> AnimationState {
        if !self.animation.is_playing() {
            debug!(state = %self.animation, "pause_ignored");
            return self.animation;
        }
        self.cancel_pending();
        self.animation = AnimationState::Paused;
        info!(step = self.state.current_step(), "playback_paused");
        self.animation
    }

    /// The single play/pause command.
    pub fn toggle(&mut self) -> AnimationState {
        if self.animation.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Validate integer parameters and, if they are valid, start over.
    ///
    /// On error nothing changes: the previous run keeps its state, its
    /// drawing and, if it was playing, its pending tick.
    pub fn reset(&mut self, rule: i64, width: i64, steps: i64) -> AutomatonResult<()> {
        let params = SimulationParams::new(rule, width, steps).inspect_err(|e| {
            warn!(rule, width, steps, error = %e, "reset_rejected");
        })?;
        self.reset_with(params);
        Ok(())
    }

    /// Like [`reset`](Self::reset) for parameters typed as text.
    pub fn reset_from_text(&mut self, rule: &str, width: &str, steps: &str) -> AutomatonResult<()> {
        let params = SimulationParams::parse(rule, width, steps).inspect_err(|e| {
            warn!(rule, width, steps, error = %e, "reset_rejected");
        })?;
        self.reset_with(params);
        Ok(())
    }

    /// Start over with already validated parameters.
    pub fn reset_with(&mut self, params: SimulationParams) {
        self.cancel_pending();
        self.state = SimulationState::new(params);
        self.animation = AnimationState::Idle;
        self.prepare_renderer();
        info!(
            rule = %params.rule(),
            width = params.width(),
            steps = params.steps(),
            "simulation_reset"
        );
    }

    /// Start over with the current parameters.
    pub fn restart(&mut self) {
        self.reset_with(self.state.params());
    }

    /// Handle a fired timer.
    pub fn on_tick(&mut self, ticket: TickTicket) -> TickOutcome {
        if self.pending != Some(ticket) || !self.animation.is_playing() {
            trace!(ticket = ticket.id(), "stale_tick_dropped");
            return TickOutcome::Stale;
        }
        self.pending = None;

        if self.state.is_complete() {
            self.complete();
            return TickOutcome::Completed;
        }

        let row = self.state.current_step();
        let cell_size = self.config.cell_size;
        self.renderer
            .draw_row(self.state.current_generation(), row, cell_size);
        self.state.advance();
        let (width, height) = self.extent();
        self.renderer.set_extent(width, height);
        self.renderer.scroll_to(self.state.progress());

        trace!(
            row,
            population = self.state.current_generation().population(),
            "tick_complete"
        );

        if self.state.is_complete() {
            self.complete();
            TickOutcome::Completed
        } else {
            self.schedule(self.config.tick_delay());
            TickOutcome::Advanced { row }
        }
    }

    /// Content size in renderer units for the current parameters, saturating
    /// at `usize::MAX`.
    pub fn extent(&self) -> (usize, usize) {
        let cell = self.config.cell_size as usize;
        (
            self.state.width().saturating_mul(cell),
            self.state.steps().saturating_mul(cell),
        )
    }

    fn schedule(&mut self, delay: Duration) {
        let ticket = self.next_ticket;
        self.next_ticket = ticket.next();
        self.pending = Some(ticket);
        self.timer.arm(ticket, delay);
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.timer.disarm();
        }
    }

    fn complete(&mut self) {
        self.cancel_pending();
        self.animation = AnimationState::Completed;
        info!(steps = self.state.steps(), "playback_completed");
    }

    fn prepare_renderer(&mut self) {
        let (width, height) = self.extent();
        self.renderer.clear();
        self.renderer.set_extent(width, height);
        self.renderer.scroll_to(0.0);
    }
}
