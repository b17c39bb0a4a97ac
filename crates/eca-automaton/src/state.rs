//! Simulation and animation state.

use std::fmt;

use eca_core::{Generation, RuleNumber, RuleTable, SimulationParams};
use serde::{Deserialize, Serialize};

/// Playback state of the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    /// Freshly reset; nothing drawn yet.
    #[default]
    Idle,
    /// A tick is pending.
    Playing,
    /// Stopped mid-run; resumable with play.
    Paused,
    /// Every generation has been drawn. Only a reset leaves this state.
    Completed,
}

impl AnimationState {
    pub fn is_playing(self) -> bool {
        self == AnimationState::Playing
    }

    /// Whether `play` would start or resume playback from here.
    pub fn can_play(self) -> bool {
        matches!(self, AnimationState::Idle | AnimationState::Paused)
    }

    pub fn label(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Playing => "playing",
            AnimationState::Paused => "paused",
            AnimationState::Completed => "completed",
        }
    }

    /// Caption for a single play/pause toggle button.
    pub fn toggle_label(self) -> &'static str {
        if self.is_playing() {
            "Pause"
        } else {
            "Play"
        }
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything one run needs: the parameters it was built from, the derived
/// rule table, the current generation and how many generations were drawn.
///
/// Built by a reset and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    params: SimulationParams,
    table: RuleTable,
    current_generation: Generation,
    current_step: usize,
}

impl SimulationState {
    /// Fresh state: rule table built, single seed cell, step zero.
    pub fn new(params: SimulationParams) -> Self {
        Self {
            params,
            table: RuleTable::new(params.rule()),
            current_generation: Generation::seeded(params.width()),
            current_step: 0,
        }
    }

    pub fn params(&self) -> SimulationParams {
        self.params
    }

    pub fn rule(&self) -> RuleNumber {
        self.params.rule()
    }

    pub fn width(&self) -> usize {
        self.params.width()
    }

    pub fn steps(&self) -> usize {
        self.params.steps()
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn current_generation(&self) -> &Generation {
        &self.current_generation
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_complete(&self) -> bool {
        self.current_step >= self.steps()
    }

    /// `current_step / steps`, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.current_step as f32 / self.steps() as f32).clamp(0.0, 1.0)
    }

    /// Replace the current generation with its successor and count the step.
    pub(crate) fn advance(&mut self) {
        self.current_generation = self.current_generation.evolve(&self.table);
        self.current_step += 1;
    }
}
