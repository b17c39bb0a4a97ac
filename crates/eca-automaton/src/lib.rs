//! Playback engine for elementary cellular automata.
//!
//! This crate turns the pure rule/evolution model of `eca-core` into an
//! interactive, timed animation:
//!
//! - **SimulationState**: rule table, current generation and step counter for one run
//! - **AnimationController**: the `Idle / Playing / Paused / Completed` state machine
//! - **Renderer**: write-only drawing surface the controller feeds row by row
//! - **TickTimer**: the single deferred tick the controller may have outstanding
//! - **Player**: a tokio task that owns a controller and serialises commands and ticks
//!
//! ## Tick lifecycle
//!
//! ```text
//! play ──► arm(ticket) ──► on_tick(ticket) ──► draw_row ─► evolve ─► scroll_to ─► arm(next)
//!                                  ▲
//!      pause / reset ── disarm ────┘ (stale tickets are dropped)
//! ```
//!
//! ## Features
//!
//! - `runtime` (default) - tokio timer and the async [`Player`]

pub mod config;
mod controller;
mod error;
mod render;
mod state;
pub mod test_fixtures;
mod timer;

#[cfg(feature = "runtime")]
mod player;

pub use config::PlaybackConfig;
pub use controller::{AnimationController, TickOutcome};
pub use error::{AutomatonError, AutomatonResult};
pub use render::{CellRect, RasterRenderer, Renderer, Viewport};
pub use state::{AnimationState, SimulationState};
pub use timer::{ManualTimer, TickTicket, TickTimer};

#[cfg(feature = "runtime")]
pub use player::{Player, PlayerHandle, PlayerStatus};
#[cfg(feature = "runtime")]
pub use timer::TokioTimer;

// Core types, re-exported so drivers need a single dependency.
pub use eca_core::{
    evolve, CoreError, Dimension, Generation, Pattern, RuleNumber, RuleTable, SimulationParams,
};
