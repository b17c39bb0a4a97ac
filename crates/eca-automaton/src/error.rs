//! Error types for the playback engine.

use eca_core::CoreError;
use thiserror::Error;

/// Result type alias for automaton operations.
pub type AutomatonResult<T> = Result<T, AutomatonError>;

/// Errors that can occur while driving an automaton.
///
/// Ticks never fail; every variant here comes from (re)initialization or from
/// talking to a player task that is gone.
#[derive(Debug, Error)]
pub enum AutomatonError {
    /// Rejected simulation parameters. Nothing was changed.
    #[error(transparent)]
    InvalidParams(#[from] CoreError),

    /// The player task has shut down and can no longer take commands.
    #[error("player is not running")]
    PlayerClosed,
}

impl AutomatonError {
    /// True when a reset was rejected because of the rule number.
    pub fn is_invalid_rule(&self) -> bool {
        matches!(self, Self::InvalidParams(e) if e.is_invalid_rule())
    }

    /// True when a reset was rejected because of width or steps.
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, Self::InvalidParams(e) if e.is_invalid_dimension())
    }
}
