//! Error types for parameter validation.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Upper bound on cells per generation.
pub const MAX_WIDTH: usize = 65_536;

/// Upper bound on generations per run.
pub const MAX_STEPS: usize = 65_536;

/// Which of the two size parameters a dimension error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Number of cells per generation.
    Width,
    /// Number of generations to produce.
    Steps,
}

impl Dimension {
    /// Largest accepted value. Anything above is rejected before a
    /// generation is allocated.
    pub fn max(self) -> usize {
        match self {
            Dimension::Width => MAX_WIDTH,
            Dimension::Steps => MAX_STEPS,
        }
    }

    /// Lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Steps => "steps",
        }
    }
}

/// Errors raised while building a rule table or validating simulation parameters.
///
/// Evolution itself is infallible; these only surface before a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Rule number outside `0..=255`, or rule text that is not an integer.
    #[error("invalid rule {input:?} (must be an integer in 0..=255)")]
    InvalidRule { input: String },

    /// Width or steps that is non-numeric, not strictly positive, or above
    /// its [`Dimension::max`].
    #[error(
        "invalid {} {input:?} (must be an integer in 1..={})",
        .dimension.name(),
        .dimension.max()
    )]
    InvalidDimension { dimension: Dimension, input: String },
}

impl CoreError {
    pub(crate) fn invalid_rule(input: impl ToString) -> Self {
        Self::InvalidRule {
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_dimension(dimension: Dimension, input: impl ToString) -> Self {
        Self::InvalidDimension {
            dimension,
            input: input.to_string(),
        }
    }

    /// True for [`CoreError::InvalidRule`].
    pub fn is_invalid_rule(&self) -> bool {
        matches!(self, Self::InvalidRule { .. })
    }

    /// True for [`CoreError::InvalidDimension`].
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, Self::InvalidDimension { .. })
    }
}
