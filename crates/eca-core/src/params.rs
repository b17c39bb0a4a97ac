//! User-supplied simulation parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, Dimension};
use crate::rule::RuleNumber;

/// Unvalidated parameters as they come from a config file or entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSimulationParams {
    pub rule: i64,
    pub width: i64,
    pub steps: i64,
}

/// Validated parameters for one run: rule in 0..=255, width in
/// `1..=MAX_WIDTH` and steps in `1..=MAX_STEPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSimulationParams", into = "RawSimulationParams")]
pub struct SimulationParams {
    rule: RuleNumber,
    width: usize,
    steps: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            rule: RuleNumber::RULE_110,
            width: 100,
            steps: 150,
        }
    }
}

impl SimulationParams {
    /// Validate integer parameters. The rule is checked first, then width,
    /// then steps; the first failure is returned.
    pub fn new(rule: i64, width: i64, steps: i64) -> CoreResult<Self> {
        let rule = RuleNumber::try_from_int(rule)?;
        let width = positive(Dimension::Width, width)?;
        let steps = positive(Dimension::Steps, steps)?;
        Ok(Self { rule, width, steps })
    }

    /// Validate parameters typed as text (e.g. entry fields).
    ///
    /// Surrounding whitespace is ignored; anything else that is not an
    /// integer is rejected with the error kind of the offending field.
    pub fn parse(rule: &str, width: &str, steps: &str) -> CoreResult<Self> {
        let rule: RuleNumber = rule.parse()?;
        let width = parse_dimension(Dimension::Width, width)?;
        let steps = parse_dimension(Dimension::Steps, steps)?;
        Ok(Self { rule, width, steps })
    }

    pub fn rule(&self) -> RuleNumber {
        self.rule
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

}

fn positive(dimension: Dimension, value: i64) -> CoreResult<usize> {
    match usize::try_from(value) {
        Ok(size) if (1..=dimension.max()).contains(&size) => Ok(size),
        _ => Err(CoreError::invalid_dimension(dimension, value)),
    }
}

fn parse_dimension(dimension: Dimension, text: &str) -> CoreResult<usize> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CoreError::invalid_dimension(dimension, trimmed))?;
    positive(dimension, value)
}

impl TryFrom<RawSimulationParams> for SimulationParams {
    type Error = CoreError;

    fn try_from(raw: RawSimulationParams) -> Result<Self, Self::Error> {
        Self::new(raw.rule, raw.width, raw.steps)
    }
}

impl From<SimulationParams> for RawSimulationParams {
    fn from(params: SimulationParams) -> Self {
        Self {
            rule: params.rule.value() as i64,
            width: params.width as i64,
            steps: params.steps as i64,
        }
    }
}
