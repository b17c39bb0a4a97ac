//! Core domain types for elementary cellular automata.
//!
//! An elementary automaton is a row of two-state cells where each cell's next
//! state depends on itself and its two neighbors. The eight possible
//! neighborhoods are looked up in a [`RuleTable`] built from a rule number
//! (0..=255), and [`evolve`] applies that table across a [`Generation`] with a
//! fixed dead-cell boundary.
//!
//! ```
//! use eca_core::{Generation, RuleTable};
//!
//! let table = RuleTable::build(110).unwrap();
//! let next = Generation::seeded(5).evolve(&table);
//! assert_eq!(next.to_string(), "01100");
//! ```

mod error;
mod generation;
mod params;
mod rule;

pub use error::{CoreError, CoreResult, Dimension, MAX_STEPS, MAX_WIDTH};
pub use generation::{evolve, Generation};
pub use params::{RawSimulationParams, SimulationParams};
pub use rule::{Pattern, RuleNumber, RuleTable};
