//! Generations and the evolution step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rule::RuleTable;

/// One row of binary cells. Its length is fixed for a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation {
    cells: Vec<bool>,
}

impl Generation {
    /// Wrap a row of cells.
    pub fn from_cells(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    /// An all-dead row of the given width.
    pub fn empty(width: usize) -> Self {
        Self {
            cells: vec![false; width],
        }
    }

    /// A row with a single live cell at `width / 2`.
    ///
    /// Integer division puts the seed right of center for even widths
    /// (index 2 of 4).
    pub fn seeded(width: usize) -> Self {
        let mut generation = Self::empty(width);
        if let Some(cell) = generation.cells.get_mut(width / 2) {
            *cell = true;
        }
        generation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Columns of the live cells, left to right.
    pub fn live_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(column, &alive)| alive.then_some(column))
    }

    /// Produce the next generation. See [`evolve`].
    pub fn evolve(&self, table: &RuleTable) -> Generation {
        evolve(self, table)
    }
}

/// Compute the generation that follows `current` under `table`.
///
/// The row is treated as if padded with one dead cell on each side, so the
/// edges see a fixed zero boundary. The input is left untouched and the
/// result always has the same length.
pub fn evolve(current: &Generation, table: &RuleTable) -> Generation {
    let mut padded = Vec::with_capacity(current.len() + 2);
    padded.push(false);
    padded.extend_from_slice(current.cells());
    padded.push(false);

    let cells = padded
        .windows(3)
        .map(|window| table.lookup(window))
        .collect();

    Generation { cells }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &alive in &self.cells {
            f.write_str(if alive { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Generation {
    type Err = String;

    /// Parse a row written as `0`/`1` characters, e.g. `"00100"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(format!("unexpected character {other:?} in generation")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_cells)
    }
}

impl From<Vec<bool>> for Generation {
    fn from(cells: Vec<bool>) -> Self {
        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(s: &str) -> Generation {
        s.parse().unwrap()
    }

    fn table(rule: i64) -> RuleTable {
        RuleTable::build(rule).unwrap()
    }

    #[test]
    fn rule_110_single_seed() {
        let next = evolve(&gen("00100"), &table(110));
        assert_eq!(next.to_string(), "01100");
    }

    #[test]
    fn rule_110_several_steps() {
        let t = table(110);
        let mut g = Generation::seeded(9);
        let mut rows = vec![g.to_string()];
        for _ in 0..3 {
            g = g.evolve(&t);
            rows.push(g.to_string());
        }
        assert_eq!(rows, ["000010000", "000110000", "001110000", "011010000"]);
    }

    #[test]
    fn rule_90_draws_sierpinski_rows() {
        let t = table(90);
        let g1 = evolve(&gen("0001000"), &t);
        let g2 = evolve(&g1, &t);
        assert_eq!(g1.to_string(), "0010100");
        assert_eq!(g2.to_string(), "0100010");
    }

    #[test]
    fn boundary_is_zero_not_wrapped() {
        // Rule 2 copies the right neighbor leftwards; with wrap-around the
        // left edge cell would reappear on the right.
        let next = evolve(&gen("10000"), &table(2));
        assert_eq!(next.to_string(), "00000");
        let next = evolve(&gen("00001"), &table(2));
        assert_eq!(next.to_string(), "00010");
    }

    #[test]
    fn input_is_not_mutated() {
        let g = gen("01011");
        let before = g.clone();
        let _ = evolve(&g, &table(30));
        assert_eq!(g, before);
    }

    #[test]
    fn length_and_determinism_hold_for_every_rule() {
        let rows = ["", "1", "01", "10110", "0000000000", "1111111", "1001011010"];
        for rule in 0..=255 {
            let t = table(rule);
            for row in rows {
                let g = gen(row);
                let a = evolve(&g, &t);
                let b = evolve(&g, &t);
                assert_eq!(a.len(), g.len(), "rule {rule} row {row}");
                assert_eq!(a, b, "rule {rule} row {row}");
            }
        }
    }

    #[test]
    fn zero_row_is_fixed_point_when_000_maps_to_zero() {
        for rule in (0..=255).filter(|r| r % 2 == 0) {
            let zero = Generation::empty(12);
            assert_eq!(evolve(&zero, &table(rule)), zero, "rule {rule}");
        }
        let zero = Generation::empty(4);
        assert_eq!(evolve(&zero, &table(1)).to_string(), "1111");
    }

    #[test]
    fn seed_uses_floor_division() {
        assert_eq!(Generation::seeded(5).to_string(), "00100");
        assert_eq!(Generation::seeded(4).to_string(), "0010");
        assert_eq!(Generation::seeded(1).to_string(), "1");
        assert_eq!(Generation::seeded(2).to_string(), "01");
        assert!(Generation::seeded(0).is_empty());
    }

    #[test]
    fn live_columns_and_population() {
        let g = gen("0110010");
        assert_eq!(g.population(), 3);
        assert_eq!(g.live_columns().collect::<Vec<_>>(), vec![1, 2, 5]);
    }

    #[test]
    fn parse_rejects_other_characters() {
        assert!("0120".parse::<Generation>().is_err());
    }
}
