//! Rule numbers and the neighborhood lookup table derived from them.
//!
//! A rule number is an 8-bit vector. Read most-significant-bit first, its
//! digits give the next state for the neighborhoods `111, 110, ..., 000`.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

/// A validated elementary rule number (0..=255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleNumber(u8);

impl RuleNumber {
    /// Rule 110, the default rule.
    pub const RULE_110: RuleNumber = RuleNumber(110);

    /// Wrap a byte; every byte is a valid rule.
    pub const fn new(rule: u8) -> Self {
        Self(rule)
    }

    /// Validate an arbitrary integer.
    pub fn try_from_int(rule: i64) -> CoreResult<Self> {
        u8::try_from(rule)
            .map(Self)
            .map_err(|_| CoreError::invalid_rule(rule))
    }

    /// The raw rule byte.
    pub fn value(self) -> u8 {
        self.0
    }

    /// 8-digit binary rendering, most significant bit first.
    pub fn binary(self) -> String {
        format!("{:08b}", self.0)
    }
}

impl Default for RuleNumber {
    fn default() -> Self {
        Self::RULE_110
    }
}

impl fmt::Display for RuleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for RuleNumber {
    fn from(rule: u8) -> Self {
        Self(rule)
    }
}

impl FromStr for RuleNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rule: i64 = trimmed
            .parse()
            .map_err(|_| CoreError::invalid_rule(trimmed))?;
        Self::try_from_int(rule)
    }
}

/// A 3-cell neighborhood `(left, center, right)` packed into three bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All eight neighborhoods in table order, `111` first and `000` last.
    pub const ALL: [Pattern; 8] = [
        Pattern(0b111),
        Pattern(0b110),
        Pattern(0b101),
        Pattern(0b100),
        Pattern(0b011),
        Pattern(0b010),
        Pattern(0b001),
        Pattern(0b000),
    ];

    /// Build a pattern from its three cells.
    pub fn new(left: bool, center: bool, right: bool) -> Self {
        Self((left as u8) << 2 | (center as u8) << 1 | right as u8)
    }

    /// Build a pattern from a window of cells. Returns `None` unless the
    /// window holds exactly three cells.
    pub fn from_window(window: &[bool]) -> Option<Self> {
        match *window {
            [left, center, right] => Some(Self::new(left, center, right)),
            _ => None,
        }
    }

    /// Packed value, `0b000..=0b111`.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<bool> = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(format!("unexpected character {other:?} in pattern {s:?}")),
            })
            .collect::<Result<_, _>>()?;
        Self::from_window(&cells).ok_or_else(|| format!("pattern {s:?} must be 3 cells long"))
    }
}

/// Mapping from each of the eight neighborhoods to the next state of the
/// center cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    rule: RuleNumber,
    /// Indexed by `Pattern::bits()`.
    outputs: [bool; 8],
}

impl RuleTable {
    /// Build the table for a rule number, rejecting values outside 0..=255.
    pub fn build(rule: i64) -> CoreResult<Self> {
        RuleNumber::try_from_int(rule).map(Self::new)
    }

    /// Build the table for an already validated rule.
    pub fn new(rule: RuleNumber) -> Self {
        let mut outputs = [false; 8];
        for (bits, output) in outputs.iter_mut().enumerate() {
            *output = (rule.value() >> bits) & 1 == 1;
        }
        Self { rule, outputs }
    }

    /// The rule this table was built from.
    pub fn rule(&self) -> RuleNumber {
        self.rule
    }

    /// Next state for a neighborhood.
    ///
    /// Always `Some` for a well-formed pattern; kept as an `Option` so callers
    /// decide the fallback for a missing entry.
    pub fn get(&self, pattern: Pattern) -> Option<bool> {
        self.outputs.get(pattern.bits() as usize).copied()
    }

    /// Next state for a raw window of cells; anything that is not a 3-cell
    /// window maps to the dead state.
    pub fn lookup(&self, window: &[bool]) -> bool {
        Pattern::from_window(window)
            .and_then(|pattern| self.get(pattern))
            .unwrap_or(false)
    }

    /// Entries in table order (`111` first).
    pub fn iter(&self) -> impl Iterator<Item = (Pattern, bool)> + '_ {
        Pattern::ALL.iter().map(move |&p| (p, self.outputs[p.bits() as usize]))
    }
}

impl From<RuleNumber> for RuleTable {
    fn from(rule: RuleNumber) -> Self {
        Self::new(rule)
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (patterns, outputs): (Vec<String>, Vec<String>) = self
            .iter()
            .map(|(p, bit)| (p.to_string(), format!(" {} ", bit as u8)))
            .unzip();
        writeln!(f, "rule {} ({})", self.rule, self.rule.binary())?;
        writeln!(f, "{}", patterns.join(" "))?;
        write!(f, "{}", outputs.join(" "))
    }
}

impl Serialize for RuleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8))?;
        for (pattern, bit) in self.iter() {
            map.serialize_entry(&pattern.to_string(), &(bit as u8))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_pairs(table: &RuleTable) -> Vec<(String, u8)> {
        table.iter().map(|(p, b)| (p.to_string(), b as u8)).collect()
    }

    #[test]
    fn rule_110_table_matches_binary_expansion() {
        let table = RuleTable::build(110).unwrap();
        let expected = [
            ("111", 0),
            ("110", 1),
            ("101", 1),
            ("100", 0),
            ("011", 1),
            ("010", 1),
            ("001", 1),
            ("000", 0),
        ];
        let expected: Vec<(String, u8)> =
            expected.iter().map(|(p, b)| (p.to_string(), *b)).collect();
        assert_eq!(as_pairs(&table), expected);
        assert_eq!(table.rule().binary(), "01101110");
    }

    #[test]
    fn extreme_rules() {
        assert!(RuleTable::build(0).unwrap().iter().all(|(_, b)| !b));
        assert!(RuleTable::build(255).unwrap().iter().all(|(_, b)| b));
    }

    #[test]
    fn msb_maps_to_all_ones_pattern() {
        let table = RuleTable::build(128).unwrap();
        assert_eq!(table.get("111".parse().unwrap()), Some(true));
        assert_eq!(table.iter().filter(|(_, b)| *b).count(), 1);

        let table = RuleTable::build(1).unwrap();
        assert_eq!(table.get("000".parse().unwrap()), Some(true));
        assert_eq!(table.iter().filter(|(_, b)| *b).count(), 1);
    }

    #[test]
    fn out_of_range_rules_are_rejected() {
        for rule in [-1, 256, 300, i64::MAX] {
            let err = RuleTable::build(rule).unwrap_err();
            assert!(err.is_invalid_rule(), "rule {rule} should be rejected");
        }
    }

    #[test]
    fn rule_number_parses_text() {
        assert_eq!("30".parse::<RuleNumber>().unwrap().value(), 30);
        assert_eq!(" 255 ".parse::<RuleNumber>().unwrap().value(), 255);
        assert!("abc".parse::<RuleNumber>().unwrap_err().is_invalid_rule());
        assert!("256".parse::<RuleNumber>().unwrap_err().is_invalid_rule());
    }

    #[test]
    fn lookup_defaults_to_dead_for_malformed_windows() {
        let table = RuleTable::build(255).unwrap();
        assert!(table.lookup(&[true, false, true]));
        assert!(!table.lookup(&[true, true]));
        assert!(!table.lookup(&[]));
    }

    #[test]
    fn pattern_text_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.to_string().parse::<Pattern>().unwrap(), pattern);
        }
        assert!("12".parse::<Pattern>().is_err());
        assert!("0101".parse::<Pattern>().is_err());
    }

    #[test]
    fn table_serializes_in_table_order() {
        let json = serde_json::to_string(&RuleTable::build(110).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"111":0,"110":1,"101":1,"100":0,"011":1,"010":1,"001":1,"000":0}"#
        );
    }
}
