//! Tape of evaluated expressions
//!
//! Every evaluate press appends one [`HistoryEntry`]. The tape is bounded;
//! once full, the oldest evaluation falls off the front.
//!
//! Results are written to JSON in display form (`"6"`, `"2.5"`, `"NaN"`,
//! `"Infinity"`) so every value the keypad can produce survives a round trip.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::number::format_value;
use crate::core::CalcResult;

/// One evaluation on the tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Operands and operators that were folded, e.g. `"2 * 2"`
    pub expression: String,
    /// Accumulated value after the fold
    #[serde(with = "display_number")]
    pub result: f64,
}

impl HistoryEntry {
    /// Entry for `expression` folding to `result`
    #[must_use]
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    /// `"<expression> = <result>"` as the tape shows it
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_value(self.result))
    }
}

/// (De)serializes an `f64` through its display text.
///
/// Plain JSON numbers are accepted on the way in as well.
mod display_number {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::number::{format_value, parse_display};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_value(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n,
            Raw::Text(text) => parse_display(&text),
        })
    }
}

/// Bounded evaluation tape
///
/// `max_entries` only bounds the tape; storage grows with use.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Bound used by [`History::new`]
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Empty tape bounded by [`History::DEFAULT_MAX_ENTRIES`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Tape keeping at most `max_entries` evaluations (0 keeps none)
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Appends `entry`, evicting the oldest evaluations beyond the bound
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        while self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Appends an evaluation of `expression`
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(HistoryEntry::new(expression, result));
    }

    /// Number of evaluations on the tape
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been evaluated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The bound this tape was created with
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drops every entry, keeping the bound
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Most recent evaluation
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entry at `index`, 0 being the oldest
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Entries as a JSON array, oldest first
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Rebuilds a tape bounded by `max_entries` from [`History::to_json`]
    /// output. When the array holds more than fits, the newest are kept.
    pub fn from_json(json: &str, max_entries: usize) -> CalcResult<Self> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::with_capacity(max_entries);
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }
}
