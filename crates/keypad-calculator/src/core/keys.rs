//! Calculator keys and the operations they map to
//!
//! Keys are a closed enum; dispatch goes through [`KeyClass`] rather than the
//! key's string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Every key on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKey {
    /// Digit 0
    #[serde(rename = "0")]
    Number0,
    /// Digit 1
    #[serde(rename = "1")]
    Number1,
    /// Digit 2
    #[serde(rename = "2")]
    Number2,
    /// Digit 3
    #[serde(rename = "3")]
    Number3,
    /// Digit 4
    #[serde(rename = "4")]
    Number4,
    /// Digit 5
    #[serde(rename = "5")]
    Number5,
    /// Digit 6
    #[serde(rename = "6")]
    Number6,
    /// Digit 7
    #[serde(rename = "7")]
    Number7,
    /// Digit 8
    #[serde(rename = "8")]
    Number8,
    /// Digit 9
    #[serde(rename = "9")]
    Number9,
    /// Decimal point
    #[serde(rename = ".")]
    Period,
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
    /// Evaluate
    #[serde(rename = "_", alias = "=")]
    Enter,
}

/// What a key does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Append a digit (0-9) to the current entry
    Digit(u8),
    /// Mark the decimal point in the current entry
    Decimal,
    /// Commit the entry and queue a binary operation
    Operator(Operation),
    /// Fold everything queued into the accumulated value
    Evaluate,
}

impl CalculatorKey {
    /// All keys, digits first
    pub const ALL: [Self; 16] = [
        Self::Number0,
        Self::Number1,
        Self::Number2,
        Self::Number3,
        Self::Number4,
        Self::Number5,
        Self::Number6,
        Self::Number7,
        Self::Number8,
        Self::Number9,
        Self::Period,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Enter,
    ];

    /// The ten digit keys in numeric order
    pub const DIGITS: [Self; 10] = [
        Self::Number0,
        Self::Number1,
        Self::Number2,
        Self::Number3,
        Self::Number4,
        Self::Number5,
        Self::Number6,
        Self::Number7,
        Self::Number8,
        Self::Number9,
    ];

    /// Returns the key's string form (`"_"` for enter)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number0 => "0",
            Self::Number1 => "1",
            Self::Number2 => "2",
            Self::Number3 => "3",
            Self::Number4 => "4",
            Self::Number5 => "5",
            Self::Number6 => "6",
            Self::Number7 => "7",
            Self::Number8 => "8",
            Self::Number9 => "9",
            Self::Period => ".",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Enter => "_",
        }
    }

    /// Classifies the key for dispatch
    #[must_use]
    pub const fn class(&self) -> KeyClass {
        match self {
            Self::Number0 => KeyClass::Digit(0),
            Self::Number1 => KeyClass::Digit(1),
            Self::Number2 => KeyClass::Digit(2),
            Self::Number3 => KeyClass::Digit(3),
            Self::Number4 => KeyClass::Digit(4),
            Self::Number5 => KeyClass::Digit(5),
            Self::Number6 => KeyClass::Digit(6),
            Self::Number7 => KeyClass::Digit(7),
            Self::Number8 => KeyClass::Digit(8),
            Self::Number9 => KeyClass::Digit(9),
            Self::Period => KeyClass::Decimal,
            Self::Add => KeyClass::Operator(Operation::Add),
            Self::Subtract => KeyClass::Operator(Operation::Subtract),
            Self::Multiply => KeyClass::Operator(Operation::Multiply),
            Self::Divide => KeyClass::Operator(Operation::Divide),
            Self::Enter => KeyClass::Evaluate,
        }
    }

    /// Returns the digit key for `0..=9`
    #[must_use]
    pub fn digit(d: u8) -> Option<Self> {
        Self::DIGITS.get(usize::from(d)).copied()
    }

    /// Maps a typed character to a key (`=` and `_` both evaluate)
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Self::digit(ch as u8 - b'0'),
            '.' => Some(Self::Period),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '=' | '_' => Some(Self::Enter),
            _ => None,
        }
    }

    /// Returns true for `+ - * /`
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self.class(), KeyClass::Operator(_))
    }
}

impl fmt::Display for CalculatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorKey {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        if s == "Enter" {
            return Ok(Self::Enter);
        }
        let mut chars = s.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => None,
        };
        key.ok_or_else(|| CalcError::UnknownKey(s.to_string()))
    }
}

/// Binary operations reachable from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the key that queues this operation
    #[must_use]
    pub const fn key(&self) -> CalculatorKey {
        match self {
            Self::Add => CalculatorKey::Add,
            Self::Subtract => CalculatorKey::Subtract,
            Self::Multiply => CalculatorKey::Multiply,
            Self::Divide => CalculatorKey::Divide,
        }
    }

    /// Folds `operand` into `acc`.
    ///
    /// Division only happens for a divisor strictly greater than zero; zero,
    /// negative and NaN divisors leave `acc` unchanged.
    #[must_use]
    pub fn apply(&self, acc: f64, operand: f64) -> f64 {
        match self {
            Self::Add => acc + operand,
            Self::Subtract => acc - operand,
            Self::Multiply => acc * operand,
            Self::Divide => {
                if operand > 0.0 {
                    acc / operand
                } else {
                    acc
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<CalculatorKey> for Operation {
    type Error = CalcError;

    fn try_from(key: CalculatorKey) -> CalcResult<Self> {
        match key.class() {
            KeyClass::Operator(op) => Ok(op),
            _ => Err(CalcError::InvalidOperation { key }),
        }
    }
}

/// A key press, passed into a bound handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: CalculatorKey,
}

impl KeyEvent {
    /// Creates an event for `key`
    #[must_use]
    pub const fn new(key: CalculatorKey) -> Self {
        Self { key }
    }
}
