//! Core calculator types: keys, operations, number helpers and history
//!
//! Everything here is plain data. The state machine that ties it together
//! lives in [`crate::calculator`].

pub mod history;
pub mod keys;
pub mod number;

pub use keys::{CalculatorKey, KeyClass, KeyEvent, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operation was applied for a key that is not an operator
    #[error("Invalid operation: '{key}'")]
    InvalidOperation {
        /// The offending key
        key: CalculatorKey,
    },

    /// Text that does not name any calculator key
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),

    /// History (de)serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
