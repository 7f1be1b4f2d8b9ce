//! Keypad Calculator
//!
//! A keystroke-driven arithmetic calculator state machine. Keys are bound to
//! handlers, each click mutates the calculator and every subscriber hears
//! about the new display and accumulated value.
//!
//! Operators chain left to right: pressing an operator commits the current
//! entry and folds everything queued so far, pressing enter folds in the
//! pending operator and seeds the next entry with the result.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let calc = Calculator::new();
//! let sub = calc.subscribe(|key, display, value| {
//!     println!("{key} -> {display} ({value})");
//! });
//!
//! calc.press_str("12/2/").unwrap();
//! assert_eq!(calc.value(), 6.0);
//! assert_eq!(calc.display(), "0");
//!
//! sub.unsubscribe();
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod core;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::{Calculator, KeyHandler, Snapshot, Subscriber, Subscription};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{CalcError, CalcResult, CalculatorKey, KeyClass, KeyEvent, Operation};
}
