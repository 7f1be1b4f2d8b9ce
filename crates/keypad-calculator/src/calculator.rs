//! Keypad calculator state machine
//!
//! [`Calculator`] owns the entry buffer, the operand/operator queues and the
//! accumulated value. Keys are bound with [`Calculator::add_key`], which hands
//! back a [`KeyHandler`]; clicking the handler runs the key's transition and
//! then notifies every subscriber synchronously, in registration order.
//!
//! # Re-entrancy
//!
//! Subscribers run after the state borrow is released, so a subscriber may
//! read the calculator or click another handler without panicking. The state
//! produced by such nested presses is unspecified and not supported.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::history::History;
use crate::core::number::{format_value, parse_display};
use crate::core::{CalcError, CalcResult, CalculatorKey, KeyClass, KeyEvent, Operation};

/// Callback invoked after every key press with `(key, display, value)`
pub type Subscriber = Rc<dyn Fn(CalculatorKey, &str, f64)>;

struct State {
    /// Digits typed since the last commit
    entry: String,
    /// Split index for the decimal point in `entry`
    decimal_index: Option<usize>,
    /// Committed operands, paired index-for-index with `operations`
    operands: Vec<f64>,
    operations: Vec<Operation>,
    value: f64,
    last_key: Option<CalculatorKey>,
    last_op: Option<Operation>,
    subscribers: Vec<Subscriber>,
    history: History,
}

impl State {
    fn new(history: History) -> Self {
        Self {
            entry: String::new(),
            decimal_index: None,
            operands: Vec::new(),
            operations: Vec::new(),
            value: 0.0,
            last_key: None,
            last_op: None,
            subscribers: Vec::new(),
            history,
        }
    }

    fn display(&self) -> String {
        if self.entry.is_empty() {
            return "0".to_string();
        }
        match self.decimal_index {
            Some(0) => format!("0.{}", self.entry),
            Some(index) if self.entry.len() >= 2 => {
                match (self.entry.get(..index), self.entry.get(index..)) {
                    (Some(int_part), Some(frac_part)) => format!("{int_part}.{frac_part}"),
                    _ => self.entry.clone(),
                }
            }
            _ => self.entry.clone(),
        }
    }

    fn buffer(&self) -> String {
        let trace: String = self
            .operands
            .iter()
            .enumerate()
            .map(|(idx, operand)| {
                let op = self.operations.get(idx).map_or("", Operation::symbol);
                format!(" {} {op}", format_value(*operand))
            })
            .collect();
        trace.trim_start().to_string()
    }

    /// Queued operands joined by the operators the fold applies between them
    fn expression(&self) -> String {
        let Some((first, rest)) = self.operands.split_first() else {
            return format_value(self.value);
        };
        rest.iter()
            .zip(self.operations.iter().skip(1))
            .fold(format_value(*first), |expr, (operand, op)| {
                format!("{expr} {op} {}", format_value(*operand))
            })
    }

    /// Starts a fresh entry, dropping any typed digits and decimal marker
    fn clear_entry(&mut self) {
        self.entry.clear();
        self.decimal_index = None;
    }

    /// Runs the transition for `key`. Returns true when subscribers should
    /// be notified.
    fn handle(&mut self, key: CalculatorKey) -> bool {
        match key.class() {
            KeyClass::Digit(digit) => {
                self.push_digit(key, digit);
                true
            }
            KeyClass::Decimal => self.mark_decimal(key),
            KeyClass::Operator(op) => self.operate(key, op),
            KeyClass::Evaluate => self.evaluate(key),
        }
    }

    fn push_digit(&mut self, key: CalculatorKey, digit: u8) {
        if digit == 0 && self.entry.is_empty() {
            trace!("leading zero suppressed");
            return;
        }
        if self.last_key == Some(CalculatorKey::Enter) {
            self.clear_entry();
        }
        self.last_key = Some(key);
        self.entry.push(char::from(b'0' + digit));
    }

    fn mark_decimal(&mut self, key: CalculatorKey) -> bool {
        if self.decimal_index.is_some() || self.last_key == Some(key) {
            return false;
        }
        self.last_key = Some(key);
        self.decimal_index = Some(self.entry.len());
        true
    }

    fn operate(&mut self, key: CalculatorKey, op: Operation) -> bool {
        if self.last_key == Some(key) {
            return false;
        }
        self.last_key = Some(key);
        self.last_op = Some(op);
        if let Err(err) = self.apply_operation(key) {
            warn!(%err, "operator key rejected");
            return false;
        }
        true
    }

    /// Commits the display as an operand queued with `key`'s operation,
    /// clears the entry and folds the queues.
    fn apply_operation(&mut self, key: CalculatorKey) -> CalcResult<()> {
        let op = Operation::try_from(key)?;
        self.operands.push(parse_display(&self.display()));
        self.operations.push(op);
        self.clear_entry();
        self.calculate();
        Ok(())
    }

    fn evaluate(&mut self, key: CalculatorKey) -> bool {
        if self.last_key == Some(key) {
            return false;
        }
        self.last_key = Some(key);
        if let Some(op) = self.last_op {
            self.operands.push(parse_display(&self.display()));
            self.operations.push(op);
        }
        self.calculate();

        let expression = self.expression();
        self.history.record(&expression, self.value);
        debug!(%expression, value = self.value, "evaluated");

        self.entry = format_value(self.value);
        self.decimal_index = None;
        self.operands.clear();
        self.operations.clear();
        true
    }

    /// Left-folds the operand queue into the accumulated value.
    ///
    /// Operand `i` is combined using the operator queued at index `i`; the
    /// operator at index 0 never takes part.
    fn calculate(&mut self) {
        let Some((&seed, rest)) = self.operands.split_first() else {
            self.value = parse_display(&self.display());
            return;
        };
        self.value = rest
            .iter()
            .zip(self.operations.iter().skip(1))
            .fold(seed, |acc, (&operand, op)| op.apply(acc, operand));
    }
}

fn dispatch(state: &RefCell<State>, event: KeyEvent) {
    let key = event.key;
    let notification = {
        let mut state = state.borrow_mut();
        state
            .handle(key)
            .then(|| (state.subscribers.clone(), state.display(), state.value))
    };

    let Some((subscribers, display_text, value)) = notification else {
        trace!(%key, "key ignored");
        return;
    };
    debug!(
        %key,
        display = %display_text,
        value,
        subscribers = subscribers.len(),
        "key applied"
    );
    for subscriber in &subscribers {
        subscriber(key, &display_text, value);
    }
}

/// Keystroke-driven calculator
///
/// # Example
///
/// ```rust
/// use keypad_calculator::prelude::*;
///
/// let calc = Calculator::new();
/// let two = calc.add_key(CalculatorKey::Number2);
/// let times = calc.add_key(CalculatorKey::Multiply);
/// let enter = calc.add_key(CalculatorKey::Enter);
///
/// two.click();
/// times.click();
/// two.click();
/// enter.click();
///
/// assert_eq!(calc.display(), "4");
/// assert_eq!(calc.value(), 4.0);
/// ```
pub struct Calculator {
    state: Rc<RefCell<State>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Calculator")
            .field("display", &state.display())
            .field("value", &state.value)
            .field("buffer", &state.buffer())
            .field("last_key", &state.last_key)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

impl Calculator {
    /// Creates a calculator with an empty entry and a value of 0
    #[must_use]
    pub fn new() -> Self {
        Self::with_history(History::new())
    }

    /// Creates a calculator whose evaluation tape keeps at most `max_entries`
    #[must_use]
    pub fn with_history_capacity(max_entries: usize) -> Self {
        Self::with_history(History::with_capacity(max_entries))
    }

    fn with_history(history: History) -> Self {
        Self {
            state: Rc::new(RefCell::new(State::new(history))),
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> String {
        self.state.borrow().display()
    }

    /// Accumulated value after the last operator or evaluate press
    #[must_use]
    pub fn value(&self) -> f64 {
        self.state.borrow().value
    }

    /// Raw entry buffer without decimal formatting
    #[must_use]
    pub fn current_value(&self) -> String {
        self.state.borrow().entry.clone()
    }

    /// Committed operands, each followed by its operator, e.g. `"12 /"`
    #[must_use]
    pub fn buffer(&self) -> String {
        self.state.borrow().buffer()
    }

    /// Binds a handler for `key`. Nothing changes until it is clicked.
    #[must_use]
    pub fn add_key(&self, key: CalculatorKey) -> KeyHandler {
        KeyHandler {
            event: KeyEvent::new(key),
            state: Rc::downgrade(&self.state),
        }
    }

    /// Presses `key` once
    pub fn press(&self, key: CalculatorKey) {
        dispatch(&self.state, KeyEvent::new(key));
    }

    /// Presses one key per non-whitespace character of `keys`.
    ///
    /// Stops at the first character that names no key; keys before it stay
    /// pressed.
    pub fn press_str(&self, keys: &str) -> CalcResult<()> {
        for ch in keys.chars().filter(|c| !c.is_whitespace()) {
            let key =
                CalculatorKey::from_char(ch).ok_or_else(|| CalcError::UnknownKey(ch.to_string()))?;
            self.press(key);
        }
        Ok(())
    }

    /// Registers `callback` to run after every key press
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(CalculatorKey, &str, f64) + 'static,
    {
        self.subscribe_shared(Rc::new(callback))
    }

    /// Registers an already shared callback.
    ///
    /// The same `Rc` may be registered more than once; each
    /// [`Subscription::unsubscribe`] removes only the first registration.
    pub fn subscribe_shared(&self, callback: Subscriber) -> Subscription {
        self.state
            .borrow_mut()
            .subscribers
            .push(Rc::clone(&callback));
        Subscription {
            state: Rc::downgrade(&self.state),
            callback,
        }
    }

    /// Number of registered subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    /// Copy of the evaluation tape
    #[must_use]
    pub fn history(&self) -> History {
        self.state.borrow().history.clone()
    }

    /// Empties the evaluation tape
    pub fn clear_history(&self) {
        self.state.borrow_mut().history.clear();
    }

    /// Captures the public state in one value
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.borrow();
        Snapshot {
            display: state.display(),
            value: state.value,
            current_value: state.entry.clone(),
            buffer: state.buffer(),
        }
    }
}

/// Handler bound to a single key of one calculator
#[derive(Debug, Clone)]
pub struct KeyHandler {
    event: KeyEvent,
    state: Weak<RefCell<State>>,
}

impl KeyHandler {
    /// The key this handler presses
    #[must_use]
    pub fn key(&self) -> CalculatorKey {
        self.event.key
    }

    /// Presses the key once. Does nothing if the calculator was dropped.
    pub fn click(&self) {
        if let Some(state) = self.state.upgrade() {
            dispatch(&state, self.event);
        }
    }
}

/// Registration handle returned by [`Calculator::subscribe`]
///
/// Dropping it leaves the callback registered.
#[must_use = "call unsubscribe() to stop notifications"]
pub struct Subscription {
    state: Weak<RefCell<State>>,
    callback: Subscriber,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &(self.state.strong_count() > 0))
            .finish_non_exhaustive()
    }
}

impl Subscription {
    /// Removes the first registration of this callback
    pub fn unsubscribe(self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let mut state = state.borrow_mut();
        if let Some(index) = state
            .subscribers
            .iter()
            .position(|sub| Rc::ptr_eq(sub, &self.callback))
        {
            state.subscribers.remove(index);
        }
    }
}

/// Point-in-time view of a calculator's public state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display text
    pub display: String,
    /// Accumulated value
    pub value: f64,
    /// Raw entry buffer
    pub current_value: String,
    /// Operand/operator trace
    pub buffer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn keys(calc: &Calculator, seq: &str) {
        calc.press_str(seq).unwrap();
    }

    // ===== Construction =====

    #[test]
    fn test_displays_zero_at_start() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.value(), 0.0);
        assert_eq!(calc.current_value(), "");
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_add_key_does_not_mutate() {
        let calc = Calculator::new();
        let handler = calc.add_key(CalculatorKey::Number1);
        assert_eq!(handler.key(), CalculatorKey::Number1);
        assert_eq!(calc.display(), "0");
    }

    // ===== Digits =====

    #[test]
    fn test_number_keys_append() {
        let calc = Calculator::new();
        let mut expected = String::new();
        for d in [1, 2, 3, 4, 5, 6, 7, 8, 9, 0] {
            calc.add_key(CalculatorKey::digit(d).unwrap()).click();
            expected.push(char::from(b'0' + d));
            assert_eq!(calc.display(), expected);
        }
        assert_eq!(calc.display(), "1234567890");
    }

    #[test]
    fn test_leading_zero_suppressed() {
        let calc = Calculator::new();
        keys(&calc, "007");
        assert_eq!(calc.current_value(), "7");
    }

    // ===== Decimal point =====

    #[test]
    fn test_period_first() {
        let calc = Calculator::new();
        let one = calc.add_key(CalculatorKey::Number1);
        let period = calc.add_key(CalculatorKey::Period);

        period.click();
        assert_eq!(calc.display(), "0");
        one.click();
        assert_eq!(calc.display(), "0.1");
    }

    #[test]
    fn test_period_after_digit() {
        let calc = Calculator::new();
        let one = calc.add_key(CalculatorKey::Number1);
        let period = calc.add_key(CalculatorKey::Period);

        one.click();
        assert_eq!(calc.display(), "1");
        period.click();
        assert_eq!(calc.display(), "1");
        one.click();
        assert_eq!(calc.display(), "1.1");
    }

    #[test]
    fn test_second_period_ignored() {
        let calc = Calculator::new();
        keys(&calc, "1.1");
        assert_eq!(calc.display(), "1.1");
        keys(&calc, ".");
        assert_eq!(calc.display(), "1.1");
        keys(&calc, "1");
        assert_eq!(calc.display(), "1.11");
        assert_eq!(calc.current_value(), "111");
    }

    #[test]
    fn test_trailing_period_on_long_entry() {
        let calc = Calculator::new();
        keys(&calc, "12.");
        assert_eq!(calc.display(), "12.");
    }

    #[test]
    fn test_decimal_marker_resets_per_entry() {
        let calc = Calculator::new();
        keys(&calc, "1.5+2.5");
        assert_eq!(calc.display(), "2.5");
        keys(&calc, "=");
        assert_eq!(calc.value(), 4.0);
    }

    #[test]
    fn test_period_after_enter_splits_seeded_result() {
        let calc = Calculator::new();
        keys(&calc, "1+1=");
        keys(&calc, ".5");
        assert_eq!(calc.current_value(), "25");
        assert_eq!(calc.display(), "2.5");
    }

    // ===== Operators =====

    #[test]
    fn test_same_operation_twice_ignored() {
        let calc = Calculator::new();
        let add = calc.add_key(CalculatorKey::Add);
        keys(&calc, "1");
        add.click();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.value(), 1.0);
        add.click();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.value(), 1.0);
        assert_eq!(calc.buffer(), "1 +");
    }

    #[test]
    fn test_add_a_value() {
        let calc = Calculator::new();
        keys(&calc, "1+");
        assert_eq!(calc.display(), "0");
        keys(&calc, "1");
        assert_eq!(calc.display(), "1");
        keys(&calc, "+");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.value(), 2.0);
    }

    #[test]
    fn test_subtract_a_value() {
        let calc = Calculator::new();
        keys(&calc, "11-1-");
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.value(), 10.0);
    }

    #[test]
    fn test_divide_a_value() {
        let calc = Calculator::new();
        keys(&calc, "12/");
        assert_eq!(calc.buffer(), "12 /");
        keys(&calc, "2/");
        assert_eq!(calc.value(), 6.0);
        assert_eq!(calc.buffer(), "12 / 2 /");
    }

    #[test]
    fn test_divide_by_zero_guarded() {
        let calc = Calculator::new();
        keys(&calc, "10/");
        assert_eq!(calc.value(), 10.0);
        keys(&calc, "0");
        assert_eq!(calc.display(), "0");
        keys(&calc, "/");
        assert_eq!(calc.value(), 10.0);
    }

    #[test]
    fn test_multiply_a_value() {
        let calc = Calculator::new();
        keys(&calc, "5*");
        assert_eq!(calc.value(), 5.0);
        keys(&calc, "5*");
        assert_eq!(calc.value(), 25.0);
    }

    #[test]
    fn test_fold_uses_operator_at_operand_index() {
        let calc = Calculator::new();
        // operand 3 is combined with the operator pressed after it
        keys(&calc, "2+3*4=");
        assert_eq!(calc.value(), 24.0);
    }

    #[test]
    fn test_apply_operation_rejects_non_operator() {
        let mut state = State::new(History::new());
        assert_eq!(
            state.apply_operation(CalculatorKey::Number3),
            Err(CalcError::InvalidOperation {
                key: CalculatorKey::Number3
            })
        );
        assert!(state.operands.is_empty());
    }

    // ===== Evaluate =====

    #[test]
    fn test_calculate_on_enter() {
        let calc = Calculator::new();
        keys(&calc, "2");
        assert_eq!(calc.value(), 0.0);
        keys(&calc, "*");
        assert_eq!(calc.value(), 2.0);
        keys(&calc, "2");
        assert_eq!(calc.value(), 2.0);
        keys(&calc, "=");
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.value(), 4.0);
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_repeated_enter_ignored() {
        let calc = Calculator::new();
        keys(&calc, "1+1==");
        assert_eq!(calc.value(), 2.0);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_enter_without_operator_commits_entry() {
        let calc = Calculator::new();
        keys(&calc, "7=");
        assert_eq!(calc.value(), 7.0);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_digit_after_enter_starts_fresh_entry() {
        let calc = Calculator::new();
        keys(&calc, "1+1=3");
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn test_enter_records_history() {
        let calc = Calculator::new();
        keys(&calc, "2*2=");
        let history = calc.history();
        assert_eq!(history.last().unwrap().display(), "2 * 2 = 4");
        calc.clear_history();
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_history_capacity() {
        let calc = Calculator::with_history_capacity(1);
        keys(&calc, "1+1=");
        keys(&calc, "3*3=");
        let history = calc.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().expression, "3 * 3");
    }

    // ===== Subscriptions =====

    #[test]
    fn test_subscriber_receives_key_display_value() {
        let calc = Calculator::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = calc.subscribe(move |key, display, value| {
            sink.borrow_mut().push((key, display.to_string(), value));
        });

        keys(&calc, "2*2=");
        assert_eq!(
            *seen.borrow(),
            vec![
                (CalculatorKey::Number2, "2".to_string(), 0.0),
                (CalculatorKey::Multiply, "0".to_string(), 2.0),
                (CalculatorKey::Number2, "2".to_string(), 2.0),
                (CalculatorKey::Enter, "4".to_string(), 4.0),
            ]
        );
    }

    #[test]
    fn test_ignored_presses_do_not_notify() {
        let calc = Calculator::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let _sub = calc.subscribe(move |_, _, _| counter.set(counter.get() + 1));

        keys(&calc, "1..");
        assert_eq!(count.get(), 2);
        keys(&calc, "++");
        assert_eq!(count.get(), 3);
        keys(&calc, "==");
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_suppressed_leading_zero_still_notifies() {
        let calc = Calculator::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let _sub = calc.subscribe(move |_, _, _| counter.set(counter.get() + 1));
        keys(&calc, "0");
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_callback() {
        let calc = Calculator::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let first_sink = Rc::clone(&order);
        let second_sink = Rc::clone(&order);
        let first = calc.subscribe(move |_, _, _| first_sink.borrow_mut().push("first"));
        let _second = calc.subscribe(move |_, _, _| second_sink.borrow_mut().push("second"));

        keys(&calc, "1");
        assert_eq!(*order.borrow(), vec!["first", "second"]);

        first.unsubscribe();
        keys(&calc, "1");
        assert_eq!(*order.borrow(), vec!["first", "second", "second"]);
        assert_eq!(calc.subscriber_count(), 1);
    }

    #[test]
    fn test_unsubscribe_shared_removes_first_match() {
        let calc = Calculator::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let shared: Subscriber = Rc::new(move |_: CalculatorKey, _: &str, _: f64| {
            counter.set(counter.get() + 1);
        });

        let first = calc.subscribe_shared(Rc::clone(&shared));
        let _second = calc.subscribe_shared(shared);
        keys(&calc, "1");
        assert_eq!(count.get(), 2);

        first.unsubscribe();
        keys(&calc, "1");
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_subscriber_may_click_without_panicking() {
        let calc = Calculator::new();
        let nested = calc.add_key(CalculatorKey::Number9);
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let _sub = calc.subscribe(move |key, _, _| {
            if key == CalculatorKey::Number1 && !flag.get() {
                flag.set(true);
                nested.click();
            }
        });
        keys(&calc, "1");
        assert!(fired.get());
    }

    // ===== Handles outliving the calculator =====

    #[test]
    fn test_handler_after_drop_is_noop() {
        let calc = Calculator::new();
        let handler = calc.add_key(CalculatorKey::Number5);
        drop(calc);
        handler.click();
    }

    #[test]
    fn test_unsubscribe_after_drop_is_noop() {
        let calc = Calculator::new();
        let sub = calc.subscribe(|_, _, _| {});
        drop(calc);
        sub.unsubscribe();
    }

    // ===== Helpers =====

    #[test]
    fn test_press_str_unknown_key() {
        let calc = Calculator::new();
        assert_eq!(
            calc.press_str("1x2"),
            Err(CalcError::UnknownKey("x".into()))
        );
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_snapshot() {
        let calc = Calculator::new();
        keys(&calc, "12/3");
        let snap = calc.snapshot();
        assert_eq!(
            snap,
            Snapshot {
                display: "3".into(),
                value: 12.0,
                current_value: "3".into(),
                buffer: "12 /".into(),
            }
        );
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"buffer\":\"12 /\""));
    }

    #[test]
    fn test_debug_output() {
        let calc = Calculator::new();
        let text = format!("{calc:?}");
        assert!(text.contains("Calculator"));
        assert!(text.contains("display"));
    }
}
