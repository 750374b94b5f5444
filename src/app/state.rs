//! Calculator state machine
//!
//! Owns the session state record and exposes one operation per input
//! class. The state is deliberately small: the display text doubles as the
//! entry buffer for the operand being typed, so there is no separate
//! accumulator to keep in sync.
//!
//! Evaluation is strictly left to right with at most one staged operator.
//! Pressing an operator while a genuine second operand is on display folds
//! the pending operation first, which is what makes `2 + 3 * 4` read as
//! `(2 + 3) * 4` on this machine.

use crate::domain::display::{
    self, DisplayFormatter, DIVIDE_BY_ZERO_TEXT, ERROR_TEXT,
};
use crate::domain::operator::Operator;

/// Coarse engine state, derived from the staged operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No binary operation staged
    Idle,
    /// An operator is staged and the right-hand operand is being entered
    AwaitingOperand,
}

/// The calculator state engine
///
/// Created once per session and mutated by every input operation. Errors
/// surface as sentinel display text rather than results; the engine never
/// panics and always stays responsive to [`Calculator::clear`].
#[derive(Debug, Clone)]
pub struct Calculator {
    formatter: DisplayFormatter,
    /// Current display text; either a partial/complete number or a sentinel
    display: String,
    /// Left-hand value of a staged operation, or the last result (chaining)
    first_operand: Option<f64>,
    /// Staged operator awaiting its right-hand operand
    pending_operator: Option<Operator>,
    /// When set, the next digit or point replaces the display text
    fresh_entry: bool,
    /// Accumulator retained across clears, touched only by the memory keys
    memory: f64,
}

impl Calculator {
    /// Creates an engine with the default 12-significant-digit formatter
    pub fn new() -> Self {
        Self::with_formatter(DisplayFormatter::default())
    }

    /// Creates an engine rendering results through the given formatter
    pub fn with_formatter(formatter: DisplayFormatter) -> Self {
        Self {
            formatter,
            display: "0".to_string(),
            first_operand: None,
            pending_operator: None,
            fresh_entry: true,
            memory: 0.0,
        }
    }

    /// The text the collaborator should render verbatim
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current coarse state
    pub fn state(&self) -> EngineState {
        if self.pending_operator.is_some() {
            EngineState::AwaitingOperand
        } else {
            EngineState::Idle
        }
    }

    /// Left-hand operand of the staged operation, if any
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Staged operator, if any
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit or point starts a fresh number
    pub fn is_next_entry_fresh(&self) -> bool {
        self.fresh_entry
    }

    /// Current memory accumulator value
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Enters one digit, `'0'` through `'9'`
    ///
    /// Replaces the display when it shows a sentinel or a finished value,
    /// appends otherwise.
    pub fn input_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        if self.display_is_sentinel() || self.fresh_entry {
            self.display.clear();
            self.display.push(digit);
            self.fresh_entry = false;
        } else {
            self.display.push(digit);
        }
    }

    /// Enters the decimal point
    ///
    /// A leading point reads as `"0."`; a second point in the same number
    /// is a no-op.
    pub fn input_point(&mut self) {
        if self.display_is_sentinel() || self.fresh_entry {
            self.display = "0.".to_string();
            self.fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Resets display and calculation state; memory is untouched
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.reset_core_state();
    }

    /// Removes the last entered character
    ///
    /// On a sentinel this behaves as [`Calculator::clear`]. An empty or
    /// minus-only remainder collapses back to `"0"`.
    pub fn delete_last(&mut self) {
        if self.display_is_sentinel() {
            self.clear();
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
            self.fresh_entry = true;
        }
    }

    /// Stages a binary operator
    ///
    /// If an operator is already staged and a genuine second operand has
    /// been entered, the pending operation folds first and its result
    /// becomes the new left-hand operand. Pressing two operators in a row
    /// replaces the staged operator instead.
    pub fn set_operator(&mut self, op: Operator) {
        let current = self.parse_display();

        if current.is_nan() && self.display != "0" {
            if !self.display_is_sentinel() {
                self.display = ERROR_TEXT.to_string();
            }
            self.reset_core_state();
            return;
        }

        if self.pending_operator.is_some() && self.first_operand.is_some() && !self.fresh_entry {
            self.calculate();
            let folded = self.parse_display();
            if folded.is_nan() {
                // The fold ended in a sentinel; nothing left to chain on.
                self.reset_core_state();
                return;
            }
            self.first_operand = Some(folded);
        } else if !current.is_nan() {
            self.first_operand = Some(current);
        }

        self.pending_operator = Some(op);
        self.fresh_entry = true;
    }

    /// Applies the staged operation to the displayed second operand
    ///
    /// A no-op unless an operator is staged, a first operand exists, and
    /// the display parses. A zero divisor is terminal: the divide-by-zero
    /// sentinel is shown and the staged operation is discarded rather than
    /// producing an infinite intermediate value.
    pub fn calculate(&mut self) {
        let second = self.parse_display();
        let (Some(first), Some(op)) = (self.first_operand, self.pending_operator) else {
            return;
        };
        if second.is_nan() {
            return;
        }

        if op == Operator::Divide && second == 0.0 {
            self.display = DIVIDE_BY_ZERO_TEXT.to_string();
            self.reset_core_state();
            return;
        }

        let result = op.apply(first, second);
        self.display = self.formatter.format(result);
        // Keep the raw result so chained presses reuse full precision.
        self.first_operand = Some(result);
        self.pending_operator = None;
        self.fresh_entry = true;
    }

    /// Replaces the displayed number with its square root
    ///
    /// A negative or unparseable operand shows the error sentinel. The
    /// operation finalizes the current number either way, so any staged
    /// operation is discarded.
    pub fn sqrt(&mut self) {
        let value = self.parse_display();
        if value.is_nan() {
            if !self.display_is_sentinel() {
                self.display = ERROR_TEXT.to_string();
            }
        } else if value < 0.0 {
            self.display = ERROR_TEXT.to_string();
        } else {
            self.display = self.formatter.format(value.sqrt());
        }
        self.reset_core_state();
    }

    /// Percentage key
    ///
    /// With a staged operation, `A op B %` folds to `A op (A * B / 100)`,
    /// so `50 + 10 %` yields 55. On a single value it divides by 100 and
    /// finalizes the number.
    pub fn percent(&mut self) {
        let value = self.parse_display();
        if value.is_nan() {
            if !self.display_is_sentinel() {
                self.display = ERROR_TEXT.to_string();
            }
            return;
        }

        if let (Some(first), Some(_)) = (self.first_operand, self.pending_operator) {
            let portion = first * value / 100.0;
            self.display = self.formatter.format(portion);
            self.calculate();
        } else {
            self.display = self.formatter.format(value / 100.0);
            self.reset_core_state();
        }
    }

    /// Adds the displayed value to memory, if it parses
    pub fn memory_add(&mut self) {
        let value = self.parse_display();
        if !value.is_nan() {
            self.memory += value;
        }
        self.fresh_entry = true;
    }

    /// Subtracts the displayed value from memory, if it parses
    pub fn memory_subtract(&mut self) {
        let value = self.parse_display();
        if !value.is_nan() {
            self.memory -= value;
        }
        self.fresh_entry = true;
    }

    /// Shows the memory value as a fresh number
    pub fn memory_recall(&mut self) {
        self.display = self.formatter.format(self.memory);
        self.fresh_entry = true;
    }

    /// Zeroes memory without touching the display or calculation state
    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    fn reset_core_state(&mut self) {
        self.first_operand = None;
        self.pending_operator = None;
        self.fresh_entry = true;
    }

    fn display_is_sentinel(&self) -> bool {
        display::is_error_sentinel(&self.display)
    }

    fn parse_display(&self) -> f64 {
        display::parse_operand(&self.display)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
