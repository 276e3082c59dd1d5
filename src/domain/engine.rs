//! Arithmetic engine: the calculator's accumulator state machine
//!
//! This module holds the running value and sequences constant, unary,
//! binary, and equals semantics. It is pure domain logic with no
//! knowledge of keymaps, displays, or the terminal.
//!
//! ## Design principles
//! - **No errors**: out-of-sequence presses degrade to no-ops
//! - **No domain checks**: ÷0 and √ of a negative follow IEEE-754 and
//!   surface as `inf`/`NaN` values
//! - **One pending slot**: a new binary operator replaces an unresolved
//!   pending pair instead of resolving it

use crate::domain::operations::{Operation, lookup};

/// Buffered first operand and combining function awaiting its second operand
#[derive(Debug, Clone, Copy)]
struct PendingBinaryOperation {
    function: fn(f64, f64) -> f64,
    first_operand: f64,
}

impl PendingBinaryOperation {
    fn perform(&self, second_operand: f64) -> f64 {
        (self.function)(self.first_operand, second_operand)
    }
}

/// Coarse view of the engine, used for prompts and logging only
///
/// The engine never consults this for its own transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing accumulated yet, nothing pending
    Empty,
    /// An accumulated value is available for display
    HasValue,
    /// A binary operation is buffered and the accumulator is cleared,
    /// waiting for the second operand
    AwaitingSecondOperand,
}

/// The calculator model: a running value plus one pending binary operation
#[derive(Debug, Clone, Copy, Default)]
pub struct CalcEngine {
    /// Accumulated value; `None` before any input and while a second
    /// operand is awaited
    accumulator: Option<f64>,
    /// At most one buffered binary operation at a time
    pending: Option<PendingBinaryOperation>,
}

impl CalcEngine {
    /// Creates an engine with nothing accumulated
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally sets the accumulated value
    pub fn set_operand(&mut self, value: f64) {
        self.accumulator = Some(value);
    }

    /// Applies the operation behind `symbol`
    ///
    /// # Arguments
    /// * `symbol` - Keypad symbol; unrecognized symbols are a silent no-op
    ///
    /// Constants overwrite the accumulator. Unary operations apply to a
    /// defined accumulator and are dropped otherwise. Binary operations
    /// buffer (accumulator, function) as the pending pair and clear the
    /// accumulator; with a pending pair already present the old pair is
    /// discarded, never auto-resolved. Equals combines the pending pair
    /// with the accumulator when both exist.
    pub fn perform_operation(&mut self, symbol: &str) {
        let Some(operation) = lookup(symbol) else {
            return;
        };

        match operation {
            Operation::Constant(value) => {
                self.accumulator = Some(value);
            }
            Operation::Unary(function) => {
                if let Some(value) = self.accumulator {
                    self.accumulator = Some(function(value));
                }
            }
            Operation::Binary(function) => {
                if let Some(value) = self.accumulator {
                    self.pending = Some(PendingBinaryOperation {
                        function,
                        first_operand: value,
                    });
                    self.accumulator = None;
                }
            }
            Operation::Equals => self.perform_pending_binary_operation(),
        }
    }

    /// Combines the pending pair with the accumulated second operand
    fn perform_pending_binary_operation(&mut self) {
        if let (Some(pending), Some(value)) = (self.pending, self.accumulator) {
            self.accumulator = Some(pending.perform(value));
            self.pending = None;
        }
    }

    /// The accumulated value, when a result is displayable
    pub fn result(&self) -> Option<f64> {
        self.accumulator
    }

    /// Derived state for prompts and logging
    pub fn state(&self) -> EngineState {
        match (self.accumulator, self.pending) {
            (None, None) => EngineState::Empty,
            (None, Some(_)) => EngineState::AwaitingSecondOperand,
            (Some(_), _) => EngineState::HasValue,
        }
    }
}
