//! The accumulator state machine.
//!
//! Tracks the operand being typed, the operand staged behind a chosen
//! operator, and the pending operator itself. Invalid or premature actions
//! are silent no-ops, so every operation is defined in every state; each
//! ignored transition emits a debug event instead of an error.

use tracing::{debug, trace};

use super::format::stringify_result;
use super::operator::Operator;

/// Calculator state: two operand strings and an optional pending operator.
///
/// `current_operand` holds the symbols typed since the last operator,
/// clear, or computation; `previous_operand` holds the operand captured
/// when an operator was chosen. Both empty with no operator pending is the
/// cleared state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operator>,
}

impl Calculator {
    /// Create a calculator in the cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand currently being typed. Empty means nothing entered yet.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The operand staged behind the pending operator. Empty means no
    /// left-hand operand is staged.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The pending operator, if one has been chosen.
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Reset all state to the cleared defaults.
    pub fn clear(&mut self) {
        trace!("clear");
        self.current_operand.clear();
        self.previous_operand.clear();
        self.operation = None;
    }

    /// Append a digit or the decimal point to the operand being typed.
    ///
    /// Symbols are concatenated verbatim, so leading zeros and arbitrarily
    /// long sequences survive until the operand is parsed at compute time.
    /// A second decimal point, or any character outside `0`-`9` and `.`,
    /// is ignored.
    pub fn append_symbol(&mut self, symbol: char) {
        if symbol == '.' && self.current_operand.contains('.') {
            debug!("ignoring second decimal point");
            return;
        }
        if symbol != '.' && !symbol.is_ascii_digit() {
            debug!(%symbol, "ignoring non-keypad symbol");
            return;
        }
        self.current_operand.push(symbol);
        trace!(operand = %self.current_operand, "appended symbol");
    }

    /// Stage the typed operand behind `op`.
    ///
    /// Ignored while no operand has been typed. If an operand is already
    /// staged this first computes the pending operation, so `3 + 4 +`
    /// collapses to `7` with `+` pending again.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.current_operand.is_empty() {
            debug!(%op, "ignoring operator with no operand typed");
            return;
        }
        if !self.previous_operand.is_empty() {
            self.compute();
        }
        trace!(%op, operand = %self.current_operand, "staging operand");
        self.operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
    }

    /// Apply the pending operation to the staged and typed operands.
    ///
    /// Ignored when no operator is pending, or when either operand fails
    /// to parse as a number (e.g. is still empty). On success the result
    /// becomes the typed operand and the staged operand and operator are
    /// reset.
    pub fn compute(&mut self) {
        let Some(op) = self.operation else {
            debug!("ignoring compute with no operator pending");
            return;
        };
        let (Ok(prev), Ok(current)) = (
            self.previous_operand.parse::<f64>(),
            self.current_operand.parse::<f64>(),
        ) else {
            debug!("ignoring compute with a missing operand");
            return;
        };

        let result = op.apply(prev, current);
        trace!(%prev, %op, %current, %result, "computed");
        self.current_operand = stringify_result(result);
        self.previous_operand.clear();
        self.operation = None;
    }

    /// Remove the last typed character. Ignored when nothing is typed.
    pub fn delete_last(&mut self) {
        if self.current_operand.pop().is_none() {
            debug!("ignoring delete on empty operand");
        }
    }
}
