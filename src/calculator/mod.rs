//! The accumulator state machine behind the calculator widget.
//!
//! This module provides:
//! - The [`Calculator`] state machine that accumulates operand strings
//! - The [`Operator`] enum for the four basic arithmetic operations
//! - Display formatting with grouped integer digits

mod format;
mod operator;
mod state;

pub use format::{format_operand, format_operand_with, stringify_result};
pub use operator::Operator;
pub use state::Calculator;
