//! The outbound rendering contract.
//!
//! After every mutating action the frontend re-reads the calculator and
//! renders one [`DisplayFrame`]: the primary region shows the operand being
//! typed, the secondary region shows the staged operand and pending
//! operator while one is pending.

use crate::calculator::{Calculator, format_operand_with};

/// Text for the widget's two display regions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayFrame {
    /// The operand being typed, or the last computed result.
    pub primary: String,
    /// The staged operand and pending operator; empty when none is pending.
    pub secondary: String,
}

/// Render the display regions for the calculator's current state.
pub fn render_frame(calc: &Calculator) -> DisplayFrame {
    render_frame_with(calc, ',')
}

/// Render the display regions with a custom grouping separator.
pub fn render_frame_with(calc: &Calculator, separator: char) -> DisplayFrame {
    let primary = format_operand_with(calc.current_operand(), separator);
    let secondary = match calc.operation() {
        Some(op) => format!(
            "{} {}",
            format_operand_with(calc.previous_operand(), separator),
            op.glyph()
        ),
        None => String::new(),
    };
    DisplayFrame { primary, secondary }
}
