//! The keypad model behind the calculator widget.
//!
//! Buttons come in five kinds. [`kind_for_char`] maps printable keys onto
//! them, [`ButtonKind::apply`] dispatches a press onto the state machine,
//! and [`LAYOUT`] describes the standard 4-column grid frontends draw.

use crate::calculator::{Calculator, Operator};

/// What a keypad button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    /// A digit or the decimal point, appended to the typed operand.
    Digit(char),
    /// One of the four arithmetic operators.
    Operator(Operator),
    /// Compute the pending operation.
    Equals,
    /// Remove the last typed character.
    Delete,
    /// Reset the calculator.
    AllClear,
}

impl ButtonKind {
    /// Apply this button press to a calculator.
    pub fn apply(&self, calc: &mut Calculator) {
        match self {
            Self::Digit(symbol) => calc.append_symbol(*symbol),
            Self::Operator(op) => calc.choose_operator(*op),
            Self::Equals => calc.compute(),
            Self::Delete => calc.delete_last(),
            Self::AllClear => calc.clear(),
        }
    }
}

/// Map a printable key to the button it triggers.
///
/// Digits and `.` map to [`ButtonKind::Digit`], operator keys in both
/// spellings to [`ButtonKind::Operator`], and `=` to [`ButtonKind::Equals`].
/// Control keys (delete, clear) are bound by the frontend on top of this
/// mapping.
pub fn kind_for_char(key: char) -> Option<ButtonKind> {
    if key.is_ascii_digit() || key == '.' {
        return Some(ButtonKind::Digit(key));
    }
    if key == '=' {
        return Some(ButtonKind::Equals);
    }
    Operator::from_key(key).map(ButtonKind::Operator)
}

/// A labelled keypad button.
#[derive(Clone, Copy, Debug)]
pub struct Button {
    /// Label shown on the button face.
    pub label: &'static str,
    /// What pressing the button does.
    pub kind: ButtonKind,
    /// Whether the button spans two grid columns.
    pub wide: bool,
}

impl Button {
    const fn new(label: &'static str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            wide: false,
        }
    }

    const fn wide(label: &'static str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            wide: true,
        }
    }
}

/// The standard 4-column keypad grid, top row first. `AC` and `=` span two
/// columns.
pub const LAYOUT: &[&[Button]] = &[
    &[
        Button::wide("AC", ButtonKind::AllClear),
        Button::new("DEL", ButtonKind::Delete),
        Button::new("÷", ButtonKind::Operator(Operator::Divide)),
    ],
    &[
        Button::new("7", ButtonKind::Digit('7')),
        Button::new("8", ButtonKind::Digit('8')),
        Button::new("9", ButtonKind::Digit('9')),
        Button::new("×", ButtonKind::Operator(Operator::Multiply)),
    ],
    &[
        Button::new("4", ButtonKind::Digit('4')),
        Button::new("5", ButtonKind::Digit('5')),
        Button::new("6", ButtonKind::Digit('6')),
        Button::new("+", ButtonKind::Operator(Operator::Add)),
    ],
    &[
        Button::new("1", ButtonKind::Digit('1')),
        Button::new("2", ButtonKind::Digit('2')),
        Button::new("3", ButtonKind::Digit('3')),
        Button::new("−", ButtonKind::Operator(Operator::Subtract)),
    ],
    &[
        Button::new(".", ButtonKind::Digit('.')),
        Button::new("0", ButtonKind::Digit('0')),
        Button::wide("=", ButtonKind::Equals),
    ],
];
