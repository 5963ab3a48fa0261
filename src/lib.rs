//! Accumulator-style arithmetic calculator.
//!
//! The core is a pure state machine over two operand strings and a pending
//! operator ([`Calculator`]), plus display formatting with grouped integer
//! digits. The [`display`] module renders the state into the widget's two
//! display regions, the [`keypad`] module maps keys and buttons onto state
//! transitions, and the [`ui`] module is the terminal frontend that wires
//! it all to a real keyboard and screen.

pub mod calculator;
pub mod config;
pub mod display;
pub mod keypad;
pub mod ui;

pub use calculator::{Calculator, Operator, format_operand, format_operand_with};
pub use display::{DisplayFrame, render_frame, render_frame_with};
pub use keypad::{Button, ButtonKind, LAYOUT, kind_for_char};
