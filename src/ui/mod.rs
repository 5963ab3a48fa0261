//! Terminal frontend for the calculator.
//!
//! The core never depends on this module; it is the only layer that
//! touches the terminal.

pub mod terminal;

pub use terminal::run;
