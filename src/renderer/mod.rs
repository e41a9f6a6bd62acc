//! Renderer Module - Terminal output for the picker field
//!
//! - [`TerminalField`] - crossterm-backed [`FieldHost`](crate::field::FieldHost)

mod terminal;

pub use terminal::TerminalField;
