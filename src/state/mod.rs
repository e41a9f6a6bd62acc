//! State Module - Input event types and platform conversion
//!
//! - **Keyboard** - Canonical key event types
//! - **Input** - crossterm conversion, polling, focus reporting

pub mod input;
mod keyboard;

pub use input::InputEvent;
pub use keyboard::*;
