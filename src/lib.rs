//! # spark-timepicker
//!
//! Keyboard-driven `HH:MM:SS` editor for a single-line text field.
//!
//! The picker keeps three clamped segments (hour, minute, second), one of
//! which is active. Keys move between segments, step the active one up or
//! down, or type digits into it. After every handled key the picker pushes
//! the formatted text and the active segment's character range to its host
//! field, and notifies listeners when the text changed.
//!
//! ## Architecture
//!
//! ```text
//! crossterm Event → InputEvent → TimePicker::handle_event → FieldHost::render
//!                                                        ↘ ChangeListeners / Signal
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Segment kinds, highlight range, `ClockTime`, attributes
//! - [`picker`] - Segment, digit buffer, idle timer, key decoding, controller
//! - [`field`] - Host field boundary and change listeners
//! - [`state`] - Keyboard event types and crossterm conversion
//! - [`renderer`] - Terminal field host
//! - [`pipeline`] - Terminal mount and the event loop
//! - [`config`] - TOML configuration
//!
//! ## Example
//!
//! ```ignore
//! use spark_timepicker::{KeyboardEvent, RecordingField, TimePicker};
//!
//! let field = RecordingField::new();
//! let mut picker = TimePicker::new(field.clone());
//! picker.attach();
//!
//! for key in ["1", "2", "ArrowRight", "3", "0"] {
//!     picker.handle_key(&KeyboardEvent::new(key));
//! }
//! assert_eq!(field.text(), "12:30:00");
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod logging;
pub mod picker;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use config::Config;

pub use field::{ChangeListeners, Cleanup, FieldHost, RecordedRender, RecordingField};

pub use picker::{
    decode_key, BufferPolicy, Clock, DigitBuffer, IdleTimer, KeyAction, KeyOutcome,
    ManualClock, Segment, SystemClock, TimePicker,
};

pub use state::{InputEvent, KeyState, KeyboardEvent, Modifiers};

pub use renderer::TerminalField;

pub use pipeline::{mount, run, EventSource, Exit, MountHandle, TerminalEvents};
