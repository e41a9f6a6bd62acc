//! Picker Module - Segment model and the editing controller
//!
//! ```text
//! KeyboardEvent → decode_key → navigate / step / digit entry → render → FieldHost
//!                                                            ↘ ChangeListeners
//! ```
//!
//! - [`Segment`] - one clamped field (hour 0-23, minute 0-59, second 0-59)
//! - [`DigitBuffer`] - last two digits typed, read as one number
//! - [`IdleTimer`] / [`BufferPolicy`] - when the digit buffer resets
//! - [`TimePicker`] - owns all of the above and drives the host field

mod buffer;
mod controller;
mod keymap;
mod segment;
mod timer;

pub use buffer::{DigitBuffer, BUFFER_CAPACITY};
pub use controller::{KeyOutcome, TimePicker, SEGMENT_COUNT, SEPARATOR};
pub use keymap::{decode_key, KeyAction};
pub use segment::Segment;
pub use timer::{BufferPolicy, Clock, IdleTimer, ManualClock, SystemClock, DEFAULT_IDLE_RESET};
