//! Field Module - The host text field the picker drives
//!
//! The picker never owns a widget. It pushes text and a highlight range
//! through [`FieldHost`] and announces value changes through
//! [`ChangeListeners`].
//!
//! # Example
//!
//! ```ignore
//! use spark_timepicker::field::{ChangeListeners, RecordingField};
//!
//! let listeners = ChangeListeners::new();
//! let cleanup = listeners.subscribe(|text| println!("now {}", text));
//! listeners.emit("12:00:00");
//! cleanup();
//! ```

mod listeners;
mod recording;

pub use listeners::{ChangeHandler, ChangeListeners, Cleanup};
pub use recording::{RecordedRender, RecordingField};

use std::io;

use crate::types::Highlight;

/// Output capability of a single-line text field.
pub trait FieldHost {
    /// Replace the field text and mark `highlight` as the active segment.
    fn render(&mut self, text: &str, highlight: Highlight);

    /// First output failure since the last call, for hosts that can fail.
    fn take_error(&mut self) -> Option<io::Error> {
        None
    }
}

impl<H: FieldHost + ?Sized> FieldHost for Box<H> {
    fn render(&mut self, text: &str, highlight: Highlight) {
        (**self).render(text, highlight)
    }

    fn take_error(&mut self) -> Option<io::Error> {
        (**self).take_error()
    }
}
