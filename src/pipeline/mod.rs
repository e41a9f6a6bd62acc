//! Pipeline - terminal lifecycle and the event loop
//!
//! ```text
//! EventSource::poll → TimePicker::handle_event → FieldHost::render
//!        ↑ timeout bounded by the idle deadline      ↓
//!        └────────────── TimePicker::tick ←──────────┘
//! ```

pub mod mount;

pub use mount::{mount, run, tick, EventSource, Exit, MountHandle, TerminalEvents, IDLE_POLL};
