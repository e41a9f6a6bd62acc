//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the picker's keyboard events.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `convert_event` - Convert any crossterm Event to an InputEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `enable_focus_reporting` / `disable_focus_reporting` - Focus change events
//!
//! # Example
//!
//! ```ignore
//! use spark_timepicker::state::input::{poll_event, InputEvent};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(InputEvent::Key(key))) = poll_event(Duration::from_millis(16)) {
//!         // hand the key to the picker
//!     }
//! }
//! ```

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{
    DisableFocusChange, EnableFocusChange, Event as CrosstermEvent,
    KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
    poll, read,
};
use crossterm::execute;

use super::keyboard::{KeyboardEvent, KeyState, Modifiers, KEYPAD};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Events the picker's host loop cares about
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard event (key press, repeat, release)
    Key(KeyboardEvent),
    /// The terminal (and so the field) gained focus
    FocusGained,
    /// The terminal lost focus
    FocusLost,
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        // Shift+Tab arrives as BackTab with SHIFT set
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Insert => "Insert".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    let mut modifiers = convert_modifiers(event.modifiers);
    if event.code == KeyCode::BackTab {
        modifiers.shift = true;
    }

    let raw = event
        .state
        .contains(KeyEventState::KEYPAD)
        .then(|| KEYPAD.to_string());

    KeyboardEvent { key, modifiers, state, raw }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::META) || mods.contains(KeyModifiers::SUPER),
    }
}

/// Convert any crossterm event into an InputEvent
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) => InputEvent::Key(convert_key_event(key)),
        CrosstermEvent::FocusGained => InputEvent::FocusGained,
        CrosstermEvent::FocusLost => InputEvent::FocusLost,
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// FOCUS REPORTING
// =============================================================================

/// Ask the terminal to report focus gained/lost.
pub fn enable_focus_reporting<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnableFocusChange)
}

/// Stop focus gained/lost reports.
pub fn disable_focus_reporting<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableFocusChange)
}

// =============================================================================
// TESTS
// =============================================================================
