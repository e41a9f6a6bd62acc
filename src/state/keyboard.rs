//! Keyboard Module - Keyboard event types
//!
//! Canonical key events consumed by the picker. Platform input (crossterm)
//! is converted into these by the input module; tests and embedders build
//! them directly.
//!
//! # Key identifiers
//!
//! Named keys use their DOM-style names (`"ArrowLeft"`, `"PageDown"`,
//! `"Home"`, `"Tab"`, `"Escape"`, ...). Printable keys are the character
//! itself (`"7"`, `"a"`). Numeric-pad digits share the top-row identifiers.
//!
//! # Example
//!
//! ```ignore
//! use spark_timepicker::state::{KeyboardEvent, Modifiers};
//!
//! let tab = KeyboardEvent::new("Tab");
//! let back_tab = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
//! ```

// =============================================================================
// KEY NAMES
// =============================================================================

pub const ARROW_LEFT: &str = "ArrowLeft";
pub const ARROW_RIGHT: &str = "ArrowRight";
pub const ARROW_UP: &str = "ArrowUp";
pub const ARROW_DOWN: &str = "ArrowDown";
pub const PAGE_UP: &str = "PageUp";
pub const PAGE_DOWN: &str = "PageDown";
pub const HOME: &str = "Home";
pub const END: &str = "End";
pub const TAB: &str = "Tab";
pub const ENTER: &str = "Enter";
pub const ESCAPE: &str = "Escape";

/// Marker stored in [`KeyboardEvent::raw`] for numeric-pad keys.
pub const KEYPAD: &str = "keypad";

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// Alt or Ctrl is held.
    pub fn has_command(&self) -> bool {
        self.alt || self.ctrl
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "7", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
    /// Extra platform detail (e.g. [`KEYPAD`])
    pub raw: Option<String>,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
            raw: None,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
            raw: None,
        }
    }

    /// Create a numeric-pad digit press
    pub fn keypad_digit(digit: u8) -> Self {
        Self {
            raw: Some(KEYPAD.to_string()),
            ..Self::new(digit.min(9).to_string())
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Press or auto-repeat, i.e. anything a `keydown` would report.
    pub fn is_down(&self) -> bool {
        self.state != KeyState::Release
    }

    /// The digit 0-9 this key types, from either the top row or the keypad.
    pub fn digit(&self) -> Option<u8> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| d as u8),
            _ => None,
        }
    }

    pub fn is_keypad(&self) -> bool {
        self.raw.as_deref() == Some(KEYPAD)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_press() {
        let event = KeyboardEvent::new("a");
        assert!(event.is_press());
        assert!(event.is_down());
        assert_eq!(event.modifiers, Modifiers::none());
    }

    #[test]
    fn test_digit() {
        assert_eq!(KeyboardEvent::new("0").digit(), Some(0));
        assert_eq!(KeyboardEvent::new("9").digit(), Some(9));
        assert_eq!(KeyboardEvent::new("a").digit(), None);
        assert_eq!(KeyboardEvent::new("F1").digit(), None);
        assert_eq!(KeyboardEvent::new("12").digit(), None);
        assert_eq!(KeyboardEvent::new("").digit(), None);
    }

    #[test]
    fn test_keypad_digit() {
        let event = KeyboardEvent::keypad_digit(4);
        assert_eq!(event.key, "4");
        assert!(event.is_keypad());
        assert_eq!(event.digit(), Some(4));
        assert!(!KeyboardEvent::new("4").is_keypad());
    }

    #[test]
    fn test_release_is_not_down() {
        let event = KeyboardEvent {
            state: KeyState::Release,
            ..KeyboardEvent::new("ArrowUp")
        };
        assert!(!event.is_down());

        let repeat = KeyboardEvent {
            state: KeyState::Repeat,
            ..KeyboardEvent::new("ArrowUp")
        };
        assert!(repeat.is_down());
        assert!(!repeat.is_press());
    }

    #[test]
    fn test_modifiers() {
        assert!(Modifiers::ctrl().has_command());
        assert!(Modifiers::alt().has_command());
        assert!(!Modifiers::shift().has_command());
        assert!(!Modifiers::none().has_command());
    }
}
