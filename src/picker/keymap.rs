//! Key decoding - maps one keyboard event to one picker action.
//!
//! Decoding looks only at the event itself; it has no memory. Order:
//!
//! 1. Release events pass through.
//! 2. Alt or Ctrl held: pass through, whatever the key.
//! 3. Shift held with anything but Tab: swallowed without an action.
//! 4. Navigation, stepping and digits per the table in [`decode_key`].
//! 5. Everything else (Tab, Enter, Escape, letters, F-keys) passes through.

use crate::state::{self, KeyboardEvent};

/// What the picker should do with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Previous,
    Next,
    Up,
    Down,
    Home,
    End,
    Digit(u8),
    /// No action, but the field's default handling is suppressed.
    Suppress,
    /// Not ours; leave the field's default handling alone.
    PassThrough,
}

impl KeyAction {
    /// Whether the host should skip its default handling of the key.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, KeyAction::PassThrough)
    }

    /// Whether the action moves the active segment.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            KeyAction::Previous | KeyAction::Next | KeyAction::Home | KeyAction::End
        )
    }
}

/// Decode a key event.
///
/// | Key                      | Action     |
/// |--------------------------|------------|
/// | ArrowLeft, PageUp        | `Previous` |
/// | ArrowRight, PageDown     | `Next`     |
/// | ArrowUp                  | `Up`       |
/// | ArrowDown                | `Down`     |
/// | Home                     | `Home`     |
/// | End                      | `End`      |
/// | 0-9 (top row or keypad)  | `Digit(n)` |
pub fn decode_key(event: &KeyboardEvent) -> KeyAction {
    if !event.is_down() {
        return KeyAction::PassThrough;
    }
    if event.modifiers.has_command() {
        return KeyAction::PassThrough;
    }
    if event.modifiers.shift && event.key != state::TAB {
        return KeyAction::Suppress;
    }

    match event.key.as_str() {
        state::ARROW_LEFT | state::PAGE_UP => KeyAction::Previous,
        state::ARROW_RIGHT | state::PAGE_DOWN => KeyAction::Next,
        state::ARROW_UP => KeyAction::Up,
        state::ARROW_DOWN => KeyAction::Down,
        state::HOME => KeyAction::Home,
        state::END => KeyAction::End,
        _ => event.digit().map_or(KeyAction::PassThrough, KeyAction::Digit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{KeyState, Modifiers};

    fn decode(key: &str) -> KeyAction {
        decode_key(&KeyboardEvent::new(key))
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(decode("ArrowLeft"), KeyAction::Previous);
        assert_eq!(decode("PageUp"), KeyAction::Previous);
        assert_eq!(decode("ArrowRight"), KeyAction::Next);
        assert_eq!(decode("PageDown"), KeyAction::Next);
        assert_eq!(decode("Home"), KeyAction::Home);
        assert_eq!(decode("End"), KeyAction::End);
    }

    #[test]
    fn test_step_keys() {
        assert_eq!(decode("ArrowUp"), KeyAction::Up);
        assert_eq!(decode("ArrowDown"), KeyAction::Down);
    }

    #[test]
    fn test_digits() {
        for n in 0..=9u8 {
            assert_eq!(decode(&n.to_string()), KeyAction::Digit(n));
            assert_eq!(decode_key(&KeyboardEvent::keypad_digit(n)), KeyAction::Digit(n));
        }
    }

    #[test]
    fn test_pass_through_keys() {
        for key in ["Tab", "Enter", "Escape", "a", "F5", "F12", "Backspace", ""] {
            assert_eq!(decode(key), KeyAction::PassThrough, "key {:?}", key);
            assert!(!decode(key).prevents_default());
        }
    }

    #[test]
    fn test_alt_and_ctrl_pass_through() {
        for key in ["ArrowLeft", "ArrowUp", "5", "Home"] {
            let ctrl = KeyboardEvent::with_modifiers(key, Modifiers::ctrl());
            let alt = KeyboardEvent::with_modifiers(key, Modifiers::alt());
            assert_eq!(decode_key(&ctrl), KeyAction::PassThrough);
            assert_eq!(decode_key(&alt), KeyAction::PassThrough);
        }
    }

    #[test]
    fn test_shift_suppresses() {
        let shifted = KeyboardEvent::with_modifiers("ArrowUp", Modifiers::shift());
        assert_eq!(decode_key(&shifted), KeyAction::Suppress);
        assert!(KeyAction::Suppress.prevents_default());

        let shifted_letter = KeyboardEvent::with_modifiers("A", Modifiers::shift());
        assert_eq!(decode_key(&shifted_letter), KeyAction::Suppress);
    }

    #[test]
    fn test_shift_tab_passes_through() {
        let back_tab = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
        assert_eq!(decode_key(&back_tab), KeyAction::PassThrough);
    }

    #[test]
    fn test_repeat_and_release() {
        let repeat = KeyboardEvent { state: KeyState::Repeat, ..KeyboardEvent::new("ArrowUp") };
        assert_eq!(decode_key(&repeat), KeyAction::Up);

        let release = KeyboardEvent { state: KeyState::Release, ..KeyboardEvent::new("ArrowUp") };
        assert_eq!(decode_key(&release), KeyAction::PassThrough);
    }

    #[test]
    fn test_is_navigation() {
        assert!(KeyAction::Next.is_navigation());
        assert!(KeyAction::Home.is_navigation());
        assert!(!KeyAction::Up.is_navigation());
        assert!(!KeyAction::Digit(1).is_navigation());
    }
}
