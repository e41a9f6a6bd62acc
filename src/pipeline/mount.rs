//! Mount API - Terminal lifecycle and the picker event loop.
//!
//! # Example
//!
//! ```ignore
//! use spark_timepicker::pipeline::{mount, run, TerminalEvents};
//!
//! let handle = mount()?;
//! let exit = run(&mut picker, &mut TerminalEvents)?;
//! handle.unmount();
//! ```
//!
//! The loop is single-threaded. Input polling is bounded by the picker's
//! idle deadline, and the idle reset fires from the same loop, so a key and
//! a timer expiry are never processed at the same time.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::{debug, info};

use crate::error::Result;
use crate::field::FieldHost;
use crate::picker::{Clock, KeyOutcome, TimePicker};
use crate::state::input::{self, InputEvent};
use crate::state::{self as keys, KeyboardEvent};
use crate::types::ClockTime;

/// Longest wait for input when no idle reset is pending.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

// =============================================================================
// Event Source
// =============================================================================

/// Where the loop gets input from.
pub trait EventSource {
    /// Wait up to `timeout` for one event.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>>;
}

/// Live terminal input via crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
        input::poll_event(timeout)
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Terminal state owned while the picker is mounted.
///
/// Raw mode and focus reporting are switched back off on unmount or drop.
pub struct MountHandle {
    raw_mode: bool,
    focus_reporting: bool,
}

impl MountHandle {
    /// Restore the terminal.
    pub fn unmount(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if self.focus_reporting {
            let _ = input::disable_focus_reporting(&mut stdout());
            self.focus_reporting = false;
        }
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Put the terminal into raw mode with focus reporting.
pub fn mount() -> io::Result<MountHandle> {
    enable_raw_mode()?;
    let mut handle = MountHandle {
        raw_mode: true,
        focus_reporting: false,
    };

    input::enable_focus_reporting(&mut stdout())?;
    handle.focus_reporting = true;

    info!("terminal mounted");
    Ok(handle)
}

// =============================================================================
// Event Loop
// =============================================================================

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Enter was pressed; carries the value at that moment.
    Submitted(ClockTime),
    /// Escape or Ctrl+C.
    Cancelled,
}

/// Keys the loop itself reacts to once the picker let them pass.
fn exit_for(key: &KeyboardEvent, time: ClockTime) -> Option<Exit> {
    if !key.is_down() {
        return None;
    }
    if key.modifiers.ctrl && key.key.eq_ignore_ascii_case("c") {
        return Some(Exit::Cancelled);
    }
    if key.modifiers.alt || key.modifiers.ctrl {
        return None;
    }
    match key.key.as_str() {
        keys::ENTER => Some(Exit::Submitted(time)),
        keys::ESCAPE => Some(Exit::Cancelled),
        _ => None,
    }
}

/// Process at most one input event, then fire the idle reset if due.
///
/// Returns `Some(exit)` when the loop should stop.
pub fn tick<H, C, S>(picker: &mut TimePicker<H, C>, source: &mut S) -> Result<Option<Exit>>
where
    H: FieldHost,
    C: Clock,
    S: EventSource,
{
    let timeout = match picker.next_deadline() {
        Some(deadline) => deadline
            .saturating_duration_since(picker.clock().now())
            .min(IDLE_POLL),
        None => IDLE_POLL,
    };

    let mut exit = None;
    if let Some(event) = source.poll(timeout)? {
        let outcome = picker.handle_event(&event);
        if let InputEvent::Key(key) = &event {
            if !outcome.contains(KeyOutcome::PREVENT_DEFAULT) {
                exit = exit_for(key, picker.time());
            }
        }
    }

    picker.tick();

    if let Some(err) = picker.host_mut().take_error() {
        return Err(err.into());
    }

    if let Some(exit) = exit {
        debug!(?exit, "event loop stopping");
    }
    Ok(exit)
}

/// Run the event loop until Enter, Escape or Ctrl+C.
///
/// Attaches the picker first, so the field is drawn before the first key.
pub fn run<H, C, S>(picker: &mut TimePicker<H, C>, source: &mut S) -> Result<Exit>
where
    H: FieldHost,
    C: Clock,
    S: EventSource,
{
    picker.attach();
    if let Some(err) = picker.host_mut().take_error() {
        return Err(err.into());
    }

    loop {
        if let Some(exit) = tick(picker, source)? {
            return Ok(exit);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::RecordingField;
    use crate::picker::{BufferPolicy, ManualClock};
    use crate::state::Modifiers;
    use std::collections::VecDeque;

    /// Scripted input; `None` entries stand for a poll that timed out.
    struct Script {
        clock: ManualClock,
        steps: VecDeque<Option<InputEvent>>,
    }

    impl EventSource for Script {
        fn poll(&mut self, timeout: Duration) -> io::Result<Option<InputEvent>> {
            match self.steps.pop_front() {
                Some(Some(event)) => Ok(Some(event)),
                Some(None) => {
                    self.clock.advance(timeout);
                    Ok(None)
                }
                None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")),
            }
        }
    }

    fn key(name: &str) -> Option<InputEvent> {
        Some(InputEvent::Key(KeyboardEvent::new(name)))
    }

    fn picker(clock: &ManualClock) -> TimePicker<RecordingField, ManualClock> {
        TimePicker::with_clock(RecordingField::new(), BufferPolicy::default(), clock.clone())
    }

    #[test]
    fn test_enter_submits() {
        let clock = ManualClock::new();
        let mut picker = picker(&clock);
        let mut script = Script {
            clock: clock.clone(),
            steps: [key("0"), key("9"), key("ArrowRight"), key("4"), key("5"), key("Enter")].into(),
        };

        let exit = run(&mut picker, &mut script).unwrap();
        assert_eq!(exit, Exit::Submitted(ClockTime { hours: 9, minutes: 45, seconds: 0 }));
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        let clock = ManualClock::new();
        let mut picker = picker(&clock);
        let mut script = Script { clock: clock.clone(), steps: [key("Escape")].into() };
        assert_eq!(run(&mut picker, &mut script).unwrap(), Exit::Cancelled);

        let ctrl_c = Some(InputEvent::Key(KeyboardEvent::with_modifiers("c", Modifiers::ctrl())));
        let mut script = Script { clock: clock.clone(), steps: [ctrl_c].into() };
        assert_eq!(run(&mut picker, &mut script).unwrap(), Exit::Cancelled);
    }

    #[test]
    fn test_idle_poll_resets_buffer() {
        let clock = ManualClock::new();
        let mut picker = picker(&clock);
        // "1", then idle polls long enough to pass the 1s reset, then "5"
        let mut steps: VecDeque<Option<InputEvent>> = [key("1")].into();
        steps.extend(std::iter::repeat_n(None, 4));
        steps.extend([key("5"), key("Enter")]);
        let mut script = Script { clock: clock.clone(), steps };

        let exit = run(&mut picker, &mut script).unwrap();
        assert_eq!(exit, Exit::Submitted(ClockTime { hours: 5, minutes: 0, seconds: 0 }));
    }

    #[test]
    fn test_poll_timeout_bounded_by_deadline() {
        let clock = ManualClock::new();
        let mut picker = picker(&clock);
        picker.attach();
        picker.handle_key(&KeyboardEvent::new("1"));

        let mut script = Script { clock: clock.clone(), steps: [None].into() };
        let start = clock.now();
        assert_eq!(tick(&mut picker, &mut script).unwrap(), None);
        // One poll never waits longer than IDLE_POLL
        assert_eq!(clock.now() - start, IDLE_POLL);
        assert_eq!(picker.buffered_digits(), &[1]);
    }

    #[test]
    fn test_exit_for_ignores_modified_enter() {
        let time = ClockTime::MIDNIGHT;
        let alt_enter = KeyboardEvent::with_modifiers("Enter", Modifiers::alt());
        assert_eq!(exit_for(&alt_enter, time), None);
        assert_eq!(exit_for(&KeyboardEvent::new("Tab"), time), None);
        assert_eq!(exit_for(&KeyboardEvent::new("Enter"), time), Some(Exit::Submitted(time)));
    }
}
