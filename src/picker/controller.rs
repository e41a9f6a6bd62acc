//! TimePicker - the segment-editing controller.
//!
//! Owns the three segments, the active index, the digit buffer and the idle
//! timer. Key events come in through [`TimePicker::handle_key`]; the result
//! goes out through the [`FieldHost`] and, when the text changed, through the
//! change listeners and the value signal.

use std::time::Instant;

use spark_signals::{signal, Signal};
use tracing::{debug, trace};

use super::buffer::DigitBuffer;
use super::keymap::{decode_key, KeyAction};
use super::segment::Segment;
use super::timer::{BufferPolicy, Clock, IdleTimer, SystemClock};
use crate::field::{ChangeListeners, Cleanup, FieldHost};
use crate::state::{InputEvent, KeyboardEvent};
use crate::types::{ClockTime, Highlight, SegmentKind};

/// Separator between the rendered segments.
pub const SEPARATOR: char = ':';

/// Number of segments (hour, minute, second).
pub const SEGMENT_COUNT: usize = 3;

bitflags::bitflags! {
    /// What happened while handling one input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeyOutcome: u8 {
        /// The key mapped to a picker action.
        const HANDLED = 1 << 0;
        /// The host should skip its default handling.
        const PREVENT_DEFAULT = 1 << 1;
        /// The render changed the text and listeners were notified.
        const CHANGED = 1 << 2;
    }
}

/// Keyboard-driven `HH:MM:SS` editor bound to one field.
pub struct TimePicker<H: FieldHost, C: Clock = SystemClock> {
    segments: [Segment; SEGMENT_COUNT],
    active: usize,
    buffer: DigitBuffer,
    policy: BufferPolicy,
    idle_timer: IdleTimer,
    clock: C,
    host: H,
    listeners: ChangeListeners,
    rendered: Option<String>,
    value: Signal<String>,
}

impl<H: FieldHost> TimePicker<H, SystemClock> {
    /// Picker at `00:00:00` with the default idle-reset policy.
    pub fn new(host: H) -> Self {
        Self::with_clock(host, BufferPolicy::default(), SystemClock)
    }

    /// Picker with an explicit buffer policy.
    pub fn with_policy(host: H, policy: BufferPolicy) -> Self {
        Self::with_clock(host, policy, SystemClock)
    }
}

impl<H: FieldHost, C: Clock> TimePicker<H, C> {
    /// Picker reading time from `clock`.
    pub fn with_clock(host: H, policy: BufferPolicy, clock: C) -> Self {
        Self {
            segments: SegmentKind::ALL.map(Segment::new),
            active: 0,
            buffer: DigitBuffer::new(),
            policy,
            idle_timer: IdleTimer::new(),
            clock,
            host,
            listeners: ChangeListeners::new(),
            rendered: None,
            value: signal(String::new()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_kind(&self) -> SegmentKind {
        self.segments[self.active].kind()
    }

    pub fn active_segment(&self) -> &Segment {
        &self.segments[self.active]
    }

    pub fn segment(&self, kind: SegmentKind) -> &Segment {
        &self.segments[kind.index()]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Digits typed into the active segment since the last reset.
    pub fn buffered_digits(&self) -> &[u8] {
        self.buffer.digits()
    }

    pub fn policy(&self) -> BufferPolicy {
        self.policy
    }

    pub fn time(&self) -> ClockTime {
        ClockTime {
            hours: self.segment(SegmentKind::Hour).value(),
            minutes: self.segment(SegmentKind::Minute).value(),
            seconds: self.segment(SegmentKind::Second).value(),
        }
    }

    /// `HH:MM:SS` built from the current segment values.
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(SEGMENT_COUNT * 3 - 1);
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                text.push(SEPARATOR);
            }
            text.push_str(&segment.formatted());
        }
        text
    }

    /// Character range of the active segment in [`text`](Self::text).
    pub fn highlight(&self) -> Highlight {
        Highlight::for_segment(self.active)
    }

    /// Text pushed by the most recent render, if any.
    pub fn rendered_text(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// Reactive mirror of the rendered text.
    pub fn value_signal(&self) -> Signal<String> {
        self.value.clone()
    }

    pub fn listeners(&self) -> &ChangeListeners {
        &self.listeners
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Subscribe to text changes. Returns cleanup function.
    pub fn on_change<F>(&self, handler: F) -> Cleanup
    where
        F: Fn(&str) + 'static,
    {
        self.listeners.subscribe(handler)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to the next segment, wrapping from seconds to hours.
    pub fn next(&mut self) {
        self.select((self.active + 1) % SEGMENT_COUNT);
    }

    /// Move to the previous segment, wrapping from hours to seconds.
    pub fn previous(&mut self) {
        self.select((self.active + SEGMENT_COUNT - 1) % SEGMENT_COUNT);
    }

    pub fn home(&mut self) {
        self.select(0);
    }

    pub fn end(&mut self) {
        self.select(SEGMENT_COUNT - 1);
    }

    fn select(&mut self, index: usize) {
        self.active = index;
        self.reset_buffer();
        debug!(segment = ?self.active_kind(), "segment selected");
    }

    fn reset_buffer(&mut self) {
        self.buffer.clear();
        self.idle_timer.cancel();
    }

    // =========================================================================
    // Adjustment
    // =========================================================================

    /// Step the active segment up, saturating at its maximum.
    pub fn up(&mut self) {
        self.segments[self.active].increment();
    }

    /// Step the active segment down, saturating at its minimum.
    pub fn down(&mut self) {
        self.segments[self.active].decrement();
    }

    /// Type one digit into the active segment.
    ///
    /// The last two digits typed form the candidate value. A candidate
    /// outside the segment's bounds leaves the value unchanged.
    pub fn input_digit(&mut self, digit: u8) {
        let now = self.clock.now();
        self.expire_idle(now);

        self.buffer.push(digit);
        let accepted = match self.buffer.value() {
            Some(candidate) => self.segments[self.active].set_value(candidate),
            None => false,
        };

        if let Some(timeout) = self.policy.idle_timeout() {
            self.idle_timer.arm(now, timeout);
        }

        debug!(
            segment = ?self.active_kind(),
            digits = ?self.buffer.digits(),
            accepted,
            "digit entry"
        );
    }

    /// Apply a full time value, part by part.
    pub fn set_time(&mut self, time: ClockTime) {
        for kind in SegmentKind::ALL {
            self.segments[kind.index()].set_value(time.get(kind));
        }
    }

    // =========================================================================
    // Idle timer
    // =========================================================================

    /// When the pending idle reset is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.idle_timer.deadline()
    }

    /// Fire the idle reset if its deadline has passed.
    ///
    /// Returns true if the buffer was cleared.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.expire_idle(now)
    }

    fn expire_idle(&mut self, now: Instant) -> bool {
        if self.idle_timer.fire_if_due(now) {
            self.buffer.clear();
            debug!("digit buffer reset after idle timeout");
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Initial focus and render, as when the picker is first bound to a field.
    pub fn attach(&mut self) -> KeyOutcome {
        debug!("picker attached");
        self.focus()
    }

    /// The field (re)gained focus: back to the hour segment with an empty buffer.
    pub fn focus(&mut self) -> KeyOutcome {
        self.select(0);
        self.render_outcome(KeyOutcome::empty())
    }

    /// Decode and apply one key event.
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> KeyOutcome {
        self.tick();

        let action = decode_key(event);
        debug!(key = %event.key, ?action, "key decoded");

        match action {
            KeyAction::PassThrough => return KeyOutcome::empty(),
            KeyAction::Suppress => return self.render_outcome(KeyOutcome::PREVENT_DEFAULT),
            KeyAction::Previous => self.previous(),
            KeyAction::Next => self.next(),
            KeyAction::Home => self.home(),
            KeyAction::End => self.end(),
            KeyAction::Up => self.up(),
            KeyAction::Down => self.down(),
            KeyAction::Digit(digit) => self.input_digit(digit),
        }

        self.render_outcome(KeyOutcome::HANDLED | KeyOutcome::PREVENT_DEFAULT)
    }

    /// Route a host input event to the picker.
    pub fn handle_event(&mut self, event: &InputEvent) -> KeyOutcome {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::FocusGained => self.focus(),
            InputEvent::FocusLost | InputEvent::Resize(_, _) | InputEvent::None => {
                KeyOutcome::empty()
            }
        }
    }

    // =========================================================================
    // Render
    // =========================================================================

    /// Push text and highlight to the host.
    ///
    /// Listeners and the value signal are only touched when the text differs
    /// from the previous render. Returns whether it did.
    pub fn render(&mut self) -> bool {
        let text = self.text();
        let highlight = self.highlight();
        self.host.render(&text, highlight);

        let changed = self.rendered.as_deref() != Some(text.as_str());
        trace!(%text, start = highlight.start, end = highlight.end, changed, "render");

        if changed {
            self.value.set(text.clone());
            self.listeners.emit(&text);
            self.rendered = Some(text);
        }
        changed
    }

    fn render_outcome(&mut self, outcome: KeyOutcome) -> KeyOutcome {
        if self.render() {
            outcome | KeyOutcome::CHANGED
        } else {
            outcome
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
