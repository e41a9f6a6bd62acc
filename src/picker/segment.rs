//! Segment - one clamped clock field.

use crate::types::SegmentKind;

/// A single hour, minute or second field.
///
/// `min <= value <= max` holds after every mutation. Direct writes outside
/// the bounds are dropped; stepping saturates at the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    kind: SegmentKind,
    value: u8,
    min: u8,
    max: u8,
}

impl Segment {
    /// Create a segment at its lower bound.
    pub fn new(kind: SegmentKind) -> Self {
        let (min, max) = kind.bounds();
        Self { kind, value: min, min, max }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Set the value if it is within bounds.
    ///
    /// Returns whether the value was accepted. An out-of-range value is not
    /// an error; the segment simply keeps its current value.
    pub fn set_value(&mut self, value: u8) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        self.value = value;
        true
    }

    /// Step up by one, stopping at `max`.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1).min(self.max);
    }

    /// Step down by one, stopping at `min`.
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1).max(self.min);
    }

    /// Two-character, zero-padded decimal form (`3` -> `"03"`).
    pub fn formatted(&self) -> String {
        format!("{:02}", self.value)
    }
}
