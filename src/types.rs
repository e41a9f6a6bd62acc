//! Core types for spark-timepicker.
//!
//! These types are shared by the picker model, the host boundary and the
//! terminal renderer.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// =============================================================================
// Segments
// =============================================================================

/// Which of the three clock fields a segment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Hour,
    Minute,
    Second,
}

impl SegmentKind {
    /// All kinds in display order.
    pub const ALL: [SegmentKind; 3] = [SegmentKind::Hour, SegmentKind::Minute, SegmentKind::Second];

    /// Position of this segment in the rendered string (0, 1 or 2).
    pub const fn index(self) -> usize {
        match self {
            SegmentKind::Hour => 0,
            SegmentKind::Minute => 1,
            SegmentKind::Second => 2,
        }
    }

    /// Inclusive `(min, max)` bounds for this kind.
    pub const fn bounds(self) -> (u8, u8) {
        match self {
            SegmentKind::Hour => (0, 23),
            SegmentKind::Minute | SegmentKind::Second => (0, 59),
        }
    }

    /// Kind stored at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

// =============================================================================
// Highlight
// =============================================================================

/// Half-open character range `[start, end)` marking the active segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
}

impl Highlight {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Range covering the two digits of segment `index` in `HH:MM:SS`.
    pub const fn for_segment(index: usize) -> Self {
        Self::new(index * 3, index * 3 + 2)
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// ClockTime
// =============================================================================

/// A complete `HH:MM:SS` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self { hours: 0, minutes: 0, seconds: 0 };

    /// Build a time, rejecting any part outside its segment bounds.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, Error> {
        let time = Self { hours, minutes, seconds };
        for kind in SegmentKind::ALL {
            let (min, max) = kind.bounds();
            let value = time.get(kind);
            if value < min || value > max {
                return Err(Error::InvalidTime {
                    input: time.to_string(),
                    reason: format!("{:?} {} is outside {}..={}", kind, value, min, max),
                });
            }
        }
        Ok(time)
    }

    /// Value of one part.
    pub const fn get(&self, kind: SegmentKind) -> u8 {
        match kind {
            SegmentKind::Hour => self.hours,
            SegmentKind::Minute => self.minutes,
            SegmentKind::Second => self.seconds,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidTime {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 3 {
            return Err(invalid("expected HH:MM:SS"));
        }

        let mut values = [0u8; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("each part must be one or two digits"));
            }
            *slot = part.parse().map_err(|_| invalid("each part must be one or two digits"))?;
        }

        Self::new(values[0], values[1], values[2]).map_err(|_| invalid("part out of range"))
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes used to mark the active segment.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
        const INVERSE = 1 << 3;
    }
}

impl Attr {
    /// Parse a `|`- or `+`-separated list such as `"inverse"` or `"bold+underline"`.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut attrs = Attr::NONE;
        for name in spec.split(['|', '+']).map(str::trim).filter(|n| !n.is_empty()) {
            attrs |= match name.to_ascii_lowercase().as_str() {
                "none" => Attr::NONE,
                "bold" => Attr::BOLD,
                "dim" => Attr::DIM,
                "underline" => Attr::UNDERLINE,
                "inverse" | "reverse" => Attr::INVERSE,
                _ => return None,
            };
        }
        Some(attrs)
    }
}

// =============================================================================
// Tests
// =============================================================================
