//! Digit buffer - the last two digits typed into the active segment.

/// Number of digits one segment accepts.
pub const BUFFER_CAPACITY: usize = 2;

/// Two-slot ring of typed digits.
///
/// A third digit pushes out the oldest one, so the buffer always holds the
/// most recent one or two digits in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitBuffer {
    digits: [u8; BUFFER_CAPACITY],
    len: usize,
}

impl DigitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit (0-9), dropping the oldest when full.
    ///
    /// Digits above 9 are ignored; the key decoder never produces them.
    pub fn push(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        if self.len == BUFFER_CAPACITY {
            self.digits.copy_within(1.., 0);
            self.len -= 1;
        }
        self.digits[self.len] = digit;
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.digits = [0; BUFFER_CAPACITY];
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digits currently held, oldest first.
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Buffered digits read as a decimal number, `None` when empty.
    pub fn value(&self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        Some(self.digits().iter().fold(0u8, |acc, d| acc * 10 + d))
    }
}
