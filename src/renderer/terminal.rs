//! Terminal field renderer.
//!
//! Draws the picker on a single terminal line with crossterm:
//!
//! ```text
//! Time: 12:[31]:00
//!          ^^^^ active segment, drawn with the highlight attributes
//! ```
//!
//! The terminal cursor is parked on the first digit of the active segment,
//! which is what a caret/selection would show in a GUI field.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveToColumn, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use tracing::warn;

use crate::field::FieldHost;
use crate::types::{Attr, Highlight};

/// Crossterm attributes for a highlight style.
fn attributes_for(attr: Attr) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    if attr.contains(Attr::BOLD) {
        attributes.push(Attribute::Bold);
    }
    if attr.contains(Attr::DIM) {
        attributes.push(Attribute::Dim);
    }
    if attr.contains(Attr::UNDERLINE) {
        attributes.push(Attribute::Underlined);
    }
    if attr.contains(Attr::INVERSE) {
        attributes.push(Attribute::Reverse);
    }
    attributes
}

/// Split `text` into before / inside / after the highlight, clamped to its length.
fn split_highlight(text: &str, highlight: Highlight) -> (&str, &str, &str) {
    let len = text.len();
    let start = highlight.start.min(len);
    let end = highlight.end.clamp(start, len);
    match (text.get(..start), text.get(start..end), text.get(end..)) {
        (Some(before), Some(inside), Some(after)) => (before, inside, after),
        _ => (text, "", ""),
    }
}

/// Field host that draws into a terminal line.
pub struct TerminalField<W: Write> {
    out: W,
    label: String,
    highlight_attr: Attr,
    error: Option<io::Error>,
}

impl<W: Write> TerminalField<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            label: String::new(),
            highlight_attr: Attr::INVERSE,
            error: None,
        }
    }

    /// Text drawn before the field.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Attributes used for the active segment.
    pub fn with_highlight(mut self, attr: Attr) -> Self {
        self.highlight_attr = attr;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Redraw the whole line.
    pub fn draw(&mut self, text: &str, highlight: Highlight) -> io::Result<()> {
        let (before, inside, after) = split_highlight(text, highlight);
        let caret = self.label.chars().count() + before.chars().count();

        queue!(
            self.out,
            Hide,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(&self.label),
            Print(before)
        )?;
        for attribute in attributes_for(self.highlight_attr) {
            queue!(self.out, SetAttribute(attribute))?;
        }
        queue!(
            self.out,
            Print(inside),
            SetAttribute(Attribute::Reset),
            Print(after),
            MoveToColumn(u16::try_from(caret).unwrap_or(u16::MAX)),
            Show
        )?;
        self.out.flush()
    }

    /// Move past the field line, leaving what was drawn on screen.
    pub fn finish(&mut self) -> io::Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset), Print("\r\n"))?;
        self.out.flush()
    }
}

impl<W: Write> FieldHost for TerminalField<W> {
    fn render(&mut self, text: &str, highlight: Highlight) {
        if let Err(err) = self.draw(text, highlight) {
            warn!(error = %err, "failed to draw field");
            self.error.get_or_insert(err);
        }
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(field: &TerminalField<Vec<u8>>) -> String {
        String::from_utf8_lossy(field.writer()).into_owned()
    }

    #[test]
    fn test_split_highlight() {
        assert_eq!(split_highlight("12:31:00", Highlight::new(3, 5)), ("12:", "31", ":00"));
        assert_eq!(split_highlight("12:31:00", Highlight::new(6, 8)), ("12:31:", "00", ""));
        assert_eq!(split_highlight("12", Highlight::new(6, 8)), ("12", "", ""));
    }

    #[test]
    fn test_render_marks_active_segment() {
        let mut field = TerminalField::new(Vec::new()).with_label("Time: ");
        field.render("12:31:00", Highlight::new(3, 5));

        let out = output(&field);
        assert!(out.contains("Time: 12:"));
        // Reverse video around the minutes, reset before the seconds
        assert!(out.contains("\x1b[7m31\x1b[0m:00"));
        // Caret on column 9 (1-based 10)
        assert!(out.contains("\x1b[10G"));
        assert!(field.take_error().is_none());
    }

    #[test]
    fn test_custom_highlight() {
        let mut field = TerminalField::new(Vec::new()).with_highlight(Attr::BOLD | Attr::UNDERLINE);
        field.render("00:00:00", Highlight::new(0, 2));

        let out = output(&field);
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("\x1b[4m"));
        assert!(!out.contains("\x1b[7m"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_failure_is_kept() {
        let mut field = TerminalField::new(FailingWriter);
        field.render("00:00:00", Highlight::new(0, 2));
        let err = field.take_error().expect("error recorded");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(field.take_error().is_none());
    }
}
