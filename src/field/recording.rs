//! In-memory field host.

use std::cell::RefCell;
use std::rc::Rc;

use super::FieldHost;
use crate::types::Highlight;

/// One `render` call as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRender {
    pub text: String,
    pub highlight: Highlight,
}

/// Field host that keeps every render in memory.
///
/// Clones share the same history, so a test can keep one handle while the
/// picker owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingField {
    renders: Rc<RefCell<Vec<RecordedRender>>>,
}

impl RecordingField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent render, empty if nothing was rendered.
    pub fn text(&self) -> String {
        self.last().map(|r| r.text).unwrap_or_default()
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.last().map(|r| r.highlight)
    }

    pub fn last(&self) -> Option<RecordedRender> {
        self.renders.borrow().last().cloned()
    }

    pub fn render_count(&self) -> usize {
        self.renders.borrow().len()
    }

    pub fn renders(&self) -> Vec<RecordedRender> {
        self.renders.borrow().clone()
    }
}

impl FieldHost for RecordingField {
    fn render(&mut self, text: &str, highlight: Highlight) {
        self.renders.borrow_mut().push(RecordedRender {
            text: text.to_string(),
            highlight,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_renders() {
        let field = RecordingField::new();
        let mut host = field.clone();

        assert_eq!(field.text(), "");
        assert_eq!(field.highlight(), None);

        host.render("00:00:00", Highlight::new(0, 2));
        host.render("00:00:00", Highlight::new(3, 5));

        assert_eq!(field.render_count(), 2);
        assert_eq!(field.text(), "00:00:00");
        assert_eq!(field.highlight(), Some(Highlight::new(3, 5)));
    }
}
