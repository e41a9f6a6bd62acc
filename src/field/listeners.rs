//! Change listener registry.
//!
//! Same shape as a keyboard handler registry: each subscription gets an id,
//! and the returned cleanup closure removes exactly that subscription.

use std::cell::RefCell;
use std::rc::Rc;

/// Handler called with the newly rendered text.
pub type ChangeHandler = Rc<dyn Fn(&str)>;

/// Cleanup function returned by subscriptions.
pub type Cleanup = Box<dyn FnOnce()>;

#[derive(Default)]
struct Registry {
    handlers: Vec<(usize, ChangeHandler)>,
    next_id: usize,
}

impl Registry {
    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Listeners notified when the rendered text changes.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ChangeListeners {
    registry: Rc<RefCell<Registry>>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to change notifications.
    /// Returns cleanup function.
    pub fn subscribe<F>(&self, handler: F) -> Cleanup
    where
        F: Fn(&str) + 'static,
    {
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id();
            reg.handlers.push((id, Rc::new(handler)));
            id
        };

        let registry = Rc::downgrade(&self.registry);
        Box::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .handlers
                    .retain(|(handler_id, _)| *handler_id != id);
            }
        })
    }

    /// Call every listener once with `text`.
    ///
    /// Handlers run outside the registry borrow, so they may subscribe or
    /// unsubscribe while being notified.
    pub fn emit(&self, text: &str) {
        let handlers: Vec<ChangeHandler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in handlers {
            handler(text);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every subscription.
    pub fn clear(&self) {
        self.registry.borrow_mut().handlers.clear();
    }
}

impl std::fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_all() {
        let listeners = ChangeListeners::new();
        let count = Rc::new(Cell::new(0));

        let c1 = count.clone();
        let _a = listeners.subscribe(move |_| c1.set(c1.get() + 1));
        let c2 = count.clone();
        let _b = listeners.subscribe(move |_| c2.set(c2.get() + 10));

        listeners.emit("01:00:00");
        assert_eq!(count.get(), 11);
    }

    #[test]
    fn test_cleanup_removes_only_its_handler() {
        let listeners = ChangeListeners::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let f = first.clone();
        let cleanup = listeners.subscribe(move |_| f.set(f.get() + 1));
        let s = second.clone();
        let _keep = listeners.subscribe(move |_| s.set(s.get() + 1));

        cleanup();
        listeners.emit("00:00:01");

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_handler_receives_text() {
        let listeners = ChangeListeners::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        let _cleanup = listeners.subscribe(move |text| s.borrow_mut().push(text.to_string()));

        listeners.emit("12:31:00");
        assert_eq!(*seen.borrow(), vec!["12:31:00".to_string()]);
    }

    #[test]
    fn test_unsubscribe_during_emit() {
        let listeners = ChangeListeners::new();
        let slot: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(None));

        let s = slot.clone();
        let cleanup = listeners.subscribe(move |_| {
            if let Some(cleanup) = s.borrow_mut().take() {
                cleanup();
            }
        });
        *slot.borrow_mut() = Some(cleanup);

        listeners.emit("00:00:00");
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_clones_share_registry() {
        let listeners = ChangeListeners::new();
        let other = listeners.clone();
        let _cleanup = other.subscribe(|_| {});
        assert_eq!(listeners.len(), 1);
    }
}
