//! OS color-scheme preference signal contracts.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Opaque handle for one color-scheme subscription.
pub struct SchemeSubscription(pub u64);

/// Listener invoked with the new dark-preference value on every change.
pub type SchemeListener = Rc<dyn Fn(bool)>;

/// Host signal reporting the OS-level dark-mode preference.
pub trait ColorSchemeSignal {
    /// Returns the current OS preference, or `None` when the host cannot
    /// report one.
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers a change listener and returns its subscription handle.
    fn subscribe(&self, listener: SchemeListener) -> SchemeSubscription;

    /// Removes a previously registered listener. Unknown handles are ignored.
    fn unsubscribe(&self, subscription: SchemeSubscription);
}

#[derive(Debug, Clone, Copy, Default)]
/// Color-scheme signal that reports nothing and never fires.
pub struct NoopColorScheme;

impl ColorSchemeSignal for NoopColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, _listener: SchemeListener) -> SchemeSubscription {
        SchemeSubscription(0)
    }

    fn unsubscribe(&self, _subscription: SchemeSubscription) {}
}

#[derive(Default)]
/// Scriptable color-scheme signal for native tests.
pub struct FixedColorScheme {
    prefers_dark: Cell<Option<bool>>,
    next_id: Cell<u64>,
    listeners: RefCell<HashMap<u64, SchemeListener>>,
}

impl FixedColorScheme {
    /// Creates a signal reporting the given preference.
    pub fn reporting(prefers_dark: Option<bool>) -> Self {
        let scheme = Self::default();
        scheme.prefers_dark.set(prefers_dark);
        scheme
    }

    /// Updates the reported preference and notifies every listener.
    pub fn emit(&self, dark: bool) {
        self.prefers_dark.set(Some(dark));
        let listeners: Vec<SchemeListener> = {
            let map = self.listeners.borrow();
            let mut ordered: Vec<_> = map.iter().collect();
            ordered.sort_by_key(|(id, _)| **id);
            ordered.into_iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(dark);
        }
    }

    /// Returns the number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ColorSchemeSignal for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark.get()
    }

    fn subscribe(&self, listener: SchemeListener) -> SchemeSubscription {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.listeners.borrow_mut().insert(id, listener);
        SchemeSubscription(id)
    }

    fn unsubscribe(&self, subscription: SchemeSubscription) {
        self.listeners.borrow_mut().remove(&subscription.0);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn emit_reaches_live_listeners_only() {
        let scheme = FixedColorScheme::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_first = seen.clone();
        let first = scheme.subscribe(Rc::new(move |dark| seen_first.borrow_mut().push(("a", dark))));
        let seen_second = seen.clone();
        let _second =
            scheme.subscribe(Rc::new(move |dark| seen_second.borrow_mut().push(("b", dark))));

        scheme.emit(true);
        scheme.unsubscribe(first);
        scheme.emit(false);

        assert_eq!(*seen.borrow(), vec![("a", true), ("b", true), ("b", false)]);
        assert_eq!(scheme.listener_count(), 1);
        assert_eq!(scheme.prefers_dark(), Some(false));
    }

    #[test]
    fn noop_scheme_reports_nothing() {
        let scheme = NoopColorScheme;
        assert_eq!(scheme.prefers_dark(), None);
        let subscription = scheme.subscribe(Rc::new(|_| {}));
        scheme.unsubscribe(subscription);
    }
}
