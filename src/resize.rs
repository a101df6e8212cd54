//! Resize events - Terminal size state and the resize listener registry.
//!
//! The registry is the host environment's global resize notification. An
//! observer registers a listener at mount and removes that exact registration
//! at teardown: `add_resize_listener` hands back a [`ListenerId`] and
//! `remove_resize_listener` only ever drops the registration with that id, so
//! deregistration is identity-sensitive and listeners cannot silently leak.
//!
//! `dispatch_resize` is also the synthetic-resize entry point for tests; no
//! real display surface is needed to exercise the observer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// Terminal Size State
// =============================================================================

thread_local! {
    static TERMINAL_WIDTH: Cell<u16> = const { Cell::new(80) };
    static TERMINAL_HEIGHT: Cell<u16> = const { Cell::new(24) };
}

/// Get the current terminal width.
pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|w| w.get())
}

/// Get the current terminal height.
pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|h| h.get())
}

/// Set the terminal size without notifying listeners.
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_WIDTH.with(|w| w.set(width));
    TERMINAL_HEIGHT.with(|h| h.set(height));
}

/// Detect and set the actual terminal size from the environment.
///
/// Uses crossterm to query the terminal dimensions. Keeps the current value
/// when no terminal is attached.
pub fn detect_terminal_size() {
    if let Ok((width, height)) = crossterm::terminal::size() {
        set_terminal_size(width, height);
    }
}

// =============================================================================
// Listener Registry
// =============================================================================

/// Identity of one resize listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type ResizeListener = Rc<RefCell<dyn FnMut(u16, u16)>>;

struct ListenerRegistry {
    listeners: Vec<(ListenerId, ResizeListener)>,
    next_id: u64,
}

impl ListenerRegistry {
    fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<ListenerRegistry> = RefCell::new(ListenerRegistry::new());
}

/// Register a resize listener. Returns the id needed to remove it.
pub fn add_resize_listener(listener: impl FnMut(u16, u16) + 'static) -> ListenerId {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.listeners.push((id, Rc::new(RefCell::new(listener))));
        id
    })
}

/// Remove the listener registered under `id`. Unknown ids are ignored.
pub fn remove_resize_listener(id: ListenerId) {
    REGISTRY.with(|reg| {
        reg.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
    });
}

/// Number of currently registered listeners.
pub fn listener_count() -> usize {
    REGISTRY.with(|reg| reg.borrow().listeners.len())
}

/// Notify all registered listeners of a new terminal size.
///
/// Updates the terminal size state first, then invokes listeners. Listeners
/// may add or remove registrations while the dispatch is in flight; a
/// listener removed mid-dispatch is not invoked.
pub fn dispatch_resize(width: u16, height: u16) {
    set_terminal_size(width, height);

    // Snapshot outside the registry borrow so listeners can mutate it.
    let snapshot: Vec<(ListenerId, ResizeListener)> =
        REGISTRY.with(|reg| reg.borrow().listeners.clone());

    for (id, listener) in snapshot {
        let still_registered =
            REGISTRY.with(|reg| reg.borrow().listeners.iter().any(|(lid, _)| *lid == id));
        if still_registered {
            (listener.borrow_mut())(width, height);
        }
    }
}

/// Clear all listeners and restore the default terminal size.
pub fn reset_resize_state() {
    REGISTRY.with(|reg| *reg.borrow_mut() = ListenerRegistry::new());
    set_terminal_size(80, 24);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_resize_state();
    }

    #[test]
    fn test_terminal_size() {
        setup();

        set_terminal_size(120, 40);
        assert_eq!(terminal_width(), 120);
        assert_eq!(terminal_height(), 40);
    }

    #[test]
    fn test_dispatch_updates_size_and_notifies() {
        setup();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        add_resize_listener(move |w, h| seen_clone.borrow_mut().push((w, h)));

        dispatch_resize(100, 30);
        assert_eq!(terminal_width(), 100);
        assert_eq!(*seen.borrow(), vec![(100, 30)]);
    }

    #[test]
    fn test_remove_is_identity_sensitive() {
        setup();

        let calls_a = Rc::new(Cell::new(0));
        let calls_b = Rc::new(Cell::new(0));
        let a = calls_a.clone();
        let b = calls_b.clone();

        let id_a = add_resize_listener(move |_, _| a.set(a.get() + 1));
        let _id_b = add_resize_listener(move |_, _| b.set(b.get() + 1));

        remove_resize_listener(id_a);
        dispatch_resize(90, 30);

        assert_eq!(calls_a.get(), 0);
        assert_eq!(calls_b.get(), 1);
        assert_eq!(listener_count(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_ignored() {
        setup();

        let id = add_resize_listener(|_, _| {});
        remove_resize_listener(id);
        // Second removal of the same id is a no-op.
        remove_resize_listener(id);
        assert_eq!(listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_during_dispatch() {
        setup();

        let second_calls = Rc::new(Cell::new(0));
        let second_calls_clone = second_calls.clone();

        // The first listener removes the second before it runs.
        let id_holder: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let holder = id_holder.clone();
        add_resize_listener(move |_, _| {
            if let Some(id) = holder.take() {
                remove_resize_listener(id);
            }
        });
        let id = add_resize_listener(move |_, _| second_calls_clone.set(second_calls_clone.get() + 1));
        id_holder.set(Some(id));

        dispatch_resize(50, 20);
        assert_eq!(second_calls.get(), 0);
        assert_eq!(listener_count(), 1);
    }

    #[test]
    fn test_listener_ids_are_unique() {
        setup();

        let id_a = add_resize_listener(|_, _| {});
        let id_b = add_resize_listener(|_, _| {});
        assert_ne!(id_a, id_b);
    }
}
