//! Diagnostics - Warning sink for misuse conditions.
//!
//! Warnings go through `tracing` and are also recorded in a thread-local
//! buffer so tests can assert on them without installing a subscriber.

use std::cell::RefCell;

thread_local! {
    static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Emit a warning for a recoverable misuse condition.
pub fn warning(message: &str) {
    tracing::warn!(target: "size_observer", "{message}");
    WARNINGS.with(|w| w.borrow_mut().push(message.to_string()));
}

/// Number of warnings emitted on this thread.
pub fn warning_count() -> usize {
    WARNINGS.with(|w| w.borrow().len())
}

/// Drain and return all recorded warnings.
pub fn take_warnings() -> Vec<String> {
    WARNINGS.with(|w| w.borrow_mut().drain(..).collect())
}

/// Clear recorded warnings.
pub fn reset_warnings() {
    WARNINGS.with(|w| w.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_is_recorded() {
        reset_warnings();

        warning("something looks off");
        assert_eq!(warning_count(), 1);
        assert_eq!(take_warnings(), vec!["something looks off".to_string()]);
        assert_eq!(warning_count(), 0);
    }
}
