//! Runtime - Component lifecycle driver and terminal event loop.
//!
//! This module is the host side of the lifecycle contract: it owns the
//! mounted component and calls `render`/`mounted`/`updated`/`unmounting` in
//! the order the component capability surface promises. All lifecycle calls
//! and resize dispatches happen on the one thread driving the loop.
//!
//! # Example
//!
//! ```ignore
//! use size_observer::runtime;
//!
//! let mut handle = runtime::mount(component)?;
//!
//! // Option 1: Run blocking event loop
//! runtime::run(&handle)?;
//!
//! // Option 2: Tick manually in your own loop
//! while runtime::tick(&handle)? {
//!     handle.update();
//! }
//!
//! handle.unmount();
//! ```

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::component::Component;
use crate::resize::{detect_terminal_size, dispatch_resize};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`] that owns the component for its lifetime.
pub struct MountHandle {
    component: Box<dyn Component>,
    running: Arc<AtomicBool>,
    torn_down: bool,
}

impl MountHandle {
    /// Re-render the component and run its update hook.
    ///
    /// Call after host state feeding the component has changed. Does nothing
    /// once the handle has stopped.
    pub fn update(&mut self) {
        if self.torn_down || !self.is_running() {
            return;
        }
        let _ = self.component.render();
        self.component.updated();
    }

    /// Run the unmount hook and stop the event loop.
    pub fn unmount(mut self) {
        self.teardown();
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the event loop (sets running to false).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.running.store(false, Ordering::SeqCst);
        self.component.unmounting();
        tracing::debug!(target: "size_observer", "unmounted {}", self.component.display_name());
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount a component: detect the terminal size, render once, and run the
/// mount hook. The returned handle drives updates and teardown.
pub fn mount(mut component: Box<dyn Component>) -> io::Result<MountHandle> {
    detect_terminal_size();

    tracing::debug!(target: "size_observer", "mounting {}", component.display_name());
    let _ = component.render();
    component.mounted();

    Ok(MountHandle {
        component,
        running: Arc::new(AtomicBool::new(true)),
        torn_down: false,
    })
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking).
///
/// Polls the terminal with a short timeout (~60fps). Resize events update the
/// terminal size state and notify resize listeners; Ctrl+C stops the loop.
///
/// Returns `Ok(false)` once the handle has stopped.
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if crossterm::event::poll(Duration::from_millis(16))? {
        match crossterm::event::read()? {
            Event::Resize(width, height) => dispatch_resize(width, height),
            Event::Key(key)
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                handle.stop();
            }
            _ => {}
        }
    }

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
///
/// Blocks until Ctrl+C is pressed or [`MountHandle::stop`] is called.
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {
        // Continue processing events
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Component for Probe {
        fn render(&mut self) -> Node {
            self.log.borrow_mut().push("render");
            Node::empty()
        }
        fn mounted(&mut self) {
            self.log.borrow_mut().push("mounted");
        }
        fn updated(&mut self) {
            self.log.borrow_mut().push("updated");
        }
        fn unmounting(&mut self) {
            self.log.borrow_mut().push("unmounting");
        }
    }

    fn probe() -> (Box<dyn Component>, Rc<RefCell<Vec<&'static str>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Box::new(Probe { log: log.clone() }), log)
    }

    #[test]
    fn test_mount_renders_then_mounts() {
        let (component, log) = probe();
        let handle = mount(component).unwrap();

        assert!(handle.is_running());
        assert_eq!(*log.borrow(), vec!["render", "mounted"]);
    }

    #[test]
    fn test_update_renders_then_updates() {
        let (component, log) = probe();
        let mut handle = mount(component).unwrap();

        handle.update();
        assert_eq!(*log.borrow(), vec!["render", "mounted", "render", "updated"]);
    }

    #[test]
    fn test_unmount_runs_hook_once() {
        let (component, log) = probe();
        let handle = mount(component).unwrap();

        handle.unmount();
        // Drop of the consumed handle must not run the hook a second time.
        assert_eq!(
            log.borrow().iter().filter(|s| **s == "unmounting").count(),
            1
        );
    }

    #[test]
    fn test_drop_tears_down() {
        let (component, log) = probe();
        {
            let _handle = mount(component).unwrap();
        }
        assert_eq!(*log.borrow(), vec!["render", "mounted", "unmounting"]);
    }

    #[test]
    fn test_update_after_stop_is_ignored() {
        let (component, log) = probe();
        let mut handle = mount(component).unwrap();

        handle.stop();
        handle.update();
        assert_eq!(*log.borrow(), vec!["render", "mounted"]);
    }

    #[test]
    fn test_tick_returns_false_when_stopped() {
        let (component, _log) = probe();
        let handle = mount(component).unwrap();

        handle.stop();
        assert!(!tick(&handle).unwrap());
    }
}
