//! Size observer - Decorator that reports box-metric changes of a component.
//!
//! [`size_observer`] wraps a renderable unit and produces a component that
//! renders exactly what the wrapped unit renders, while reporting the rendered
//! root's box metrics through the `size_change` callback: once on mount, and
//! again after any update or terminal resize in which a metric changed (or
//! always, with [`ObserverOptions::no_comparison`]).
//!
//! The enhancement composes with the wrapped component's own lifecycle: base
//! hooks run first, measurement second. Comparison is always against the
//! previously reported snapshot, not the initial one.
//!
//! # Example
//!
//! ```ignore
//! use size_observer::{size_observer, Node, NodeStyle, ObserverOptions, Renderable, runtime};
//!
//! let wrapped = size_observer(
//!     Renderable::function("Panel", || {
//!         Node::new(NodeStyle { width: 40.into(), height: 10.into(), ..Default::default() })
//!     }),
//!     Box::new(|snapshot| println!("panel is now {snapshot:?}")),
//!     ObserverOptions::default(),
//! );
//!
//! let handle = runtime::mount(wrapped)?;
//! ```

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use crate::component::{Component, FnComponent, NullComponent, Renderable};
use crate::measure::MeasureHandle;
use crate::node::Node;
use crate::resize::{
    self, add_resize_listener, remove_resize_listener, terminal_height, terminal_width,
};
use crate::types::{ObserverOptions, SizeChange, SizeSnapshot};
use crate::utils;

// =============================================================================
// Decorator
// =============================================================================

/// Wrap a renderable unit so `size_change` is called with its box metrics.
///
/// A bare render function is lifted into a minimal stateful wrapper first,
/// preserving its display name. An input that is neither a render function
/// nor a stateful component degrades to a component that renders nothing:
/// one warning is emitted and no measurement ever happens. Misuse never
/// panics and never returns an error.
pub fn size_observer(
    component: Renderable,
    size_change: SizeChange,
    options: ObserverOptions,
) -> Box<dyn Component> {
    let base: Box<dyn Component> = match component {
        Renderable::Function(f) => Box::new(FnComponent::from(f)),
        Renderable::Stateful(c) => c,
        Renderable::Other(_) => {
            utils::warning(
                "size_observer called with neither a render function nor a stateful component",
            );
            return Box::new(NullComponent);
        }
    };

    Box::new(SizeObserver::new(base, size_change, options))
}

// =============================================================================
// Observer State
// =============================================================================

/// Instance state shared with the resize listener.
struct Inner {
    handle: Option<MeasureHandle>,
    previous: Option<SizeSnapshot>,
    size_change: SizeChange,
    options: ObserverOptions,
}

impl Inner {
    fn measure_at(&mut self, width: u16, height: u16) -> Option<SizeSnapshot> {
        self.handle.as_mut().map(|h| h.measure(width, height))
    }
}

/// Measure at the given viewport and report when changed (or unconditionally
/// with `no_comparison`). Shared by the update hook and the resize listener.
fn size_may_have_changed(inner: &Rc<RefCell<Inner>>, width: u16, height: u16) {
    let snapshot = {
        let mut state = inner.borrow_mut();
        let Some(snapshot) = state.measure_at(width, height) else {
            return;
        };
        let changed = match state.previous {
            Some(previous) => !snapshot.changes_from(&previous).is_empty(),
            None => true,
        };
        if !state.options.no_comparison && !changed {
            return;
        }
        snapshot
    };
    report(inner, snapshot);
}

/// Record the snapshot and invoke the caller's callback.
fn report(inner: &Rc<RefCell<Inner>>, snapshot: SizeSnapshot) {
    // The borrow is released before entering user code so the callback can
    // drive another update cycle on this same instance.
    let mut callback = {
        let mut state = inner.borrow_mut();
        state.previous = Some(snapshot);
        mem::replace(&mut state.size_change, Box::new(|_| {}))
    };
    callback(snapshot);
    inner.borrow_mut().size_change = callback;
}

// =============================================================================
// Size Observer Component
// =============================================================================

/// The enhanced component produced by [`size_observer`].
///
/// Owns the wrapped component and forwards every lifecycle call to it before
/// running the measurement logic. Per instance: exactly one report on mount,
/// then at most one per update or resize, gated by comparison.
pub struct SizeObserver {
    base: Box<dyn Component>,
    inner: Rc<RefCell<Inner>>,
    listener: Option<resize::ListenerId>,
    name: String,
}

impl SizeObserver {
    pub fn new(base: Box<dyn Component>, size_change: SizeChange, options: ObserverOptions) -> Self {
        let name = format!("SizeObserver({})", base.display_name());
        Self {
            base,
            inner: Rc::new(RefCell::new(Inner {
                handle: None,
                previous: None,
                size_change,
                options,
            })),
            listener: None,
            name,
        }
    }
}

impl Component for SizeObserver {
    fn render(&mut self) -> Node {
        let tree = self.base.render();

        // Re-acquire the measurement handle from the fresh root. The tree
        // itself passes through untouched.
        self.inner.borrow_mut().handle = Some(MeasureHandle::attach(&tree));

        tree
    }

    fn mounted(&mut self) {
        self.base.mounted();

        // First report is unconditional: the caller needs the initial size.
        let snapshot = self
            .inner
            .borrow_mut()
            .measure_at(terminal_width(), terminal_height());
        if let Some(snapshot) = snapshot {
            report(&self.inner, snapshot);
        }

        let inner = self.inner.clone();
        self.listener = Some(add_resize_listener(move |width, height| {
            size_may_have_changed(&inner, width, height);
        }));
    }

    fn updated(&mut self) {
        self.base.updated();
        size_may_have_changed(&self.inner, terminal_width(), terminal_height());
    }

    fn unmounting(&mut self) {
        self.base.unmounting();

        // Remove exactly the registration made at mount.
        if let Some(id) = self.listener.take() {
            remove_resize_listener(id);
        }
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Tests
// =============================================================================
