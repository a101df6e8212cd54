//! Renderable units - The component capability surface.
//!
//! A renderable unit is either a bare render function or a stateful component.
//! [`Renderable`] is the tagged form the decorator consumes: classification of
//! the input shape happens exactly once, at construction, so the observer
//! never has to re-probe what it wrapped.
//!
//! # Example
//!
//! ```ignore
//! use size_observer::component::{Renderable, RenderFn};
//! use size_observer::node::{Node, NodeStyle};
//!
//! let renderable = Renderable::function("Banner", || {
//!     Node::new(NodeStyle { width: 40.into(), height: 3.into(), ..Default::default() })
//! });
//! ```

use std::any::Any;

use crate::node::Node;

// =============================================================================
// Component Trait
// =============================================================================

/// A stateful renderable unit with lifecycle hooks.
///
/// `render` is the only required method. The lifecycle hooks default to
/// no-ops; the host runtime calls `mounted` after the first render, `updated`
/// after every subsequent render, and `unmounting` before teardown.
pub trait Component {
    /// Produce the render tree for the current state.
    fn render(&mut self) -> Node;

    /// Called once, after the first render.
    fn mounted(&mut self) {}

    /// Called after every re-render.
    fn updated(&mut self) {}

    /// Called before the component is torn down.
    fn unmounting(&mut self) {}

    /// Name used for debugging and identification.
    fn display_name(&self) -> &str {
        "Component"
    }
}

// =============================================================================
// Render Functions
// =============================================================================

/// A named bare render function.
///
/// Functions carry no state and no lifecycle; the name is kept explicitly
/// because Rust closures have none to introspect.
pub struct RenderFn {
    name: String,
    render: Box<dyn FnMut() -> Node>,
}

impl RenderFn {
    pub fn new(name: impl Into<String>, render: impl FnMut() -> Node + 'static) -> Self {
        Self {
            name: name.into(),
            render: Box::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Minimal stateful lift of a bare render function.
///
/// Its sole job is to render the function's output; the original display
/// name is preserved.
pub struct FnComponent {
    name: String,
    render: Box<dyn FnMut() -> Node>,
}

impl From<RenderFn> for FnComponent {
    fn from(f: RenderFn) -> Self {
        Self {
            name: f.name,
            render: f.render,
        }
    }
}

impl Component for FnComponent {
    fn render(&mut self) -> Node {
        (self.render)()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Null Component
// =============================================================================

/// Renders nothing. Substituted when a decorator input is not renderable.
pub struct NullComponent;

impl Component for NullComponent {
    fn render(&mut self) -> Node {
        Node::empty()
    }

    fn display_name(&self) -> &str {
        "NullComponent"
    }
}

// =============================================================================
// Renderable
// =============================================================================

/// Tagged decorator input: a render function, a stateful component, or an
/// unrecognized value.
pub enum Renderable {
    Function(RenderFn),
    Stateful(Box<dyn Component>),
    /// Anything that is neither shape. Carried so the decorator can degrade
    /// to a no-op instead of panicking.
    Other(Box<dyn Any>),
}

impl Renderable {
    /// Wrap a bare render function.
    pub fn function(name: impl Into<String>, render: impl FnMut() -> Node + 'static) -> Self {
        Self::Function(RenderFn::new(name, render))
    }

    /// Wrap a stateful component.
    pub fn stateful(component: impl Component + 'static) -> Self {
        Self::Stateful(Box::new(component))
    }

    /// Classify a dynamically-typed value.
    ///
    /// Recognizes a [`RenderFn`] or a boxed `dyn Component`; everything else
    /// becomes [`Renderable::Other`].
    pub fn from_any(value: Box<dyn Any>) -> Self {
        let value = match value.downcast::<RenderFn>() {
            Ok(f) => return Self::Function(*f),
            Err(other) => other,
        };
        match value.downcast::<Box<dyn Component>>() {
            Ok(c) => Self::Stateful(*c),
            Err(other) => Self::Other(other),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
