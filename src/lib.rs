//! # size-observer
//!
//! Size-change observation for terminal UI components.
//!
//! Wraps a renderable component so that a callback receives the wrapped
//! root's box metrics whenever they change: once on mount, then after any
//! update or terminal resize that moves one of the four metrics (content
//! height/width, scrollable height/width).
//!
//! ## Architecture
//!
//! ```text
//! Renderable ──▶ size_observer ──▶ SizeObserver ──▶ sizeChange callback
//!                (classify/lift)     │
//!                                    ├─ render: base tree + MeasureHandle
//!                                    ├─ mount: initial report + resize listener
//!                                    ├─ update/resize: measure, compare, report
//!                                    └─ unmount: listener released
//! ```
//!
//! The observer composes with the wrapped component: base lifecycle hooks
//! always run, and the rendered tree passes through unmodified. Measurement
//! is shallow - only the root's own box is observed.
//!
//! ## Modules
//!
//! - [`types`] - Snapshots, dirty flags, observer options
//! - [`node`] - Render tree produced by components
//! - [`component`] - Renderable units and lifecycle trait
//! - [`measure`] - Box-metric measurement (Taffy flexbox)
//! - [`resize`] - Terminal size state and resize listener registry
//! - [`observer`] - The size observer decorator
//! - [`runtime`] - Mount/update/unmount driver and event loop

pub mod component;
pub mod measure;
pub mod node;
pub mod observer;
pub mod resize;
pub mod runtime;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use types::{Dimension, ObserverOptions, SizeChange, SizeDirty, SizeSnapshot};

pub use node::{FlexDirection, Node, NodeStyle, Overflow};

pub use component::{Component, FnComponent, NullComponent, RenderFn, Renderable};

pub use measure::MeasureHandle;

pub use observer::{SizeObserver, size_observer};

pub use resize::{
    ListenerId, add_resize_listener, detect_terminal_size, dispatch_resize,
    remove_resize_listener, set_terminal_size, terminal_height, terminal_width,
};

pub use runtime::{MountHandle, mount, run, tick};
