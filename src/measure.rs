//! Measurement - Box metrics for a rendered root via Taffy.
//!
//! A [`MeasureHandle`] is built from a render tree and owned by the observer
//! that created it; it is rebuilt on every render so it always points at the
//! current root. Measuring computes flex layout at the given viewport and
//! extracts the four box metrics:
//!
//! - `client_*` - the root's own laid-out box
//! - `scroll_*` - the root's content extent, floored at the client box
//!
//! Observation is shallow: only the root's box is extracted. Layout shifts in
//! descendants that leave the root box unchanged are invisible here.

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection as TaffyFlexDirection,
    LengthPercentage, NodeId, Overflow as TaffyOverflow, Point, Rect, Size, Style, TaffyTree,
};

use crate::node::{FlexDirection, Node, NodeStyle, Overflow};
use crate::types::{Dimension, SizeSnapshot};

// =============================================================================
// Style Conversion
// =============================================================================

fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
    }
}

fn to_taffy_overflow(overflow: Overflow) -> TaffyOverflow {
    match overflow {
        Overflow::Visible => TaffyOverflow::Visible,
        Overflow::Hidden => TaffyOverflow::Clip,
        Overflow::Scroll => TaffyOverflow::Scroll,
        // Auto acts like scroll when content overflows
        Overflow::Auto => TaffyOverflow::Scroll,
    }
}

/// Build a Taffy Style from a node's layout properties.
fn build_style(style: &NodeStyle) -> Style {
    let overflow = to_taffy_overflow(style.overflow);
    let padding = LengthPercentage::Length(style.padding as f32);
    let gap = LengthPercentage::Length(style.gap as f32);

    Style {
        display: Display::Flex,
        flex_direction: to_taffy_flex_direction(style.flex_direction),
        overflow: Point {
            x: overflow,
            y: overflow,
        },
        size: Size {
            width: to_taffy_dimension(style.width),
            height: to_taffy_dimension(style.height),
        },
        min_size: Size {
            width: to_taffy_dimension(style.min_width),
            height: to_taffy_dimension(style.min_height),
        },
        max_size: Size {
            width: to_taffy_dimension(style.max_width),
            height: to_taffy_dimension(style.max_height),
        },
        flex_grow: style.grow,
        flex_shrink: style.shrink,
        padding: Rect {
            left: padding,
            right: padding,
            top: padding,
            bottom: padding,
        },
        gap: Size {
            width: gap,
            height: gap,
        },
        ..Style::default()
    }
}

// =============================================================================
// Measure Handle
// =============================================================================

/// Measurement handle for one rendered root.
///
/// Owns the Taffy tree built from the render output. Re-acquired on every
/// render by the observer; measuring never mutates the render tree itself.
pub struct MeasureHandle {
    tree: TaffyTree,
    root: Option<NodeId>,
}

impl MeasureHandle {
    /// Build a handle from a rendered root node.
    pub fn attach(node: &Node) -> Self {
        let mut tree = TaffyTree::new();
        let root = build_subtree(&mut tree, node);
        Self { tree, root }
    }

    /// Compute layout at the given viewport and read the root's box metrics.
    pub fn measure(&mut self, viewport_width: u16, viewport_height: u16) -> SizeSnapshot {
        let Some(root) = self.root else {
            return SizeSnapshot::default();
        };

        let available = Size {
            width: AvailableSpace::Definite(viewport_width as f32),
            height: AvailableSpace::Definite(viewport_height as f32),
        };
        let _ = self.tree.compute_layout(root, available);

        match self.tree.layout(root) {
            Ok(layout) => {
                let client_width = layout.size.width.round() as u16;
                let client_height = layout.size.height.round() as u16;
                let scroll_width = (layout.content_size.width.round() as u16).max(client_width);
                let scroll_height = (layout.content_size.height.round() as u16).max(client_height);
                SizeSnapshot::new(client_height, client_width, scroll_height, scroll_width)
            }
            Err(_) => SizeSnapshot::default(),
        }
    }
}

/// Recursively mirror a render tree into Taffy nodes.
fn build_subtree(tree: &mut TaffyTree, node: &Node) -> Option<NodeId> {
    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        if let Some(id) = build_subtree(tree, child) {
            children.push(id);
        }
    }
    tree.new_with_children(build_style(&node.style), &children).ok()
}

// =============================================================================
// Tests
// =============================================================================
