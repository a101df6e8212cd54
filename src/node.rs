//! Render tree - The output of a renderable unit.
//!
//! A [`Node`] is a plain value tree: a layout style plus children. Components
//! produce one root `Node` per render; the observer measures that root and
//! passes the tree through unmodified.

use crate::types::Dimension;

// =============================================================================
// Layout Enums
// =============================================================================

/// Main axis direction for flex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
    ColumnReverse,
    RowReverse,
}

/// Overflow behavior for content larger than the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    /// Acts like scroll when content overflows.
    Auto,
}

// =============================================================================
// Node Style
// =============================================================================

/// Layout properties of a node.
///
/// A subset of flexbox sufficient for box measurement: dimensions, direction,
/// overflow, spacing, and the flex item factors.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,
    pub flex_direction: FlexDirection,
    pub overflow: Overflow,
    pub grow: f32,
    pub shrink: f32,
    pub padding: u16,
    pub gap: u16,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Auto,
            min_height: Dimension::Auto,
            max_width: Dimension::Auto,
            max_height: Dimension::Auto,
            flex_direction: FlexDirection::Column,
            overflow: Overflow::Visible,
            grow: 0.0,
            shrink: 1.0,
            padding: 0,
            gap: 0,
        }
    }
}

// =============================================================================
// Node
// =============================================================================

/// One element of a render tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub style: NodeStyle,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node with the given style.
    pub fn new(style: NodeStyle) -> Self {
        Self {
            style,
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn with_children(style: NodeStyle, children: Vec<Node>) -> Self {
        Self { style, children }
    }

    /// A node that renders nothing and measures zero.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style child append.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = NodeStyle::default();
        assert_eq!(style.width, Dimension::Auto);
        assert_eq!(style.flex_direction, FlexDirection::Column);
        assert_eq!(style.overflow, Overflow::Visible);
        assert_eq!(style.shrink, 1.0);
    }

    #[test]
    fn test_empty_node() {
        let node = Node::empty();
        assert!(node.children.is_empty());
        assert_eq!(node.style, NodeStyle::default());
    }

    #[test]
    fn test_child_builder() {
        let node = Node::new(NodeStyle::default())
            .child(Node::empty())
            .child(Node::empty());
        assert_eq!(node.children.len(), 2);
    }
}
