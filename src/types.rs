//! Core types - Dimensions, snapshots, and observer configuration.

use bitflags::bitflags;

// =============================================================================
// Dimension
// =============================================================================

/// Sizing unit for component dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Auto-size based on content.
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<u16> for Dimension {
    fn from(cells: u16) -> Self {
        Self::Cells(cells)
    }
}

// =============================================================================
// Size Snapshot
// =============================================================================

/// One captured set of box metrics for a rendered root.
///
/// `client_*` is the element's own laid-out box, `scroll_*` is the total
/// content extent including overflow. `scroll_*` is never smaller than
/// `client_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeSnapshot {
    pub client_height: u16,
    pub client_width: u16,
    pub scroll_height: u16,
    pub scroll_width: u16,
}

bitflags! {
    /// Which of the four box metrics differ between two snapshots.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SizeDirty: u8 {
        const CLIENT_HEIGHT = 1 << 0;
        const CLIENT_WIDTH = 1 << 1;
        const SCROLL_HEIGHT = 1 << 2;
        const SCROLL_WIDTH = 1 << 3;
    }
}

impl SizeSnapshot {
    pub fn new(client_height: u16, client_width: u16, scroll_height: u16, scroll_width: u16) -> Self {
        Self {
            client_height,
            client_width,
            scroll_height,
            scroll_width,
        }
    }

    /// Compare against a previous snapshot and flag every metric that moved.
    pub fn changes_from(&self, previous: &SizeSnapshot) -> SizeDirty {
        let mut dirty = SizeDirty::empty();
        if self.client_height != previous.client_height {
            dirty |= SizeDirty::CLIENT_HEIGHT;
        }
        if self.client_width != previous.client_width {
            dirty |= SizeDirty::CLIENT_WIDTH;
        }
        if self.scroll_height != previous.scroll_height {
            dirty |= SizeDirty::SCROLL_HEIGHT;
        }
        if self.scroll_width != previous.scroll_width {
            dirty |= SizeDirty::SCROLL_WIDTH;
        }
        dirty
    }
}

// =============================================================================
// Observer Configuration
// =============================================================================

/// Configuration for a size observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObserverOptions {
    /// Report every measurement instead of only changed ones.
    pub no_comparison: bool,
}

/// Callback invoked with each reported snapshot.
pub type SizeChange = Box<dyn FnMut(SizeSnapshot)>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_from_equal() {
        let a = SizeSnapshot::new(10, 20, 10, 20);
        let b = SizeSnapshot::new(10, 20, 10, 20);
        assert!(a.changes_from(&b).is_empty());
    }

    #[test]
    fn test_changes_from_single_metric() {
        let prev = SizeSnapshot::new(10, 20, 10, 20);
        let next = SizeSnapshot::new(10, 20, 15, 20);
        assert_eq!(next.changes_from(&prev), SizeDirty::SCROLL_HEIGHT);
    }

    #[test]
    fn test_changes_from_all_metrics() {
        let prev = SizeSnapshot::new(1, 2, 3, 4);
        let next = SizeSnapshot::new(5, 6, 7, 8);
        assert_eq!(next.changes_from(&prev), SizeDirty::all());
    }

    #[test]
    fn test_dimension_from_cells() {
        assert_eq!(Dimension::from(40), Dimension::Cells(40));
        assert_eq!(Dimension::default(), Dimension::Auto);
    }

    #[test]
    fn test_default_options() {
        let options = ObserverOptions::default();
        assert!(!options.no_comparison);
    }
}
