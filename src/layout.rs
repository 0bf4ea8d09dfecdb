//! The layout seam between this component and the host toolkit.
//!
//! The host's layout engine drives a two-phase negotiation: it proposes a
//! size ([`Layout::size_that_fits`]) and then assigns final bounds
//! ([`Layout::place`]). The separator only participates in the first phase -
//! it is a leaf and places no children - but the full contract is exposed so
//! hosts can drive it exactly like any other layout node.

use crate::geometry::{ProposalSize, Rect, Size};

/// Specifies which axis (or axes) a view wants to stretch to fill available
/// space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StretchAxis {
    /// No stretching - view uses its intrinsic size
    #[default]
    None,
    /// Stretch horizontally only (expand width, use intrinsic height)
    Horizontal,
    /// Stretch vertically only (expand height, use intrinsic width)
    Vertical,
    /// Stretch in both directions (expand width and height)
    Both,
}

impl StretchAxis {
    /// Returns true if this stretches horizontally.
    #[must_use]
    pub const fn stretches_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Returns true if this stretches vertically.
    #[must_use]
    pub const fn stretches_vertical(&self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    /// Returns true if this stretches in any direction.
    #[must_use]
    pub const fn stretches_any(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A proxy for querying child view sizes during layout.
///
/// All methods are pure (take `&self`) with no side effects; containers may
/// probe a child several times with different proposals before settling on a
/// final size.
pub trait SubView {
    /// Query the child's size for a given proposal.
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;

    /// Which axis (or axes) this view stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis;

    /// Layout priority for space distribution.
    ///
    /// Higher priority views are measured first and get space preference.
    fn priority(&self) -> i32;
}

/// A layout algorithm for arranging child views.
///
/// # Two-Phase Layout
///
/// 1. **Sizing** ([`size_that_fits`](Self::size_that_fits)): Determine how
///    big this node should be given a proposal
/// 2. **Placement** ([`place`](Self::place)): Position children within the
///    final bounds
pub trait Layout: core::fmt::Debug {
    /// Calculate the size this layout wants given a proposal.
    ///
    /// # Arguments
    ///
    /// * `proposal` - The size proposed by the parent
    /// * `children` - References to child proxies for size queries
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Place children within the given bounds.
    ///
    /// Called after sizing is complete. Returns a rect for each child
    /// specifying its position and size within `bounds`.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;

    /// Which axis this node stretches to fill available space.
    ///
    /// Parent containers use this to decide whether to expand the node
    /// beyond its intrinsic size.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stretch_axis_predicates() {
        assert!(StretchAxis::Horizontal.stretches_horizontal());
        assert!(!StretchAxis::Horizontal.stretches_vertical());
        assert!(StretchAxis::Vertical.stretches_vertical());
        assert!(StretchAxis::Both.stretches_horizontal());
        assert!(StretchAxis::Both.stretches_vertical());
        assert!(!StretchAxis::None.stretches_any());
        assert!(StretchAxis::Vertical.stretches_any());
    }
}
