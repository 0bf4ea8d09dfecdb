//! The separator view and its layout.

use crate::env::DisplayMetrics;
use crate::geometry::{LinePath, Point, ProposalSize, Rect, Size};
use crate::layout::{Layout, StretchAxis, SubView};
use crate::stroke::StrokeParams;
use crate::style::{Style, Weight};

/// The axis along which the separator draws its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// A left-to-right line; the component fixes its own height (default).
    #[default]
    Horizontal,
    /// A top-to-bottom line; the component fixes its own width.
    Vertical,
}

impl Orientation {
    /// Builds the separator geometry for an allocated extent.
    ///
    /// The line runs from the origin to the opposite corner along this axis:
    /// horizontal spans the width at y = 0, vertical spans the height at
    /// x = 0. A zero extent along the drawn axis degenerates to a zero-length
    /// path.
    #[must_use]
    pub const fn line_in(self, size: Size) -> LinePath {
        match self {
            Self::Horizontal => LinePath::new(Point::zero(), Point::new(size.width, 0.0)),
            Self::Vertical => LinePath::new(Point::zero(), Point::new(0.0, size.height)),
        }
    }
}

/// A line that separates content.
///
/// The separator fills whatever space its container provides along its main
/// axis and fixes its own cross-axis extent to the resolved stroke
/// thickness. Stroke color comes from the host's ordinary foreground/tint
/// mechanism; the component does not special-case it.
///
/// # Layout Behavior
///
/// - **Horizontal:** spans the proposed width, height fixed to the thickness
/// - **Vertical:** spans the proposed height, width fixed to the thickness
///
/// # Examples
///
/// ```ignore
/// // A default hairline between two sections
/// vstack((
///     text("Section 1"),
///     separator(),
///     text("Section 2"),
/// ))
///
/// // A heavy dotted divider between columns
/// hstack((
///     sidebar(),
///     vertical_separator().style(Style::Dotted).weight(Weight::Heavy),
///     content(),
/// ))
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Separator {
    style: Style,
    weight: Weight,
    orientation: Orientation,
}

impl Separator {
    /// Creates a solid, regular-weight, horizontal separator.
    pub const fn new() -> Self {
        Self {
            style: Style::Solid,
            weight: Weight::Regular,
            orientation: Orientation::Horizontal,
        }
    }

    /// Sets the stroke style.
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the stroke weight.
    pub const fn weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the drawing axis.
    pub const fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Resolves the configuration against the current display metrics.
    ///
    /// Recomputed every render pass; nothing is cached between passes. The
    /// result carries everything the host needs: stroke parameters, the
    /// cross-axis size constraint, and the geometry for whatever extent the
    /// container ends up allocating.
    pub fn resolve(&self, metrics: &DisplayMetrics) -> ResolvedSeparator {
        let line_width = self.weight.line_width(metrics);
        ResolvedSeparator {
            orientation: self.orientation,
            stroke: self.style.stroke(line_width),
            cross_axis: line_width.max(1.0),
        }
    }
}

/// One render pass worth of resolved separator outputs.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct ResolvedSeparator {
    orientation: Orientation,
    stroke: StrokeParams,
    cross_axis: f32,
}

impl ResolvedSeparator {
    /// The drawing axis.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The stroke parameters to draw the line with.
    #[must_use]
    pub const fn stroke(&self) -> &StrokeParams {
        &self.stroke
    }

    /// The fixed extent perpendicular to the line, in points.
    ///
    /// Never below one point, so a sub-point `Thin` stroke still reserves a
    /// full layout slot and is drawn within it.
    #[must_use]
    pub const fn cross_axis(&self) -> f32 {
        self.cross_axis
    }

    /// Builds the line geometry for the allocated extent.
    #[must_use]
    pub const fn path_in(&self, size: Size) -> LinePath {
        self.orientation.line_in(size)
    }

    /// The layout node that sizes this separator within its container.
    pub fn layout(&self) -> SeparatorLayout {
        SeparatorLayout {
            orientation: self.orientation,
            cross_axis: self.cross_axis,
        }
    }
}

/// Layout implementation for a single separator.
///
/// Separators are leaves: they place no children, follow the parent's
/// proposal along their main axis, and report their resolved thickness on
/// the cross axis.
#[derive(Debug, Clone)]
pub struct SeparatorLayout {
    orientation: Orientation,
    cross_axis: f32,
}

impl Layout for SeparatorLayout {
    fn size_that_fits(&self, proposal: ProposalSize, _children: &[&dyn SubView]) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(proposal.width_or(0.0), self.cross_axis),
            Orientation::Vertical => Size::new(self.cross_axis, proposal.height_or(0.0)),
        }
    }

    fn place(&self, _bounds: Rect, _children: &[&dyn SubView]) -> Vec<Rect> {
        // Separator has no children to place
        Vec::new()
    }

    fn stretch_axis(&self) -> StretchAxis {
        match self.orientation {
            Orientation::Horizontal => StretchAxis::Horizontal,
            Orientation::Vertical => StretchAxis::Vertical,
        }
    }
}

/// Creates a horizontal separator with the default style and weight.
#[must_use]
pub const fn separator() -> Separator {
    Separator::new()
}

/// Creates a vertical separator with the default style and weight.
#[must_use]
pub const fn vertical_separator() -> Separator {
    Separator::new().orientation(Orientation::Vertical)
}
