//! Geometry primitives shared with the host layout pass.
//!
//! All values are **logical pixels** (points/dp). The host backend converts
//! to physical pixels using the display density it reports through
//! [`DisplayMetrics`](crate::env::DisplayMetrics); nothing in this crate
//! stores physical-pixel coordinates.

/// Absolute coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }
}

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension can be:
/// - `None` - "Tell me your ideal size" (unspecified)
/// - `Some(f32::INFINITY)` - "Tell me your maximum size"
/// - `Some(value)` - "I suggest you use this size"
///
/// Children are free to return any size; the proposal is just a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Width proposal: `None` = unspecified, `Some(f32)` = suggested width
    pub width: Option<f32>,
    /// Height proposal: `None` = unspecified, `Some(f32)` = suggested height
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Infinite proposal - asks for maximum size.
    pub const INFINITY: Self = Self {
        width: Some(f32::INFINITY),
        height: Some(f32::INFINITY),
    };

    /// Returns the width or a default value if unspecified.
    #[must_use]
    pub fn width_or(&self, default: f32) -> f32 {
        self.width.unwrap_or(default)
    }

    /// Returns the height or a default value if unspecified.
    #[must_use]
    pub fn height_or(&self, default: f32) -> f32 {
        self.height.unwrap_or(default)
    }
}

/// The two-point geometry of a separator stroke.
///
/// A separator is always a single straight segment from one corner of its
/// allocated rectangle to the opposite corner along the drawn axis. The host
/// strokes it with the [`StrokeParams`](crate::stroke::StrokeParams) resolved
/// alongside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePath {
    /// Start point of the segment.
    pub start: Point,
    /// End point of the segment.
    pub end: Point,
}

impl LinePath {
    /// Creates a segment between the two points.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns true if the segment has zero length.
    ///
    /// This happens when the allocated extent along the drawn axis is zero.
    /// Stroking a zero-length path is host-defined: backends may render
    /// nothing or a single capped point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Converts the segment into a [`kurbo::Line`] for rendering.
    #[must_use]
    pub fn to_kurbo(self) -> kurbo::Line {
        kurbo::Line::new(point_to_kurbo(self.start), point_to_kurbo(self.end))
    }
}

#[inline]
fn point_to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(f64::from(p.x), f64::from(p.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));

        assert_eq!(rect.origin(), Point::new(10.0, 20.0));
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);

        let from_size = Rect::from_size(Size::new(30.0, 40.0));
        assert_eq!(from_size.origin(), Point::zero());
        assert_eq!(from_size.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_proposal_size() {
        let proposal = ProposalSize::new(Some(100.0), None);

        assert_eq!(proposal.width_or(0.0), 100.0);
        assert_eq!(proposal.height_or(50.0), 50.0);

        assert_eq!(ProposalSize::UNSPECIFIED.width, None);
        assert!(ProposalSize::INFINITY.width_or(0.0).is_infinite());
    }

    #[test]
    fn test_line_path_to_kurbo() {
        let line = LinePath::new(Point::zero(), Point::new(120.0, 0.0));
        let kurbo_line = line.to_kurbo();

        assert_eq!(kurbo_line.p0, kurbo::Point::new(0.0, 0.0));
        assert_eq!(kurbo_line.p1, kurbo::Point::new(120.0, 0.0));
    }

    #[test]
    fn test_zero_length_line_is_empty() {
        let line = LinePath::new(Point::zero(), Point::zero());
        assert!(line.is_empty());

        let line = LinePath::new(Point::zero(), Point::new(0.0, 40.0));
        assert!(!line.is_empty());
    }
}
