//! A separator line primitive for declarative UI toolkits.
//!
//! This crate provides one leaf component: a stroked line that divides
//! content, configurable by style (solid, dashed, dotted), weight (thin,
//! regular, bold, heavy), and orientation (horizontal, vertical). The
//! separator fills its container along the drawn axis and fixes its own
//! size perpendicular to it.
//!
//! The host toolkit stays in charge of everything else: it supplies the
//! current [`DisplayMetrics`] (pixel density and accessibility text size),
//! drives the [`Layout`] seam during its layout pass, and strokes the
//! resolved geometry with its own color machinery. Resolution is a pure
//! function of the configuration and the metrics, recomputed every render.
//!
//! # Logical Pixels (Points)
//!
//! All values are logical pixels (points/dp). The one place physical pixels
//! matter is [`Weight::Thin`], which divides the display scale back out so
//! the thinnest line is exactly one device pixel on any display.
//!
//! # Example
//!
//! ```
//! use hairline::{DisplayMetrics, Style, Weight, separator};
//!
//! let metrics = DisplayMetrics::with_scale(2.0);
//! let resolved = separator()
//!     .style(Style::Dashed)
//!     .weight(Weight::Bold)
//!     .resolve(&metrics);
//!
//! // Stroke the path the host allocates, with these parameters:
//! let stroke = resolved.stroke().to_kurbo();
//! assert_eq!(stroke.width, 2.0);
//! ```

pub mod env;
pub mod geometry;
pub mod layout;
pub mod separator;
pub mod stroke;
pub mod style;

pub use env::{ContentSizeCategory, DisplayMetrics};
pub use geometry::{LinePath, Point, ProposalSize, Rect, Size};
pub use layout::{Layout, StretchAxis, SubView};
pub use separator::{
    Orientation, ResolvedSeparator, Separator, SeparatorLayout, separator, vertical_separator,
};
pub use stroke::{LineCap, StrokeParams};
pub use style::{Style, Weight};
