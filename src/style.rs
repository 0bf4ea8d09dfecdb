//! Stroke style and weight tiers, and their resolution into concrete
//! stroke parameters.
//!
//! Both enums are closed sets resolved by exhaustive matches; there is no
//! dynamic dispatch and no error path. Resolution happens once per render
//! pass from the current [`DisplayMetrics`](crate::env::DisplayMetrics).

use crate::env::DisplayMetrics;
use crate::stroke::{LineCap, StrokeParams};

/// Dash and gap length as a multiple of the line width for [`Style::Dashed`].
const DASH_FACTOR: f32 = 5.0;

/// On-segment length for [`Style::Dotted`], in points.
///
/// Deliberately near zero but positive: combined with a round cap, each
/// segment renders as a circular dot of diameter roughly the line width.
const DOT_LENGTH: f32 = 0.1;

/// Dot spacing as a multiple of the line width for [`Style::Dotted`].
const DOT_GAP_FACTOR: f32 = 3.0;

/// Stroke thickness bases in points at the default size category.
const REGULAR_BASE: f32 = 1.0;
const BOLD_BASE: f32 = 2.0;
const HEAVY_BASE: f32 = 3.0;

/// How the separator stroke is dashed, if at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    /// A continuous line (default).
    #[default]
    Solid,
    /// Flat dashes with gaps of equal length.
    Dashed,
    /// Round dots spaced apart.
    Dotted,
}

impl Style {
    /// The cap treatment for this style.
    ///
    /// Only [`Style::Dotted`] uses a round cap; the cap is what turns its
    /// near-zero dash segments into visible dots.
    #[must_use]
    pub const fn line_cap(self) -> LineCap {
        match self {
            Self::Solid | Self::Dashed => LineCap::Butt,
            Self::Dotted => LineCap::Round,
        }
    }

    /// The dash pattern for this style at the given stroke width.
    ///
    /// Returns an empty pattern for [`Style::Solid`]. A single-element
    /// pattern means dash and gap share that length.
    #[must_use]
    pub fn dash_pattern(self, line_width: f32) -> Vec<f32> {
        match self {
            Self::Solid => Vec::new(),
            Self::Dashed => vec![line_width * DASH_FACTOR],
            Self::Dotted => vec![DOT_LENGTH, line_width * DOT_GAP_FACTOR],
        }
    }

    /// Resolves this style into full stroke parameters at the given width.
    #[must_use]
    pub fn stroke(self, line_width: f32) -> StrokeParams {
        StrokeParams {
            line_width,
            line_cap: self.line_cap(),
            dash_pattern: self.dash_pattern(line_width),
        }
    }
}

/// How thick the separator stroke is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    /// The thinnest visible line: exactly one physical pixel when the scaled
    /// regular base does not exceed the display scale.
    Thin,
    /// One point at the default size category (default).
    #[default]
    Regular,
    /// Two points at the default size category.
    Bold,
    /// Three points at the default size category.
    Heavy,
}

impl Weight {
    /// Resolves this weight into a stroke thickness in points.
    ///
    /// `Regular`, `Bold`, and `Heavy` scale with the user's text-size
    /// category. `Thin` divides the display scale back out so the stroke is
    /// one physical pixel regardless of density, never thinner than that
    /// even at large accessibility sizes.
    #[must_use]
    pub fn line_width(self, metrics: &DisplayMetrics) -> f32 {
        let factor = metrics.size_category.scale_factor();
        match self {
            Self::Thin => (REGULAR_BASE * factor).max(1.0) / metrics.scale,
            Self::Regular => REGULAR_BASE * factor,
            Self::Bold => BOLD_BASE * factor,
            Self::Heavy => HEAVY_BASE * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ContentSizeCategory;

    const ALL_STYLES: [Style; 3] = [Style::Solid, Style::Dashed, Style::Dotted];

    #[test]
    fn test_pattern_empty_iff_solid() {
        for style in ALL_STYLES {
            assert_eq!(
                style.dash_pattern(1.0).is_empty(),
                style == Style::Solid,
                "{style:?}"
            );
        }
    }

    #[test]
    fn test_round_cap_iff_dotted() {
        for style in ALL_STYLES {
            assert_eq!(
                style.line_cap() == LineCap::Round,
                style == Style::Dotted,
                "{style:?}"
            );
        }
    }

    #[test]
    fn test_dash_segments_are_positive() {
        for style in ALL_STYLES {
            for segment in style.dash_pattern(0.25) {
                assert!(segment > 0.0, "{style:?} produced segment {segment}");
            }
        }
    }

    #[test]
    fn test_dash_and_gap_scale_with_width() {
        assert_eq!(Style::Dashed.dash_pattern(1.0), vec![5.0]);
        assert_eq!(Style::Dashed.dash_pattern(3.0), vec![15.0]);
        assert_eq!(Style::Dotted.dash_pattern(2.0), vec![0.1, 6.0]);
    }

    #[test]
    fn test_weight_bases_at_default_category() {
        let metrics = DisplayMetrics::default();
        assert_eq!(Weight::Regular.line_width(&metrics), 1.0);
        assert_eq!(Weight::Bold.line_width(&metrics), 2.0);
        assert_eq!(Weight::Heavy.line_width(&metrics), 3.0);
    }

    #[test]
    fn test_weights_scale_with_size_category() {
        let metrics = DisplayMetrics::new(1.0, ContentSizeCategory::AccessibilityMedium);
        let factor = ContentSizeCategory::AccessibilityMedium.scale_factor();

        assert_eq!(Weight::Regular.line_width(&metrics), factor);
        assert_eq!(Weight::Bold.line_width(&metrics), 2.0 * factor);
        assert_eq!(Weight::Heavy.line_width(&metrics), 3.0 * factor);
    }

    #[test]
    fn test_thin_is_one_physical_pixel() {
        for scale in [1.0, 2.0, 3.0] {
            let metrics = DisplayMetrics::with_scale(scale);
            let width = Weight::Thin.line_width(&metrics);
            assert!(
                (width * scale - 1.0).abs() < 1e-6,
                "thin at scale {scale} resolved to {width}"
            );
        }
    }

    #[test]
    fn test_thin_floor_holds_under_accessibility_scaling() {
        // The floor guarantees at least one physical pixel even if the
        // scaled base were to drop below a point; with a base above one
        // point the thin width simply tracks it.
        for category in [
            ContentSizeCategory::ExtraSmall,
            ContentSizeCategory::Large,
            ContentSizeCategory::AccessibilityExtraExtraExtraLarge,
        ] {
            for scale in [1.0, 2.0, 3.0] {
                let metrics = DisplayMetrics::new(scale, category);
                let width = Weight::Thin.line_width(&metrics);
                assert!(
                    width * scale >= 1.0 - 1e-6,
                    "thin at {category:?}/{scale} resolved below one pixel: {width}"
                );
            }
        }
    }

    #[test]
    fn test_resolvers_are_idempotent() {
        let metrics = DisplayMetrics::new(2.0, ContentSizeCategory::ExtraLarge);
        assert_eq!(
            Weight::Bold.line_width(&metrics),
            Weight::Bold.line_width(&metrics)
        );
        assert_eq!(Style::Dotted.stroke(2.0), Style::Dotted.stroke(2.0));
    }
}
