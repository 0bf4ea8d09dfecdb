//! Ambient display inputs consumed by the separator.
//!
//! The host environment owns these values; the component only reads them.
//! They are passed explicitly to the resolvers rather than looked up from an
//! implicit environment, which keeps every resolver a pure function of its
//! arguments and trivially testable.

/// The user's accessibility text-size setting.
///
/// An ordinal setting that scales text and derived metrics for readability.
/// The separator uses it to grow the `Regular`/`Bold`/`Heavy` stroke bases
/// together with the surrounding text, so a heavier divider stays visually
/// proportionate at large accessibility sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentSizeCategory {
    /// The smallest standard size.
    ExtraSmall,
    /// A small standard size.
    Small,
    /// A slightly reduced standard size.
    Medium,
    /// The default size.
    #[default]
    Large,
    /// A slightly enlarged standard size.
    ExtraLarge,
    /// A large standard size.
    ExtraExtraLarge,
    /// The largest standard size.
    ExtraExtraExtraLarge,
    /// The smallest accessibility size.
    AccessibilityMedium,
    /// A large accessibility size.
    AccessibilityLarge,
    /// A larger accessibility size.
    AccessibilityExtraLarge,
    /// A very large accessibility size.
    AccessibilityExtraExtraLarge,
    /// The largest accessibility size.
    AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    /// The metric multiplier for this category, 1.0 at [`Self::Large`].
    ///
    /// Strictly increasing across the ladder so that derived metrics scale
    /// monotonically with the user's setting.
    #[must_use]
    pub const fn scale_factor(self) -> f32 {
        match self {
            Self::ExtraSmall => 0.82,
            Self::Small => 0.88,
            Self::Medium => 0.94,
            Self::Large => 1.0,
            Self::ExtraLarge => 1.12,
            Self::ExtraExtraLarge => 1.24,
            Self::ExtraExtraExtraLarge => 1.35,
            Self::AccessibilityMedium => 1.6,
            Self::AccessibilityLarge => 1.9,
            Self::AccessibilityExtraLarge => 2.35,
            Self::AccessibilityExtraExtraLarge => 2.75,
            Self::AccessibilityExtraExtraExtraLarge => 3.1,
        }
    }

    /// Returns true for the five accessibility sizes.
    #[must_use]
    pub const fn is_accessibility(self) -> bool {
        matches!(
            self,
            Self::AccessibilityMedium
                | Self::AccessibilityLarge
                | Self::AccessibilityExtraLarge
                | Self::AccessibilityExtraExtraLarge
                | Self::AccessibilityExtraExtraExtraLarge
        )
    }
}

/// Display characteristics reported by the host for the current output.
///
/// `scale` is the ratio of physical pixels to logical points (1.0 on a
/// standard display, 2.0-3.0 on high-density displays). The host guarantees
/// it is positive; backends derive it from the platform (`UIScreen.scale`,
/// `displayMetrics.density`, and so on).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Physical pixels per logical point, > 0.
    pub scale: f32,
    /// The user's current text-size category.
    pub size_category: ContentSizeCategory,
}

impl DisplayMetrics {
    /// Creates metrics with the given pixel scale and size category.
    #[must_use]
    pub const fn new(scale: f32, size_category: ContentSizeCategory) -> Self {
        Self {
            scale,
            size_category,
        }
    }

    /// Creates metrics for the given pixel scale at the default size
    /// category.
    #[must_use]
    pub const fn with_scale(scale: f32) -> Self {
        Self::new(scale, ContentSizeCategory::Large)
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::with_scale(1.0)
    }
}
