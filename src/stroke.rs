//! Stroke parameters handed to the host's stroking primitive.

/// Line cap style (end of strokes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat edge at end of line (default).
    #[default]
    Butt,
    /// Rounded end.
    Round,
}

impl LineCap {
    /// Converts to the equivalent [`kurbo::Cap`].
    #[must_use]
    pub const fn to_kurbo(self) -> kurbo::Cap {
        match self {
            Self::Butt => kurbo::Cap::Butt,
            Self::Round => kurbo::Cap::Round,
        }
    }
}

/// Fully resolved stroke parameters for one separator render.
///
/// Derived per render pass from the separator's configuration and the current
/// [`DisplayMetrics`](crate::env::DisplayMetrics); never stored across
/// renders. An empty `dash_pattern` means a continuous line.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeParams {
    /// Stroke thickness in points, always positive.
    pub line_width: f32,
    /// Endpoint (and dash segment) cap treatment.
    pub line_cap: LineCap,
    /// Alternating on/off segment lengths in points; empty for a solid line.
    ///
    /// Every segment length is positive: derived lengths are multiples of
    /// the positive line width, so a malformed pattern cannot reach the
    /// stroking primitive.
    pub dash_pattern: Vec<f32>,
}

impl StrokeParams {
    /// Returns true if the stroke renders as a continuous line.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.dash_pattern.is_empty()
    }

    /// Builds a [`kurbo::Stroke`] describing this stroke.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::Stroke {
        let mut stroke =
            kurbo::Stroke::new(f64::from(self.line_width)).with_caps(self.line_cap.to_kurbo());

        if !self.dash_pattern.is_empty() {
            let dashes: Vec<f64> = self.dash_pattern.iter().map(|&d| f64::from(d)).collect();
            stroke = stroke.with_dashes(0.0, dashes);
        }

        stroke
    }
}
