//! Values derived from an [`AnalysisResult`] for display.
//!
//! The result panel and the status card normalise their score bars
//! differently (`threshold * 2` vs `threshold` as the divisor floor). Both
//! are kept as separate functions.

use crate::result::AnalysisResult;

/// Binary classification as decided by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Anomaly,
    Normal,
}

impl Classification {
    pub fn of(result: &AnalysisResult) -> Self {
        if result.is_anomaly {
            Self::Anomaly
        } else {
            Self::Normal
        }
    }

    pub fn is_anomaly(self) -> bool {
        self == Self::Anomaly
    }

    /// Untranslated label, as written on the export snapshot.
    pub fn label(self) -> &'static str {
        match self {
            Self::Anomaly => "ANOMALY",
            Self::Normal => "NORMAL",
        }
    }
}

/// Where the score lies relative to the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdSide {
    Above,
    Below,
}

impl ThresholdSide {
    /// Strictly greater is "above"; equality counts as "below".
    pub fn of(score: f64, threshold: f64) -> Self {
        if score > threshold {
            Self::Above
        } else {
            Self::Below
        }
    }
}

/// `value / divisor` clamped to at most 1. A degenerate divisor (zero or
/// non-finite) yields 0 so the bars stay empty instead of showing NaN.
fn bounded_ratio(value: f64, divisor: f64) -> f64 {
    if divisor <= 0.0 || !divisor.is_finite() {
        return 0.0;
    }
    let ratio = value / divisor;
    if ratio.is_nan() {
        0.0
    } else {
        ratio.min(1.0)
    }
}

/// Result panel bar fill: `min(score / max(score, threshold * 2), 1)`.
pub fn score_bar_fraction(score: f64, threshold: f64) -> f64 {
    bounded_ratio(score, score.max(threshold * 2.0))
}

/// Result panel threshold marker: `min(threshold / max(score, threshold * 2), 1)`.
pub fn threshold_marker_fraction(score: f64, threshold: f64) -> f64 {
    bounded_ratio(threshold, score.max(threshold * 2.0))
}

/// Status card bar fill: `min(score / max(score, threshold), 1)`.
pub fn status_bar_fraction(score: f64, threshold: f64) -> f64 {
    bounded_ratio(score, score.max(threshold))
}

/// Status card percentage caption: `(score / max(score, threshold)) * 100`
/// with no decimals. Not clamped, matching the caption's own arithmetic.
pub fn status_bar_percent_text(score: f64, threshold: f64) -> String {
    let divisor = score.max(threshold);
    let percent = if divisor > 0.0 && divisor.is_finite() {
        score / divisor * 100.0
    } else {
        0.0
    };
    format!("{percent:.0}%")
}

pub fn format_score(value: f64) -> String {
    format!("{value:.4}")
}

/// Confidence as a percentage with one decimal, e.g. `0.6461` -> `64.6%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Processing time in seconds with one decimal, e.g. `1.23` -> `1.2s`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.1}s")
}

/// Fraction in [0, 1] rendered as a CSS-style percentage width.
pub fn format_fraction_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
