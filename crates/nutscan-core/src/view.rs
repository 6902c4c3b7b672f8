//! Read-only view models for the result panel and the status card.
//!
//! Everything a panel prints is computed here from an [`AnalysisResult`] and
//! a [`Language`], so front-ends only lay out text and bars.

use crate::i18n::{Language, Strings};
use crate::metrics::{
    format_confidence, format_score, format_seconds, score_bar_fraction, status_bar_fraction,
    status_bar_percent_text, threshold_marker_fraction, Classification, ThresholdSide,
};
use crate::result::{AnalysisResult, Visualization};

/// One tile of the result grid.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizationCard<'a> {
    pub kind: Visualization,
    pub title: &'static str,
    pub description: String,
    pub image: &'a str,
}

/// The numeric block under the images, including the score bar.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsPanel {
    pub heading: &'static str,

    pub score_text: String,
    pub score_label: &'static str,
    pub threshold_text: String,
    pub threshold_label: &'static str,
    pub confidence_text: String,
    pub confidence_label: &'static str,
    pub classification: Classification,
    pub classification_text: &'static str,
    pub classification_label: &'static str,

    pub comparison_label: &'static str,
    pub side: ThresholdSide,
    pub side_label: &'static str,
    /// Bar fill in [0, 1].
    pub bar_fill: f64,
    /// Threshold marker offset in [0, 1] along the same bar.
    pub marker_position: f64,
    pub scale_threshold_caption: String,
}

impl MetricsPanel {
    pub const SCALE_MIN_CAPTION: &'static str = "0";
    pub const SCALE_MAX_CAPTION: &'static str = "Max";

    pub fn new(result: &AnalysisResult, t: &'static Strings) -> Self {
        let classification = Classification::of(result);
        let side = ThresholdSide::of(result.anomaly_score, result.threshold);
        Self {
            heading: t.detailed_metrics,
            score_text: format_score(result.anomaly_score),
            score_label: t.anomaly_score,
            threshold_text: format_score(result.threshold),
            threshold_label: t.threshold_value,
            confidence_text: format_confidence(result.confidence),
            confidence_label: t.confidence_value,
            classification,
            classification_text: match classification {
                Classification::Anomaly => t.anomaly,
                Classification::Normal => t.normal_class,
            },
            classification_label: t.classification,
            comparison_label: t.score_comparison,
            side,
            side_label: match side {
                ThresholdSide::Above => t.above_threshold,
                ThresholdSide::Below => t.below_threshold,
            },
            bar_fill: score_bar_fraction(result.anomaly_score, result.threshold),
            marker_position: threshold_marker_fraction(result.anomaly_score, result.threshold),
            scale_threshold_caption: format!("{}: {}", t.threshold, format_score(result.threshold)),
        }
    }
}

/// Everything the result panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView<'a> {
    pub title: &'static str,
    /// e.g. `Processing completed in 1.2s`.
    pub completed_text: String,
    pub grid_view_label: &'static str,
    pub download_label: &'static str,
    pub back_to_grid_label: &'static str,
    pub cards: [VisualizationCard<'a>; 3],
    pub metrics: MetricsPanel,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a AnalysisResult, language: Language) -> Self {
        let t = language.strings();
        let cards = Visualization::ALL.map(|kind| {
            let (title, description) = match kind {
                Visualization::Original => (t.original_image, t.original_image_desc.to_string()),
                // The localized prefix ends in "(Score:"; the paren is closed here.
                Visualization::Heatmap => (
                    t.anomaly_heatmap,
                    format!("{} {})", t.anomaly_heatmap_desc, format_score(result.anomaly_score)),
                ),
                Visualization::Overlay => (t.overlay_analysis, t.overlay_analysis_desc.to_string()),
            };
            VisualizationCard {
                kind,
                title,
                description,
                image: result.image(kind),
            }
        });

        Self {
            title: t.analysis_results,
            completed_text: format!(
                "{} {}",
                t.processing_completed,
                format_seconds(result.processing_time)
            ),
            grid_view_label: t.grid_view,
            download_label: t.download,
            back_to_grid_label: t.back_to_grid,
            cards,
            metrics: MetricsPanel::new(result, t),
        }
    }

    pub fn card(&self, which: Visualization) -> &VisualizationCard<'a> {
        &self.cards[which.index()]
    }
}

/// Icon shown next to the status headline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Warning,
    Success,
}

/// The compact, always-visible summary card.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusSummary {
    pub classification: Classification,
    pub icon: StatusIcon,
    pub headline: &'static str,
    /// e.g. `Confidence: 64.6%`.
    pub confidence_line: String,
    pub score_text: String,
    pub score_label: &'static str,
    /// e.g. `Threshold: 0.0500`.
    pub threshold_line: String,
    pub time_label: &'static str,
    /// e.g. `1.2s`.
    pub time_text: String,
    pub bar_label: &'static str,
    pub bar_percent_text: String,
    /// Fill in [0, 1], normalised by `max(score, threshold)`.
    pub bar_fill: f64,
}

impl StatusSummary {
    pub fn new(result: &AnalysisResult, language: Language) -> Self {
        let t = language.strings();
        let classification = Classification::of(result);
        let (icon, headline) = match classification {
            Classification::Anomaly => (StatusIcon::Warning, t.anomaly_detected),
            Classification::Normal => (StatusIcon::Success, t.normal),
        };

        Self {
            classification,
            icon,
            headline,
            confidence_line: format!("{}: {}", t.confidence, format_confidence(result.confidence)),
            score_text: format_score(result.anomaly_score),
            score_label: t.score,
            threshold_line: format!("{}: {}", t.threshold, format_score(result.threshold)),
            time_label: t.processing_time,
            time_text: format_seconds(result.processing_time),
            bar_label: t.score_vs_threshold,
            bar_percent_text: status_bar_percent_text(result.anomaly_score, result.threshold),
            bar_fill: status_bar_fraction(result.anomaly_score, result.threshold),
        }
    }
}
