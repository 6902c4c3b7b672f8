mod common;

use approx::assert_relative_eq;
use nutscan_core::i18n::Language;
use nutscan_core::metrics::{Classification, ThresholdSide};
use nutscan_core::result::Visualization;
use nutscan_core::view::{MetricsPanel, ResultView, StatusIcon, StatusSummary};

use common::sample_result;

// ---------------------------------------------------------------------------
// Result view
// ---------------------------------------------------------------------------

#[test]
fn test_result_view_cards_in_display_order() {
    let result = sample_result(0.0823, 0.05);
    let view = ResultView::new(&result, Language::En);

    let kinds: Vec<_> = view.cards.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, Visualization::ALL.to_vec());
    assert_eq!(view.card(Visualization::Original).title, "Original Image");
    assert_eq!(view.card(Visualization::Overlay).image, result.overlay_image);
}

#[test]
fn test_heatmap_description_closes_paren() {
    let result = sample_result(0.0823, 0.05);
    let view = ResultView::new(&result, Language::En);
    assert_eq!(
        view.card(Visualization::Heatmap).description,
        "Heat map showing anomaly intensity (Score: 0.0823)"
    );

    let view = ResultView::new(&result, Language::Tr);
    assert!(view.card(Visualization::Heatmap).description.ends_with("(Skor: 0.0823)"));
}

#[test]
fn test_completed_text() {
    let mut result = sample_result(0.03, 0.05);
    result.processing_time = 1.27;
    let view = ResultView::new(&result, Language::En);
    assert_eq!(view.completed_text, "Processing completed in 1.3s");
    assert_eq!(view.title, "Analysis Results");
}

// ---------------------------------------------------------------------------
// Metrics panel
// ---------------------------------------------------------------------------

#[test]
fn test_metrics_panel_anomalous() {
    let result = sample_result(0.0823, 0.05);
    let metrics = MetricsPanel::new(&result, Language::En.strings());

    assert_eq!(metrics.score_text, "0.0823");
    assert_eq!(metrics.threshold_text, "0.0500");
    assert_eq!(metrics.classification, Classification::Anomaly);
    assert_eq!(metrics.classification_text, "ANOMALY");
    assert_eq!(metrics.side, ThresholdSide::Above);
    assert_eq!(metrics.side_label, "Above Threshold");
    assert_relative_eq!(metrics.bar_fill, 0.823, epsilon = 1e-9);
    assert_relative_eq!(metrics.marker_position, 0.5, epsilon = 1e-9);
    assert_eq!(metrics.scale_threshold_caption, "Threshold: 0.0500");
}

#[test]
fn test_metrics_panel_normal_in_turkish() {
    let result = sample_result(0.03, 0.05);
    let metrics = MetricsPanel::new(&result, Language::Tr.strings());

    assert_eq!(metrics.classification, Classification::Normal);
    assert_eq!(metrics.classification_text, "NORMAL");
    assert_eq!(metrics.side, ThresholdSide::Below);
    assert_eq!(metrics.side_label, "Eşiğin Altında");
    assert_relative_eq!(metrics.bar_fill, 0.3, epsilon = 1e-9);
}

// ---------------------------------------------------------------------------
// Status summary
// ---------------------------------------------------------------------------

#[test]
fn test_status_summary_anomalous() {
    let mut result = sample_result(0.0823, 0.05);
    result.confidence = 0.6461;
    let summary = StatusSummary::new(&result, Language::En);

    assert_eq!(summary.icon, StatusIcon::Warning);
    assert_eq!(summary.headline, "ANOMALY DETECTED");
    assert_eq!(summary.confidence_line, "Confidence: 64.6%");
    assert_eq!(summary.threshold_line, "Threshold: 0.0500");
    assert_eq!(summary.bar_percent_text, "100%");
    assert_relative_eq!(summary.bar_fill, 1.0);
}

#[test]
fn test_status_summary_normal() {
    let result = sample_result(0.03, 0.05);
    let summary = StatusSummary::new(&result, Language::En);

    assert_eq!(summary.icon, StatusIcon::Success);
    assert_eq!(summary.headline, "NORMAL");
    assert_eq!(summary.score_text, "0.0300");
    assert_eq!(summary.time_text, "1.2s");
    assert_eq!(summary.bar_percent_text, "60%");
    assert_relative_eq!(summary.bar_fill, 0.6, epsilon = 1e-9);
}
