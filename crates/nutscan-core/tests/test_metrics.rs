mod common;

use approx::assert_relative_eq;
use nutscan_core::metrics::{
    format_confidence, format_fraction_percent, format_score, format_seconds,
    score_bar_fraction, status_bar_fraction, status_bar_percent_text,
    threshold_marker_fraction, Classification, ThresholdSide,
};

use common::sample_result;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn test_classification_follows_service_flag() {
    let result = sample_result(0.0823, 0.05);
    assert_eq!(Classification::of(&result), Classification::Anomaly);
    assert!(Classification::of(&result).is_anomaly());
    assert_eq!(Classification::of(&result).label(), "ANOMALY");

    let result = sample_result(0.03, 0.05);
    assert_eq!(Classification::of(&result), Classification::Normal);
    assert_eq!(Classification::of(&result).label(), "NORMAL");
}

#[test]
fn test_classification_does_not_recompute_from_score() {
    let mut result = sample_result(0.01, 0.05);
    result.is_anomaly = true;
    assert_eq!(Classification::of(&result), Classification::Anomaly);
}

// ---------------------------------------------------------------------------
// Threshold side
// ---------------------------------------------------------------------------

#[test]
fn test_threshold_side_strictly_greater_is_above() {
    assert_eq!(ThresholdSide::of(0.0823, 0.05), ThresholdSide::Above);
    assert_eq!(ThresholdSide::of(0.03, 0.05), ThresholdSide::Below);
    assert_eq!(ThresholdSide::of(0.05, 0.05), ThresholdSide::Below);
}

// ---------------------------------------------------------------------------
// Result panel bar
// ---------------------------------------------------------------------------

#[test]
fn test_score_bar_anomalous_example() {
    assert_relative_eq!(score_bar_fraction(0.0823, 0.05), 0.823, epsilon = 1e-9);
    assert_relative_eq!(threshold_marker_fraction(0.0823, 0.05), 0.5, epsilon = 1e-9);
}

#[test]
fn test_score_bar_normal_example() {
    assert_relative_eq!(score_bar_fraction(0.03, 0.05), 0.3, epsilon = 1e-9);
    assert_relative_eq!(threshold_marker_fraction(0.03, 0.05), 0.5, epsilon = 1e-9);
}

#[test]
fn test_score_bar_saturates_for_large_scores() {
    assert_relative_eq!(score_bar_fraction(0.5, 0.05), 1.0);
    assert_relative_eq!(threshold_marker_fraction(0.5, 0.05), 0.1, epsilon = 1e-9);
}

#[test]
fn test_score_bar_degenerate_inputs_are_empty() {
    assert_eq!(score_bar_fraction(0.0, 0.0), 0.0);
    assert_eq!(threshold_marker_fraction(0.0, 0.0), 0.0);
    assert_eq!(score_bar_fraction(f64::NAN, 0.05), 0.0);
    assert_eq!(status_bar_fraction(0.0, 0.0), 0.0);
}

#[test]
fn test_bar_fractions_stay_in_unit_range() {
    for &(s, t) in &[(0.001, 0.9), (0.2, 0.1), (3.0, 0.05), (0.05, 0.05)] {
        for f in [
            score_bar_fraction(s, t),
            threshold_marker_fraction(s, t),
            status_bar_fraction(s, t),
        ] {
            assert!((0.0..=1.0).contains(&f), "fraction {f} out of range for ({s}, {t})");
        }
    }
}

// ---------------------------------------------------------------------------
// Status card bar
// ---------------------------------------------------------------------------

#[test]
fn test_status_bar_uses_threshold_as_floor() {
    assert_relative_eq!(status_bar_fraction(0.0823, 0.05), 1.0);
    assert_relative_eq!(status_bar_fraction(0.03, 0.05), 0.6, epsilon = 1e-9);
    assert_eq!(status_bar_percent_text(0.03, 0.05), "60%");
    assert_eq!(status_bar_percent_text(0.0823, 0.05), "100%");
    assert_eq!(status_bar_percent_text(0.0, 0.0), "0%");
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn test_number_formatting() {
    assert_eq!(format_score(0.0823), "0.0823");
    assert_eq!(format_score(0.05), "0.0500");
    assert_eq!(format_confidence(0.6461), "64.6%");
    assert_eq!(format_seconds(1.27), "1.3s");
    assert_eq!(format_fraction_percent(0.823), "82.3%");
}
