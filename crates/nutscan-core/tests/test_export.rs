mod common;

use nutscan_core::export::{export_snapshot, export_snapshot_at, render_snapshot, snapshot_file_name, snapshot_lines};

use common::sample_result;

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn test_snapshot_lines() {
    let mut result = sample_result(0.0823, 0.05);
    result.confidence = 0.6461;
    let [title, scores, verdict] = snapshot_lines(&result);
    assert_eq!(title, "BTC AI Anomaly Detection Results");
    assert_eq!(scores, "Score: 0.0823 | Threshold: 0.0500");
    assert_eq!(verdict, "Result: ANOMALY | Confidence: 64.6%");
}

#[test]
fn test_snapshot_lines_normal() {
    let result = sample_result(0.03, 0.05);
    assert!(snapshot_lines(&result)[2].starts_with("Result: NORMAL | "));
}

#[test]
fn test_snapshot_file_name() {
    assert_eq!(snapshot_file_name(1_700_000_000_123), "anomaly-analysis-1700000000123.png");
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_render_snapshot_canvas() {
    let canvas = render_snapshot(&sample_result(0.0823, 0.05)).unwrap();
    assert_eq!(canvas.dimensions(), (1200, 800));

    let inked: Vec<_> = canvas
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[3] > 0)
        .collect();
    assert!(!inked.is_empty());
    // All text sits in the top-left band.
    assert!(inked.iter().all(|(x, y, _)| *x >= 15 && *y < 110));
    // Bottom-right stays transparent.
    assert_eq!(canvas.get_pixel(1199, 799).0[3], 0);
}

#[test]
fn test_export_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("exports");
    let path = export_snapshot_at(&sample_result(0.03, 0.05), &out, 42).unwrap();

    assert_eq!(path, out.join("anomaly-analysis-42.png"));
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (1200, 800));
}

#[test]
fn test_export_uses_timestamped_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_snapshot(&sample_result(0.03, 0.05), dir.path()).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("anomaly-analysis-") && name.ends_with(".png"), "{name}");
}
