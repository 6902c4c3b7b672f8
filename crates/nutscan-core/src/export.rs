//! Static PNG snapshot of a result: a title and two plain-text lines.

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use tracing::info;

use crate::consts::{SNAPSHOT_HEIGHT, SNAPSHOT_TEXT_RGB, SNAPSHOT_TITLE, SNAPSHOT_WIDTH};
use crate::error::{NutscanError, Result};
use crate::metrics::{format_confidence, format_score, Classification};
use crate::result::AnalysisResult;

const TITLE_SIZE_PX: f32 = 24.0;
const BODY_SIZE_PX: f32 = 16.0;
const LEFT_MARGIN: i32 = 20;
/// Baselines of the title and the two body lines.
const BASELINES: [f32; 3] = [40.0, 70.0, 95.0];

/// The three text lines of the snapshot. Always English.
pub fn snapshot_lines(result: &AnalysisResult) -> [String; 3] {
    [
        SNAPSHOT_TITLE.to_string(),
        format!(
            "Score: {} | Threshold: {}",
            format_score(result.anomaly_score),
            format_score(result.threshold)
        ),
        format!(
            "Result: {} | Confidence: {}",
            Classification::of(result).label(),
            format_confidence(result.confidence)
        ),
    ]
}

/// `anomaly-analysis-<millis>.png`
pub fn snapshot_file_name(timestamp_millis: i64) -> String {
    format!("anomaly-analysis-{timestamp_millis}.png")
}

fn snapshot_font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT)
        .map_err(|e| NutscanError::Font(e.to_string()))
}

/// Scale for a CSS-style pixel size (em height), not ab_glyph's line height.
fn em_scale(font: &FontRef<'_>, size_px: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(size_px * font.height_unscaled() / units_per_em)
}

fn draw_line(
    canvas: &mut RgbaImage,
    font: &FontRef<'_>,
    size_px: f32,
    baseline: f32,
    text: &str,
    bold: bool,
) {
    let color = Rgba([SNAPSHOT_TEXT_RGB[0], SNAPSHOT_TEXT_RGB[1], SNAPSHOT_TEXT_RGB[2], 255]);
    let scale = em_scale(font, size_px);
    // draw_text_mut positions by the top of the line box.
    let top = (baseline - font.as_scaled(scale).ascent()).round() as i32;

    draw_text_mut(canvas, color, LEFT_MARGIN, top, scale, font, text);
    if bold {
        // The bundled face has no bold weight; a one-pixel double strike stands in.
        draw_text_mut(canvas, color, LEFT_MARGIN + 1, top, scale, font, text);
    }
}

/// Render the snapshot on a transparent 1200x800 canvas.
pub fn render_snapshot(result: &AnalysisResult) -> Result<RgbaImage> {
    let font = snapshot_font()?;
    let mut canvas = RgbaImage::new(SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);

    let [title, scores, verdict] = snapshot_lines(result);
    draw_line(&mut canvas, &font, TITLE_SIZE_PX, BASELINES[0], &title, true);
    draw_line(&mut canvas, &font, BODY_SIZE_PX, BASELINES[1], &scores, false);
    draw_line(&mut canvas, &font, BODY_SIZE_PX, BASELINES[2], &verdict, false);

    Ok(canvas)
}

/// Render and write the snapshot into `dir` using an explicit timestamp.
pub fn export_snapshot_at(
    result: &AnalysisResult,
    dir: &Path,
    timestamp_millis: i64,
) -> Result<PathBuf> {
    let canvas = render_snapshot(result)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(snapshot_file_name(timestamp_millis));
    canvas.save_with_format(&path, ImageFormat::Png)?;
    info!("Snapshot written to {}", path.display());
    Ok(path)
}

/// Render and write the snapshot into `dir`, named after the current time.
pub fn export_snapshot(result: &AnalysisResult, dir: &Path) -> Result<PathBuf> {
    export_snapshot_at(result, dir, chrono::Utc::now().timestamp_millis())
}
