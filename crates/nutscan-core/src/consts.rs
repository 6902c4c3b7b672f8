/// Analysis endpoint used when no config overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/analyze";

/// Multipart form field carrying the image bytes.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// File extensions accepted by the upload control (lowercase).
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Percentage points added to the cosmetic progress on every tick.
pub const DEFAULT_PROGRESS_STEP: u8 = 15;

/// Delay between cosmetic progress ticks, in milliseconds.
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 300;

/// Highest value the cosmetic progress reaches before the response arrives.
pub const DEFAULT_PROGRESS_CAP: u8 = 90;

/// How long the progress bar holds at 100% before the result is exposed.
pub const DEFAULT_COMPLETION_HOLD_MS: u64 = 500;

/// Progress value reported once the response has resolved successfully.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Export snapshot canvas width in pixels.
pub const SNAPSHOT_WIDTH: u32 = 1200;

/// Export snapshot canvas height in pixels.
pub const SNAPSHOT_HEIGHT: u32 = 800;

/// Export snapshot text color (#1f2937).
pub const SNAPSHOT_TEXT_RGB: [u8; 3] = [0x1f, 0x29, 0x37];

/// Title line drawn on the export snapshot.
pub const SNAPSHOT_TITLE: &str = "BTC AI Anomaly Detection Results";

/// Generic message for a `success: false` body that carries no error string.
pub const GENERIC_ANALYSIS_FAILURE: &str = "Analysis failed";
