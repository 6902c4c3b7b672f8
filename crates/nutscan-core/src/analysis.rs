use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::client::Analyzer;
use crate::config::ProgressConfig;
use crate::consts::PROGRESS_COMPLETE;
use crate::error::Result;
use crate::progress::ProgressTicker;
use crate::result::AnalysisResult;
use crate::upload::SelectedFile;

/// Run one analysis with cosmetic progress reporting.
///
/// `on_progress` receives the ticker values while the request is pending.
/// The ticker is cancelled as soon as the request resolves, on both paths.
/// On success `on_progress(100)` follows, then the call holds for the
/// configured completion delay before returning the result. On failure
/// nothing further is reported.
pub fn run_analysis<A, F>(
    analyzer: &A,
    file: &SelectedFile,
    progress: &ProgressConfig,
    on_progress: F,
) -> Result<AnalysisResult>
where
    A: Analyzer + ?Sized,
    F: Fn(u8) + Send + Sync + 'static,
{
    let on_progress = Arc::new(on_progress);
    let ticker = {
        let on_tick = Arc::clone(&on_progress);
        ProgressTicker::start(progress, move |value| on_tick(value))?
    };

    let start = Instant::now();
    let outcome = analyzer.analyze(file);
    ticker.cancel();

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            warn!("Analysis of {} failed after {:?}: {e}", file.name, start.elapsed());
            return Err(e);
        }
    };

    info!("Analysis of {} finished in {:?}", file.name, start.elapsed());
    on_progress(PROGRESS_COMPLETE);
    std::thread::sleep(progress.completion_hold());
    Ok(result)
}
