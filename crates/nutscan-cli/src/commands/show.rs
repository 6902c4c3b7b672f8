use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use nutscan_core::export::export_snapshot;
use nutscan_core::i18n::Language;
use nutscan_core::view::{ResultView, StatusSummary};
use nutscan_core::wire::decode_response;

#[derive(Args)]
pub struct ShowArgs {
    /// Saved service response (JSON)
    pub file: PathBuf,

    /// Display language (en or tr)
    #[arg(long, default_value = "en")]
    pub lang: Language,

    /// Write a PNG snapshot of the result into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Decode a saved response through the wire codec and print it.
pub fn run(args: &ShowArgs) -> Result<()> {
    let body = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let result = decode_response(&body)
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    crate::summary::print_status_summary(&StatusSummary::new(&result, args.lang));
    crate::summary::print_result_view(&ResultView::new(&result, args.lang));

    if let Some(ref dir) = args.export {
        let path = export_snapshot(&result, dir)
            .with_context(|| format!("Failed to export snapshot to {}", dir.display()))?;
        println!("Snapshot saved to {}", path.display());
    }

    Ok(())
}
