use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use nutscan_core::analysis::run_analysis;
use nutscan_core::client::HttpAnalyzer;
use nutscan_core::config::ClientConfig;
use nutscan_core::export::export_snapshot;
use nutscan_core::i18n::Language;
use nutscan_core::session::Session;
use nutscan_core::upload::{is_accepted_image, SelectedFile};
use tracing::info;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Image to analyze (PNG, JPG or JPEG)
    pub file: PathBuf,

    /// Analysis endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Display language (en or tr)
    #[arg(long)]
    pub lang: Option<Language>,

    /// Client config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write a PNG snapshot of the result into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the raw result as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

/// Load the config file if given, then apply flag overrides.
fn resolve_config(args: &AnalyzeArgs) -> Result<ClientConfig> {
    let mut config = match args.config {
        Some(ref path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(ref endpoint) = args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    if args.timeout.is_some() {
        config.timeout_secs = args.timeout;
    }
    Ok(config)
}

fn load_image(path: &Path) -> Result<SelectedFile> {
    if !is_accepted_image(path) {
        bail!("{} is not a PNG or JPEG image", path.display());
    }
    SelectedFile::load(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let t = config.language.strings();

    let mut session = Session::new(config.language);
    session.select_file(load_image(&args.file)?);
    let ticket = session.begin_analysis()?;
    let analyzer = HttpAnalyzer::from_config(&config)?;

    println!(
        "{} {} ({})",
        t.processing_text,
        ticket.file.name,
        ticket.file.size_label()
    );

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}%")?
            .progress_chars("=> "),
    );
    pb.set_message(t.analyzing_button);
    pb.enable_steady_tick(Duration::from_millis(100));

    let bar = pb.clone();
    let outcome = run_analysis(&analyzer, &ticket.file, &config.progress, move |value| {
        bar.set_position(u64::from(value));
    });

    let result = match outcome {
        Ok(result) => {
            pb.finish_with_message(t.status_ready);
            result
        }
        Err(e) => {
            pb.abandon();
            session.finish_failure();
            return Err(e).context("Analysis failed");
        }
    };
    session.finish_success(ticket.generation, result);

    let Some(result) = session.result() else {
        bail!("Analysis produced no result");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        if let Some(summary) = session.status_summary() {
            crate::summary::print_status_summary(&summary);
        }
        if let Some(view) = session.result_view() {
            crate::summary::print_result_view(&view);
        }
    }

    if let Some(ref dir) = args.export {
        let path = export_snapshot(result, dir)
            .with_context(|| format!("Failed to export snapshot to {}", dir.display()))?;
        info!("Exported {}", path.display());
        println!("Snapshot saved to {}", path.display());
    }

    Ok(())
}
