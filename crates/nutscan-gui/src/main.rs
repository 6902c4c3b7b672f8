mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::PathBuf;

use anyhow::Context;
use nutscan_core::config::ClientConfig;

/// Optional first argument: a client config file (TOML).
fn load_config() -> anyhow::Result<ClientConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ClientConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(ClientConfig::default()),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("{e:#}; using defaults");
        ClientConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0])
            .with_drag_and_drop(true)
            .with_title("Nutscan"),
        ..Default::default()
    };

    eframe::run_native(
        "Nutscan",
        options,
        Box::new(|cc| Ok(Box::new(app::NutscanApp::new(&cc.egui_ctx, config)))),
    )
}
