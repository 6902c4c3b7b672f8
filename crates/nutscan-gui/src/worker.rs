use std::path::Path;
use std::sync::mpsc;

use nutscan_core::analysis::run_analysis;
use nutscan_core::client::HttpAnalyzer;
use nutscan_core::config::ClientConfig;
use nutscan_core::export::export_snapshot;
use nutscan_core::image_source::decode_image;
use nutscan_core::result::{AnalysisResult, Visualization};
use nutscan_core::session::AnalysisTicket;
use nutscan_core::upload::SelectedFile;
use tracing::warn;

use crate::convert::to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("nutscan-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

/// Create a progress callback that sends `WorkerResult::Progress` messages.
fn make_progress_callback(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) -> impl Fn(u8) + Send + Sync + 'static {
    let tx = tx.clone();
    let ctx = ctx.clone();
    move |value: u8| {
        let _ = tx.send(WorkerResult::Progress { value });
        ctx.request_repaint();
    }
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadFile { path } => {
                handle_load_file(&path, &tx, &ctx);
            }
            WorkerCommand::Analyze { ticket, config } => {
                spawn_analysis(ticket, config, &tx, &ctx);
            }
            WorkerCommand::Export { result, dir } => {
                handle_export(&result, &dir, &tx, &ctx);
            }
        }
    }
}

fn handle_load_file(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let file = match SelectedFile::load(path) {
        Ok(file) => file,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to read {}: {e}", path.display()));
            return;
        }
    };

    let preview = match image::load_from_memory(&file.bytes) {
        Ok(img) => Some(to_color_image(&img)),
        Err(e) => {
            send_log(tx, ctx, format!("No preview for {}: {e}", file.name));
            None
        }
    };

    send(tx, ctx, WorkerResult::FileLoaded { file, preview });
}

/// The request runs on its own thread so file loading and exports stay
/// responsive while it is outstanding.
fn spawn_analysis(
    ticket: AnalysisTicket,
    config: ClientConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let thread_tx = tx.clone();
    let thread_ctx = ctx.clone();
    let spawned = std::thread::Builder::new()
        .name("nutscan-analysis".into())
        .spawn(move || run_request(&ticket, &config, &thread_tx, &thread_ctx));

    if let Err(e) = spawned {
        send(
            tx,
            ctx,
            WorkerResult::AnalysisFailed {
                message: format!("Failed to start analysis: {e}"),
            },
        );
    }
}

fn run_request(
    ticket: &AnalysisTicket,
    config: &ClientConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let outcome = HttpAnalyzer::from_config(config).and_then(|analyzer| {
        run_analysis(
            &analyzer,
            &ticket.file,
            &config.progress,
            make_progress_callback(tx, ctx),
        )
    });

    match outcome {
        Ok(result) => {
            let images = Visualization::ALL.map(|which| decode_visualization(&result, which));
            send(
                tx,
                ctx,
                WorkerResult::AnalysisComplete {
                    generation: ticket.generation,
                    result,
                    images,
                },
            );
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::AnalysisFailed {
                message: e.to_string(),
            },
        ),
    }
}

fn decode_visualization(
    result: &AnalysisResult,
    which: Visualization,
) -> Option<egui::ColorImage> {
    match decode_image(result.image(which)) {
        Ok(img) => Some(to_color_image(&img)),
        Err(e) => {
            warn!("Cannot display {which} image: {e}");
            None
        }
    }
}

fn handle_export(
    result: &AnalysisResult,
    dir: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match export_snapshot(result, dir) {
        Ok(path) => send(tx, ctx, WorkerResult::Exported { path }),
        Err(e) => send_error(tx, ctx, format!("Export failed: {e}")),
    }
}
