use std::path::PathBuf;
use std::sync::mpsc;

use nutscan_core::config::ClientConfig;
use nutscan_core::consts::ACCEPTED_EXTENSIONS;
use nutscan_core::result::Visualization;
use nutscan_core::session::Session;
use nutscan_core::upload::first_accepted;
use tracing::info;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{TextureState, UIState};
use crate::worker;

pub struct NutscanApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub config: ClientConfig,
    pub ui_state: UIState,
    pub textures: TextureState,
    pub show_about: bool,
}

impl NutscanApp {
    pub fn new(ctx: &egui::Context, config: ClientConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: Session::new(config.language),
            config,
            ui_state: UIState::default(),
            textures: TextureState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FileLoaded { file, preview } => {
                    self.ui_state
                        .add_log(format!("Selected: {} ({})", file.name, file.size_label()));
                    self.session.select_file(file);
                    self.textures.clear_results();
                    self.textures.preview = preview
                        .map(|image| ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
                }
                WorkerResult::Progress { value } => {
                    self.session.set_progress(value);
                }
                WorkerResult::AnalysisComplete {
                    generation,
                    result,
                    images,
                } => {
                    let score = result.anomaly_score;
                    if self.session.finish_success(generation, result) {
                        for (which, image) in Visualization::ALL.into_iter().zip(images) {
                            let texture = image.map(|image| {
                                ctx.load_texture(which.id(), image, egui::TextureOptions::LINEAR)
                            });
                            self.textures.set_result(which, texture);
                        }
                        self.ui_state.add_log(format!("Analysis complete (score {score:.4})"));
                    } else {
                        self.ui_state
                            .add_log("Discarded result for a previously selected file".into());
                    }
                }
                WorkerResult::AnalysisFailed { message } => {
                    self.session.finish_failure();
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    show_error_dialog(format!("Analysis failed: {message}"));
                }
                WorkerResult::Exported { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                    self.ui_state.last_export = Some(path);
                }
                WorkerResult::ConfigImported { config } => {
                    self.session.set_language(config.language);
                    self.config = config;
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Pick up files dropped onto the window. Only the first one counts.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if dropped.is_empty() {
            return;
        }
        if let Some(path) = first_accepted(&dropped) {
            self.send_command(WorkerCommand::LoadFile { path });
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Open the image picker on a background thread.
    pub fn pick_image(&self) {
        let cmd_tx = self.cmd_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", ACCEPTED_EXTENSIONS)
                .pick_file()
            {
                let _ = cmd_tx.send(WorkerCommand::LoadFile { path });
            }
        });
    }

    pub fn start_analysis(&mut self) {
        match self.session.begin_analysis() {
            Ok(ticket) => {
                info!("Analyzing {} via {}", ticket.file.name, self.config.endpoint);
                self.send_command(WorkerCommand::Analyze {
                    ticket,
                    config: self.config.clone(),
                });
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Ask for a folder, then render the snapshot there.
    pub fn export_snapshot(&self) {
        let Some(result) = self.session.result().cloned() else {
            return;
        };
        let cmd_tx = self.cmd_tx.clone();
        let start_dir = self.config.export_dir_or_current();
        std::thread::spawn(move || {
            if let Some(dir) = rfd::FileDialog::new().set_directory(start_dir).pick_folder() {
                let _ = cmd_tx.send(WorkerCommand::Export { result, dir });
            }
        });
    }
}

/// Blocking error dialog on its own thread, so the UI keeps repainting.
fn show_error_dialog(message: String) {
    std::thread::spawn(move || {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Nutscan")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    });
}

impl eframe::App for NutscanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::header::show(ctx, self);
        panels::status::show(ctx, self);
        panels::upload::show(ctx, self);
        panels::results::show(ctx, self);

        // About dialog
        if self.show_about {
            let t = self.session.language().strings();
            egui::Window::new("About Nutscan")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(t.app_title);
                        ui.label(t.app_subtitle);
                        ui.add_space(8.0);
                        ui.label(format!("{} {}", t.model_label, t.model_value));
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
