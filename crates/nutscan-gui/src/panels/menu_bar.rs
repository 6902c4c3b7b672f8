use nutscan_core::config::ClientConfig;
use nutscan_core::i18n::Language;

use crate::app::NutscanApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut NutscanApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let export_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    app.pick_image();
                }

                let has_result = app.session.result().is_some();
                if ui
                    .add_enabled(
                        has_result,
                        egui::Button::new("Export Snapshot...").shortcut_text(ctx.format_shortcut(&export_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.export_snapshot();
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                for lang in Language::ALL {
                    let label = match lang {
                        Language::En => "English",
                        Language::Tr => "Türkçe",
                    };
                    if ui.radio(app.session.language() == lang, label).clicked() {
                        ui.close();
                        app.session.set_language(lang);
                    }
                }

                ui.separator();

                let t = app.session.language().strings();
                let focused = app.session.display_mode().focused().is_some();
                if ui.add_enabled(focused, egui::Button::new(t.back_to_grid)).clicked() {
                    ui.close();
                    app.session.back_to_grid();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Config").clicked() {
                    ui.close();
                    app.config = ClientConfig::default();
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            app.pick_image();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&export_shortcut)) {
            app.export_snapshot();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_config(app: &mut NutscanApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let message = match ClientConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(message);
    });
}

fn export_config(app: &mut NutscanApp) {
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("nutscan.toml")
            .save_file()
        {
            let message = match config.save(&path) {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config saved to {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    message: format!("Failed to save config: {e}"),
                },
            };
            let _ = result_tx.send(message);
        }
    });
}
