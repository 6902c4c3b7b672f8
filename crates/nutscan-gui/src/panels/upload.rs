use crate::app::NutscanApp;

const LEFT_PANEL_WIDTH: f32 = 320.0;
const PREVIEW_MAX_HEIGHT: f32 = 200.0;
const DROP_HOVER_COLOR: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);

pub fn show(ctx: &egui::Context, app: &mut NutscanApp) {
    let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());

    egui::SidePanel::left("upload")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                let t = app.session.language().strings();
                super::section_header(ui, t.upload_title, None);
                ui.add_space(4.0);

                drop_zone(ui, app, hovering_files);
                ui.add_space(8.0);
                analyze_section(ui, app);

                if let Some(summary) = app.session.status_summary() {
                    ui.add_space(8.0);
                    ui.separator();
                    super::status_card::show(ui, &summary);
                }
            });
        });
}

/// Clickable drop target showing the preview once a file is selected.
fn drop_zone(ui: &mut egui::Ui, app: &mut NutscanApp, hovering_files: bool) {
    let t = app.session.language().strings();
    let stroke_color = if hovering_files {
        DROP_HOVER_COLOR
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };

    let response = egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.5, stroke_color))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_height(120.0);
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                if let Some(ref texture) = app.textures.preview {
                    ui.add(
                        egui::Image::new(texture)
                            .max_height(PREVIEW_MAX_HEIGHT)
                            .max_width(ui.available_width()),
                    );
                } else {
                    ui.label(egui::RichText::new("\u{2B06}").size(28.0).weak());
                }
                ui.add_space(4.0);

                if hovering_files {
                    ui.label(egui::RichText::new(t.drop_here_text).color(DROP_HOVER_COLOR));
                } else {
                    ui.label(t.drag_drop_text);
                    ui.small(t.or_click_text);
                }

                if let Some(file) = app.session.selected_file() {
                    ui.add_space(4.0);
                    ui.strong(&file.name);
                    ui.small(file.size_label());
                }
            });
        })
        .response;

    if response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
    {
        app.pick_image();
    }
}

fn analyze_section(ui: &mut egui::Ui, app: &mut NutscanApp) {
    let t = app.session.language().strings();
    let analyzing = app.session.is_analyzing();

    let label = if analyzing {
        t.analyzing_button
    } else {
        t.analyze_button
    };
    let button = egui::Button::new(egui::RichText::new(label).strong())
        .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add_enabled(app.session.can_analyze(), button).clicked() {
        app.start_analysis();
    }

    if analyzing {
        let progress = app.session.progress();
        ui.add_space(4.0);
        ui.add(
            egui::ProgressBar::new(f32::from(progress) / 100.0)
                .text(format!("{} {progress}%", t.processing_text))
                .animate(true),
        );
    }
}
