use nutscan_core::i18n::Strings;
use nutscan_core::result::Visualization;
use nutscan_core::session::DisplayMode;
use nutscan_core::view::{MetricsPanel, ResultView, VisualizationCard};

use crate::app::NutscanApp;
use crate::states::TextureState;

const GRID_IMAGE_HEIGHT: f32 = 260.0;
const BAR_HEIGHT: f32 = 14.0;

/// User intent collected while the view borrows the session.
enum Action {
    Focus(Visualization),
    BackToGrid,
    Export,
}

pub fn show(ctx: &egui::Context, app: &mut NutscanApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let mode = app.session.display_mode();
        let mut action = None;

        match app.session.result_view() {
            Some(view) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    action = result_panel(ui, &view, mode, &app.textures);
                });
            }
            None => show_placeholder(ui, app.session.language().strings()),
        }

        match action {
            Some(Action::Focus(which)) => app.session.focus(which),
            Some(Action::BackToGrid) => app.session.back_to_grid(),
            Some(Action::Export) => app.export_snapshot(),
            None => {}
        }
    });
}

fn result_panel(
    ui: &mut egui::Ui,
    view: &ResultView<'_>,
    mode: DisplayMode,
    textures: &TextureState,
) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading(view.title);
        ui.label(egui::RichText::new(&view.completed_text).weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(view.download_label).clicked() {
                action = Some(Action::Export);
            }
            if mode.focused().is_some() && ui.button(view.grid_view_label).clicked() {
                action = Some(Action::BackToGrid);
            }
        });
    });
    ui.separator();

    let image_action = match mode {
        DisplayMode::Grid => grid(ui, view, textures),
        DisplayMode::Focus(which) => focus(ui, view.card(which), view.back_to_grid_label, textures),
    };
    ui.add_space(12.0);
    metrics(ui, &view.metrics);

    action.or(image_action)
}

fn grid(ui: &mut egui::Ui, view: &ResultView<'_>, textures: &TextureState) -> Option<Action> {
    let mut action = None;
    ui.columns(3, |columns| {
        for (ui, card) in columns.iter_mut().zip(view.cards.iter()) {
            ui.strong(card.title);
            if card_image(ui, card, textures, GRID_IMAGE_HEIGHT).clicked() {
                action = Some(Action::Focus(card.kind));
            }
            ui.small(&card.description);
        }
    });
    action
}

fn focus(
    ui: &mut egui::Ui,
    card: &VisualizationCard<'_>,
    back_label: &str,
    textures: &TextureState,
) -> Option<Action> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.strong(card.title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(back_label).clicked() {
                action = Some(Action::BackToGrid);
            }
        });
    });

    let max_height = (ui.available_height() * 0.7).max(GRID_IMAGE_HEIGHT);
    ui.vertical_centered(|ui| {
        if card_image(ui, card, textures, max_height).clicked() {
            action = Some(Action::BackToGrid);
        }
    });
    ui.small(&card.description);
    action
}

/// The decoded image, or a neutral placeholder when it could not be decoded.
fn card_image(
    ui: &mut egui::Ui,
    card: &VisualizationCard<'_>,
    textures: &TextureState,
    max_height: f32,
) -> egui::Response {
    let response = match textures.result(card.kind) {
        Some(texture) => ui.add(
            egui::Image::new(texture)
                .max_width(ui.available_width())
                .max_height(max_height)
                .corner_radius(4.0)
                .sense(egui::Sense::click()),
        ),
        None => ui.add(
            egui::Button::new(egui::RichText::new("Image unavailable").weak())
                .min_size(egui::vec2(ui.available_width(), max_height.min(120.0))),
        ),
    };
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn metrics(ui: &mut egui::Ui, m: &MetricsPanel) {
    super::section_header(ui, m.heading, None);
    ui.add_space(4.0);

    let verdict = super::verdict_color(m.classification.is_anomaly());
    ui.columns(4, |columns| {
        metric_cell(&mut columns[0], m.score_label, egui::RichText::new(&m.score_text));
        metric_cell(&mut columns[1], m.threshold_label, egui::RichText::new(&m.threshold_text));
        metric_cell(&mut columns[2], m.confidence_label, egui::RichText::new(&m.confidence_text));
        metric_cell(
            &mut columns[3],
            m.classification_label,
            egui::RichText::new(m.classification_text).color(verdict),
        );
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.strong(m.comparison_label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(m.side_label).color(verdict));
        });
    });
    score_bar(ui, m.bar_fill as f32, m.marker_position as f32, verdict);

    ui.columns(3, |columns| {
        columns[0].small(MetricsPanel::SCALE_MIN_CAPTION);
        columns[1].vertical_centered(|ui| {
            ui.small(&m.scale_threshold_caption);
        });
        columns[2].with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.small(MetricsPanel::SCALE_MAX_CAPTION);
        });
    });
}

fn metric_cell(ui: &mut egui::Ui, label: &str, value: egui::RichText) {
    ui.vertical_centered(|ui| {
        ui.small(label);
        ui.label(value.strong().size(18.0));
    });
}

/// Filled bar with a vertical threshold marker.
fn score_bar(ui: &mut egui::Ui, fill: f32, marker: f32, color: egui::Color32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();
    let radius = BAR_HEIGHT / 2.0;

    painter.rect_filled(rect, radius, ui.visuals().extreme_bg_color);
    let filled = egui::Rect::from_min_size(rect.min, egui::vec2(width * fill, BAR_HEIGHT));
    painter.rect_filled(filled, radius, color);

    let x = rect.left() + width * marker;
    painter.line_segment(
        [egui::pos2(x, rect.top() - 3.0), egui::pos2(x, rect.bottom() + 3.0)],
        egui::Stroke::new(2.0, ui.visuals().strong_text_color()),
    );
}

fn show_placeholder(ui: &mut egui::Ui, t: &Strings) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(egui::RichText::new("\u{1F50D}").size(40.0).weak());
        ui.add_space(8.0);
        ui.heading(t.ready_for_analysis);
        ui.add_space(4.0);
        ui.set_max_width(480.0);
        ui.label(egui::RichText::new(t.ready_description).weak());
    });
}
