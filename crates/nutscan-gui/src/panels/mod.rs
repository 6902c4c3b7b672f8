pub mod header;
pub mod menu_bar;
pub mod results;
pub mod status;
pub mod status_card;
pub mod upload;

/// Red for anomalies, green for normal results.
pub(crate) const ANOMALY_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub(crate) const NORMAL_COLOR: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

pub(crate) fn verdict_color(is_anomaly: bool) -> egui::Color32 {
    if is_anomaly {
        ANOMALY_COLOR
    } else {
        NORMAL_COLOR
    }
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}
