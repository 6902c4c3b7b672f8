use nutscan_core::view::{StatusIcon, StatusSummary};

pub fn show(ui: &mut egui::Ui, summary: &StatusSummary) {
    let color = super::verdict_color(summary.classification.is_anomaly());
    let icon = match summary.icon {
        StatusIcon::Warning => "\u{26A0}",
        StatusIcon::Success => "\u{2714}",
    };

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.5, color))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).size(22.0).color(color));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(summary.headline)
                            .strong()
                            .size(16.0)
                            .color(color),
                    );
                    ui.small(&summary.confidence_line);
                });
            });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label(summary.score_label);
                ui.strong(&summary.score_text);
            });
            ui.small(&summary.threshold_line);
            ui.horizontal(|ui| {
                ui.label(summary.time_label);
                ui.strong(&summary.time_text);
            });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.small(summary.bar_label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(&summary.bar_percent_text);
                });
            });
            ui.add(
                egui::ProgressBar::new(summary.bar_fill as f32)
                    .fill(color)
                    .desired_height(8.0),
            );
        });
}
