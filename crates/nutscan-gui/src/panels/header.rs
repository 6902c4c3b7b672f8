use crate::app::NutscanApp;

pub fn show(ctx: &egui::Context, app: &mut NutscanApp) {
    let t = app.session.language().strings();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading(t.app_title);
            ui.label(egui::RichText::new(t.app_subtitle).weak());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle_label = app.session.language().toggled().tag().to_uppercase();
                if ui
                    .button(toggle_label)
                    .on_hover_text("Switch language")
                    .clicked()
                {
                    app.session.toggle_language();
                }
                ui.separator();

                let (dot, status) = if app.session.is_analyzing() {
                    (egui::Color32::from_rgb(234, 179, 8), t.processing_text)
                } else {
                    (super::NORMAL_COLOR, t.status_ready)
                };
                ui.label(status);
                ui.label(egui::RichText::new("\u{25CF}").color(dot));
                ui.separator();

                ui.label(egui::RichText::new(t.model_value).strong());
                ui.label(t.model_label);
            });
        });
        ui.add_space(4.0);
    });
}
