//! Top-Menü (File).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open image...").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                let has_samples = state.sampling.samples.is_some();

                if ui
                    .add_enabled(has_samples, egui::Button::new("Copy CSS linear-gradient"))
                    .clicked()
                {
                    events.push(AppIntent::CopyGradientRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_samples, egui::Button::new("Copy RGB values"))
                    .clicked()
                {
                    events.push(AppIntent::CopyRgbArrayRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
