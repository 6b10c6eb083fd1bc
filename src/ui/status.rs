//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::sampler::color_at;
use glam::Vec2;

/// Rendert die Status-Bar.
///
/// `hover` ist die Zeigerposition in Overlay-Koordinaten (falls über dem Bild).
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, hover: Option<Vec2>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let Some(session) = &state.session else {
                ui.label("No image loaded");
                return;
            };

            ui.label(format!(
                "Image: {} ({}x{})",
                session.image.label(),
                session.image.width(),
                session.image.height()
            ));

            ui.separator();

            ui.label(format!("Points: {}", session.curve.len()));

            ui.separator();

            match state.selected_point() {
                Some(id) => ui.label(format!("Selected: {}", id)),
                None => ui.label("Selected: none"),
            };

            ui.separator();

            ui.label(format!("Samples: {}", state.sampling.sample_count));

            // Pipette unter dem Zeiger
            if let Some(pos) = hover {
                let extent = session.overlay.extent(state.options.mapping_extent);
                if let Some(rgb) = color_at(&session.image, pos, extent) {
                    ui.separator();
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(
                        rect,
                        2.0,
                        egui::Color32::from_rgb(rgb.r(), rgb.g(), rgb.b()),
                    );
                    ui.label(format!("rgb({}, {}, {})", rgb.r(), rgb.g(), rgb.b()));
                }
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("✔ {}", msg)).color(egui::Color32::LIGHT_GREEN));
            }
        });
    });
}
