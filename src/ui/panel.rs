//! Gradient-Panel (rechte Seitenleiste): Vorschau, Abtast-Einstellungen, Kopieren.

use crate::app::{AppIntent, AppState};
use crate::core::Rgb;
use crate::shared::InterpolationStyle;

/// Höhe des Vorschau-Streifens in Pixeln.
const PREVIEW_HEIGHT: f32 = 48.0;

/// Rendert das Gradient-Panel und gibt erzeugte Events zurück.
pub fn render_gradient_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("gradient_panel")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Gradient");
            ui.separator();

            let colors = state
                .sampling
                .samples
                .as_ref()
                .map(|s| s.colors())
                .unwrap_or_default();
            render_preview(ui, colors);

            ui.separator();
            render_sampling_settings(ui, state, &mut events);

            ui.separator();
            let has_samples = state.sampling.samples.is_some();
            ui.add_enabled_ui(has_samples, |ui| {
                if ui.button("Copy as CSS linear-gradient").clicked() {
                    events.push(AppIntent::CopyGradientRequested);
                }
                if ui.button("Copy as array of RGB values").clicked() {
                    events.push(AppIntent::CopyRgbArrayRequested);
                }
            });

            if let Some(css) = &state.sampling.gradient_css {
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(160.0)
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(egui::RichText::new(css).monospace().small()).wrap());
                    });
            }
        });

    events
}

fn render_sampling_settings(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let options = &state.options;

    ui.horizontal(|ui| {
        ui.label("Samples:");
        let mut count = state.sampling.sample_count;
        let range = options.clamp_sample_count(0)..=options.sample_count_input_limit();
        if ui
            .add(egui::DragValue::new(&mut count).range(range).speed(1.0))
            .changed()
        {
            events.push(AppIntent::SampleCountChanged { count });
        }
    });

    ui.horizontal(|ui| {
        ui.label("Curve:");
        let mut style = state.sampling.interpolation;
        egui::ComboBox::from_id_salt("interpolation_style")
            .selected_text(style.label())
            .show_ui(ui, |ui| {
                for candidate in InterpolationStyle::ALL {
                    ui.selectable_value(&mut style, candidate, candidate.label());
                }
            });
        if style != state.sampling.interpolation {
            events.push(AppIntent::InterpolationChanged { style });
        }
    });

    if ui
        .add_enabled(state.session.is_some(), egui::Button::new("Resample"))
        .clicked()
    {
        events.push(AppIntent::ResampleRequested);
    }
}

/// Zeichnet den Verlauf als Mesh mit Vertex-Farben pro Stützstelle.
fn render_preview(ui: &mut egui::Ui, colors: &[Rgb]) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, PREVIEW_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    match colors {
        [] => {
            painter.rect_stroke(
                rect,
                4.0,
                egui::Stroke::new(1.0, egui::Color32::GRAY),
                egui::StrokeKind::Inside,
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No samples yet",
                egui::FontId::proportional(14.0),
                egui::Color32::GRAY,
            );
        }
        [single] => {
            painter.rect_filled(rect, 0.0, to_color32(*single));
        }
        _ => {
            painter.add(egui::Shape::mesh(gradient_mesh(rect, colors)));
        }
    }
}

/// Baut einen horizontalen Farbverlauf aus gleichmäßig verteilten Stützstellen.
fn gradient_mesh(rect: egui::Rect, colors: &[Rgb]) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    let last = colors.len().saturating_sub(1).max(1) as f32;

    for (i, rgb) in colors.iter().enumerate() {
        let x = rect.left() + rect.width() * i as f32 / last;
        let color = to_color32(*rgb);
        mesh.colored_vertex(egui::pos2(x, rect.top()), color);
        mesh.colored_vertex(egui::pos2(x, rect.bottom()), color);

        if i > 0 {
            let base = (2 * i) as u32;
            mesh.add_triangle(base - 2, base - 1, base);
            mesh.add_triangle(base - 1, base + 1, base);
        }
    }

    mesh
}

fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r(), rgb.g(), rgb.b())
}
