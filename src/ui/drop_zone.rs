//! Drag & Drop von Bilddateien und Hinweisfläche ohne geladenes Bild.

use crate::app::{AppIntent, DroppedImage};

/// Übernimmt auf das Fenster gezogene Dateien.
///
/// Nur die erste Datei eines Drops wird geladen.
pub fn collect_dropped_files(ctx: &egui::Context) -> Vec<AppIntent> {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped.len() > 1 {
        log::info!("{} Dateien gezogen, nur die erste wird geladen", dropped.len());
    }

    dropped
        .into_iter()
        .take(1)
        .map(|file| AppIntent::FileDropped {
            file: DroppedImage {
                name: file
                    .path
                    .as_deref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or(file.name),
                mime: Some(file.mime).filter(|m| !m.is_empty()),
                bytes: file.bytes,
                path: file.path,
            },
        })
        .collect()
}

/// Zeichnet den Drop-Hinweis und hebt die Fläche beim Überfahren mit Dateien hervor.
///
/// Ein Klick auf die Fläche öffnet den Dateidialog.
pub fn render_drop_hint(
    ui: &egui::Ui,
    rect: egui::Rect,
    response: &egui::Response,
    show_hint: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let files_hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    if files_hovering {
        ui.painter().rect_filled(
            rect.shrink(8.0),
            8.0,
            egui::Color32::from_rgba_unmultiplied(173, 216, 230, 40),
        );
    }

    if !show_hint {
        return events;
    }

    let stroke_color = if files_hovering || response.hovered() {
        egui::Color32::LIGHT_BLUE
    } else {
        egui::Color32::GRAY
    };
    ui.painter().rect_stroke(
        rect.shrink(16.0),
        8.0,
        egui::Stroke::new(2.0, stroke_color),
        egui::StrokeKind::Inside,
    );
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Drag and drop an image or click",
        egui::FontId::proportional(20.0),
        stroke_color,
    );

    if response.clicked() {
        events.push(AppIntent::OpenFileRequested);
    }

    events
}
