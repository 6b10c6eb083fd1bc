//! Renderer für Kurvenpfad, Kontrollpunkte und Abtastpunkte.

use super::RenderScene;
use glam::Vec2;

fn color32(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Zeichnet das Overlay über dem Bild.
#[derive(Default)]
pub struct CurveRenderer;

impl CurveRenderer {
    /// Zeichnet Pfad, Abtastpunkte und Marker (in dieser Reihenfolge).
    pub fn render(&self, painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
        let to_screen = |p: Vec2| origin + egui::vec2(p.x, p.y);
        let options = &scene.options;

        if scene.path.len() >= 2 {
            let points: Vec<egui::Pos2> = scene.path.iter().map(|&p| to_screen(p)).collect();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(options.curve_stroke_width, color32(options.curve_color)),
            ));
        }

        let dot_color = color32(options.sample_dot_color);
        for &point in &scene.sample_points {
            painter.circle_filled(to_screen(point), options.sample_dot_radius_px, dot_color);
        }

        for marker in &scene.markers {
            let fill = if marker.selected {
                color32(options.marker_color_selected)
            } else {
                color32(options.curve_color)
            };
            painter.circle_filled(to_screen(marker.position), options.marker_radius_px, fill);
        }
    }
}
