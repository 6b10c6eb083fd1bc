//! Layout-Typen für das Overlay im Container.

use glam::Vec2;

/// Bildschirm-Rechtecke des Overlays für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    /// Innenfläche (Bildfläche, Ursprung der Overlay-Koordinaten)
    pub client_rect: egui::Rect,
    /// Innenfläche plus Rahmen
    pub offset_rect: egui::Rect,
}

impl OverlayLayout {
    /// Rechnet eine Bildschirmposition in Overlay-Koordinaten um.
    pub fn to_overlay(&self, screen: egui::Pos2) -> Vec2 {
        Vec2::new(
            screen.x - self.client_rect.min.x,
            screen.y - self.client_rect.min.y,
        )
    }

    /// Rechnet Overlay-Koordinaten in eine Bildschirmposition um.
    pub fn to_screen(&self, overlay: Vec2) -> egui::Pos2 {
        self.client_rect.min + egui::vec2(overlay.x, overlay.y)
    }
}

/// Zentriert das Overlay im Container.
pub fn overlay_layout(container: egui::Rect, overlay_size: Vec2, border: f32) -> OverlayLayout {
    let client_rect =
        egui::Rect::from_center_size(container.center(), egui::vec2(overlay_size.x, overlay_size.y));
    OverlayLayout {
        client_rect,
        offset_rect: client_rect.expand(border),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_centered_and_roundtrips() {
        let container = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(400.0, 200.0));
        let layout = overlay_layout(container, Vec2::new(200.0, 200.0), 2.0);

        assert_eq!(layout.client_rect.min, egui::pos2(110.0, 20.0));
        assert_eq!(layout.offset_rect.min, egui::pos2(108.0, 18.0));

        let overlay = layout.to_overlay(egui::pos2(150.0, 70.0));
        assert_eq!(overlay, Vec2::new(40.0, 50.0));
        assert_eq!(layout.to_screen(overlay), egui::pos2(150.0, 70.0));
    }
}
