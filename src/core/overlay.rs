//! Anzeige-Overlay über dem Bild: Letterbox-Einpassung und Umrechnung
//! von Anzeige- in Quellpixel-Koordinaten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Welche Overlay-Ausdehnung für eine Berechnung gilt.
///
/// `Client` ist die Innenfläche, `Offset` schließt den Rahmen ein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayExtent {
    /// Innenfläche ohne Rahmen
    #[default]
    Client,
    /// Innenfläche plus Rahmen auf beiden Seiten
    Offset,
}

/// Passt ein Bild seitenverhältnistreu in einen Container ein.
///
/// Ist der Container breiter als das Bild (relativ), bestimmt die Höhe,
/// sonst die Breite. Liefert `Vec2::ZERO` für leere Eingaben.
pub fn fit_to_container(container: Vec2, image_size: [u32; 2]) -> Vec2 {
    let [image_w, image_h] = image_size;
    if container.x <= 0.0 || container.y <= 0.0 || image_w == 0 || image_h == 0 {
        return Vec2::ZERO;
    }
    let (image_w, image_h) = (image_w as f32, image_h as f32);

    let container_aspect = container.x / container.y;
    let image_aspect = image_w / image_h;

    if container_aspect > image_aspect {
        Vec2::new(image_w * (container.y / image_h), container.y)
    } else {
        Vec2::new(container.x, image_h * (container.x / image_w))
    }
}

/// Bildet einen Anzeigepunkt auf eine Quellpixel-Koordinate ab.
///
/// Pro Achse `floor(d / extent * image)`; das Abschneiden ist gewollt.
/// Punkte auf dem rechten/unteren Rand landen auf dem letzten Pixel.
pub fn display_to_pixel(point: Vec2, extent: Vec2, image_size: [u32; 2]) -> [u32; 2] {
    [
        map_axis(point.x, extent.x, image_size[0]),
        map_axis(point.y, extent.y, image_size[1]),
    ]
}

fn map_axis(value: f32, extent: f32, image_dim: u32) -> u32 {
    if image_dim == 0 || extent <= 0.0 || !value.is_finite() {
        return 0;
    }
    let mapped = ((value / extent) * image_dim as f32).floor();
    // `as` sättigt negative Werte auf 0
    (mapped as u32).min(image_dim - 1)
}

/// Aktuelle Größe des Overlays über dem Bild (in Anzeige-Pixeln).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overlay {
    /// Innenfläche
    client_size: Vec2,
    /// Rahmenbreite je Seite
    border: f32,
}

impl Overlay {
    /// Erstellt ein Overlay mit expliziter Innenfläche.
    pub fn new(client_size: Vec2, border: f32) -> Self {
        Self {
            client_size: client_size.max(Vec2::ZERO),
            border: border.max(0.0),
        }
    }

    /// Passt das Overlay in einen Container ein (siehe [`fit_to_container`]).
    pub fn fit(container: Vec2, image_size: [u32; 2], border: f32) -> Self {
        Self::new(fit_to_container(container, image_size), border)
    }

    /// Innenfläche
    pub fn client_size(&self) -> Vec2 {
        self.client_size
    }

    /// Innenfläche plus Rahmen
    pub fn offset_size(&self) -> Vec2 {
        self.client_size + Vec2::splat(2.0 * self.border)
    }

    /// Rahmenbreite je Seite
    pub fn border(&self) -> f32 {
        self.border
    }

    /// Ausdehnung nach gewählter Variante.
    pub fn extent(&self, which: OverlayExtent) -> Vec2 {
        match which {
            OverlayExtent::Client => self.client_size(),
            OverlayExtent::Offset => self.offset_size(),
        }
    }

    /// Begrenzt einen Punkt auf `[0, extent]` je Achse.
    pub fn clamp(&self, point: Vec2, which: OverlayExtent) -> Vec2 {
        point.clamp(Vec2::ZERO, self.extent(which))
    }
}
