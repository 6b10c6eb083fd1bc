//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Zeichnung.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use glam::Vec2;

use super::options::EditorOptions;
use crate::core::{PointId, Rgb};

/// Darstellung eines Kontrollpunkts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerView {
    /// ID des Kontrollpunkts
    pub id: PointId,
    /// Position im Overlay
    pub position: Vec2,
    /// Ob der Punkt selektiert ist
    pub selected: bool,
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Größe des Quellbilds (None = kein Bild geladen)
    pub image_size: Option<[u32; 2]>,
    /// Innenfläche des Overlays in Anzeige-Pixeln
    pub overlay_size: Vec2,
    /// Rahmenbreite des Overlays
    pub overlay_border: f32,
    /// Gerenderte Kurve als dichte Polyline
    pub path: Vec<Vec2>,
    /// Kontrollpunkte in Kurvenreihenfolge
    pub markers: Vec<MarkerView>,
    /// Zuletzt abgetastete Punkte
    pub sample_points: Vec<Vec2>,
    /// Zuletzt abgetastete Farben
    pub gradient_colors: Vec<Rgb>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Bild für Rendering vorhanden ist.
    pub fn has_image(&self) -> bool {
        self.image_size.is_some()
    }
}
