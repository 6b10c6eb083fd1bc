//! Zentrale Konfiguration für den Bez Gradient Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use super::spline_geometry::InterpolationStyle;
use crate::core::{OverlayExtent, DEFAULT_GRADIENT_DIRECTION, MIN_SAMPLE_COUNT};

// ── Sampling ────────────────────────────────────────────────────────

/// Standard-Anzahl an Farbproben.
pub const DEFAULT_SAMPLE_COUNT: u32 = 50;
/// Untergrenze der Probenanzahl.
pub const SAMPLE_COUNT_MIN: u32 = MIN_SAMPLE_COUNT as u32;
/// Standard-Obergrenze der Probenanzahl.
pub const SAMPLE_COUNT_MAX: u32 = 200;
/// Obergrenze des Eingabefelds, wenn die Probenanzahl unbegrenzt ist.
pub const SAMPLE_COUNT_INPUT_LIMIT: u32 = 10_000;
/// Dichte der Polyline je Kurvensegment.
pub const SAMPLES_PER_SEGMENT: usize = 32;

// ── Kurve ───────────────────────────────────────────────────────────

/// Anzahl der Startpunkte nach dem Laden eines Bildes.
pub const DEFAULT_POINT_COUNT: usize = 4;
/// Vertikales Band der Startpunkte (Anteile der Overlay-Höhe).
pub const DEFAULT_POINT_BAND: [f32; 2] = [0.1, 0.9];

// ── Interaktion / Darstellung ───────────────────────────────────────

/// Pick-Radius um Kontrollpunkte in Anzeige-Pixeln.
pub const PICK_RADIUS_PX: f32 = 30.0;
/// Radius der sichtbaren Kontrollpunkt-Marker.
pub const MARKER_RADIUS_PX: f32 = 5.0;
/// Radius der Abtastpunkt-Marker.
pub const SAMPLE_DOT_RADIUS_PX: f32 = 3.0;
/// Linienstärke der Kurve.
pub const CURVE_STROKE_WIDTH: f32 = 1.5;
/// Farbe der Kurve und normaler Marker (RGBA: Schwarz).
pub const CURVE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Farbe des selektierten Markers (RGBA: Hellblau).
pub const MARKER_COLOR_SELECTED: [u8; 4] = [173, 216, 230, 255];
/// Farbe der Abtastpunkte (RGBA: Rot).
pub const SAMPLE_DOT_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bez_gradient_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Sampling ────────────────────────────────────────────────
    /// Probenanzahl nach dem Start
    pub default_sample_count: u32,
    /// Untergrenze der Probenanzahl (mindestens 2)
    pub sample_count_min: u32,
    /// Obergrenze der Probenanzahl (0 = unbegrenzt)
    pub sample_count_max: u32,
    /// Polyline-Dichte je Kurvensegment
    pub samples_per_segment: usize,
    /// Interpolationsart der Kurve
    pub interpolation: InterpolationStyle,

    // ── Overlay ─────────────────────────────────────────────────
    /// Ausdehnung, auf die gezogene Punkte begrenzt werden
    pub clamp_extent: OverlayExtent,
    /// Ausdehnung, gegen die Anzeige- auf Bildpixel skaliert werden
    pub mapping_extent: OverlayExtent,
    /// Rahmenbreite des Overlays je Seite
    pub overlay_border_px: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Anzahl der Startpunkte
    pub default_point_count: usize,
    /// Vertikales Band der Startpunkte (Anteile der Overlay-Höhe)
    pub default_point_band: [f32; 2],

    // ── Darstellung ─────────────────────────────────────────────
    /// Pick-Radius um Kontrollpunkte
    pub pick_radius_px: f32,
    /// Radius der Kontrollpunkt-Marker
    pub marker_radius_px: f32,
    /// Radius der Abtastpunkt-Marker
    pub sample_dot_radius_px: f32,
    /// Linienstärke der Kurve
    pub curve_stroke_width: f32,
    /// Farbe der Kurve und normaler Marker
    pub curve_color: [u8; 4],
    /// Farbe des selektierten Markers
    pub marker_color_selected: [u8; 4],
    /// Farbe der Abtastpunkte
    pub sample_dot_color: [u8; 4],

    // ── Ausgabe ─────────────────────────────────────────────────
    /// Richtung des CSS-Verlaufs
    pub gradient_direction: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_sample_count: DEFAULT_SAMPLE_COUNT,
            sample_count_min: SAMPLE_COUNT_MIN,
            sample_count_max: SAMPLE_COUNT_MAX,
            samples_per_segment: SAMPLES_PER_SEGMENT,
            interpolation: InterpolationStyle::CatmullRom,

            clamp_extent: OverlayExtent::Client,
            mapping_extent: OverlayExtent::Offset,
            overlay_border_px: 0.0,

            default_point_count: DEFAULT_POINT_COUNT,
            default_point_band: DEFAULT_POINT_BAND,

            pick_radius_px: PICK_RADIUS_PX,
            marker_radius_px: MARKER_RADIUS_PX,
            sample_dot_radius_px: SAMPLE_DOT_RADIUS_PX,
            curve_stroke_width: CURVE_STROKE_WIDTH,
            curve_color: CURVE_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            sample_dot_color: SAMPLE_DOT_COLOR,

            gradient_direction: DEFAULT_GRADIENT_DIRECTION.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bez_gradient_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bez_gradient_editor.toml")
    }

    /// Korrigiert unzulässige Werte aus handgeschriebenen Dateien.
    pub fn sanitized(mut self) -> Self {
        self.sample_count_min = self.sample_count_min.max(SAMPLE_COUNT_MIN);
        if self.sample_count_max != 0 {
            self.sample_count_max = self.sample_count_max.max(self.sample_count_min);
        }
        self.default_sample_count = self.clamp_sample_count(self.default_sample_count);
        self.samples_per_segment = self.samples_per_segment.max(1);
        self.overlay_border_px = self.overlay_border_px.max(0.0);
        self
    }

    /// Begrenzt eine angefragte Probenanzahl auf den konfigurierten Bereich.
    pub fn clamp_sample_count(&self, requested: u32) -> u32 {
        let min = self.sample_count_min.max(SAMPLE_COUNT_MIN);
        requested.clamp(min, self.sample_count_upper_bound())
    }

    /// Obergrenze der Probenanzahl für Eingabefelder.
    pub fn sample_count_upper_bound(&self) -> u32 {
        let min = self.sample_count_min.max(SAMPLE_COUNT_MIN);
        match self.sample_count_max {
            0 => u32::MAX,
            max => max.max(min),
        }
    }

    /// Obergrenze für das Eingabefeld der Probenanzahl.
    ///
    /// Bei unbegrenzter Probenanzahl auf `SAMPLE_COUNT_INPUT_LIMIT` gedeckelt.
    pub fn sample_count_input_limit(&self) -> u32 {
        self.sample_count_upper_bound().min(SAMPLE_COUNT_INPUT_LIMIT)
    }

    /// Übernimmt die aktuelle Abtast-Einstellung als Startwerte.
    pub fn remember_sampling(&mut self, sample_count: u32, interpolation: InterpolationStyle) {
        self.default_sample_count = self.clamp_sample_count(sample_count);
        self.interpolation = interpolation;
    }
}
