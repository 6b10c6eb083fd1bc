//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Curve, Overlay, PointId, SampleSet, SourceImage};
use crate::shared::{EditorOptions, InterpolationStyle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Sitzung zu genau einer geladenen Bilddatei.
///
/// Wird beim Laden erzeugt und beim Laden der nächsten Datei ersetzt.
pub struct EditorSession {
    /// Dekodiertes Quellbild (Arc für O(1)-Clone in die UI)
    pub image: Arc<SourceImage>,
    /// Kontrollpunkte der Kurve
    pub curve: Curve,
    /// Aktuelle Overlay-Größe über dem angezeigten Bild
    pub overlay: Overlay,
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierter Kontrollpunkt
    pub selected_point: Option<PointId>,
    /// Ob gerade ein Punkt gezogen wird
    pub dragging: bool,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_point: None,
            dragging: false,
        }
    }
}

/// Abtastbezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct SamplingState {
    /// Angefragte Probenanzahl (bereits auf den gültigen Bereich begrenzt)
    pub sample_count: u32,
    /// Aktive Interpolationsart
    pub interpolation: InterpolationStyle,
    /// Gerenderte Kurve des letzten Durchlaufs
    pub path: Vec<Vec2>,
    /// Abtastpunkte des letzten Durchlaufs
    pub sample_points: Vec<Vec2>,
    /// Farben des letzten Durchlaufs
    pub samples: Option<SampleSet>,
    /// CSS-Verlauf des letzten Durchlaufs
    pub gradient_css: Option<String>,
}

impl SamplingState {
    /// Erstellt den Startzustand aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            sample_count: options.clamp_sample_count(options.default_sample_count),
            interpolation: options.interpolation,
            path: Vec::new(),
            sample_points: Vec::new(),
            samples: None,
            gradient_css: None,
        }
    }

    /// Verwirft alle abgeleiteten Ergebnisse (neues Bild).
    pub fn clear_results(&mut self) {
        self.path.clear();
        self.sample_points.clear();
        self.samples = None;
        self.gradient_css = None;
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Größe des Bild-Containers in Pixeln
    pub container_size: Vec2,
    /// Signalisiert, dass die Bildtextur neu hochgeladen werden muss
    pub image_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            container_size: Vec2::ZERO,
            image_dirty: false,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Blockierende Meldung, die der Host anzeigen soll
    pub pending_alert: Option<String>,
    /// Text, den der Host in die Zwischenablage schreiben soll
    pub pending_clipboard: Option<String>,
    /// Temporäre Statusnachricht (z.B. "In Zwischenablage kopiert")
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_file_dialog: false,
            pending_alert: None,
            pending_clipboard: None,
            status_message: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Sitzung (None = kein Bild geladen)
    pub session: Option<EditorSession>,
    /// Selection-State
    pub selection: SelectionState,
    /// Sampling-State
    pub sampling: SamplingState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Zufallsquelle für die Startpunkte der Kurve
    pub rng: StdRng,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            session: None,
            selection: SelectionState::new(),
            sampling: SamplingState::from_options(&options),
            view: ViewState::new(),
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
            rng: StdRng::from_entropy(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.curve.len())
    }

    /// Gibt den aktuell selektierten Punkt zurück, sofern er noch existiert.
    pub fn selected_point(&self) -> Option<PointId> {
        let id = self.selection.selected_point?;
        self.session.as_ref()?.curve.get(id).map(|p| p.id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
