use crate::shared::InterpolationStyle;
use std::path::PathBuf;
use std::sync::Arc;

/// Vom Host gelieferte Datei aus Drag & Drop.
#[derive(Debug, Clone)]
pub struct DroppedImage {
    /// Dateiname (für Logs und Typableitung)
    pub name: String,
    /// Deklarierter MIME-Typ, falls der Host ihn kennt
    pub mime: Option<String>,
    /// Dateiinhalt (Web-Hosts)
    pub bytes: Option<Arc<[u8]>>,
    /// Dateipfad (native Hosts)
    pub path: Option<PathBuf>,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei wurde im Dialog ausgewählt
    FileSelected { path: String },
    /// Datei wurde auf das Fenster gezogen
    FileDropped { file: DroppedImage },
    /// Bild-Container hat seine Größe geändert
    ContainerResized { size: [f32; 2] },
    /// Primärtaste im Overlay gedrückt (Overlay-Koordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Zeiger bei gedrückter Primärtaste bewegt (Overlay-Koordinaten)
    PointerDragged { pos: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased,
    /// Selektierten Punkt löschen (Delete/Backspace)
    DeleteSelectedRequested,
    /// Probenanzahl im Eingabefeld geändert
    SampleCountChanged { count: u32 },
    /// Interpolationsart geändert
    InterpolationChanged { style: InterpolationStyle },
    /// Explizit neu abtasten
    ResampleRequested,
    /// Blockierende Meldung wurde bestätigt
    AlertDismissed,
    /// CSS-Verlauf in die Zwischenablage kopieren
    CopyGradientRequested,
    /// RGB-Array in die Zwischenablage kopieren
    CopyRgbArrayRequested,
    /// Anwendung beenden
    ExitRequested,
}
