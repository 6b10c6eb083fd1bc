use crate::core::PointId;
use crate::shared::InterpolationStyle;
use std::path::PathBuf;
use std::sync::Arc;

/// Mutierende App-Commands, die vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Open-Datei-Dialog anfordern
    RequestOpenFileDialog,
    /// Bild von Pfad laden
    LoadImageFile { path: PathBuf },
    /// Bild aus Bytes laden (Typ vom Host deklariert)
    LoadImageBytes {
        name: String,
        mime: Option<String>,
        bytes: Arc<[u8]>,
    },
    /// Container-Größe übernehmen und Overlay neu einpassen
    SetContainerSize { size: glam::Vec2 },
    /// Vorhandenen Punkt selektieren
    SelectPoint { id: PointId },
    /// Neuen Punkt anhängen und selektieren
    AddPoint { pos: glam::Vec2 },
    /// Drag-Lifecycle Start
    BeginDrag,
    /// Drag-Lifecycle Update: selektierten Punkt verschieben
    MoveSelectedPoint { pos: glam::Vec2 },
    /// Drag-Lifecycle Ende
    EndDrag,
    /// Selektierten Punkt löschen
    DeleteSelectedPoint,
    /// Probenanzahl setzen
    SetSampleCount { count: u32 },
    /// Interpolationsart setzen
    SetInterpolation { style: InterpolationStyle },
    /// Kurve neu abtasten
    Resample,
    /// CSS-Verlauf kopieren
    CopyGradient,
    /// RGB-Array kopieren
    CopyRgbArray,
    /// Blockierende Meldung schließen
    DismissAlert,
    /// Anwendung beenden
    RequestExit,
}
