//! Handler für Datei-Operationen (Dialog, Laden per Pfad oder Drop).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Lädt ein Bild aus dem übergebenen Pfad.
pub fn load_path(state: &mut AppState, path: &Path) {
    use_cases::file_io::load_image_file(state, path);
}

/// Lädt ein Bild aus übergebenem Dateiinhalt.
pub fn load_bytes(state: &mut AppState, name: &str, mime: Option<&str>, bytes: &[u8]) {
    use_cases::file_io::load_image_bytes(state, name, mime, bytes);
}
