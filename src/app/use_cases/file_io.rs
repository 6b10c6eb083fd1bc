//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::{AppState, EditorSession};
use crate::core::{declared_type, Curve, ImageLoadError, Overlay, SourceImage};
use std::path::Path;
use std::sync::Arc;

/// Meldung bei Dateien, deren deklarierter Typ kein Bildtyp ist.
pub const NOT_AN_IMAGE_ALERT: &str = "Please upload an image file";

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Lädt ein Bild von einem Dateipfad.
pub fn load_image_file(state: &mut AppState, path: &Path) {
    match SourceImage::load_from_file(path) {
        Ok(image) => install_image(state, image),
        Err(e) => reject_image(state, e),
    }
}

/// Lädt ein Bild aus Dateiinhalt mit vom Host deklariertem Typ.
pub fn load_image_bytes(
    state: &mut AppState,
    name: &str,
    mime: Option<&str>,
    bytes: &[u8],
) {
    let declared = declared_type(mime, name);
    match SourceImage::from_bytes(bytes, &declared, name) {
        Ok(image) => install_image(state, image),
        Err(e) => reject_image(state, e),
    }
}

/// Ersetzt die Sitzung durch eine neue für `image`.
///
/// Passt das Overlay in den aktuellen Container ein, legt die Startpunkte
/// an, selektiert den ersten Punkt und tastet die Kurve ab.
pub fn install_image(state: &mut AppState, image: SourceImage) {
    let overlay = Overlay::fit(
        state.view.container_size,
        image.size(),
        state.options.overlay_border_px,
    );
    let curve = Curve::with_default_points(
        overlay.client_size(),
        state.options.default_point_count,
        state.options.default_point_band,
        &mut state.rng,
    );

    log::info!(
        "Neue Sitzung: '{}' ({}x{}), Overlay {:.0}x{:.0}, {} Startpunkte",
        image.label(),
        image.width(),
        image.height(),
        overlay.client_size().x,
        overlay.client_size().y,
        curve.len()
    );

    state.selection.selected_point = curve.id_at(0);
    state.selection.dragging = false;
    state.session = Some(EditorSession {
        image: Arc::new(image),
        curve,
        overlay,
    });
    state.sampling.clear_results();
    state.view.image_dirty = true;
    state.ui.status_message = None;

    super::sampling::resample(state);
}

/// Behandelt einen abgelehnten Ladeversuch.
///
/// Die Meldung wird dem Host übergeben, die Sitzung bleibt unverändert.
fn reject_image(state: &mut AppState, error: ImageLoadError) {
    let detail = error_chain(&error);
    log::warn!("Bild abgelehnt: {}", detail);
    state.ui.pending_alert = Some(match error {
        ImageLoadError::NotAnImage { .. } => NOT_AN_IMAGE_ALERT.to_string(),
        _ => detail,
    });
}

/// Verkettet einen Fehler mit allen Ursachen (`a: b: c`).
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
