//! Use-Cases für die Ausgabe in die Zwischenablage.
//!
//! Der Text wird im UI-State abgelegt; der Host schreibt ihn im selben
//! Frame in die Zwischenablage.

use crate::app::AppState;
use crate::core::rgb_array_json;

/// Kopiert den zuletzt berechneten CSS-Verlauf.
pub fn copy_gradient(state: &mut AppState) {
    let Some(css) = state.sampling.gradient_css.clone() else {
        log::debug!("Kein Verlauf zum Kopieren vorhanden");
        return;
    };
    log::info!("CSS-Verlauf kopiert ({} Zeichen)", css.len());
    state.ui.pending_clipboard = Some(css);
    state.ui.status_message = Some("CSS linear-gradient copied".to_string());
}

/// Kopiert die zuletzt abgetasteten Farben als JSON-Array von `[r, g, b]`.
pub fn copy_rgb_array(state: &mut AppState) -> anyhow::Result<()> {
    let Some(samples) = state.sampling.samples.as_ref() else {
        log::debug!("Keine Proben zum Kopieren vorhanden");
        return Ok(());
    };
    let json = rgb_array_json(samples)?;
    log::info!("{} RGB-Werte kopiert", samples.len());
    state.ui.pending_clipboard = Some(json);
    state.ui.status_message = Some("RGB values copied".to_string());
    Ok(())
}
