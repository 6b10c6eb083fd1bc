//! Handler für Meldungen und Anwendungssteuerung.

use crate::app::AppState;

/// Schließt die aktuelle Meldung.
pub fn dismiss_alert(state: &mut AppState) {
    state.ui.pending_alert = None;
}

/// Fordert das Beenden der Anwendung an.
///
/// Probenanzahl und Interpolation werden als Startwerte übernommen;
/// der Host schreibt die Optionen beim Schließen zurück.
pub fn request_exit(state: &mut AppState) {
    state
        .options
        .remember_sampling(state.sampling.sample_count, state.sampling.interpolation);
    state.should_exit = true;
}
