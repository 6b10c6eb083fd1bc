//! Use-Case-Funktionen für Abtastung und Abtast-Einstellungen.

use crate::app::AppState;
use crate::core::{css_linear_gradient, sample_curve, SamplerSettings};
use crate::shared::spline_geometry::flatten;
use crate::shared::InterpolationStyle;

/// Rendert die Kurve neu und tastet sie mit der aktuellen Overlay-Größe ab.
///
/// Bei weniger als zwei Punkten wird nur der Pfad aktualisiert; die letzten
/// Proben und der letzte Verlauf bleiben stehen.
pub fn resample(state: &mut AppState) {
    let Some(session) = state.session.as_ref() else {
        log::debug!("Abtasten übersprungen: kein Bild geladen");
        return;
    };

    let positions = session.curve.positions();
    state.sampling.path = flatten(
        &positions,
        state.sampling.interpolation,
        state.options.samples_per_segment,
    );

    let settings = SamplerSettings {
        sample_count: state.sampling.sample_count as usize,
        interpolation: state.sampling.interpolation,
        samples_per_segment: state.options.samples_per_segment,
    };
    let extent = session.overlay.extent(state.options.mapping_extent);

    let Some(samples) = sample_curve(&session.curve, &session.image, extent, settings) else {
        log::debug!(
            "Abtasten übersprungen: {} Kontrollpunkt(e), mindestens 2 nötig",
            positions.len()
        );
        return;
    };

    let gradient = css_linear_gradient(&samples.colors, &state.options.gradient_direction);
    log::debug!(
        "{} Proben entlang {} Kontrollpunkten abgetastet",
        samples.colors.len(),
        positions.len()
    );

    state.sampling.sample_points = samples.points;
    state.sampling.samples = Some(samples.colors);
    state.sampling.gradient_css = Some(gradient);
}

/// Setzt die Probenanzahl (auf den konfigurierten Bereich begrenzt) und tastet neu ab.
pub fn set_sample_count(state: &mut AppState, requested: u32) {
    let count = state.options.clamp_sample_count(requested);
    if count != requested {
        log::debug!("Probenanzahl {} auf {} begrenzt", requested, count);
    }
    state.sampling.sample_count = count;
    resample(state);
}

/// Setzt die Interpolationsart und tastet neu ab.
pub fn set_interpolation(state: &mut AppState, style: InterpolationStyle) {
    if state.sampling.interpolation != style {
        log::info!("Interpolation: {}", style.label());
    }
    state.sampling.interpolation = style;
    resample(state);
}
