//! Handler für Abtast-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::InterpolationStyle;

/// Setzt die Probenanzahl.
pub fn set_sample_count(state: &mut AppState, count: u32) {
    use_cases::sampling::set_sample_count(state, count);
}

/// Setzt die Interpolationsart.
pub fn set_interpolation(state: &mut AppState, style: InterpolationStyle) {
    use_cases::sampling::set_interpolation(state, style);
}

/// Tastet die Kurve neu ab.
pub fn resample(state: &mut AppState) {
    use_cases::sampling::resample(state);
}
