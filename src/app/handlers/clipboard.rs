//! Handler für Zwischenablage-Ausgaben.

use crate::app::use_cases;
use crate::app::AppState;

/// Kopiert den CSS-Verlauf.
pub fn copy_gradient(state: &mut AppState) {
    use_cases::clipboard::copy_gradient(state);
}

/// Kopiert das RGB-Array.
pub fn copy_rgb_array(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::clipboard::copy_rgb_array(state)
}
