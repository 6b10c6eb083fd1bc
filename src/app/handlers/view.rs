//! Handler für Container-Größe und Layout.

use crate::app::use_cases;
use crate::app::AppState;

/// Übernimmt die neue Container-Größe.
pub fn set_container_size(state: &mut AppState, size: glam::Vec2) {
    use_cases::layout::set_container_size(state, size);
}
