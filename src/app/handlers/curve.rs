//! Handler für Kontrollpunkt-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointId;

/// Selektiert einen vorhandenen Punkt.
pub fn select(state: &mut AppState, id: PointId) {
    use_cases::curve_editing::select_point(state, id);
}

/// Hängt einen neuen Punkt an.
pub fn add(state: &mut AppState, pos: glam::Vec2) {
    use_cases::curve_editing::add_point(state, pos);
}

/// Startet den Drag-Lifecycle.
pub fn begin_drag(state: &mut AppState) {
    use_cases::curve_editing::begin_drag(state);
}

/// Verschiebt den selektierten Punkt.
pub fn move_selected(state: &mut AppState, pos: glam::Vec2) {
    use_cases::curve_editing::move_selected_point(state, pos);
}

/// Beendet den Drag-Lifecycle.
pub fn end_drag(state: &mut AppState) {
    use_cases::curve_editing::end_drag(state);
}

/// Löscht den selektierten Punkt.
pub fn delete_selected(state: &mut AppState) {
    use_cases::curve_editing::delete_selected_point(state);
}
