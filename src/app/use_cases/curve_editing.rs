//! Use-Cases für Kontrollpunkte: Selektieren, Hinzufügen, Ziehen, Löschen.
//!
//! Jede Änderung an der Kurve löst sofort ein vollständiges Neu-Abtasten aus.

use super::sampling::resample;
use crate::app::AppState;
use crate::core::PointId;
use glam::Vec2;

/// Selektiert einen vorhandenen Punkt (keine Kurvenänderung).
pub fn select_point(state: &mut AppState, id: PointId) {
    let Some(session) = state.session.as_ref() else {
        return;
    };
    if session.curve.get(id).is_none() {
        log::warn!("Selektion ignoriert: Punkt {} existiert nicht", id);
        return;
    }
    state.selection.selected_point = Some(id);
    log::debug!("Punkt {} selektiert", id);
}

/// Hängt einen neuen Punkt an die Kurve an und selektiert ihn.
pub fn add_point(state: &mut AppState, pos: Vec2) {
    let clamp_extent = state.options.clamp_extent;
    let Some(session) = state.session.as_mut() else {
        log::warn!("Kein Punkt hinzufügbar: kein Bild geladen");
        return;
    };
    let pos = session.overlay.clamp(pos, clamp_extent);
    let id = session.curve.push(pos);
    state.selection.selected_point = Some(id);
    log::debug!(
        "Punkt {} bei ({:.1}, {:.1}) angehängt, {} Punkte",
        id,
        pos.x,
        pos.y,
        session.curve.len()
    );
    resample(state);
}

/// Startet den Drag-Lifecycle für den selektierten Punkt.
pub fn begin_drag(state: &mut AppState) {
    state.selection.dragging = state.selected_point().is_some();
}

/// Verschiebt den selektierten Punkt, begrenzt auf die Overlay-Fläche.
pub fn move_selected_point(state: &mut AppState, pos: Vec2) {
    let Some(id) = state.selection.selected_point else {
        return;
    };
    let clamp_extent = state.options.clamp_extent;
    let Some(session) = state.session.as_mut() else {
        return;
    };
    let pos = session.overlay.clamp(pos, clamp_extent);
    if !session.curve.set_position(id, pos) {
        log::warn!("Verschieben ignoriert: Punkt {} existiert nicht", id);
        return;
    }
    resample(state);
}

/// Beendet den Drag-Lifecycle.
pub fn end_drag(state: &mut AppState) {
    state.selection.dragging = false;
}

/// Löscht den selektierten Punkt.
///
/// Neue Selektion: Vorgänger in Kurvenreihenfolge, sonst der erste Punkt,
/// sonst keine.
pub fn delete_selected_point(state: &mut AppState) {
    let Some(id) = state.selection.selected_point else {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    };
    let Some(session) = state.session.as_mut() else {
        return;
    };
    let Some((index, _)) = session.curve.remove(id) else {
        state.selection.selected_point = None;
        return;
    };

    let next = match index.checked_sub(1) {
        Some(previous) => session.curve.id_at(previous),
        None => session.curve.id_at(0),
    };
    log::info!(
        "Punkt {} gelöscht, {} Punkte verbleiben",
        id,
        session.curve.len()
    );

    state.selection.selected_point = next;
    state.selection.dragging = false;
    resample(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EditorSession;
    use crate::core::{Curve, Overlay, SourceImage};
    use std::sync::Arc;

    fn state_with(points: &[[f32; 2]]) -> AppState {
        let mut state = AppState::new();
        state.session = Some(EditorSession {
            image: Arc::new(SourceImage::from_rgba(image::RgbaImage::new(4, 4), "4x4").unwrap()),
            curve: Curve::from_positions(points.iter().map(|&p| Vec2::from(p))),
            overlay: Overlay::new(Vec2::new(100.0, 100.0), 0.0),
        });
        state
    }

    fn id_at(state: &AppState, index: usize) -> Option<PointId> {
        state.session.as_ref().unwrap().curve.id_at(index)
    }

    #[test]
    fn delete_selects_previous_point() {
        let mut state = state_with(&[[0.0, 0.0], [10.0, 0.0], [20.0, 0.0]]);
        state.selection.selected_point = id_at(&state, 2);

        delete_selected_point(&mut state);

        assert_eq!(state.point_count(), 2);
        assert_eq!(state.selection.selected_point, id_at(&state, 1));
    }

    #[test]
    fn delete_first_selects_new_first() {
        let mut state = state_with(&[[0.0, 0.0], [10.0, 0.0], [20.0, 0.0]]);
        let second = id_at(&state, 1);
        state.selection.selected_point = id_at(&state, 0);

        delete_selected_point(&mut state);

        assert_eq!(state.selection.selected_point, second);
    }

    #[test]
    fn delete_only_point_clears_selection() {
        let mut state = state_with(&[[5.0, 5.0]]);
        state.selection.selected_point = id_at(&state, 0);

        delete_selected_point(&mut state);

        assert_eq!(state.point_count(), 0);
        assert_eq!(state.selection.selected_point, None);

        // weiteres Löschen und Abtasten bleibt folgenlos
        delete_selected_point(&mut state);
        resample(&mut state);
        assert!(state.sampling.samples.is_none());
    }

    #[test]
    fn add_point_appends_and_selects() {
        let mut state = state_with(&[[0.0, 0.0]]);

        add_point(&mut state, Vec2::new(50.0, 60.0));

        assert_eq!(state.point_count(), 2);
        assert_eq!(state.selection.selected_point, id_at(&state, 1));
        assert!(state.sampling.samples.is_some());
    }

    #[test]
    fn drag_is_clamped_to_overlay() {
        let mut state = state_with(&[[0.0, 0.0], [10.0, 10.0]]);
        state.selection.selected_point = id_at(&state, 1);
        begin_drag(&mut state);
        assert!(state.selection.dragging);

        move_selected_point(&mut state, Vec2::new(150.0, -20.0));
        end_drag(&mut state);

        let curve = &state.session.as_ref().unwrap().curve;
        assert_eq!(curve.points()[1].position, Vec2::new(100.0, 0.0));
        assert!(!state.selection.dragging);
    }

    #[test]
    fn begin_drag_without_selection_stays_idle() {
        let mut state = state_with(&[[0.0, 0.0]]);

        begin_drag(&mut state);

        assert!(!state.selection.dragging);
    }
}
