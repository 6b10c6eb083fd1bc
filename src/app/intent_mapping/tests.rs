use crate::app::{AppCommand, AppIntent, AppState, EditorSession};
use crate::core::{Curve, Overlay, SourceImage};
use glam::Vec2;
use image::RgbaImage;
use std::sync::Arc;

use super::map_intent_to_commands;

fn state_with_points(points: &[Vec2]) -> AppState {
    let mut state = AppState::new();
    let image = SourceImage::from_rgba(RgbaImage::new(4, 4), "test").unwrap();
    state.session = Some(EditorSession {
        image: Arc::new(image),
        curve: Curve::from_positions(points.iter().copied()),
        overlay: Overlay::new(Vec2::new(400.0, 400.0), 0.0),
    });
    state
}

#[test]
fn pointer_press_on_empty_area_adds_point_and_starts_drag() {
    let state = state_with_points(&[Vec2::new(10.0, 10.0)]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: Vec2::new(200.0, 200.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::AddPoint { .. }));
    assert!(matches!(commands[1], AppCommand::BeginDrag));
}

#[test]
fn pointer_press_near_point_selects_it() {
    let state = state_with_points(&[Vec2::new(10.0, 10.0), Vec2::new(300.0, 10.0)]);
    let expected = state.session.as_ref().unwrap().curve.id_at(1).unwrap();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: Vec2::new(290.0, 20.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SelectPoint { id } if id == expected));
    assert!(matches!(commands[1], AppCommand::BeginDrag));
}

#[test]
fn pointer_press_without_image_is_ignored() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { pos: Vec2::ONE });

    assert!(commands.is_empty());
}

#[test]
fn pointer_drag_without_active_drag_is_ignored() {
    let state = state_with_points(&[Vec2::ZERO]);

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragged { pos: Vec2::ONE });

    assert!(commands.is_empty());
}

#[test]
fn copy_rgb_array_resamples_first() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::CopyRgbArrayRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::Resample));
    assert!(matches!(commands[1], AppCommand::CopyRgbArray));
}

#[test]
fn file_selected_maps_to_load_from_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FileSelected {
            path: "/tmp/bild.png".into(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(
        matches!(&commands[0], AppCommand::LoadImageFile { path } if path.ends_with("bild.png"))
    );
}

#[test]
fn unchanged_container_size_maps_to_nothing() {
    let mut state = AppState::new();
    state.view.container_size = Vec2::new(800.0, 600.0);

    let same = map_intent_to_commands(&state, AppIntent::ContainerResized { size: [800.0, 600.0] });
    let changed =
        map_intent_to_commands(&state, AppIntent::ContainerResized { size: [640.0, 600.0] });

    assert!(same.is_empty());
    assert_eq!(changed.len(), 1);
    assert!(matches!(changed[0], AppCommand::SetContainerSize { .. }));
}
