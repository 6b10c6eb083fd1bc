//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{MarkerView, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let Some(session) = state.session.as_ref() else {
        return RenderScene {
            options: state.options.clone(),
            ..Default::default()
        };
    };

    let selected = state.selection.selected_point;
    let markers = session
        .curve
        .points()
        .iter()
        .map(|p| MarkerView {
            id: p.id,
            position: p.position,
            selected: Some(p.id) == selected,
        })
        .collect();

    RenderScene {
        image_size: Some(session.image.size()),
        overlay_size: session.overlay.client_size(),
        overlay_border: session.overlay.border(),
        path: state.sampling.path.clone(),
        markers,
        sample_points: state.sampling.sample_points.clone(),
        gradient_colors: state
            .sampling
            .samples
            .as_ref()
            .map(|s| s.colors().to_vec())
            .unwrap_or_default(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::use_cases::file_io::install_image;
    use crate::app::AppState;
    use crate::core::SourceImage;
    use glam::Vec2;

    #[test]
    fn build_without_image_is_empty() {
        let state = AppState::new();

        let scene = build(&state);

        assert!(!scene.has_image());
        assert!(scene.markers.is_empty());
        assert!(scene.path.is_empty());
    }

    #[test]
    fn build_marks_only_selected_point() {
        let mut state = AppState::new();
        state.view.container_size = Vec2::new(700.0, 700.0);
        install_image(
            &mut state,
            SourceImage::from_rgba(image::RgbaImage::new(10, 10), "10x10").unwrap(),
        );

        let scene = build(&state);

        assert_eq!(scene.image_size, Some([10, 10]));
        assert_eq!(scene.markers.len(), 4);
        assert!(scene.markers[0].selected);
        assert_eq!(scene.markers.iter().filter(|m| m.selected).count(), 1);
        assert_eq!(scene.sample_points.len(), scene.gradient_colors.len());
        assert!(!scene.path.is_empty());
    }
}
