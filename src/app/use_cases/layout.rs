//! Use-Case-Funktionen für Container- und Overlay-Größe.

use crate::app::AppState;
use crate::core::Overlay;
use glam::Vec2;

/// Übernimmt eine neue Container-Größe und passt das Overlay neu ein.
///
/// Kontrollpunkte und letzte Proben bleiben unverändert. Die Umrechnung
/// auf Bildpixel nutzt beim nächsten Abtasten die neue Overlay-Größe.
pub fn set_container_size(state: &mut AppState, size: Vec2) {
    let size = size.max(Vec2::ZERO);
    if state.view.container_size == size {
        return;
    }
    state.view.container_size = size;

    let border = state.options.overlay_border_px;
    if let Some(session) = state.session.as_mut() {
        session.overlay = Overlay::fit(size, session.image.size(), border);
        log::debug!(
            "Overlay neu eingepasst: {:.0}x{:.0} in Container {:.0}x{:.0}",
            session.overlay.client_size().x,
            session.overlay.client_size().y,
            size.x,
            size.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::file_io::install_image;
    use crate::core::SourceImage;
    use approx::assert_relative_eq;

    #[test]
    fn resize_refits_overlay_and_keeps_points() {
        let mut state = AppState::new();
        state.view.container_size = Vec2::new(400.0, 200.0);
        install_image(
            &mut state,
            SourceImage::from_rgba(image::RgbaImage::new(2, 1), "2x1").unwrap(),
        );
        let before = state.session.as_ref().unwrap().curve.positions();

        set_container_size(&mut state, Vec2::new(200.0, 400.0));

        let session = state.session.as_ref().unwrap();
        assert_relative_eq!(session.overlay.client_size().x, 200.0);
        assert_relative_eq!(session.overlay.client_size().y, 100.0);
        assert_eq!(session.curve.positions(), before);
    }

    #[test]
    fn resize_without_image_only_stores_size() {
        let mut state = AppState::new();

        set_container_size(&mut state, Vec2::new(640.0, 480.0));

        assert_eq!(state.view.container_size, Vec2::new(640.0, 480.0));
        assert!(state.session.is_none());
    }
}
