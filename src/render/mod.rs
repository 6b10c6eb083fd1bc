//! Zeichnen der Render-Szene mit dem egui-Painter.

mod curve_renderer;
mod texture;
mod types;

pub use crate::shared::RenderScene;
pub(crate) use curve_renderer::CurveRenderer;
pub use texture::color_image_from_source;
pub use types::{overlay_layout, OverlayLayout};

/// Haupt-Renderer für Bild und Kurven-Overlay.
///
/// Hält die hochgeladene Bildtextur; alles andere wird pro Frame
/// aus der `RenderScene` gezeichnet.
#[derive(Default)]
pub struct Renderer {
    image_texture: Option<egui::TextureHandle>,
    curve_renderer: CurveRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer ohne Bildtextur.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt das Quellbild als Textur hoch (ersetzt eine vorhandene).
    pub fn set_image(&mut self, ctx: &egui::Context, image: &crate::core::SourceImage) {
        let color_image = color_image_from_source(image);
        self.image_texture = Some(ctx.load_texture(
            "source_image",
            color_image,
            egui::TextureOptions::LINEAR,
        ));
        log::debug!(
            "Bildtextur hochgeladen: {}x{}",
            image.width(),
            image.height()
        );
    }

    /// Entfernt die Bildtextur.
    pub fn clear_image(&mut self) {
        self.image_texture = None;
    }

    /// Rendert die komplette Szene in das gegebene Layout.
    pub fn render_scene(&self, painter: &egui::Painter, layout: &OverlayLayout, scene: &RenderScene) {
        if !scene.has_image() {
            return;
        }

        if let Some(texture) = &self.image_texture {
            painter.image(
                texture.id(),
                layout.client_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        if scene.overlay_border > 0.0 {
            painter.rect_stroke(
                layout.client_rect.expand(scene.overlay_border * 0.5),
                0.0,
                egui::Stroke::new(scene.overlay_border, egui::Color32::GRAY),
                egui::StrokeKind::Middle,
            );
        }

        let overlay_painter = painter.with_clip_rect(layout.offset_rect);
        self.curve_renderer
            .render(&overlay_painter, layout.client_rect.min, scene);
    }
}
