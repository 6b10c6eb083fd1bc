//! Textur-Utilities für egui.

use crate::core::SourceImage;

/// Erstellt ein `egui::ColorImage` aus dem Quellbild in natürlicher Größe.
pub fn color_image_from_source(image: &SourceImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.pixels().as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn color_image_keeps_size_and_pixels() {
        let mut pixels = RgbaImage::new(2, 1);
        pixels.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        pixels.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        let source = SourceImage::from_rgba(pixels, "2x1").unwrap();

        let color_image = color_image_from_source(&source);

        assert_eq!(color_image.size, [2, 1]);
        assert_eq!(color_image.pixels[0], egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(color_image.pixels[1], egui::Color32::from_rgb(0, 0, 255));
    }
}
