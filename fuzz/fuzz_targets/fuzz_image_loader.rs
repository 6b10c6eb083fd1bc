#![no_main]

use bez_gradient_editor::core::sampler::color_at;
use bez_gradient_editor::SourceImage;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Beliebige Bytes als deklariertes Bild: darf nur Fehler liefern, nie paniken
    if let Ok(image) = SourceImage::from_bytes(data, "image/png", "fuzz") {
        let extent = glam::Vec2::new(image.width() as f32, image.height() as f32);
        let _ = color_at(&image, extent, extent);
        let _ = color_at(&image, glam::Vec2::ZERO, extent);
    }
});
