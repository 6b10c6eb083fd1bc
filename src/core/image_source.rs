//! Bild-Loader: dekodiert eine Bilddatei in einen Pixel-Puffer in Originalgröße.
//!
//! Der Puffer wird unabhängig von der Anzeigegröße gehalten, damit Farbwerte
//! pixelgenau gelesen werden können.

use image::{GenericImageView, ImageFormat, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

use super::Rgb;

/// Präfix, das ein deklarierter MIME-Typ für Bilder tragen muss.
const IMAGE_MIME_PREFIX: &str = "image/";

/// Fehler beim Einlesen einer Bilddatei.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    /// Der deklarierte Dateityp ist kein Bildtyp
    #[error("'{label}' is not an image file (declared type: '{declared}')")]
    NotAnImage { label: String, declared: String },
    /// Datei konnte nicht gelesen werden
    #[error("could not read '{label}'")]
    Io {
        label: String,
        #[source]
        source: std::io::Error,
    },
    /// Bildinhalt konnte nicht dekodiert werden
    #[error("could not decode image '{label}'")]
    Decode {
        label: String,
        #[source]
        source: image::ImageError,
    },
    /// Bild hat keine Pixel
    #[error("image '{label}' has no pixels")]
    Empty { label: String },
}

/// Ermittelt den deklarierten Dateityp.
///
/// Ein vom Host gelieferter MIME-Typ hat Vorrang. Fehlt er (native Drops,
/// Dateidialog), wird er aus der Dateiendung abgeleitet. Unbekannte Endungen
/// ergeben einen leeren Typ.
pub fn declared_type(mime: Option<&str>, file_name: &str) -> String {
    match mime.map(str::trim).filter(|m| !m.is_empty()) {
        Some(mime) => mime.to_ascii_lowercase(),
        None => ImageFormat::from_path(file_name)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_default(),
    }
}

/// Prüft, ob ein deklarierter Typ ein Bildtyp ist.
pub fn is_image_type(declared: &str) -> bool {
    declared.starts_with(IMAGE_MIME_PREFIX)
}

/// Dekodiertes Quellbild mit wahlfreiem Pixelzugriff.
#[derive(Clone)]
pub struct SourceImage {
    /// RGBA-Pixel in natürlicher Größe
    pixels: RgbaImage,
    /// Herkunft (Dateiname oder Pfad) für Logs und Statusleiste
    label: String,
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("label", &self.label)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl SourceImage {
    /// Lädt ein Bild von der Festplatte. Der Typ wird aus der Dateiendung abgeleitet.
    pub fn load_from_file(path: &Path) -> Result<Self, ImageLoadError> {
        let label = path.display().to_string();
        let declared = declared_type(None, &label);
        Self::check_declared_type(&label, &declared)?;

        let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Io {
            label: label.clone(),
            source,
        })?;
        Self::decode(&bytes, &label)
    }

    /// Dekodiert ein Bild aus Bytes, nachdem der deklarierte Typ geprüft wurde.
    pub fn from_bytes(bytes: &[u8], declared: &str, label: &str) -> Result<Self, ImageLoadError> {
        Self::check_declared_type(label, declared)?;
        Self::decode(bytes, label)
    }

    /// Übernimmt einen bereits dekodierten RGBA-Puffer.
    pub fn from_rgba(pixels: RgbaImage, label: impl Into<String>) -> Result<Self, ImageLoadError> {
        let label = label.into();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(ImageLoadError::Empty { label });
        }
        Ok(Self { pixels, label })
    }

    fn check_declared_type(label: &str, declared: &str) -> Result<(), ImageLoadError> {
        if is_image_type(declared) {
            return Ok(());
        }
        log::warn!("'{}' abgelehnt: deklarierter Typ '{}'", label, declared);
        Err(ImageLoadError::NotAnImage {
            label: label.to_string(),
            declared: declared.to_string(),
        })
    }

    fn decode(bytes: &[u8], label: &str) -> Result<Self, ImageLoadError> {
        // Format über Magic Bytes bestimmen, nicht über die Endung
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|source| ImageLoadError::Io {
                label: label.to_string(),
                source,
            })?;
        if let Some(format) = reader.format() {
            log::debug!("Bildformat erkannt: {:?} für '{}'", format, label);
        }
        let image = reader.decode().map_err(|source| ImageLoadError::Decode {
            label: label.to_string(),
            source,
        })?;

        let (width, height) = image.dimensions();
        log::info!("Bild geladen: {}x{} Pixel von '{}'", width, height, label);

        Self::from_rgba(image.into_rgba8(), label)
    }

    /// Breite in Quellpixeln
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Höhe in Quellpixeln
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Größe als `[Breite, Höhe]`
    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    /// Herkunft des Bildes
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Roh-Puffer (für Textur-Upload)
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Liest die RGB-Farbe eines Pixels; Alpha wird verworfen.
    pub fn pixel_rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_declared_type_prefers_host_mime() {
        assert_eq!(declared_type(Some("image/png"), "foo.txt"), "image/png");
        assert_eq!(declared_type(Some(" Image/JPEG "), "foo"), "image/jpeg");
    }

    #[test]
    fn test_declared_type_falls_back_to_extension() {
        assert_eq!(declared_type(None, "photo.PNG"), "image/png");
        assert_eq!(declared_type(Some(""), "photo.jpg"), "image/jpeg");
        assert_eq!(declared_type(None, "notes.txt"), "");
    }

    #[test]
    fn test_non_image_type_is_rejected_before_decoding() {
        let err = SourceImage::from_bytes(b"hello", "text/plain", "notes.txt").unwrap_err();
        assert!(matches!(err, ImageLoadError::NotAnImage { ref declared, .. } if declared == "text/plain"));
    }

    #[test]
    fn test_corrupt_image_is_decode_error() {
        let err = SourceImage::from_bytes(b"not a png", "image/png", "broken.png").unwrap_err();
        assert!(matches!(
            err,
            ImageLoadError::Decode { .. } | ImageLoadError::Io { .. }
        ));
    }

    #[test]
    fn test_png_roundtrip_keeps_natural_size_and_drops_alpha() {
        let mut source = RgbaImage::new(3, 2);
        source.put_pixel(2, 1, Rgba([10, 20, 30, 0]));
        let bytes = encode_png(&source);

        let image = SourceImage::from_bytes(&bytes, "image/png", "tiny.png").unwrap();
        assert_eq!(image.size(), [3, 2]);
        assert_eq!(image.pixel_rgb(2, 1), Some(Rgb::new(10, 20, 30)));
        assert_eq!(image.pixel_rgb(3, 0), None);
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        let err = SourceImage::from_rgba(RgbaImage::new(0, 4), "empty").unwrap_err();
        assert!(matches!(err, ImageLoadError::Empty { .. }));
    }
}
