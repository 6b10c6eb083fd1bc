//! Core-Domänentypen: Quellbild, Overlay, Kurve, Sampler und Ausgabeformate.

pub mod color;
pub mod curve;
pub mod gradient;
/// Bild-Loader mit Typprüfung und Pixel-Puffer
pub mod image_source;
pub mod overlay;
pub mod sampler;

pub use color::{Rgb, SampleSet};
pub use curve::{ControlPoint, Curve, PointId};
pub use gradient::{css_linear_gradient, rgb_array_json, DEFAULT_GRADIENT_DIRECTION};
pub use image_source::{declared_type, is_image_type, ImageLoadError, SourceImage};
pub use overlay::{display_to_pixel, fit_to_container, Overlay, OverlayExtent};
pub use sampler::{sample_curve, CurveSamples, SamplerSettings, MIN_SAMPLE_COUNT};
