//! Bez Gradient Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DroppedImage, EditorSession, UiState,
    ViewState,
};
pub use core::{
    css_linear_gradient, rgb_array_json, Curve, ImageLoadError, Overlay, OverlayExtent, PointId,
    Rgb, SampleSet, SourceImage,
};
pub use shared::{EditorOptions, InterpolationStyle, RenderScene};
