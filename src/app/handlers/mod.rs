//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod clipboard;
pub mod curve;
pub mod dialog;
pub mod file_io;
pub mod sampling;
pub mod view;
