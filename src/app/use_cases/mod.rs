//! Use-Cases der Application-Layer-Orchestrierung.

pub mod clipboard;
pub mod curve_editing;
pub mod file_io;
pub mod layout;
pub mod sampling;
