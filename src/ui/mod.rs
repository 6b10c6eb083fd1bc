//! UI-Komponenten: Menü, Gradient-Panel, Status-Bar, Input-Handling, Dialoge.

pub mod dialogs;
pub mod drop_zone;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menü, Panels, Dialoge).
/// Keyboard-Shortcuts und Drag & Drop sind in eigene Dateien extrahiert.
pub mod menu;
pub mod panel;
pub mod status;

pub use dialogs::{flush_clipboard, handle_file_dialogs, show_alert};
pub use drop_zone::{collect_dropped_files, render_drop_hint};
pub use input::InputState;
pub use menu::render_menu;
pub use panel::render_gradient_panel;
pub use status::render_status_bar;
