//! Datei-Dialoge, Meldungen und Zwischenablage.

use crate::app::{AppIntent, UiState};

/// Dateiendungen, die der Öffnen-Dialog anbietet.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Zeigt eine ausstehende Meldung blockierend an.
pub fn show_alert(ui_state: &UiState) -> Vec<AppIntent> {
    let Some(message) = ui_state.pending_alert.as_deref() else {
        return Vec::new();
    };

    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Bez Gradient Editor")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();

    vec![AppIntent::AlertDismissed]
}

/// Schreibt ausstehenden Text in die System-Zwischenablage.
pub fn flush_clipboard(ctx: &egui::Context, ui_state: &mut UiState) {
    if let Some(text) = ui_state.pending_clipboard.take() {
        ctx.copy_text(text);
    }
}
