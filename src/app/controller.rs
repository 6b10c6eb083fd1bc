//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::LoadImageFile { path } => handlers::file_io::load_path(state, &path),
            AppCommand::LoadImageBytes { name, mime, bytes } => {
                handlers::file_io::load_bytes(state, &name, mime.as_deref(), &bytes)
            }

            // === Layout ===
            AppCommand::SetContainerSize { size } => {
                handlers::view::set_container_size(state, size)
            }

            // === Kurve ===
            AppCommand::SelectPoint { id } => handlers::curve::select(state, id),
            AppCommand::AddPoint { pos } => handlers::curve::add(state, pos),
            AppCommand::BeginDrag => handlers::curve::begin_drag(state),
            AppCommand::MoveSelectedPoint { pos } => handlers::curve::move_selected(state, pos),
            AppCommand::EndDrag => handlers::curve::end_drag(state),
            AppCommand::DeleteSelectedPoint => handlers::curve::delete_selected(state),

            // === Abtastung ===
            AppCommand::SetSampleCount { count } => {
                handlers::sampling::set_sample_count(state, count)
            }
            AppCommand::SetInterpolation { style } => {
                handlers::sampling::set_interpolation(state, style)
            }
            AppCommand::Resample => handlers::sampling::resample(state),

            // === Zwischenablage ===
            AppCommand::CopyGradient => handlers::clipboard::copy_gradient(state),
            AppCommand::CopyRgbArray => handlers::clipboard::copy_rgb_array(state)?,

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::DismissAlert => handlers::dialog::dismiss_alert(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
