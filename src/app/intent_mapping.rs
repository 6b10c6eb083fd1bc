//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use std::path::PathBuf;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadImageFile {
            path: PathBuf::from(path),
        }],
        AppIntent::FileDropped { file } => match (file.bytes, file.path) {
            (Some(bytes), _) => vec![AppCommand::LoadImageBytes {
                name: file.name,
                mime: file.mime,
                bytes,
            }],
            (None, Some(path)) => vec![AppCommand::LoadImageFile { path }],
            (None, None) => {
                log::warn!("Drop ohne Inhalt ignoriert: '{}'", file.name);
                vec![]
            }
        },
        AppIntent::ContainerResized { size } => {
            let size = glam::Vec2::from(size);
            if size == state.view.container_size {
                vec![]
            } else {
                vec![AppCommand::SetContainerSize { size }]
            }
        }
        AppIntent::PointerPressed { pos } => {
            let Some(session) = state.session.as_ref() else {
                return vec![];
            };
            match session.curve.hit_test(pos, state.options.pick_radius_px) {
                Some(id) => vec![AppCommand::SelectPoint { id }, AppCommand::BeginDrag],
                None => vec![AppCommand::AddPoint { pos }, AppCommand::BeginDrag],
            }
        }
        AppIntent::PointerDragged { pos } => {
            if state.selection.dragging {
                vec![AppCommand::MoveSelectedPoint { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => {
            if state.selection.dragging {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedPoint],
        AppIntent::SampleCountChanged { count } => vec![AppCommand::SetSampleCount { count }],
        AppIntent::InterpolationChanged { style } => {
            vec![AppCommand::SetInterpolation { style }]
        }
        AppIntent::ResampleRequested => vec![AppCommand::Resample],
        AppIntent::AlertDismissed => vec![AppCommand::DismissAlert],
        AppIntent::CopyGradientRequested => vec![AppCommand::CopyGradient],
        AppIntent::CopyRgbArrayRequested => vec![AppCommand::Resample, AppCommand::CopyRgbArray],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
