//! Viewport-Input-Handling: Maus-Events über dem Overlay → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use crate::render::OverlayLayout;
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Overlay (Drag, Hover)
#[derive(Default)]
pub struct InputState {
    /// Primärtaste wurde über dem Overlay gedrückt und ist noch unten
    pointer_captured: bool,
    /// Letzte Zeigerposition über dem Bild (Overlay-Koordinaten)
    hover: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_captured: false,
            hover: None,
        }
    }

    /// Zeigerposition über dem Bild im letzten Frame.
    pub fn hover(&self) -> Option<Vec2> {
        self.hover
    }

    /// Sammelt Overlay-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Drücken auf dem Overlay erzeugt `PointerPressed`, Bewegung bei
    /// gedrückter Taste `PointerDragged`, Loslassen `PointerReleased`.
    /// Ein Drag darf das Overlay verlassen; die Position wird im
    /// Use-Case begrenzt.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        layout: Option<&OverlayLayout>,
        has_selection: bool,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui, has_selection);

        let Some(layout) = layout else {
            self.pointer_captured = false;
            self.hover = None;
            return events;
        };

        let (pressed, released, down, moved, press_origin, latest) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.delta() != egui::Vec2::ZERO,
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        self.hover = response
            .hover_pos()
            .filter(|p| layout.client_rect.contains(*p))
            .map(|p| layout.to_overlay(p));

        // press_origin() liefert die exakte Klickposition vor der Drag-Schwelle
        if pressed && response.hovered() {
            if let Some(origin) = press_origin.filter(|p| layout.offset_rect.contains(*p)) {
                events.push(AppIntent::PointerPressed {
                    pos: layout.to_overlay(origin),
                });
                self.pointer_captured = true;
            }
        }

        if self.pointer_captured && down && moved {
            if let Some(pos) = latest {
                events.push(AppIntent::PointerDragged {
                    pos: layout.to_overlay(pos),
                });
            }
        }

        if self.pointer_captured && (released || !down) {
            events.push(AppIntent::PointerReleased);
            self.pointer_captured = false;
        }

        events
    }
}
