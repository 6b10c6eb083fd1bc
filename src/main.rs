//! Bez Gradient Editor.
//!
//! Kurve über ein Bild legen und Farben entlang der Kurve als
//! CSS-Verlauf oder RGB-Array abgreifen.

use eframe::egui;
use bez_gradient_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bez Gradient Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bez Gradient Editor")
                .with_drag_and_drop(true),
            ..Default::default()
        };

        eframe::run_native(
            "Bez Gradient Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            if let Err(e) = self.state.options.save_to_file(&EditorOptions::config_path()) {
                log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ContainerResized { .. }));

        self.process_events(events);

        self.sync_image_upload(ctx);

        ui::flush_clipboard(ctx, &mut self.state.ui);

        // Meldung erst nach dem Frame anzeigen (blockiert bis zur Bestätigung)
        let alert_events = ui::show_alert(&self.state.ui);
        self.process_events(alert_events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state, self.input.hover());
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_gradient_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::collect_dropped_files(ctx));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            events.push(AppIntent::ContainerResized {
                size: [rect.width(), rect.height()],
            });

            let scene = self.controller.build_render_scene(&self.state);
            let layout = scene.has_image().then(|| {
                render::overlay_layout(rect, scene.overlay_size, scene.overlay_border)
            });

            if let Some(layout) = &layout {
                self.renderer.render_scene(ui.painter(), layout, &scene);
            }

            events.extend(ui::render_drop_hint(
                ui,
                rect,
                &response,
                !scene.has_image(),
            ));

            events.extend(self.input.collect_viewport_events(
                ui,
                &response,
                layout.as_ref(),
                self.state.selected_point().is_some(),
            ));
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_image_upload(&mut self, ctx: &egui::Context) {
        if !self.state.view.image_dirty {
            return;
        }
        self.state.view.image_dirty = false;

        if let Some(session) = self.state.session.as_ref() {
            self.renderer.set_image(ctx, &session.image);
            log::info!("Bild in Renderer hochgeladen");
        } else {
            self.renderer.clear_image();
            log::info!("Bild aus Renderer entfernt");
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving() || !i.raw.hovered_files.is_empty())
        {
            ctx.request_repaint();
        }
    }
}
