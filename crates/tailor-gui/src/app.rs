use std::sync::mpsc;

use tailor_core::config::DesignerConfig;
use tailor_core::designer::Designer;
use tailor_core::face::Face;
use tailor_core::import::IMAGE_EXTENSIONS;
use tailor_core::overlay::OverlayId;
use tailor_core::removal::RemovalRequest;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{TextureCache, ToastState, UIState};
use crate::workers;

pub struct TailorApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub designer: Designer,
    pub ui_state: UIState,
    pub toasts: ToastState,
    pub textures: TextureCache,
}

impl TailorApp {
    pub fn new(ctx: &egui::Context, config: DesignerConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx, ctx.clone(), config.removal.clone());

        Self {
            cmd_tx,
            result_rx,
            designer: Designer::new(&config),
            ui_state: UIState::default(),
            toasts: ToastState::default(),
            textures: TextureCache::default(),
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageImported { path, face, image } => {
                    self.designer.import(face, image);
                    self.ui_state.last_import_dir = path.parent().map(|p| p.to_path_buf());
                }
                WorkerResult::RemovalComplete { outcome } => {
                    if let Err(ref e) = outcome.result {
                        self.ui_state.add_log(format!("ERROR: {e}"));
                    }
                    self.designer.complete_removal(outcome);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Move notices queued by the designer onto the toast stack.
    fn collect_notices(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        for notice in self.designer.drain_notices() {
            self.toasts.push(notice, now);
        }
        if self.toasts.prune(now) {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    fn release_unused_textures(&mut self) {
        let mut live: Vec<OverlayId> = Vec::new();
        for &face in Face::ALL {
            live.extend(self.designer.overlays(face).iter().map(|o| o.id));
        }
        self.textures.retain_overlays(&live);
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn run_removal(&self, request: Option<RemovalRequest>) {
        if let Some(request) = request {
            self.send_command(WorkerCommand::RemoveBackground { request });
        }
    }

    /// Ask for an image file and import it onto the face active right now.
    pub fn open_image_picker(&self) {
        let cmd_tx = self.cmd_tx.clone();
        let face = self.designer.active_face();
        let start_dir = self.ui_state.last_import_dir.clone();
        std::thread::spawn(move || {
            let mut dialog = rfd::FileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }
            if let Some(path) = dialog.pick_file() {
                let _ = cmd_tx.send(WorkerCommand::ImportFile { path, face });
            }
        });
    }
}

impl eframe::App for TailorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::canvas::show(ctx, self);

        self.collect_notices(ctx);
        panels::toasts::show(ctx, self);
        self.release_unused_textures();

        if self.designer.is_removal_pending() || self.designer.gestures().is_active() {
            ctx.request_repaint();
        }

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Tailor")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Tailor");
                        ui.label("Garment Mockup Designer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
