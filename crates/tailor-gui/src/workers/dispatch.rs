use std::sync::mpsc;
use std::sync::Arc;

use tailor_core::config::RemovalConfig;
use tailor_core::removal::{BackgroundRemover, RemoveBgClient};
use tracing::warn;

use crate::messages::{WorkerCommand, WorkerResult};

use super::{import, removal};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    config: RemovalConfig,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("tailor-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, config);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    config: RemovalConfig,
) {
    let remover: Option<Arc<dyn BackgroundRemover>> = match RemoveBgClient::from_config(&config) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("Background removal unavailable: {e}");
            send_error(&tx, &ctx, format!("Background removal unavailable: {e}"));
            None
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::ImportFile { path, face } => {
                import::handle_import_file(&path, face, &tx, &ctx);
            }
            WorkerCommand::RemoveBackground { request } => {
                removal::handle_remove_background(request, remover.clone(), &tx, &ctx);
            }
        }
    }
}
