use std::sync::mpsc;
use std::sync::Arc;

use tailor_core::error::TailorError;
use tailor_core::removal::{perform_removal, BackgroundRemover, RemovalOutcome, RemovalRequest};

use crate::messages::WorkerResult;

use super::send;

/// Run a removal request on its own thread. The designer's gate keeps at most
/// one of these threads alive.
pub(super) fn handle_remove_background(
    request: RemovalRequest,
    remover: Option<Arc<dyn BackgroundRemover>>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some(remover) = remover else {
        send(
            tx,
            ctx,
            WorkerResult::RemovalComplete {
                outcome: RemovalOutcome {
                    overlay: request.overlay,
                    face: request.face,
                    result: Err(TailorError::MissingApiKey),
                },
            },
        );
        return;
    };

    let (overlay, face) = (request.overlay, request.face);
    let thread_tx = tx.clone();
    let thread_ctx = ctx.clone();
    let spawned = std::thread::Builder::new()
        .name("tailor-removal".into())
        .spawn(move || {
            let outcome = perform_removal(remover.as_ref(), &request);
            send(
                &thread_tx,
                &thread_ctx,
                WorkerResult::RemovalComplete { outcome },
            );
        });

    if let Err(e) = spawned {
        send(
            tx,
            ctx,
            WorkerResult::RemovalComplete {
                outcome: RemovalOutcome {
                    overlay,
                    face,
                    result: Err(TailorError::Io(e)),
                },
            },
        );
    }
}
