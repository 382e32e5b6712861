use std::path::Path;
use std::sync::mpsc;

use anyhow::{Context, Result};
use tailor_core::face::Face;
use tailor_core::import::load_image_file;
use tailor_core::overlay::OverlayImage;
use tracing::debug;

use crate::messages::WorkerResult;

use super::{send, send_log};

/// Decode a picked file. Unreadable or undecodable files are dropped without
/// a user-visible notice.
pub(super) fn handle_import_file(
    path: &Path,
    face: Face,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let image = match decode(path) {
        Ok(image) => image,
        Err(e) => {
            debug!("Skipping import: {e:#}");
            return;
        }
    };

    let (w, h) = image.dimensions();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    send_log(tx, ctx, format!("Added {name} ({w}x{h}) to the {face}"));
    send(
        tx,
        ctx,
        WorkerResult::ImageImported {
            path: path.to_path_buf(),
            face,
            image,
        },
    );
}

fn decode(path: &Path) -> Result<OverlayImage> {
    load_image_file(path).with_context(|| format!("Failed to load {}", path.display()))
}
