use std::path::PathBuf;

use tailor_core::face::Face;
use tailor_core::overlay::OverlayImage;
use tailor_core::removal::{RemovalOutcome, RemovalRequest};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read and decode an image file. `face` is fixed when the user picks the file.
    ImportFile { path: PathBuf, face: Face },

    /// Run one admitted background-removal request.
    RemoveBackground { request: RemovalRequest },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageImported {
        path: PathBuf,
        face: Face,
        image: OverlayImage,
    },
    RemovalComplete {
        outcome: RemovalOutcome,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
