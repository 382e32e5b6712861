use tailor_core::notice::Notice;

/// Seconds a finished notice stays on screen.
const TOAST_LIFETIME: f64 = 4.0;

pub struct Toast {
    pub notice: Notice,
    pub shown_at: f64,
}

/// Notices currently on screen.
///
/// The pending notice of a background removal stays up until the request
/// resolves; every other notice expires after [`TOAST_LIFETIME`].
#[derive(Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, notice: Notice, now: f64) {
        if matches!(notice, Notice::RemovalSucceeded | Notice::RemovalFailed) {
            self.toasts.retain(|t| t.notice != Notice::RemovalPending);
        }
        self.toasts.push(Toast {
            notice,
            shown_at: now,
        });
    }

    /// Drop expired toasts. Returns `true` while any toast remains visible.
    pub fn prune(&mut self, now: f64) -> bool {
        self.toasts
            .retain(|t| t.notice == Notice::RemovalPending || now - t.shown_at < TOAST_LIFETIME);
        !self.toasts.is_empty()
    }
}
