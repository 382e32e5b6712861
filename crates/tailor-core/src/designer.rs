use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, info};

use crate::color::GarmentColor;
use crate::config::{DesignerConfig, PlacementConfig};
use crate::face::Face;
use crate::geometry::{Point, SurfaceRect};
use crate::gesture::{GestureController, GestureError};
use crate::notice::Notice;
use crate::overlay::{ClockIds, IdGenerator, Overlay, OverlayId, OverlayImage, OverlayPatch};
use crate::removal::{GateState, RemovalGate, RemovalOutcome, RemovalRequest, RemovalTier};
use crate::store::OverlayStore;

/// Editing session for one garment: overlays on both faces, the garment
/// color, the pointer gesture in progress and the background-removal gate.
pub struct Designer {
    store: OverlayStore,
    color: GarmentColor,
    gestures: GestureController,
    removal: RemovalGate,
    ids: Box<dyn IdGenerator>,
    placement: PlacementConfig,
    tier: RemovalTier,
    notices: VecDeque<Notice>,
}

impl Default for Designer {
    fn default() -> Self {
        Self::new(&DesignerConfig::default())
    }
}

impl Designer {
    pub fn new(config: &DesignerConfig) -> Self {
        Self::with_ids(config, Box::new(ClockIds::default()))
    }

    /// Build a session with an injected id generator.
    pub fn with_ids(config: &DesignerConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store: OverlayStore::new(),
            color: config.garment.color,
            gestures: GestureController::new(),
            removal: RemovalGate::new(),
            ids,
            placement: config.placement.clone(),
            tier: config.removal.tier,
            notices: VecDeque::new(),
        }
    }

    // -- View state -------------------------------------------------------

    pub fn active_face(&self) -> Face {
        self.store.active()
    }

    pub fn set_active_face(&mut self, face: Face) {
        if face != self.store.active() {
            debug!(%face, "Switching view");
        }
        self.store.set_active(face);
    }

    pub fn color(&self) -> GarmentColor {
        self.color
    }

    pub fn set_color(&mut self, color: GarmentColor) {
        self.color = color;
    }

    pub fn tier(&self) -> RemovalTier {
        self.tier
    }

    pub fn set_tier(&mut self, tier: RemovalTier) {
        self.tier = tier;
    }

    // -- Overlays ---------------------------------------------------------

    pub fn overlays(&self, face: Face) -> Arc<[Overlay]> {
        self.store.collection(face)
    }

    pub fn active_overlays(&self) -> Arc<[Overlay]> {
        self.store.active_collection()
    }

    pub fn overlay(&self, id: OverlayId) -> Option<&Overlay> {
        self.store.find(id)
    }

    pub fn store(&self) -> &OverlayStore {
        &self.store
    }

    /// Place a decoded image on `face` at the default position and size.
    pub fn import(&mut self, face: Face, image: OverlayImage) -> OverlayId {
        let id = self.ids.next_id();
        let overlay = Overlay::new(id, image, self.placement.position(), self.placement.size());
        self.store.add(face, overlay);
        info!(%id, %face, "Imported image");
        id
    }

    /// Remove an overlay from the active face. Unknown ids are ignored.
    pub fn remove(&mut self, id: OverlayId) -> bool {
        if self.gestures.active().is_some_and(|g| g.overlay() == id) {
            self.gestures.release();
        }
        self.store.remove(id)
    }

    /// Merge a change into an overlay on the active face.
    pub fn update(&mut self, id: OverlayId, patch: &OverlayPatch) -> bool {
        self.store.update(id, patch)
    }

    // -- Gestures ---------------------------------------------------------

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// Start dragging an overlay on the active face. Unknown ids are ignored.
    pub fn begin_drag(&mut self, id: OverlayId) -> Result<(), GestureError> {
        match self.store.find(id) {
            Some(overlay) => self.gestures.begin_drag(overlay),
            None => Ok(()),
        }
    }

    /// Start resizing an overlay on the active face from a screen-space pointer.
    pub fn begin_resize(&mut self, id: OverlayId, pointer: Point) -> Result<(), GestureError> {
        match self.store.find(id) {
            Some(overlay) => self.gestures.begin_resize(overlay, pointer),
            None => Ok(()),
        }
    }

    /// Feed a pointer move. Returns `true` if an overlay changed.
    pub fn pointer_moved(&mut self, pointer: Point, surface: &SurfaceRect) -> bool {
        match self.gestures.pointer_moved(pointer, surface) {
            Some((id, patch)) => self.store.update(id, &patch),
            None => false,
        }
    }

    pub fn release_gesture(&mut self) {
        self.gestures.release();
    }

    // -- Background removal ----------------------------------------------

    pub fn is_removal_pending(&self) -> bool {
        self.removal.is_pending()
    }

    /// Overlay whose background removal is in flight, if any.
    pub fn pending_removal(&self) -> Option<OverlayId> {
        match self.removal.state() {
            GateState::Pending { overlay, .. } => Some(overlay),
            GateState::Idle => None,
        }
    }

    /// Flip between the original and processed image of an overlay.
    ///
    /// When no processed variant exists yet this issues a removal request
    /// instead, which the caller must run and hand back to
    /// [`complete_removal`](Self::complete_removal).
    pub fn toggle_background(&mut self, id: OverlayId) -> Option<RemovalRequest> {
        let overlay = self.store.find(id)?;
        if overlay.has_processed() {
            let show = !overlay.show_processed;
            self.store.update(id, &OverlayPatch::show_processed(show));
            return None;
        }
        self.request_removal(id)
    }

    /// Admit a removal request for an overlay on the active face.
    ///
    /// Returns `None` if the overlay is unknown, or if another request is in
    /// flight (a busy notice is queued in that case).
    pub fn request_removal(&mut self, id: OverlayId) -> Option<RemovalRequest> {
        let face = self.store.active();
        let image = self.store.find(id)?.original.clone();

        if let Err(busy) = self.removal.try_begin(id, face) {
            debug!(requested = %id, pending = %busy.pending, "Removal rejected");
            self.notices.push_back(Notice::RemovalBusy);
            return None;
        }

        self.notices.push_back(Notice::RemovalPending);
        Some(RemovalRequest {
            overlay: id,
            face,
            image,
            tier: self.tier,
        })
    }

    /// Reconcile a finished removal into the face the request was issued on.
    ///
    /// On failure the overlay keeps its current image. A result for an
    /// overlay removed in the meantime frees the gate and is dropped silently.
    pub fn complete_removal(&mut self, outcome: RemovalOutcome) {
        if !self.removal.finish(outcome.overlay) {
            debug!(overlay = %outcome.overlay, "Ignoring outcome for a request that is not pending");
            return;
        }

        match outcome.result {
            Ok(image) => {
                let patch = OverlayPatch::processed(image);
                if self.store.update_in(outcome.face, outcome.overlay, &patch) {
                    self.notices.push_back(Notice::RemovalSucceeded);
                } else {
                    debug!(overlay = %outcome.overlay, "Overlay is gone, dropping processed image");
                }
            }
            Err(_) => self.notices.push_back(Notice::RemovalFailed),
        }
    }

    // -- Notices ----------------------------------------------------------

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}
