use std::sync::Arc;

use tracing::debug;

use crate::face::Face;
use crate::overlay::{Overlay, OverlayId, OverlayPatch};

/// The two face collections and the active-face pointer.
///
/// Collections are never edited in place once published: every mutation
/// installs a fresh `Arc<[Overlay]>`, so a renderer holding the previous
/// snapshot can detect change with [`Arc::ptr_eq`].
///
/// Id lookups by `update`/`remove`/`find` are scoped to the active face. An
/// overlay on the other face is only reachable after switching to it, or via
/// the explicit `*_in` variants.
#[derive(Clone, Debug)]
pub struct OverlayStore {
    front: Arc<[Overlay]>,
    back: Arc<[Overlay]>,
    active: Face,
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self {
            front: Arc::from(Vec::new()),
            back: Arc::from(Vec::new()),
            active: Face::default(),
        }
    }
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Face {
        self.active
    }

    /// Select which collection subsequent operations target. Contents of
    /// both collections are untouched.
    pub fn set_active(&mut self, face: Face) {
        self.active = face;
    }

    /// Snapshot of one face's overlays, bottom to top.
    pub fn collection(&self, face: Face) -> Arc<[Overlay]> {
        Arc::clone(self.slot(face))
    }

    pub fn active_collection(&self) -> Arc<[Overlay]> {
        self.collection(self.active)
    }

    pub fn len(&self, face: Face) -> usize {
        self.slot(face).len()
    }

    pub fn is_empty(&self, face: Face) -> bool {
        self.slot(face).is_empty()
    }

    /// Append to the named face's collection (on top in z-order).
    pub fn add(&mut self, face: Face, overlay: Overlay) {
        debug!(id = %overlay.id, %face, "Adding overlay");
        let slot = self.slot_mut(face);
        let mut next: Vec<Overlay> = slot.to_vec();
        next.push(overlay);
        *slot = Arc::from(next);
    }

    /// Look up an overlay on the active face.
    pub fn find(&self, id: OverlayId) -> Option<&Overlay> {
        self.find_in(self.active, id)
    }

    pub fn find_in(&self, face: Face, id: OverlayId) -> Option<&Overlay> {
        self.slot(face).iter().find(|o| o.id == id)
    }

    /// Merge `patch` into the overlay with `id` on the active face.
    /// Returns `false` (and changes nothing) when the id is not there.
    pub fn update(&mut self, id: OverlayId, patch: &OverlayPatch) -> bool {
        self.update_in(self.active, id, patch)
    }

    pub fn update_in(&mut self, face: Face, id: OverlayId, patch: &OverlayPatch) -> bool {
        let slot = self.slot_mut(face);
        let Some(index) = slot.iter().position(|o| o.id == id) else {
            return false;
        };
        if patch.is_empty() {
            return false;
        }

        let mut next: Vec<Overlay> = slot.to_vec();
        next[index].apply(patch);
        *slot = Arc::from(next);
        true
    }

    /// Delete the overlay with `id` from the active face.
    /// Returns `false` (and changes nothing) when the id is not there.
    pub fn remove(&mut self, id: OverlayId) -> bool {
        self.remove_in(self.active, id)
    }

    pub fn remove_in(&mut self, face: Face, id: OverlayId) -> bool {
        let slot = self.slot_mut(face);
        if !slot.iter().any(|o| o.id == id) {
            return false;
        }

        debug!(%id, %face, "Removing overlay");
        let next: Vec<Overlay> = slot.iter().filter(|o| o.id != id).cloned().collect();
        *slot = Arc::from(next);
        true
    }

    fn slot(&self, face: Face) -> &Arc<[Overlay]> {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }

    fn slot_mut(&mut self, face: Face) -> &mut Arc<[Overlay]> {
        match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};
    use crate::overlay::OverlayImage;

    fn overlay(id: u64) -> Overlay {
        let image = OverlayImage::new(Vec::new(), image::RgbaImage::new(1, 1));
        Overlay::new(
            OverlayId(id),
            image,
            Point::new(0.0, 0.0),
            Size::new(50.0, 50.0),
        )
    }

    #[test]
    fn test_update_replaces_collection_identity() {
        let mut store = OverlayStore::new();
        store.add(Face::Front, overlay(1));
        let before = store.collection(Face::Front);

        assert!(store.update(OverlayId(1), &OverlayPatch::position(Point::new(5.0, 5.0))));
        let after = store.collection(Face::Front);

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before[0].position, Point::new(0.0, 0.0));
        assert_eq!(after[0].position, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_noop_keeps_collection_identity() {
        let mut store = OverlayStore::new();
        store.add(Face::Front, overlay(1));
        let before = store.collection(Face::Front);

        assert!(!store.remove(OverlayId(99)));
        assert!(!store.update(OverlayId(99), &OverlayPatch::show_processed(true)));
        assert!(!store.update(OverlayId(1), &OverlayPatch::default()));

        assert!(Arc::ptr_eq(&before, &store.collection(Face::Front)));
    }

    #[test]
    fn test_update_is_scoped_to_active_face() {
        let mut store = OverlayStore::new();
        store.add(Face::Back, overlay(7));

        assert!(!store.update(OverlayId(7), &OverlayPatch::position(Point::new(1.0, 1.0))));
        assert!(store.find(OverlayId(7)).is_none());

        store.set_active(Face::Back);
        assert!(store.update(OverlayId(7), &OverlayPatch::position(Point::new(1.0, 1.0))));
        assert_eq!(store.find(OverlayId(7)).map(|o| o.position), Some(Point::new(1.0, 1.0)));
    }
}
