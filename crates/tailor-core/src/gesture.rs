use thiserror::Error;
use tracing::debug;

use crate::geometry::{Point, Size, SurfaceRect};
use crate::overlay::{Overlay, OverlayId, OverlayPatch};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureError {
    #[error("A gesture on overlay {0} is already in progress")]
    Busy(OverlayId),
}

/// The gesture currently holding the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActiveGesture {
    /// Moving an overlay. The overlay's center follows the pointer.
    Dragging { id: OverlayId, size: Size },
    /// Resizing from the bottom-right handle.
    Resizing {
        id: OverlayId,
        start_pointer: Point,
        start_size: Size,
    },
}

impl ActiveGesture {
    pub fn overlay(&self) -> OverlayId {
        match self {
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => *id,
        }
    }
}

/// Turns pointer input into geometry patches for one overlay at a time.
///
/// A gesture is acquired by `begin_*` and held until `release`, which is
/// unconditional. Move events are accepted regardless of where the pointer
/// is, so the pointer may leave the handle (or the surface) mid-gesture.
#[derive(Debug, Default)]
pub struct GestureController {
    active: Option<ActiveGesture>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ActiveGesture> {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_dragging(&self, id: OverlayId) -> bool {
        matches!(self.active, Some(ActiveGesture::Dragging { id: a, .. }) if a == id)
    }

    pub fn is_resizing(&self, id: OverlayId) -> bool {
        matches!(self.active, Some(ActiveGesture::Resizing { id: a, .. }) if a == id)
    }

    /// Start dragging `overlay`. Rejected while another gesture is active.
    pub fn begin_drag(&mut self, overlay: &Overlay) -> Result<(), GestureError> {
        self.acquire(ActiveGesture::Dragging {
            id: overlay.id,
            size: overlay.size,
        })
    }

    /// Start resizing `overlay` from the screen-space `pointer` position.
    pub fn begin_resize(&mut self, overlay: &Overlay, pointer: Point) -> Result<(), GestureError> {
        self.acquire(ActiveGesture::Resizing {
            id: overlay.id,
            start_pointer: pointer,
            start_size: overlay.size,
        })
    }

    /// Translate a pointer move into a patch for the gesture's overlay.
    ///
    /// `pointer` is in screen space; `surface` is the editing surface's
    /// current bounding rectangle in the same space. Returns `None` when no
    /// gesture is active.
    pub fn pointer_moved(
        &self,
        pointer: Point,
        surface: &SurfaceRect,
    ) -> Option<(OverlayId, OverlayPatch)> {
        match self.active? {
            ActiveGesture::Dragging { id, size } => {
                Some((id, OverlayPatch::position(drag_position(pointer, surface, size))))
            }
            ActiveGesture::Resizing {
                id,
                start_pointer,
                start_size,
            } => Some((
                id,
                OverlayPatch::size(resize(start_size, start_pointer, pointer)),
            )),
        }
    }

    /// End whatever gesture is active. Safe to call when idle.
    pub fn release(&mut self) -> Option<ActiveGesture> {
        let ended = self.active.take();
        if let Some(g) = ended {
            debug!(overlay = %g.overlay(), "Gesture released");
        }
        ended
    }

    fn acquire(&mut self, gesture: ActiveGesture) -> Result<(), GestureError> {
        if let Some(current) = self.active {
            return Err(GestureError::Busy(current.overlay()));
        }
        debug!(overlay = %gesture.overlay(), ?gesture, "Gesture started");
        self.active = Some(gesture);
        Ok(())
    }
}

/// Top-left position that centers an overlay of `size` under `pointer`,
/// relative to the surface origin. Never left of or above the origin.
pub fn drag_position(pointer: Point, surface: &SurfaceRect, size: Size) -> Point {
    (surface.to_local(pointer) - size.half()).non_negative()
}

/// Size after moving the resize handle from `start_pointer` to `pointer`,
/// floored on both axes.
pub fn resize(start_size: Size, start_pointer: Point, pointer: Point) -> Size {
    let delta = pointer - start_pointer;
    Size::new(start_size.width + delta.x, start_size.height + delta.y).clamped()
}
