use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use image::RgbaImage;

use crate::geometry::{Point, Size};

/// Session-unique overlay identity. Later overlays get larger ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(pub u64);

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source of overlay ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> OverlayId;
}

/// Millisecond-timestamp ids, bumped past the previous id when two overlays
/// are created within the same millisecond (or the clock steps back).
#[derive(Debug, Default)]
pub struct ClockIds {
    last: u64,
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> OverlayId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last = now.max(self.last + 1);
        OverlayId(self.last)
    }
}

/// Deterministic ids counting up from a starting value.
#[derive(Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> OverlayId {
        let id = OverlayId(self.next);
        self.next += 1;
        id
    }
}

/// A decoded, displayable image together with the bytes it was decoded from.
///
/// Both halves are shared, so cloning an overlay never copies pixel data.
#[derive(Clone)]
pub struct OverlayImage {
    pub encoded: Arc<Vec<u8>>,
    pub pixels: Arc<RgbaImage>,
}

impl OverlayImage {
    pub fn new(encoded: Vec<u8>, pixels: RgbaImage) -> Self {
        Self {
            encoded: Arc::new(encoded),
            pixels: Arc::new(pixels),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// True when both images share the same pixel buffer.
    pub fn same_as(&self, other: &OverlayImage) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for OverlayImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        f.debug_struct("OverlayImage")
            .field("encoded_len", &self.encoded.len())
            .field("dimensions", &format_args!("{w}x{h}"))
            .finish()
    }
}

/// One image placed on a garment face.
#[derive(Clone, Debug)]
pub struct Overlay {
    pub id: OverlayId,
    pub original: OverlayImage,
    /// Background-removed variant, once the service has produced one.
    pub processed: Option<OverlayImage>,
    /// Selects the processed variant for display when it exists.
    pub show_processed: bool,
    /// Top-left corner, relative to the editing surface origin. Both
    /// coordinates are non-negative.
    pub position: Point,
    pub size: Size,
}

impl Overlay {
    pub fn new(id: OverlayId, original: OverlayImage, position: Point, size: Size) -> Self {
        Self {
            id,
            original,
            processed: None,
            show_processed: false,
            position: position.non_negative(),
            size: size.clamped(),
        }
    }

    /// The image currently shown. Falls back to the original when the flag is
    /// set but no processed variant exists.
    pub fn displayed(&self) -> &OverlayImage {
        match (&self.processed, self.show_processed) {
            (Some(processed), true) => processed,
            _ => &self.original,
        }
    }

    pub fn is_showing_processed(&self) -> bool {
        self.show_processed && self.processed.is_some()
    }

    pub fn has_processed(&self) -> bool {
        self.processed.is_some()
    }

    /// Center of the overlay in surface coordinates.
    pub fn center(&self) -> Point {
        self.position + self.size.half()
    }

    /// Whether a surface-relative point falls inside the overlay.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.position.x
            && p.y >= self.position.y
            && p.x <= self.position.x + self.size.width
            && p.y <= self.position.y + self.size.height
    }

    /// Merge a partial change. Returns `true` if any field was supplied.
    pub fn apply(&mut self, patch: &OverlayPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        if let Some(position) = patch.position {
            self.position = position.non_negative();
        }
        if let Some(size) = patch.size {
            self.size = size.clamped();
        }
        if let Some(ref processed) = patch.processed {
            self.processed = Some(processed.clone());
        }
        if let Some(show) = patch.show_processed {
            self.show_processed = show;
        }
        true
    }
}

/// Partial change to an overlay. `None` fields are left untouched.
///
/// A patch cannot clear `processed`; the background-removed variant lives for
/// the rest of the session.
#[derive(Clone, Debug, Default)]
pub struct OverlayPatch {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub processed: Option<OverlayImage>,
    pub show_processed: Option<bool>,
}

impl OverlayPatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn show_processed(show: bool) -> Self {
        Self {
            show_processed: Some(show),
            ..Default::default()
        }
    }

    /// Install a processed variant and switch the display to it.
    pub fn processed(image: OverlayImage) -> Self {
        Self {
            processed: Some(image),
            show_processed: Some(true),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.size.is_none()
            && self.processed.is_none()
            && self.show_processed.is_none()
    }
}
