use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::MIN_OVERLAY_SIZE;

/// A point (or offset) in surface or screen units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Floor both coordinates at zero.
    pub fn non_negative(self) -> Self {
        Self::new(self.x.max(0.0), self.y.max(0.0))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of an overlay.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Floor both axes at [`MIN_OVERLAY_SIZE`].
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_OVERLAY_SIZE),
            height: self.height.max(MIN_OVERLAY_SIZE),
        }
    }

    /// Offset from the top-left corner to the center.
    pub fn half(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Bounding rectangle of the editing surface, in screen coordinates.
///
/// Overlay positions are relative to `origin`, never to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub origin: Point,
    pub size: Size,
}

impl SurfaceRect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Convert a screen-space point into surface-relative coordinates.
    pub fn to_local(&self, screen: Point) -> Point {
        screen - self.origin
    }

    /// Convert a surface-relative point back to screen space.
    pub fn to_screen(&self, local: Point) -> Point {
        local + self.origin
    }
}
