// File: crates/prism-core/src/geometry.rs
// Summary: Lightweight geometry helpers for surface math and polar conversion.

use crate::types::Padding;

/// Axis-aligned rectangle in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area of a surface after subtracting padding.
    pub fn plot_area(width: f64, height: f64, padding: &Padding) -> Self {
        Self::from_ltrb(
            padding.left,
            padding.top,
            width - padding.right,
            height - padding.bottom,
        )
    }

    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Convert a surface point to polar form around `(cx, cy)`.
///
/// Returns `(radius, angle)` where the angle is measured from 12 o'clock,
/// increasing clockwise, normalized to `[0, 2π)`. This is the convention the
/// pie layout assigns span angles in, so the two compose directly.
pub fn polar(cx: f64, cy: f64, x: f64, y: f64) -> (f64, f64) {
    let dx = x - cx;
    let dy = y - cy;
    let radius = dx.hypot(dy);
    let mut angle = dx.atan2(-dy);
    if angle < 0.0 {
        angle += std::f64::consts::TAU;
    }
    // atan2 can land exactly on TAU after the shift; fold it back to 0.
    if angle >= std::f64::consts::TAU {
        angle = 0.0;
    }
    (radius, angle)
}

/// Point at `radius` along `angle` from `(cx, cy)`, same convention as [`polar`].
pub fn point_at(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
