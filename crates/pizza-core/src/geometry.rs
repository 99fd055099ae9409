// File: crates/pizza-core/src/geometry.rs
// Summary: Lightweight geometry helpers for chart-unit math (center origin, y down, radius 1).

use serde::{Deserialize, Serialize};

/// A point in chart units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along a bearing of `angle_deg` (clockwise from 12 o'clock).
    pub fn polar(radius: f64, angle_deg: f64) -> Self {
        let a = angle_deg.to_radians();
        Self { x: radius * a.sin(), y: -radius * a.cos() }
    }
}

/// Axis-aligned rectangle in chart units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn wrap_deg(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if w >= 360.0 { 0.0 } else { w }
}

/// Rotation (clockwise degrees) that lays text along the tangent at `angle_deg`
/// while keeping it upright. Result is in `[-90, 90)`.
pub fn upright_rotation(angle_deg: f64) -> f64 {
    let a = wrap_deg(angle_deg);
    let r = if a >= 90.0 && a < 270.0 { a - 180.0 } else { a };
    if r >= 270.0 { r - 360.0 } else { r }
}
