// File: crates/area-core/src/geometry.rs
// Summary: Lightweight geometry helpers for control point math.

use crate::types::Point;

/// Length and direction of the segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub length: f64,
    /// Radians, as returned by `atan2(dy, dx)`.
    pub angle: f64,
}

impl Line {
    pub fn between(a: Point, b: Point) -> Self {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        Self { length: (dx * dx + dy * dy).sqrt(), angle: dy.atan2(dx) }
    }
}

/// Round to 2 decimals, halves towards positive infinity. `-0` comes back as `0`.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0 + 0.5).floor() / 100.0 + 0.0
}
