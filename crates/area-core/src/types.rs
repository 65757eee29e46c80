// File: crates/area-core/src/types.rs
// Summary: Shared types and constants (points, viewport sizes, baseline anchors).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: f64 = 200.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 60.0;

/// A pair of coordinates. Used both for user data and for projected points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A point already projected into pixel space, y flipped so larger values sit higher.
pub type RenderPoint = Point;

/// Baseline anchor prepended to every data sequence (percentage space).
pub const BASELINE_START: Point = Point::new(0.0, 0.0);
/// Baseline anchor appended to every data sequence (percentage space).
pub const BASELINE_END: Point = Point::new(100.0, 0.0);

/// Measured drawing surface size, in pixels.
/// Contract: both fields are finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Negative or non-finite dimensions collapse to 0 (a surface that is not laid out yet).
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: sanitize(width), height: sanitize(height) }
    }

    /// True when nothing visible can be drawn.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Pixels per percentage unit on each axis.
    pub fn multipliers(&self) -> (f64, f64) {
        (self.width / 100.0, self.height / 100.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

fn sanitize(v: f64) -> f64 {
    if !v.is_finite() || v < 0.0 { 0.0 } else { v }
}
