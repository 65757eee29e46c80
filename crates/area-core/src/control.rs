// File: crates/area-core/src/control.rs
// Summary: Control point solver for cubic bezier segments (Catmull-Rom style tangents).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::geometry::{round2, Line};
use crate::types::Point;

/// How far control points reach from their anchor, as a fraction of the
/// opposing line length. 0 gives straight segments; values past ~0.5 start
/// to overshoot the neighbours.
/// Contract: within `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Smoothing(f64);

impl Smoothing {
    pub const DEFAULT: Smoothing = Smoothing(0.2);
    pub const NONE: Smoothing = Smoothing(0.0);

    pub fn new(ratio: f64) -> Result<Self, CurveError> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(CurveError::InvalidSmoothing(ratio))
        }
    }

    pub const fn ratio(self) -> f64 {
        self.0
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Smoothing {
    type Error = CurveError;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        Self::new(ratio)
    }
}

impl From<Smoothing> for f64 {
    fn from(s: Smoothing) -> f64 {
        s.0
    }
}

/// Position of the control point attached to `current`.
///
/// The tangent follows the opposing line from `previous` to `next`. A missing
/// neighbour (first or last point) is replaced by `current` itself. With
/// `reverse` the point is mirrored behind `current`, which is what the end
/// control point of a segment needs.
pub fn control_point(
    current: Point,
    previous: Option<Point>,
    next: Option<Point>,
    reverse: bool,
    smoothing: Smoothing,
) -> Point {
    let p = previous.unwrap_or(current);
    let n = next.unwrap_or(current);

    let opposed = Line::between(p, n);
    let angle = opposed.angle + if reverse { PI } else { 0.0 };
    let length = opposed.length * smoothing.ratio();

    Point::new(
        round2(current.x + angle.cos() * length),
        round2(current.y + angle.sin() * length),
    )
}
