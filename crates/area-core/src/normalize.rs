// File: crates/area-core/src/normalize.rs
// Summary: Projects raw data points into pixel space via the 0..100 percentage space.

use serde::{Deserialize, Serialize};

use crate::error::{Axis, CurveError};
use crate::types::{Point, RenderPoint, Viewport, BASELINE_END, BASELINE_START};

/// What to do when the data maximum on an axis is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Fail with `CurveError::DegenerateRange`.
    #[default]
    Reject,
    /// Replace every non-finite percentage with 0.
    Clamp,
    /// Let NaN/infinite coordinates through to the output.
    Propagate,
}

#[inline]
fn percentage(value: f64, max: f64) -> f64 {
    (value / max) * 100.0
}

/// Screen y grows downward, chart values grow upward.
#[inline]
fn flip(percent: f64) -> f64 {
    (100.0 - percent).abs()
}

/// Largest x and y over `points`. Empty input yields `None`.
pub fn maxima(points: &[Point]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some((max_x, max_y))
}

/// Anchor the data to the baseline and project it into `viewport` pixels.
///
/// The result has `points.len() + 2` entries: the baseline start, the data in
/// caller order, then the baseline end. Maxima are taken over the data only.
/// The anchors are already percentages, so they always land at the bottom
/// left and bottom right corners of the viewport whatever the data range.
pub fn normalize(
    points: &[Point],
    viewport: Viewport,
    policy: DegeneratePolicy,
) -> Result<Vec<RenderPoint>, CurveError> {
    if let Some(index) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(CurveError::NonFiniteInput { index });
    }
    let (max_x, max_y) = maxima(points).ok_or(CurveError::EmptySeries)?;

    for (axis, max) in [(Axis::X, max_x), (Axis::Y, max_y)] {
        if max == 0.0 {
            tracing::warn!(%axis, ?policy, "data maximum is zero");
            if policy == DegeneratePolicy::Reject {
                return Err(CurveError::DegenerateRange { axis });
            }
        }
    }

    let settle = |v: f64| {
        if policy == DegeneratePolicy::Clamp && !v.is_finite() { 0.0 } else { v }
    };
    let (wm, hm) = viewport.multipliers();

    let project = |percent: Point| Point::new(percent.x * wm, flip(percent.y) * hm);

    let mut out = Vec::with_capacity(points.len() + 2);
    out.push(project(BASELINE_START));
    out.extend(points.iter().map(|p| {
        project(Point::new(
            settle(percentage(p.x, max_x)),
            settle(percentage(p.y, max_y)),
        ))
    }));
    out.push(project(BASELINE_END));

    tracing::trace!(count = out.len(), max_x, max_y, "normalized points");
    Ok(out)
}
