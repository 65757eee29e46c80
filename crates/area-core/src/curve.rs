// File: crates/area-core/src/curve.rs
// Summary: Curve Path Generator; normalize -> control points -> path string.

use serde::{Deserialize, Serialize};

use crate::control::Smoothing;
use crate::error::CurveError;
use crate::normalize::{normalize, DegeneratePolicy};
use crate::path::{commands, serialize, PathCommand};
use crate::types::{Point, RenderPoint, Viewport};

/// Generation options. Every field has a default, so partial JSON works.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    pub smoothing: Smoothing,
    pub degenerate: DegeneratePolicy,
}

impl CurveOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Stateless generator. Same inputs, same output bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurvePath {
    pub options: CurveOptions,
}

impl CurvePath {
    pub fn new(options: CurveOptions) -> Self {
        Self { options }
    }

    pub fn render_points(&self, points: &[Point], viewport: Viewport) -> Result<Vec<RenderPoint>, CurveError> {
        normalize(points, viewport, self.options.degenerate)
    }

    pub fn commands(&self, points: &[Point], viewport: Viewport) -> Result<Vec<PathCommand>, CurveError> {
        let projected = self.render_points(points, viewport)?;
        Ok(commands(&projected, self.options.smoothing))
    }

    /// Path data for the `d` attribute of the area path.
    pub fn generate(&self, points: &[Point], viewport: Viewport) -> Result<String, CurveError> {
        if viewport.is_degenerate() {
            tracing::debug!(?viewport, "degenerate viewport; path collapses to a point");
        }
        let cmds = self.commands(points, viewport)?;
        let d = serialize(&cmds);
        tracing::debug!(points = points.len(), commands = cmds.len(), bytes = d.len(), "generated path");
        Ok(d)
    }
}
