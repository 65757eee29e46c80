// File: crates/area-core/src/host.rs
// Summary: Host lifecycle adapter (mount / inputs changed / resize / teardown)
// around the pure path generator.
// Notes:
// - The adapter never touches a display. Every draw returns a `Frame` and the
//   host decides where the markup goes.
// - Resize events are only honoured while the `ResizeObservation` handed out
//   by `initialize` is connected.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::curve::{CurveOptions, CurvePath};
use crate::error::CurveError;
use crate::markup::{path_element, STYLE_DEFS};
use crate::types::{Point, Viewport};

/// A drawing surface owned by the host.
pub trait Surface {
    /// Current client size, or `None` when there is nothing to draw on.
    fn client_size(&self) -> Option<Viewport>;
}

impl Surface for Viewport {
    fn client_size(&self) -> Option<Viewport> {
        Some(*self)
    }
}

impl<S: Surface> Surface for Option<S> {
    fn client_size(&self) -> Option<Viewport> {
        self.as_ref().and_then(Surface::client_size)
    }
}

/// Inputs supplied by the host on every update.
#[derive(Clone, Debug)]
pub struct ChartProps {
    /// Compared by identity, not by value.
    pub points: Arc<[Point]>,
    /// Requested width attribute. It reaches the curve only through a resize.
    pub width: f64,
}

impl ChartProps {
    pub fn new(points: impl Into<Arc<[Point]>>) -> Self {
        Self { points: points.into(), width: crate::types::WIDTH }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

/// Output of one draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Style definitions; only present on the first frame after mount.
    pub defs: Option<&'static str>,
    /// Path data for the `d` attribute.
    pub d: String,
}

impl Frame {
    pub fn path_element(&self) -> String {
        path_element(&self.d)
    }

    /// Everything the host has to inject for this frame.
    pub fn markup(&self) -> String {
        match self.defs {
            Some(defs) => format!("{defs}\n{}", self.path_element()),
            None => self.path_element(),
        }
    }
}

/// Resize subscription handle. Dropping it disconnects as well.
#[derive(Debug)]
pub struct ResizeObservation {
    connected: Arc<AtomicBool>,
}

impl ResizeObservation {
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    pub fn disconnect(self) {}
}

impl Drop for ResizeObservation {
    fn drop(&mut self) {
        self.connected.store(false, Ordering::Release);
    }
}

pub struct AreaChart<S: Surface> {
    props: ChartProps,
    generator: CurvePath,
    surface: Option<S>,
    viewport: Option<Viewport>,
    observing: Option<Arc<AtomicBool>>,
    defs_emitted: bool,
    last_path: Option<String>,
}

impl<S: Surface> AreaChart<S> {
    pub fn new(props: ChartProps, options: CurveOptions) -> Self {
        Self {
            props,
            generator: CurvePath::new(options),
            surface: None,
            viewport: None,
            observing: None,
            defs_emitted: false,
            last_path: None,
        }
    }

    /// Mount on `surface`: draw once and start observing resizes.
    ///
    /// The observation is returned even when the first draw fails, so a later
    /// resize or data change can still recover.
    pub fn initialize(&mut self, surface: S) -> (ResizeObservation, Result<Option<Frame>, CurveError>) {
        self.surface = Some(surface);
        self.viewport = None;
        self.defs_emitted = false;

        let connected = Arc::new(AtomicBool::new(true));
        self.observing = Some(Arc::clone(&connected));
        tracing::debug!("area chart mounted");

        (ResizeObservation { connected }, self.draw())
    }

    /// Host props changed. Redraws only when the points sequence is a different one.
    pub fn on_inputs_changed(&mut self, props: ChartProps) -> Result<Option<Frame>, CurveError> {
        let changed = !Arc::ptr_eq(&self.props.points, &props.points);
        self.props = props;
        if !changed {
            tracing::trace!("props changed, points unchanged; skipping redraw");
            return Ok(None);
        }
        self.draw()
    }

    /// The observed surface now measures `viewport`.
    pub fn on_resize(&mut self, viewport: Viewport) -> Result<Option<Frame>, CurveError> {
        if !self.is_observing() {
            tracing::trace!(?viewport, "resize after teardown ignored");
            return Ok(None);
        }
        tracing::debug!(width = viewport.width, height = viewport.height, "surface resized");
        self.viewport = Some(viewport);
        self.draw()
    }

    /// Stop observing and release the surface. The last path stays readable.
    pub fn teardown(&mut self, observation: ResizeObservation) {
        observation.disconnect();
        self.observing = None;
        self.surface = None;
        self.viewport = None;
        tracing::debug!("area chart unmounted");
    }

    pub fn is_observing(&self) -> bool {
        self.observing.as_ref().is_some_and(|c| c.load(Ordering::Acquire))
    }

    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    /// Path data of the last successful draw.
    pub fn last_path(&self) -> Option<&str> {
        self.last_path.as_deref()
    }

    fn draw(&mut self) -> Result<Option<Frame>, CurveError> {
        let Some(measured) = self.surface.as_ref().and_then(Surface::client_size) else {
            tracing::debug!("no render target; draw skipped");
            return Ok(None);
        };
        let viewport = self.viewport.unwrap_or(measured);

        let d = self.generator.generate(&self.props.points, viewport)?;
        let defs = if self.defs_emitted {
            None
        } else {
            self.defs_emitted = true;
            Some(STYLE_DEFS)
        };
        self.last_path = Some(d.clone());
        Ok(Some(Frame { defs, d }))
    }
}
