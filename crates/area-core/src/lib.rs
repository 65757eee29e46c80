// File: crates/area-core/src/lib.rs
// Summary: Core library entry point; exports the smoothed area path pipeline.

pub mod types;
pub mod geometry;
pub mod error;
pub mod normalize;
pub mod control;
pub mod path;
pub mod markup;
pub mod curve;
pub mod host;

pub use types::{Point, RenderPoint, Viewport};
pub use error::CurveError;
pub use normalize::{normalize, DegeneratePolicy};
pub use control::{control_point, Smoothing};
pub use path::{commands, path_data, PathCommand};
pub use markup::{fragment, path_element, svg_document, STYLE_DEFS};
pub use curve::{CurveOptions, CurvePath};
pub use host::{AreaChart, ChartProps, Frame, ResizeObservation, Surface};
