// File: crates/area-core/src/error.rs
// Summary: Error type for path generation.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    #[error("no data points to draw")]
    EmptySeries,
    #[error("data point {index} has a non-finite coordinate")]
    NonFiniteInput { index: usize },
    #[error("maximum {axis} value is zero; percentages are undefined")]
    DegenerateRange { axis: Axis },
    #[error("smoothing ratio {0} outside 0.0..=1.0")]
    InvalidSmoothing(f64),
}
