// File: crates/area-core/src/path.rs
// Summary: Path serializer; turns render points into SVG path commands (M + C).

use std::fmt;

use crate::control::{control_point, Smoothing};
use crate::types::{Point, RenderPoint};

/// One instruction of the SVG path mini-language, absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    /// Cubic bezier to `to`, leaving the previous point towards `c1` and arriving via `c2`.
    CurveTo { c1: Point, c2: Point, to: Point },
}

/// Shortest round-trip decimal, `-0` written as `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 0.0)
    }
}

struct Pair(Point);

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", Num(self.0.x), Num(self.0.y))
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(p) => write!(f, "M {}", Pair(p)),
            PathCommand::CurveTo { c1, c2, to } => {
                write!(f, "C {} {} {}", Pair(c1), Pair(c2), Pair(to))
            }
        }
    }
}

/// Build the command list: one move-to, then one curve-to per remaining point.
pub fn commands(points: &[RenderPoint], smoothing: Smoothing) -> Vec<PathCommand> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(points.len());
    out.push(PathCommand::MoveTo(first));

    for i in 1..points.len() {
        let to = points[i];
        let from = points[i - 1];
        let before = i.checked_sub(2).map(|k| points[k]);
        let after = points.get(i + 1).copied();

        let c1 = control_point(from, before, Some(to), false, smoothing);
        let c2 = control_point(to, Some(from), after, true, smoothing);
        out.push(PathCommand::CurveTo { c1, c2, to });
    }
    out
}

/// Space-joined path data, ready for a `d` attribute.
pub fn path_data(points: &[RenderPoint], smoothing: Smoothing) -> String {
    serialize(&commands(points, smoothing))
}

pub fn serialize(cmds: &[PathCommand]) -> String {
    cmds.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
