// File: crates/area-core/tests/path.rs
// Purpose: Serialized path data (golden sample), command structure, and markup wrapping.

use area_core::path::serialize;
use area_core::{
    commands, fragment, path_data, svg_document, CurveOptions, CurvePath, PathCommand, Point, Smoothing,
    Viewport, STYLE_DEFS,
};

const SAMPLE_D: &str = "M 0,60 C 0,48 -8,2.4 0,0 C 8,-2.4 24,42 40,48 C 56,54 64,30 80,30 \
C 96,30 104,48 120,48 C 136,48 144,30 160,30 C 176,30 192,42 200,48 C 208,54 200,57.6 200,60";

fn sample() -> Vec<Point> {
    [(0.0, 100.0), (20.0, 20.0), (40.0, 50.0), (60.0, 20.0), (80.0, 50.0), (100.0, 20.0)]
        .into_iter()
        .map(Point::from)
        .collect()
}

#[test]
fn golden_sample_path() {
    let d = CurvePath::default().generate(&sample(), Viewport::new(200.0, 60.0)).expect("generate");
    assert_eq!(d, SAMPLE_D);
}

#[test]
fn one_move_then_curves() {
    let curve = CurvePath::default();
    let cmds = curve.commands(&sample(), Viewport::new(200.0, 60.0)).unwrap();
    assert_eq!(cmds.len(), 8);
    assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
    assert!(cmds[1..].iter().all(|c| matches!(c, PathCommand::CurveTo { .. })));

    let d = serialize(&cmds);
    assert_eq!(d.matches('M').count(), 1);
    assert_eq!(d.matches('C').count(), 7);
}

#[test]
fn single_data_point_still_draws() {
    let d = CurvePath::default().generate(&[Point::new(50.0, 10.0)], Viewport::new(100.0, 100.0)).unwrap();
    assert_eq!(d, "M 0,100 C 20,80 80,0 100,0 C 120,0 100,80 100,100");
}

#[test]
fn curve_to_formats_all_three_pairs() {
    let c = PathCommand::CurveTo {
        c1: Point::new(1.5, -0.0),
        c2: Point::new(2.0, 3.25),
        to: Point::new(40.00000000000001, 48.0),
    };
    assert_eq!(c.to_string(), "C 1.5,0 2,3.25 40.00000000000001,48");
    assert_eq!(PathCommand::MoveTo(Point::new(0.0, 60.0)).to_string(), "M 0,60");
}

#[test]
fn short_inputs() {
    assert!(commands(&[], Smoothing::DEFAULT).is_empty());
    assert_eq!(path_data(&[], Smoothing::DEFAULT), "");
    assert_eq!(path_data(&[Point::new(3.0, 4.0)], Smoothing::DEFAULT), "M 3,4");
}

#[test]
fn zero_smoothing_gives_straight_segments() {
    let opts = CurveOptions { smoothing: Smoothing::NONE, ..CurveOptions::default() };
    let cmds = CurvePath::new(opts).commands(&[Point::new(50.0, 10.0)], Viewport::new(100.0, 100.0)).unwrap();
    let mut prev = None;
    for c in cmds {
        match c {
            PathCommand::MoveTo(p) => prev = Some(p),
            PathCommand::CurveTo { c1, c2, to } => {
                assert_eq!(Some(c1), prev);
                assert_eq!(c2, to);
                prev = Some(to);
            }
        }
    }
}

#[test]
fn options_from_partial_json() {
    let opts = CurveOptions::from_json(r#"{ "degenerate": "clamp" }"#).expect("parse");
    assert_eq!(opts.smoothing, Smoothing::DEFAULT);
    assert_eq!(opts.degenerate, area_core::DegeneratePolicy::Clamp);

    assert!(CurveOptions::from_json(r#"{ "smoothing": 3.0 }"#).is_err());
    assert_eq!(CurveOptions::from_json("{}").unwrap(), CurveOptions::default());
}

#[test]
fn degenerate_output_is_explicit() {
    let flat = [Point::new(10.0, 0.0), Point::new(20.0, 0.0)];
    let vp = Viewport::new(100.0, 50.0);

    assert!(CurvePath::default().generate(&flat, vp).is_err());

    let propagate = CurveOptions { degenerate: area_core::DegeneratePolicy::Propagate, ..Default::default() };
    let d = CurvePath::new(propagate).generate(&flat, vp).unwrap();
    assert!(d.contains("NaN"));

    let clamp = CurveOptions { degenerate: area_core::DegeneratePolicy::Clamp, ..Default::default() };
    let d = CurvePath::new(clamp).generate(&flat, vp).unwrap();
    assert!(!d.contains("NaN"));
}

#[test]
fn markup_wraps_path_data() {
    let f = fragment("M 0,0");
    assert!(f.starts_with(STYLE_DEFS));
    assert!(f.contains(r#"<path d="M 0,0" fill="url(#gradient)" stroke="grey" marker-mid="url(#dot)"/>"#));

    let doc = svg_document(Viewport::new(200.0, 60.0), "M 0,0");
    assert!(doc.starts_with(r#"<svg version="1.1" width="200" height="60" xmlns="http://www.w3.org/2000/svg">"#));
    assert!(doc.trim_end().ends_with("</svg>"));
    assert_eq!(doc.matches("<linearGradient").count(), 1);
}
