// File: crates/demo/src/main.rs
// Summary: Demo host; loads points (CSV/JSON or the built-in sample), mounts an
// AreaChart on a fixed-size surface, and writes SVG documents (plus PNG previews).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use area_core::{svg_document, AreaChart, ChartProps, CurveOptions, CurvePath, Frame, Point, Viewport};
use area_render_skia::SkiaRenderer;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Render a smoothed area chart as SVG")]
struct Args {
    /// Points file (.csv with x,y columns or .json array of {x, y}); built-in sample when omitted
    points: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(short, long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(100..=800))]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 60.0)]
    height: f64,

    /// Curve options as JSON, e.g. {"smoothing": 0.3, "degenerate": "clamp"}
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// Also write PNG previews rendered with Skia
    #[arg(long)]
    png: bool,

    /// Resize the surface from 100 to 800 px in steps of this size, one file per step
    #[arg(long)]
    sweep: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let options = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            CurveOptions::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => CurveOptions::default(),
    };

    let points: Arc<[Point]> = match &args.points {
        Some(path) => load_points(path).with_context(|| format!("failed to load points '{}'", path.display()))?,
        None => sample_points(),
    }
    .into();
    info!(count = points.len(), ?options, "loaded points");
    if points.is_empty() {
        anyhow::bail!("no points loaded; check headers/format.");
    }

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let preview = args.png.then(|| SkiaRenderer::new(CurvePath::new(options)));

    let surface = Viewport::new(args.width as f64, args.height);
    let mut chart = AreaChart::new(ChartProps::new(points.clone()).with_width(args.width as f64), options);
    let (observation, first) = chart.initialize(surface);
    let frame = first?.context("surface has no size to draw on")?;
    emit(&args.out, "area", surface, &frame, &points, preview.as_ref())?;

    if let Some(step) = args.sweep {
        let step = step.max(1) as usize;
        for w in (100u32..=800).step_by(step) {
            let vp = Viewport::new(w as f64, args.height);
            if let Some(frame) = chart.on_resize(vp)? {
                emit(&args.out, &format!("area_w{w}"), vp, &frame, &points, preview.as_ref())?;
            }
        }
    }

    chart.teardown(observation);
    Ok(())
}

fn emit(
    out_dir: &Path,
    stem: &str,
    viewport: Viewport,
    frame: &Frame,
    points: &[Point],
    preview: Option<&SkiaRenderer>,
) -> Result<()> {
    // Each file is a standalone document, so it always carries the defs.
    let svg_path = out_dir.join(format!("{stem}.svg"));
    std::fs::write(&svg_path, svg_document(viewport, &frame.d))
        .with_context(|| format!("writing {}", svg_path.display()))?;
    info!("Wrote {}", svg_path.display());

    if let Some(renderer) = preview {
        let png_path = svg_path.with_extension("png");
        renderer.render_to_png(points, viewport, &png_path)?;
        info!("Wrote {}", png_path.display());
    }
    Ok(())
}

/// The series the slider demo ships with.
fn sample_points() -> Vec<Point> {
    [(0.0, 100.0), (20.0, 20.0), (40.0, 50.0), (60.0, 20.0), (80.0, 50.0), (100.0, 20.0)]
        .into_iter()
        .map(Point::from)
        .collect()
}

fn load_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("json") => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        _ => load_points_csv(path),
    }
}

/// Load an x/y CSV. Rows that fail to parse are skipped with a warning.
fn load_points_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "t", "index"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "v"]).unwrap_or(1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => tracing::warn!(row = row + 1, "skipping unparsable row"),
        }
    }
    Ok(out)
}
