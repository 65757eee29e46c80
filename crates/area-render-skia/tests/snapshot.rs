// File: crates/area-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the sample series at two slider widths to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use area_core::{CurvePath, Point, Viewport};
use area_render_skia::SkiaRenderer;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(width: f64) -> Vec<u8> {
    let data = [(0.0, 100.0), (20.0, 20.0), (40.0, 50.0), (60.0, 20.0), (80.0, 50.0), (100.0, 20.0)]
        .into_iter()
        .map(Point::from)
        .collect::<Vec<_>>();
    SkiaRenderer::new(CurvePath::default())
        .render_to_png_bytes(&data, Viewport::new(width, 60.0))
        .expect("render bytes")
}

#[test]
fn golden_default_width() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/area_200.png");
    write_or_compare(&path, &render_bytes(200.0));
}

#[test]
fn golden_wide() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/area_800.png");
    write_or_compare(&path, &render_bytes(800.0));
}
