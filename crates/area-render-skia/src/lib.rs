// File: crates/area-render-skia/src/lib.rs
// Summary: Skia raster preview. Parses the generated path data back with Skia
// and paints the area the way the SVG markup styles it (gradient fill, grey
// stroke, dot markers on interior vertices).

use anyhow::{Context, Result};
use skia_safe as skia;

use area_core::{path_data, CurvePath, Point, RenderPoint, Viewport};

#[derive(Clone, Copy, Debug)]
pub struct PreviewStyle {
    pub background: skia::Color,
    pub gradient_top: skia::Color,
    pub gradient_bottom: skia::Color,
    pub stroke: skia::Color,
    pub stroke_width: f32,
    /// Outer/inner radius of the vertex dots; `None` hides them.
    pub markers: Option<(f32, f32)>,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            background: skia::Color::from_argb(255, 250, 250, 252),
            gradient_top: skia::Color::RED,
            gradient_bottom: skia::Color::BLACK,
            stroke: skia::Color::from_argb(255, 128, 128, 128), // grey
            stroke_width: 1.0,
            // SVG marker is 5x5 user units over a 10 unit viewBox
            markers: Some((2.5, 1.5)),
        }
    }
}

pub struct SkiaRenderer {
    pub curve: CurvePath,
    pub style: PreviewStyle,
}

impl SkiaRenderer {
    pub fn new(curve: CurvePath) -> Self {
        Self { curve, style: PreviewStyle::default() }
    }

    pub fn with_style(mut self, style: PreviewStyle) -> Self {
        self.style = style;
        self
    }

    /// Render to a straight-alpha RGBA8 buffer. Returns (pixels, width, height, row_bytes).
    pub fn render_to_rgba8(&self, points: &[Point], viewport: Viewport) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.paint(points, viewport)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    pub fn render_to_png_bytes(&self, points: &[Point], viewport: Viewport) -> Result<Vec<u8>> {
        let mut surface = self.paint(points, viewport)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        points: &[Point],
        viewport: Viewport,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(points, viewport)?;
        let out = output_png_path.as_ref();
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))?;
        Ok(())
    }

    fn paint(&self, points: &[Point], viewport: Viewport) -> Result<skia::Surface> {
        let projected = self.curve.render_points(points, viewport)?;
        let d = path_data(&projected, self.curve.options.smoothing);
        let path = skia::Path::from_svg(&d).with_context(|| format!("skia rejected path data: {d}"))?;

        let (w, h) = surface_size(viewport);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.style.background);

        draw_area(canvas, &path, h, &self.style);
        if let Some((outer, inner)) = self.style.markers {
            draw_markers(canvas, &projected, outer, inner, &self.style);
        }
        tracing::debug!(width = w, height = h, bytes = d.len(), "painted preview");
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

/// Raster size for a viewport; never below 1x1.
fn surface_size(viewport: Viewport) -> (i32, i32) {
    let px = |v: f64| (v.ceil() as i32).max(1);
    (px(viewport.width), px(viewport.height))
}

fn draw_area(canvas: &skia::Canvas, path: &skia::Path, height: i32, style: &PreviewStyle) {
    let colors = [style.gradient_top, style.gradient_bottom];
    let shader = skia::Shader::linear_gradient(
        (skia::Point::new(0.0, 0.0), skia::Point::new(0.0, height as f32)),
        &colors[..],
        None,
        skia::TileMode::Clamp,
        None,
        None,
    );

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    match shader {
        Some(s) => { fill.set_shader(s); }
        None => { fill.set_color(style.gradient_bottom); }
    }
    canvas.draw_path(path, &fill);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.stroke_width);
    stroke.set_color(style.stroke);
    canvas.draw_path(path, &stroke);
}

/// Dots on every vertex except the first and last, like `marker-mid`.
fn draw_markers(canvas: &skia::Canvas, vertices: &[RenderPoint], outer: f32, inner: f32, style: &PreviewStyle) {
    if vertices.len() < 3 {
        return;
    }
    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_color(style.gradient_top);
    let mut core = skia::Paint::default();
    core.set_anti_alias(true);
    core.set_color(style.gradient_bottom);

    for p in &vertices[1..vertices.len() - 1] {
        let c = (p.x as f32, p.y as f32);
        canvas.draw_circle(c, outer, &ring);
        canvas.draw_circle(c, inner, &core);
    }
}
