// File: crates/area-core/src/markup.rs
// Summary: SVG markup around the path data. Static style defs are kept apart
// from the per-draw `<path>` element so hosts can emit them once.

use crate::types::Viewport;

/// Gradient fill (red at the top fading to black) and the dot marker used on
/// interior vertices.
pub const STYLE_DEFS: &str = r#"<defs>
  <linearGradient id="gradient" x1="0%" y1="0%" x2="0" y2="100%">
    <stop offset="0%" stop-color="red"/>
    <stop offset="100%" stop-color="black"/>
  </linearGradient>
  <marker id="dot" viewBox="-5 -5 10 10" markerWidth="5" markerHeight="5">
    <circle r="5" fill="red"/>
    <circle r="3" fill="black"/>
  </marker>
</defs>"#;

/// The area `<path>` element for already serialized path data.
pub fn path_element(d: &str) -> String {
    format!(r#"<path d="{d}" fill="url(#gradient)" stroke="grey" marker-mid="url(#dot)"/>"#)
}

/// Defs and path in one fragment, for surfaces that are redrawn from scratch.
pub fn fragment(d: &str) -> String {
    format!("{STYLE_DEFS}\n{}", path_element(d))
}

/// Standalone SVG document sized to `viewport`.
pub fn svg_document(viewport: Viewport, d: &str) -> String {
    format!(
        "<svg version=\"1.1\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n{}\n</svg>\n",
        viewport.width,
        viewport.height,
        fragment(d),
    )
}
