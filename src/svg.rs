//! SVG visualization of a gesture trace.
//!
//! Renders a vertical sequence of annotated panels, one per recorded frame,
//! each showing the element with the crop window drawn over it. Useful for
//! eyeballing a sequence of corrections in docs and bug reports.
//!
//! # Example
//!
//! ```
//! use zencrop::{CropFrame, DragStep, Geometry, Size, svg::GestureTrace};
//!
//! let mut frame = CropFrame::new(
//!     Geometry::new(-100.0, -50.0, 800.0, 400.0),
//!     Size::new(400.0, 300.0),
//! )
//! .unwrap();
//!
//! let mut trace = GestureTrace::new();
//! trace.record("start", &frame);
//! frame.drag(DragStep::new(50.0, 10.0));
//! trace.record("drag", &frame);
//!
//! let svg = trace.render();
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::geometry::{Geometry, Size};
use crate::gesture::CropFrame;

// Layout in SVG user units. Each scene is scaled into a PANEL-sized box.
const PANEL: Size = Size::new(300.0, 200.0);
const SPACING: f64 = 50.0;
const CAPTION_H: f64 = 22.0;
const TOP_PAD: f64 = 30.0;

/// One recorded frame.
#[derive(Clone, Debug, PartialEq)]
struct Snapshot {
    label: String,
    bounds: Size,
    geometry: Geometry,
}

impl Snapshot {
    /// Smallest box holding both the container and the element, as
    /// `(x, y, width, height)` in container coordinates.
    fn scene(&self) -> (f64, f64, f64, f64) {
        let g = &self.geometry;
        let x0 = g.left.min(0.0);
        let y0 = g.top.min(0.0);
        let x1 = g.right().max(self.bounds.width);
        let y1 = g.bottom().max(self.bounds.height);
        (x0, y0, x1 - x0, y1 - y0)
    }

    fn annotation(&self) -> String {
        let g = &self.geometry;
        let mut text = format!("at ({}, {})", fmt_num(g.left), fmt_num(g.top));
        if !g.covers(self.bounds) {
            text.push_str(", exposes container");
        }
        text
    }
}

/// A sequence of frame snapshots to render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureTrace {
    snapshots: Vec<Snapshot>,
}

impl GestureTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current geometry and bounds of `frame`.
    pub fn record(&mut self, label: &str, frame: &CropFrame) {
        self.push(label, frame.bounds(), frame.geometry());
    }

    /// Record an arbitrary geometry, e.g. an uncorrected proposal.
    pub fn push(&mut self, label: &str, bounds: Size, geometry: Geometry) {
        self.snapshots.push(Snapshot {
            label: format!(
                "{label}  {}×{}",
                fmt_num(geometry.width),
                fmt_num(geometry.height)
            ),
            bounds,
            geometry,
        });
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Render all snapshots as a complete SVG document.
    pub fn render(&self) -> String {
        render_snapshots(&self.snapshots)
    }
}

/// Uniform factor mapping a scene of `w`×`h` into [`PANEL`].
fn panel_scale(w: f64, h: f64) -> f64 {
    let scene = Size::new(w, h);
    if !scene.is_positive() {
        return 1.0;
    }
    (PANEL.width / w).min(PANEL.height / h)
}

fn render_snapshots(snapshots: &[Snapshot]) -> String {
    if snapshots.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let n = snapshots.len() as f64;
    let total_h = 2.0 * TOP_PAD + n * (CAPTION_H + PANEL.height) + (n - 1.0) * SPACING;
    let total_w = PANEL.width + 2.0 * SPACING;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Colors follow prefers-color-scheme.
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .scene { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .element { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .window { fill: #ffffff; fill-opacity: 0.35; stroke: #d9534f; stroke-width: 2; stroke-dasharray: 5,3; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .scene { fill: #2d2d2d; stroke: #555; }
    .element { fill: #3a72a4; stroke: #5a9fd4; }
    .window { fill: #000000; stroke: #e57373; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
"##,
    );

    svg.push_str(
        r##"<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
</defs>
"##,
    );

    let mut y = TOP_PAD;
    let center_x = total_w / 2.0;

    for (i, snap) in snapshots.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            xml_text(&snap.label)
        ));
        svg.push('\n');
        y += CAPTION_H;

        let (sx, sy, sw, sh) = snap.scene();
        let scale = panel_scale(sw, sh);
        let (pw, ph) = (sw * scale, sh * scale);
        let panel_x = center_x - pw / 2.0;
        let panel_y = y;
        // Container coordinates → panel coordinates.
        let px = |x: f64| panel_x + (x - sx) * scale;
        let py = |y: f64| panel_y + (y - sy) * scale;

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="scene" rx="2"/>"#,
            panel_x, panel_y, pw, ph
        ));
        svg.push('\n');

        let g = &snap.geometry;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="element" rx="1"/>"#,
            px(g.left),
            py(g.top),
            g.width * scale,
            g.height * scale
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="window"/>"#,
            px(0.0),
            py(0.0),
            snap.bounds.width * scale,
            snap.bounds.height * scale
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            panel_y + ph + 14.0,
            xml_text(&snap.annotation())
        ));
        svg.push('\n');

        y += PANEL.height;

        if i < snapshots.len() - 1 {
            let arrow_top = y + 8.0;
            let arrow_bot = y + SPACING - 8.0;
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x, arrow_top, center_x, arrow_bot
            ));
            svg.push('\n');
            y += SPACING;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Whole numbers print without a fraction, others with one decimal.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

fn xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::DragStep;

    const BOUNDS: Size = Size::new(400.0, 300.0);

    fn frame() -> CropFrame {
        CropFrame::new(Geometry::new(-100.0, -50.0, 800.0, 400.0), BOUNDS).unwrap()
    }

    #[test]
    fn empty_trace_is_minimal_document() {
        let svg = GestureTrace::new().render();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("/>"));
    }

    #[test]
    fn one_panel_per_snapshot() {
        let mut f = frame();
        let mut trace = GestureTrace::new();
        trace.record("start", &f);
        f.drag(DragStep::new(-500.0, -200.0));
        trace.record("drag", &f);
        assert_eq!(trace.len(), 2);

        let svg = trace.render();
        assert_eq!(svg.matches(r#"class="element""#).count(), 2);
        assert_eq!(svg.matches(r#"class="window""#).count(), 2);
        // One arrow between two panels.
        assert_eq!(svg.matches(r#"class="arrow""#).count(), 1);
        assert!(svg.contains("start  800×400"));
        assert!(svg.contains("at (-400, -100)"));
    }

    #[test]
    fn uncorrected_proposal_is_flagged() {
        let mut trace = GestureTrace::new();
        trace.push("proposed", BOUNDS, Geometry::new(50.0, 10.0, 800.0, 400.0));
        let svg = trace.render();
        assert!(svg.contains("exposes container"));
    }

    #[test]
    fn scene_spans_element_and_window() {
        let snap = Snapshot {
            label: String::new(),
            bounds: BOUNDS,
            geometry: Geometry::new(50.0, -20.0, 800.0, 400.0),
        };
        assert_eq!(snap.scene(), (0.0, -20.0, 850.0, 400.0));
    }

    #[test]
    fn scene_scaled_into_panel() {
        // 800×400 is width-bound, 200×400 is height-bound.
        assert_eq!(panel_scale(800.0, 400.0), 0.375);
        assert_eq!(panel_scale(200.0, 400.0), 0.5);
        assert_eq!(panel_scale(0.0, 400.0), 1.0);
    }

    #[test]
    fn labels_are_escaped() {
        let mut trace = GestureTrace::new();
        trace.record("a<b & \"c\"", &frame());
        let svg = trace.render();
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
    }

    #[test]
    fn svg_is_balanced() {
        let mut f = frame();
        let mut trace = GestureTrace::new();
        for step in [(10.0, 10.0), (-250.0, -30.0), (-900.0, -900.0)] {
            f.drag(DragStep::new(step.0, step.1));
            trace.record("drag", &f);
        }
        let svg = trace.render();
        assert_eq!(svg.matches("<svg").count(), 1);
        assert_eq!(svg.matches("</svg>").count(), 1);
        assert_eq!(svg.matches("<text").count(), svg.matches("</text>").count());
        assert_eq!(svg.matches("<style>").count(), 1);
    }
}
