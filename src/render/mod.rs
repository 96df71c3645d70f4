// src/render/mod.rs

//! Turns a graph plus its layout into a vector document.
//!
//! [`build_scene`] does all geometry in PDF points with the origin at the
//! bottom-left corner, already cropped to the drawn content. The backends
//! ([`pdf`], [`svg`]) only serialise a [`Scene`].

pub mod pdf;
pub mod svg;

use crate::config::model::RenderSection;
use crate::errors::{DagkitError, Result};
use crate::graph::WeightedDigraph;
use crate::layout::Layout;
use crate::types::{OutputFormat, RenderStyle};

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;
/// Padding around the tight bounding box (0.1in).
pub const TIGHT_PAD: f64 = 0.1 * POINTS_PER_INCH;
/// Fraction of the canvas kept free on each side before cropping.
const CANVAS_MARGIN: f64 = 0.05;
/// Average Helvetica glyph advance for digits, as a fraction of font size.
const GLYPH_ADVANCE: f64 = 0.556;

/// `#rrggbb` parsed to 0..=1 components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);

    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(DagkitError::ConfigError(format!("bad colour {hex:?}")));
        }
        let channel = |i: usize| -> Result<f64> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|c| c as f64 / 255.0)
                .map_err(|_| DagkitError::ConfigError(format!("bad colour {hex:?}")))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        let c = |f: f64| (f * 255.0).round().clamp(0.0, 255.0) as u8;
        format!("#{:02x}{:02x}{:02x}", c(self.0), c(self.1), c(self.2))
    }
}

/// Resolved drawing parameters for one rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub style: RenderStyle,
    pub canvas: (f64, f64),
    pub node_color: Rgb,
    /// Marker area in points squared.
    pub node_size: f64,
    pub edge_width: f64,
    pub font_size: f64,
    pub arrow_size: f64,
}

impl RenderOptions {
    pub fn from_config(render: &RenderSection, style: RenderStyle) -> Result<Self> {
        let [w, h] = render.canvas_inches;
        Ok(Self {
            style,
            canvas: (w * POINTS_PER_INCH, h * POINTS_PER_INCH),
            node_color: Rgb::from_hex(&render.node_color)?,
            node_size: render.effective_node_size(style),
            edge_width: render.edge_width,
            font_size: render.font_size,
            arrow_size: render.arrow_size,
        })
    }

    pub fn node_radius(&self) -> f64 {
        self.node_size.sqrt() / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Text centered on `at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub at: Point,
    pub text: String,
    pub size: f64,
}

impl Label {
    /// Approximate rendered width.
    pub fn width(&self) -> f64 {
        self.text.chars().count() as f64 * GLYPH_ADVANCE * self.size
    }
}

/// Everything to draw, in back-to-front order: edges, arrowheads, nodes,
/// labels.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub edge_width: f64,
    pub node_color: Rgb,
    pub edges: Vec<Segment>,
    pub arrowheads: Vec<[Point; 3]>,
    pub nodes: Vec<Circle>,
    pub labels: Vec<Label>,
}

/// Lay the graph out on the canvas and crop to a tight bounding box.
pub fn build_scene(graph: &WeightedDigraph, layout: &Layout, opts: &RenderOptions) -> Scene {
    let radius = opts.node_radius();
    let (cw, ch) = opts.canvas;
    let place = canvas_mapping(layout, cw, ch);

    let mut scene = Scene {
        width: cw,
        height: ch,
        edge_width: opts.edge_width,
        node_color: opts.node_color,
        edges: Vec::new(),
        arrowheads: Vec::new(),
        nodes: Vec::new(),
        labels: Vec::new(),
    };

    let labeled = opts.style == RenderStyle::Labeled;

    for edge in graph.edges() {
        let (Some(a), Some(b)) = (layout.get(edge.source), layout.get(edge.target)) else {
            continue;
        };
        let (from, to) = (place(a), place(b));
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f64::EPSILON {
            continue;
        }

        if labeled {
            let (ux, uy) = (dx / len, dy / len);
            let tip = Point {
                x: to.x - ux * radius,
                y: to.y - uy * radius,
            };
            let head_len = (opts.arrow_size * 2.0).min(len / 2.0);
            let half = opts.arrow_size * 0.75;
            let base = Point {
                x: tip.x - ux * head_len,
                y: tip.y - uy * head_len,
            };
            scene.edges.push(Segment { from, to: base });
            scene.arrowheads.push([
                tip,
                Point {
                    x: base.x - uy * half,
                    y: base.y + ux * half,
                },
                Point {
                    x: base.x + uy * half,
                    y: base.y - ux * half,
                },
            ]);
            scene.labels.push(Label {
                at: Point {
                    x: (from.x + to.x) / 2.0,
                    y: (from.y + to.y) / 2.0,
                },
                text: edge.weight.to_string(),
                size: opts.font_size,
            });
        } else {
            scene.edges.push(Segment { from, to });
        }
    }

    for (v, pos) in layout.iter() {
        let center = place(pos);
        scene.nodes.push(Circle { center, radius });
        if labeled {
            scene.labels.push(Label {
                at: center,
                text: v.to_string(),
                size: opts.font_size,
            });
        }
    }

    crop_to_content(&mut scene);
    scene
}

/// Map layout coordinates onto the canvas, keeping a margin on every side.
fn canvas_mapping(layout: &Layout, cw: f64, ch: f64) -> impl Fn((f64, f64)) -> Point {
    let (min_x, min_y, max_x, max_y) = layout.bounds().unwrap_or((0.0, 0.0, 0.0, 0.0));
    let (mx, my) = (cw * CANVAS_MARGIN, ch * CANVAS_MARGIN);
    let (span_x, span_y) = (max_x - min_x, max_y - min_y);

    move |(x, y)| {
        let px = if span_x > 0.0 {
            mx + (x - min_x) / span_x * (cw - 2.0 * mx)
        } else {
            cw / 2.0
        };
        let py = if span_y > 0.0 {
            my + (y - min_y) / span_y * (ch - 2.0 * my)
        } else {
            ch / 2.0
        };
        Point { x: px, y: py }
    }
}

/// Shrink the page to the drawn content plus [`TIGHT_PAD`] and move the
/// content so the crop box starts at the origin.
fn crop_to_content(scene: &mut Scene) {
    let mut bbox: Option<(f64, f64, f64, f64)> = None;
    let mut grow = |x0: f64, y0: f64, x1: f64, y1: f64| {
        bbox = Some(match bbox {
            None => (x0, y0, x1, y1),
            Some((a, b, c, d)) => (a.min(x0), b.min(y0), c.max(x1), d.max(y1)),
        });
    };

    let hw = scene.edge_width / 2.0;
    for s in &scene.edges {
        grow(
            s.from.x.min(s.to.x) - hw,
            s.from.y.min(s.to.y) - hw,
            s.from.x.max(s.to.x) + hw,
            s.from.y.max(s.to.y) + hw,
        );
    }
    for tri in &scene.arrowheads {
        for p in tri {
            grow(p.x, p.y, p.x, p.y);
        }
    }
    for c in &scene.nodes {
        grow(
            c.center.x - c.radius,
            c.center.y - c.radius,
            c.center.x + c.radius,
            c.center.y + c.radius,
        );
    }
    for l in &scene.labels {
        let (hw, hh) = (l.width() / 2.0, l.size / 2.0);
        grow(l.at.x - hw, l.at.y - hh, l.at.x + hw, l.at.y + hh);
    }

    let Some((x0, y0, x1, y1)) = bbox else {
        scene.width = 2.0 * TIGHT_PAD;
        scene.height = 2.0 * TIGHT_PAD;
        return;
    };

    let (dx, dy) = (TIGHT_PAD - x0, TIGHT_PAD - y0);
    let shift = |p: &mut Point| {
        p.x += dx;
        p.y += dy;
    };
    for s in &mut scene.edges {
        shift(&mut s.from);
        shift(&mut s.to);
    }
    for tri in &mut scene.arrowheads {
        tri.iter_mut().for_each(shift);
    }
    for c in &mut scene.nodes {
        shift(&mut c.center);
    }
    for l in &mut scene.labels {
        shift(&mut l.at);
    }

    scene.width = (x1 - x0) + 2.0 * TIGHT_PAD;
    scene.height = (y1 - y0) + 2.0 * TIGHT_PAD;
}

/// Serialise a scene in the requested format.
pub fn encode(scene: &Scene, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Pdf => pdf::render(scene),
        OutputFormat::Svg => svg::render(scene).into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn two_edges() -> (WeightedDigraph, Layout) {
        let mut g = WeightedDigraph::new();
        g.add_edge(Edge::new(1, 2, 5));
        g.add_edge(Edge::new(2, 3, 7));
        let mut layout = Layout::new();
        layout.insert(1, (0.0, 0.0));
        layout.insert(2, (1.0, 0.0));
        layout.insert(3, (1.0, 1.0));
        (g, layout)
    }

    fn options(style: RenderStyle) -> RenderOptions {
        RenderOptions::from_config(&RenderSection::default(), style).unwrap()
    }

    #[test]
    fn colour_round_trips_through_hex() {
        let c = Rgb::from_hex("#abdbe3").unwrap();
        assert_eq!(c.to_hex(), "#abdbe3");
        assert!(Rgb::from_hex("#abc").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn plain_scene_has_no_text_or_arrows() {
        let (g, layout) = two_edges();
        let scene = build_scene(&g, &layout, &options(RenderStyle::Plain));
        assert_eq!(scene.nodes.len(), 3);
        assert_eq!(scene.edges.len(), 2);
        assert!(scene.arrowheads.is_empty());
        assert!(scene.labels.is_empty());
    }

    #[test]
    fn labeled_scene_has_arrows_and_labels() {
        let (g, layout) = two_edges();
        let scene = build_scene(&g, &layout, &options(RenderStyle::Labeled));
        assert_eq!(scene.arrowheads.len(), 2);
        // three vertex labels + two weight labels
        assert_eq!(scene.labels.len(), 5);
        assert!(scene.labels.iter().any(|l| l.text == "7"));
    }

    #[test]
    fn scene_is_cropped_to_content() {
        let (g, layout) = two_edges();
        let opts = options(RenderStyle::Plain);
        let scene = build_scene(&g, &layout, &opts);
        let r = opts.node_radius();

        assert!(scene.width < opts.canvas.0);
        for c in &scene.nodes {
            assert!(c.center.x - c.radius >= TIGHT_PAD - 1e-9);
            assert!(c.center.y - c.radius >= TIGHT_PAD - 1e-9);
            assert!(c.center.x + c.radius <= scene.width - TIGHT_PAD + 1e-9);
            assert!(c.center.y + c.radius <= scene.height - TIGHT_PAD + 1e-9);
        }
        // Canvas is 1440pt wide with a 5% margin on both sides.
        let expected = 1440.0 * 0.9 + 2.0 * r + 2.0 * TIGHT_PAD;
        assert!((scene.width - expected).abs() < 1e-6);
    }
}
