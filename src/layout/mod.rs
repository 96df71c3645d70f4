// src/layout/mod.rs

//! 2-D placement of vertices for rendering.
//!
//! A [`Layout`] carries no structural meaning: it is computed once per
//! rendering and thrown away. Coordinates are unitless; the renderer fits
//! whatever bounding box comes out onto the canvas.

pub mod spectral;
pub mod spring;

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use rand::Rng;
use tracing::debug;

use crate::graph::{VertexId, WeightedDigraph};
use crate::types::LayoutStrategy;

/// Vertex id -> `(x, y)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: BTreeMap<VertexId, (f64, f64)>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, v: VertexId, pos: (f64, f64)) {
        self.positions.insert(v, pos);
    }

    pub fn get(&self, v: VertexId) -> Option<(f64, f64)> {
        self.positions.get(&v).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, (f64, f64))> + '_ {
        self.positions.iter().map(|(v, p)| (*v, *p))
    }

    /// `(min_x, min_y, max_x, max_y)`, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.positions.values();
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, y0, x0, y0), |(a, b, c, d), &(x, y)| {
            (a.min(x), b.min(y), c.max(x), d.max(y))
        }))
    }

    /// Center on the origin and scale so the largest coordinate magnitude
    /// is `scale`.
    pub fn rescale(&mut self, scale: f64) {
        let n = self.positions.len();
        if n == 0 {
            return;
        }
        let (sx, sy) = self
            .positions
            .values()
            .fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
        let (cx, cy) = (sx / n as f64, sy / n as f64);

        let mut lim: f64 = 0.0;
        for pos in self.positions.values_mut() {
            pos.0 -= cx;
            pos.1 -= cy;
            lim = lim.max(pos.0.abs()).max(pos.1.abs());
        }
        if lim > 0.0 {
            for pos in self.positions.values_mut() {
                pos.0 *= scale / lim;
                pos.1 *= scale / lim;
            }
        }
    }
}

/// Compute a layout with the selected strategy.
///
/// `rng` drives the random placement and the spring layout's starting
/// positions; the other strategies are deterministic.
pub fn compute_layout<R: Rng + ?Sized>(
    graph: &WeightedDigraph,
    strategy: LayoutStrategy,
    rng: &mut R,
) -> Layout {
    let layout = match strategy {
        LayoutStrategy::Random => random_layout(graph, rng),
        LayoutStrategy::Circular => circular_layout(graph),
        LayoutStrategy::Shell => shell_layout(graph),
        LayoutStrategy::Spectral => spectral::spectral_layout(graph),
        LayoutStrategy::Spring => spring::spring_layout(graph, rng),
    };
    debug!(?strategy, vertices = layout.len(), "computed layout");
    layout
}

/// Independent uniform coordinates in `[0, 1)`.
pub fn random_layout<R: Rng + ?Sized>(graph: &WeightedDigraph, rng: &mut R) -> Layout {
    let mut layout = Layout::new();
    for v in graph.vertices() {
        let x = rng.gen_range(0.0..1.0);
        let y = rng.gen_range(0.0..1.0);
        layout.insert(v, (x, y));
    }
    layout
}

/// Vertices evenly spaced on the unit circle, in vertex order.
pub fn circular_layout(graph: &WeightedDigraph) -> Layout {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    let mut layout = Layout::new();
    place_on_circle(&mut layout, &vertices, 1.0, 0.0);
    layout
}

/// One concentric circle per generation (longest-path depth).
///
/// Graphs with a cycle have no generations and fall back to a single
/// circle. A generation holding a lone vertex at the center takes radius 0.
pub fn shell_layout(graph: &WeightedDigraph) -> Layout {
    let shells = graph
        .generations()
        .unwrap_or_else(|| vec![graph.vertices().collect()]);

    let mut layout = Layout::new();
    if shells.is_empty() {
        return layout;
    }

    let bump = 1.0 / shells.len() as f64;
    let mut radius = if shells[0].len() == 1 { 0.0 } else { bump };
    for (i, shell) in shells.iter().enumerate() {
        // Stagger consecutive shells so their vertices do not line up.
        let offset = if i % 2 == 1 && !shell.is_empty() {
            TAU / (2.0 * shell.len() as f64)
        } else {
            0.0
        };
        place_on_circle(&mut layout, shell, radius, offset);
        radius += bump;
    }
    layout
}

fn place_on_circle(layout: &mut Layout, vertices: &[VertexId], radius: f64, offset: f64) {
    let n = vertices.len();
    if n == 1 && radius == 0.0 {
        layout.insert(vertices[0], (0.0, 0.0));
        return;
    }
    for (i, &v) in vertices.iter().enumerate() {
        let theta = offset + TAU * i as f64 / n as f64;
        layout.insert(v, (radius * theta.cos(), radius * theta.sin()));
    }
}
