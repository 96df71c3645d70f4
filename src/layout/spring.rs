// src/layout/spring.rs

//! Force-directed placement on top of the `force_graph` simulation.

use std::collections::HashMap;
use std::f64::consts::TAU;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use rand::Rng;

use crate::graph::{VertexId, WeightedDigraph};
use crate::layout::Layout;

const ITERATIONS: usize = 400;
const TIME_STEP: f32 = 0.016;
const START_RADIUS: f64 = 100.0;

/// Run the simulation from jittered circular starting positions and return
/// the settled coordinates, centered and scaled to `[-1, 1]`.
pub fn spring_layout<R: Rng + ?Sized>(graph: &WeightedDigraph, rng: &mut R) -> Layout {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    let mut layout = Layout::new();
    if vertices.len() < 2 {
        for &v in &vertices {
            layout.insert(v, (0.0, 0.0));
        }
        return layout;
    }

    let mut sim: ForceGraph<VertexId, ()> = ForceGraph::new(SimulationParameters {
        force_charge: 150.0,
        force_spring: 0.05,
        force_max: 100.0,
        node_speed: 3000.0,
        damping_factor: 0.9,
    });

    let mut idx_of: HashMap<VertexId, DefaultNodeIdx> = HashMap::new();
    for (i, &v) in vertices.iter().enumerate() {
        let angle = i as f64 * TAU / vertices.len() as f64;
        let jitter_x = rng.gen_range(-1.0..1.0);
        let jitter_y = rng.gen_range(-1.0..1.0);
        let idx = sim.add_node(NodeData {
            x: (START_RADIUS * angle.cos() + jitter_x) as f32,
            y: (START_RADIUS * angle.sin() + jitter_y) as f32,
            mass: 10.0,
            is_anchor: false,
            user_data: v,
        });
        idx_of.insert(v, idx);
    }

    for edge in graph.edges() {
        if edge.source == edge.target {
            continue;
        }
        if let (Some(&a), Some(&b)) = (idx_of.get(&edge.source), idx_of.get(&edge.target)) {
            sim.add_edge(a, b, EdgeData::default());
        }
    }

    for _ in 0..ITERATIONS {
        sim.update(TIME_STEP);
    }

    sim.visit_nodes(|node| {
        layout.insert(node.data.user_data, (node.x() as f64, node.y() as f64));
    });
    layout.rescale(1.0);
    layout
}
