// src/graph/mod.rs

//! Graph types shared by the generator and the displayer.
//!
//! - [`EdgeList`] keeps edge records exactly as emitted (order and repeats
//!   preserved); it is what the generator serialises.
//! - [`WeightedDigraph`] is the simple directed graph the displayer parses
//!   into and lays out.
//! - [`edgelist`] holds the text codec for both.

pub mod edgelist;

use std::collections::BTreeMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

/// Integer vertex id as written in edge-list files. Any `i64` is accepted.
pub type VertexId = i64;

/// One weighted edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: i64,
}

impl Edge {
    pub fn new(source: VertexId, target: VertexId, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Edge records over vertices `1..=vertex_count`, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    vertex_count: u32,
    edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new(vertex_count: u32) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges grouped by ascending source, insertion order within a source.
    ///
    /// This is the order the records are written to disk in.
    pub fn edges_by_source(&self) -> Vec<Edge> {
        let mut grouped: BTreeMap<VertexId, Vec<Edge>> = BTreeMap::new();
        for edge in &self.edges {
            grouped.entry(edge.source).or_default().push(*edge);
        }
        grouped.into_values().flatten().collect()
    }

    /// Collapse into a simple digraph (later repeats overwrite the weight).
    pub fn to_digraph(&self) -> WeightedDigraph {
        let mut graph = WeightedDigraph::new();
        for edge in &self.edges {
            graph.add_edge(*edge);
        }
        graph
    }
}

/// Simple directed graph with integer edge weights.
#[derive(Debug, Clone, Default)]
pub struct WeightedDigraph {
    inner: DiGraphMap<VertexId, i64>,
}

impl WeightedDigraph {
    pub fn new() -> Self {
        Self {
            inner: DiGraphMap::new(),
        }
    }

    /// Insert an edge, adding its endpoints. A repeated `(source, target)`
    /// pair replaces the stored weight.
    pub fn add_edge(&mut self, edge: Edge) {
        self.inner.add_edge(edge.source, edge.target, edge.weight);
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Vertices in first-seen order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.inner.nodes()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner
            .all_edges()
            .map(|(source, target, weight)| Edge::new(source, target, *weight))
    }

    pub fn weight(&self, source: VertexId, target: VertexId) -> Option<i64> {
        self.inner.edge_weight(source, target).copied()
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.inner.contains_node(v)
    }

    /// Direct predecessors of `v`.
    pub fn predecessors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.inner.neighbors_directed(v, Direction::Incoming)
    }

    /// Neighbours ignoring direction (self-loops excluded).
    pub fn undirected_neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let mut out: Vec<VertexId> = self
            .inner
            .neighbors_directed(v, Direction::Outgoing)
            .chain(self.inner.neighbors_directed(v, Direction::Incoming))
            .filter(|&n| n != v)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    pub fn is_acyclic(&self) -> bool {
        toposort(&self.inner, None).is_ok()
    }

    /// Longest-path depth of every vertex from the sources, grouped into
    /// generations. Returns `None` when the graph has a cycle.
    pub fn generations(&self) -> Option<Vec<Vec<VertexId>>> {
        let order = toposort(&self.inner, None).ok()?;

        let mut depth: BTreeMap<VertexId, usize> = BTreeMap::new();
        for &v in &order {
            let d = self
                .predecessors(v)
                .filter_map(|p| depth.get(&p).map(|d| d + 1))
                .max()
                .unwrap_or(0);
            depth.insert(v, d);
        }

        let mut layers: Vec<Vec<VertexId>> = Vec::new();
        for &v in &order {
            let d = depth[&v];
            if layers.len() <= d {
                layers.resize_with(d + 1, Vec::new);
            }
            layers[d].push(v);
        }
        Some(layers)
    }
}
