// src/generate/dag.rs

use std::collections::HashSet;

use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::config::model::WeightRange;
use crate::errors::{DagkitError, Result};
use crate::graph::{Edge, EdgeList, VertexId};

/// Shape of a random DAG body over vertices `1..=vertices`.
#[derive(Debug, Clone, Copy)]
pub struct DagParams {
    pub vertices: u32,
    pub edges: usize,
    pub weight: WeightRange,
    pub allow_repeated_edges: bool,
}

impl DagParams {
    /// Reject parameters no DAG can satisfy.
    ///
    /// The body is built from a spanning tree, so it needs at least
    /// `vertices - 1` edges; without repeats it holds at most
    /// `vertices * (vertices - 1) / 2`.
    pub fn check(&self) -> Result<()> {
        if self.vertices == 0 {
            return Err(DagkitError::InfeasibleDag(
                "a DAG needs at least one vertex".to_string(),
            ));
        }

        let tree_edges = (self.vertices - 1) as usize;
        if self.edges < tree_edges {
            return Err(DagkitError::InfeasibleDag(format!(
                "{} edges cannot connect {} vertices (need at least {})",
                self.edges, self.vertices, tree_edges
            )));
        }

        if self.edges > tree_edges && self.vertices < 2 {
            return Err(DagkitError::InfeasibleDag(format!(
                "{} edges requested on a single vertex without self-loops",
                self.edges
            )));
        }

        if !self.allow_repeated_edges {
            let n = self.vertices as usize;
            let max_edges = n * (n - 1) / 2;
            if self.edges > max_edges {
                return Err(DagkitError::InfeasibleDag(format!(
                    "{} distinct edges do not fit a DAG on {} vertices (max {})",
                    self.edges, self.vertices, max_edges
                )));
            }
        }

        check_range("DAG weight", self.weight)
    }
}

pub(crate) fn check_range(what: &str, range: WeightRange) -> Result<()> {
    if range.low() > range.high() {
        return Err(DagkitError::InfeasibleDag(format!(
            "{what} range [{}, {}] is empty",
            range.low(),
            range.high()
        )));
    }
    Ok(())
}

/// Sample a weakly connected random DAG.
///
/// The structure is built over ranks `1..=vertices`: a random spanning tree
/// first (rank `r` hangs off a uniform parent in `1..r`), then uniform extra
/// pairs until `params.edges` records exist. Every edge points from a lower
/// to a higher rank, which rules out cycles and self-loops. Ranks are mapped
/// to vertex ids through a random permutation, so the root is not always
/// vertex 1.
pub fn random_dag<R: Rng + ?Sized>(rng: &mut R, params: &DagParams) -> Result<EdgeList> {
    params.check()?;

    let mut labels: Vec<VertexId> = (1..=VertexId::from(params.vertices)).collect();
    labels.shuffle(rng);
    let label = |rank: u32| labels[(rank - 1) as usize];

    let mut list = EdgeList::new(params.vertices);
    let mut used: HashSet<(u32, u32)> = HashSet::new();

    for v in 2..=params.vertices {
        let parent = rng.gen_range(1..v);
        if !params.allow_repeated_edges {
            used.insert((parent, v));
        }
        list.push(Edge::new(label(parent), label(v), draw_weight(rng, params.weight)));
    }

    while list.edge_count() < params.edges {
        let a = rng.gen_range(1..=params.vertices);
        let b = rng.gen_range(1..=params.vertices);
        if a == b {
            continue;
        }
        let (u, v) = if a < b { (a, b) } else { (b, a) };
        if !params.allow_repeated_edges && !used.insert((u, v)) {
            continue;
        }
        list.push(Edge::new(label(u), label(v), draw_weight(rng, params.weight)));
    }

    debug!(
        vertices = params.vertices,
        edges = list.edge_count(),
        "sampled DAG body"
    );
    Ok(list)
}

/// Wire `count` distinct vertices from `1..=list.vertex_count()` into
/// `sink`, each edge with an independent weight from `weight`.
///
/// Returns the chosen sources in sampling order.
pub fn attach_sink<R: Rng + ?Sized>(
    rng: &mut R,
    list: &mut EdgeList,
    sink: VertexId,
    count: usize,
    weight: WeightRange,
) -> Result<Vec<VertexId>> {
    let candidates = list.vertex_count() as usize;
    if count > candidates {
        return Err(DagkitError::InfeasibleDag(format!(
            "cannot pick {count} distinct sink sources out of {candidates} vertices"
        )));
    }
    check_range("sink weight", weight)?;

    let sources: Vec<VertexId> = index::sample(rng, candidates, count)
        .into_iter()
        .map(|i| i as VertexId + 1)
        .collect();

    for &source in &sources {
        list.push(Edge::new(source, sink, draw_weight(rng, weight)));
    }

    debug!(sink, ?sources, "attached sink edges");
    Ok(sources)
}

fn draw_weight<R: Rng + ?Sized>(rng: &mut R, range: WeightRange) -> i64 {
    rng.gen_range(range.low()..=range.high())
}
