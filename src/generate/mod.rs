// src/generate/mod.rs

//! Random test-case generator (`dag-gen`).
//!
//! A test case is a weighted DAG over `1..=n-1` plus a dedicated sink
//! vertex `n` that receives edges from `sink_edges` distinct vertices of the
//! body. The file starts with the requested `n m` header.

pub mod dag;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::model::GenerateSection;
use crate::errors::{DagkitError, Result};
use crate::fs::FileSystem;
use crate::graph::edgelist::format_test_case;
use crate::graph::{EdgeList, VertexId};

pub use dag::{attach_sink, random_dag, DagParams};

/// Build a seeded RNG, or one drawn from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Sample a complete test case (DAG body + sink edges).
///
/// The returned list spans vertices `1..=cfg.vertices`.
pub fn generate_test_case<R: Rng + ?Sized>(rng: &mut R, cfg: &GenerateSection) -> Result<EdgeList> {
    if cfg.vertices < 2 {
        return Err(DagkitError::InfeasibleDag(format!(
            "need a body and a sink vertex, got {} vertices",
            cfg.vertices
        )));
    }
    let body_edges = cfg.edges.checked_sub(cfg.sink_edges).ok_or_else(|| {
        DagkitError::InfeasibleDag(format!(
            "{} edges leave no room for {} sink edges",
            cfg.edges, cfg.sink_edges
        ))
    })?;

    let sink = VertexId::from(cfg.vertices);
    let params = DagParams {
        vertices: cfg.vertices - 1,
        edges: body_edges,
        weight: cfg.dag_weight,
        allow_repeated_edges: cfg.allow_repeated_edges,
    };

    let mut body = random_dag(rng, &params)?;
    attach_sink(rng, &mut body, sink, cfg.sink_edges, cfg.sink_weight)?;

    let mut case = EdgeList::new(cfg.vertices);
    for edge in body.edges() {
        case.push(*edge);
    }
    Ok(case)
}

/// Generate a test case and write it to `cfg.output`.
pub fn run_generator(fs: &dyn FileSystem, cfg: &GenerateSection) -> Result<EdgeList> {
    let mut rng = make_rng(cfg.seed);
    let case = generate_test_case(&mut rng, cfg)?;

    let text = format_test_case(cfg.vertices, cfg.edges, &case);
    fs.write(&cfg.output, text.as_bytes())?;

    info!(
        vertices = cfg.vertices,
        edges = case.edge_count(),
        output = ?cfg.output,
        seeded = cfg.seed.is_some(),
        "wrote test case"
    );
    Ok(case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn default_case_has_requested_shape() {
        let cfg = GenerateSection {
            seed: Some(42),
            ..GenerateSection::default()
        };
        let mut rng = make_rng(cfg.seed);
        let case = generate_test_case(&mut rng, &cfg).unwrap();

        assert_eq!(case.vertex_count(), 100);
        assert_eq!(case.edge_count(), 200);
        assert_eq!(case.edges().iter().filter(|e| e.target == 100).count(), 5);
    }

    #[test]
    fn same_seed_same_file() {
        let fs = MockFileSystem::new();
        let cfg = GenerateSection {
            seed: Some(9),
            ..GenerateSection::default()
        };
        run_generator(&fs, &cfg).unwrap();
        let first = fs.contents("dij.in").unwrap();
        run_generator(&fs, &cfg).unwrap();
        assert_eq!(fs.contents("dij.in").unwrap(), first);
    }

    #[test]
    fn header_uses_requested_counts() {
        let fs = MockFileSystem::new();
        let cfg = GenerateSection {
            seed: Some(1),
            ..GenerateSection::default()
        };
        run_generator(&fs, &cfg).unwrap();
        let text = fs.read_to_string("dij.in".as_ref()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("100 200"));
        assert_eq!(lines.count(), 200);
    }

    #[test]
    fn sink_edges_larger_than_edges_is_infeasible() {
        let cfg = GenerateSection {
            edges: 3,
            sink_edges: 5,
            ..GenerateSection::default()
        };
        let mut rng = make_rng(Some(0));
        assert!(matches!(
            generate_test_case(&mut rng, &cfg),
            Err(DagkitError::InfeasibleDag(_))
        ));
    }
}
