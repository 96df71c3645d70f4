// src/graph/edgelist.rs

//! Text codec for whitespace-separated edge lists.
//!
//! Written form (generator):
//!
//! ```text
//! <n> <m>
//! <source> <target> <weight>
//! ...
//! ```
//!
//! Read form (displayer): `#` starts a comment that runs to the end of the
//! line, so a header line turned into `#<n> <m>` is ignored. Lines with
//! fewer than two tokens after comment removal are skipped. Every other line
//! must carry a weight; a bare `source target` pair is an error.

use std::fmt::Write as _;

use crate::errors::{DagkitError, Result};
use crate::graph::{Edge, EdgeList, VertexId, WeightedDigraph};

/// Comment marker recognised by [`parse_weighted_digraph`].
pub const COMMENT_MARKER: char = '#';

/// Serialise a test case: the `n m` header followed by one `u v w` record
/// per edge, grouped by source vertex.
pub fn format_test_case(vertices: u32, edges: usize, list: &EdgeList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{vertices} {edges}");
    for edge in list.edges_by_source() {
        let _ = writeln!(out, "{} {} {}", edge.source, edge.target, edge.weight);
    }
    out
}

/// Parse an edge list into a [`WeightedDigraph`].
///
/// Every data line must hold exactly `source target weight`, all integers.
pub fn parse_weighted_digraph(text: &str) -> Result<WeightedDigraph> {
    let mut graph = WeightedDigraph::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = match raw_line.find(COMMENT_MARKER) {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }
        if tokens.len() != 3 {
            return Err(DagkitError::Parse {
                line: line_no,
                message: format!(
                    "expected `source target weight`, found {} fields",
                    tokens.len()
                ),
            });
        }

        let source = parse_vertex(tokens[0], line_no)?;
        let target = parse_vertex(tokens[1], line_no)?;
        let weight: i64 = tokens[2].parse().map_err(|_| DagkitError::Parse {
            line: line_no,
            message: format!("weight {:?} is not an integer", tokens[2]),
        })?;

        graph.add_edge(Edge::new(source, target, weight));
    }

    Ok(graph)
}

fn parse_vertex(token: &str, line: usize) -> Result<VertexId> {
    token.parse().map_err(|_| DagkitError::Parse {
        line,
        message: format!("vertex id {token:?} is not an integer"),
    })
}
