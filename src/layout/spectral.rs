// src/layout/spectral.rs

//! Spectral placement: coordinates are the eigenvectors of the undirected
//! graph Laplacian belonging to its second and third smallest eigenvalues.
//!
//! Edges are counted with unit weight; direction is ignored.

use std::collections::HashMap;

use nalgebra::{DMatrix, SymmetricEigen};

use crate::graph::{VertexId, WeightedDigraph};
use crate::layout::Layout;

pub fn spectral_layout(graph: &WeightedDigraph) -> Layout {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    let mut layout = Layout::new();

    match vertices.len() {
        0 => return layout,
        1 => {
            layout.insert(vertices[0], (0.0, 0.0));
            return layout;
        }
        2 => {
            layout.insert(vertices[0], (-1.0, -1.0));
            layout.insert(vertices[1], (1.0, 1.0));
            return layout;
        }
        _ => {}
    }

    let eigen = SymmetricEigen::new(laplacian(graph, &vertices));
    let values = &eigen.eigenvalues;
    let vectors = &eigen.eigenvectors;

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    let (ix, iy) = (order[1], order[2]);

    for (row, &v) in vertices.iter().enumerate() {
        layout.insert(v, (vectors[(row, ix)], vectors[(row, iy)]));
    }
    layout.rescale(1.0);
    layout
}

fn laplacian(graph: &WeightedDigraph, vertices: &[VertexId]) -> DMatrix<f64> {
    let index: HashMap<VertexId, usize> =
        vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let n = vertices.len();
    let mut l = DMatrix::<f64>::zeros(n, n);

    for (i, &v) in vertices.iter().enumerate() {
        let mut degree = 0.0;
        for u in graph.undirected_neighbors(v) {
            l[(i, index[&u])] = -1.0;
            degree += 1.0;
        }
        l[(i, i)] = degree;
    }
    l
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn laplacian_rows_sum_to_zero() {
        let mut g = WeightedDigraph::new();
        g.add_edge(Edge::new(1, 2, 4));
        g.add_edge(Edge::new(2, 3, -2));
        g.add_edge(Edge::new(3, 1, 9));
        let vertices: Vec<VertexId> = g.vertices().collect();
        let l = laplacian(&g, &vertices);
        for i in 0..3 {
            assert_eq!(l[(i, i)], 2.0);
            assert!(l.row(i).sum().abs() < 1e-12);
        }
    }

    #[test]
    fn triangle_is_placed_without_nan() {
        let mut g = WeightedDigraph::new();
        g.add_edge(Edge::new(1, 2, 1));
        g.add_edge(Edge::new(2, 3, 1));
        g.add_edge(Edge::new(1, 3, 1));
        let layout = spectral_layout(&g);
        assert_eq!(layout.len(), 3);
        assert!(layout.iter().all(|(_, (x, y))| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn path_graph_is_spread_along_one_axis() {
        let mut g = WeightedDigraph::new();
        g.add_edge(Edge::new(1, 2, 1));
        g.add_edge(Edge::new(2, 3, 1));
        g.add_edge(Edge::new(3, 4, 1));
        let layout = spectral_layout(&g);
        let xs: Vec<f64> = (1..=4).map(|v| layout.get(v).unwrap().0).collect();
        // The Fiedler vector of a path is monotone along the path.
        let increasing = xs.windows(2).all(|w| w[0] < w[1]);
        let decreasing = xs.windows(2).all(|w| w[0] > w[1]);
        assert!(increasing || decreasing, "{xs:?}");
    }
}
