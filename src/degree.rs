use std::cmp::Reverse;

use crate::color::VertexId;
use crate::graph::Graph;

/** pairing of a vertex id and its precomputed degree (feeder for the
degree-ordered heuristics) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexDegree {
    /// vertex id
    pub vertex: VertexId,
    /// degree of the vertex
    pub degree: usize,
}

/// degrees[v]: degree of vertex v
pub fn degrees(graph:&Graph) -> Vec<usize> {
    (0..graph.nb_vertices()).map(|v| graph.degree(v)).collect()
}

/** vertices sorted by descending degree.
the sort is stable, so vertices of equal degree stay in ascending id order. */
pub fn sorted_by_degree_desc(graph:&Graph) -> Vec<VertexDegree> {
    let mut ranked:Vec<VertexDegree> = (0..graph.nb_vertices())
        .map(|v| VertexDegree { vertex:v, degree:graph.degree(v) })
        .collect();
    ranked.sort_by_key(|vd| Reverse(vd.degree));
    ranked
}

/** lowest-id vertex of maximum degree (seed of the dynamic orderings) */
pub fn max_degree_vertex(degrees:&[usize]) -> Option<VertexId> {
    (0..degrees.len()).max_by_key(|&v| (degrees[v], Reverse(v)))
}
