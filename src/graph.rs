use bit_set::BitSet;
use thiserror::Error;

use crate::color::VertexId;

/** errors rejected by the graph constructors (checked before any algorithm runs) */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// the graph has no vertex
    #[error("the graph must have at least one vertex")]
    NoVertices,
    /// an edge endpoint lies outside [0, nb_vertices)
    #[error("edge ({0},{1}) references a vertex outside [0,{2})")]
    VertexOutOfRange(VertexId, VertexId, usize),
    /// an edge joins a vertex to itself
    #[error("edge ({0},{0}) is a self-loop")]
    SelfLoop(VertexId),
}

/** models an undirected simple graph.
adjacency is stored as one bitset row per vertex (a square boolean matrix);
rows are kept symmetric and the diagonal is never set. */
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj[i]: bitset of the vertices adjacent to i
    adj: Vec<BitSet>,
}

impl Graph {

    /** constructor using an edge list. duplicate edges are merged (matrix
    semantics); out-of-range endpoints and self-loops are rejected. */
    pub fn from_edges(nb_vertices:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, GraphError> {
        if nb_vertices == 0 { return Err(GraphError::NoVertices); }
        let mut adj = vec![BitSet::with_capacity(nb_vertices); nb_vertices];
        let mut m = 0;
        for &(u,v) in edges {
            if u >= nb_vertices || v >= nb_vertices {
                return Err(GraphError::VertexOutOfRange(u, v, nb_vertices));
            }
            if u == v { return Err(GraphError::SelfLoop(u)); }
            if adj[u].insert(v) {
                adj[v].insert(u);
                m += 1;
            }
        }
        Ok(Self { n:nb_vertices, m, adj })
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// degree of vertex v
    pub fn degree(&self, v:VertexId) -> usize { self.adj[v].len() }

    /// vertices adjacent to v, in ascending order
    pub fn neighbors(&self, v:VertexId) -> impl Iterator<Item=VertexId> + '_ {
        self.adj[v].iter()
    }

    /// bitset of the vertices adjacent to v
    pub fn neighbors_bitset(&self, v:VertexId) -> &BitSet { &self.adj[v] }

    /// returns if a and b are adjacent (O(1))
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        self.adj[a].contains(b)
    }

    /// largest degree in the graph
    pub fn max_degree(&self) -> usize {
        (0..self.n).map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// builds the edge list (u < v, ascending)
    pub fn edges(&self) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::with_capacity(self.m);
        for u in 0..self.n {
            for v in self.adj[u].iter() {
                if u < v { res.push((u,v)); }
            }
        }
        res
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = (0..self.n).map(|v| self.degree(v)).collect();
        println!("\t{} \t min degree", degrees.iter().min().unwrap_or(&0));
        println!("\t{} \t max degree", degrees.iter().max().unwrap_or(&0));
        let possible = self.n * self.n.saturating_sub(1) / 2;
        if possible > 0 {
            println!("\t{:.4} \t density", self.m as f64 / possible as f64);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_cycle() {
        let graph = Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]).unwrap();
        assert_eq!(graph.nb_vertices(), 4);
        assert_eq!(graph.nb_edges(), 4);
        assert_eq!(graph.degree(0), 2);
        assert!(graph.are_adjacent(0,1));
        assert!(graph.are_adjacent(1,0));
        assert!(!graph.are_adjacent(0,2));
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1,3]);
        assert_eq!(graph.edges(), vec![(0,1),(0,3),(1,2),(2,3)]);
    }

    #[test]
    fn duplicate_edges_are_merged() {
        let graph = Graph::from_edges(3, &[(0,1),(1,0),(0,1)]).unwrap();
        assert_eq!(graph.nb_edges(), 1);
        assert_eq!(graph.degree(0), 1);
    }

    #[test]
    fn empty_graph_rejected() {
        assert_eq!(Graph::from_edges(0, &[]).unwrap_err(), GraphError::NoVertices);
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(
            Graph::from_edges(3, &[(0,3)]).unwrap_err(),
            GraphError::VertexOutOfRange(0,3,3)
        );
    }

    #[test]
    fn self_loop_rejected() {
        assert_eq!(Graph::from_edges(3, &[(1,1)]).unwrap_err(), GraphError::SelfLoop(1));
    }

    #[test]
    fn isolated_vertices_allowed() {
        let graph = Graph::from_edges(5, &[(0,1)]).unwrap();
        assert_eq!(graph.degree(4), 0);
        assert_eq!(graph.max_degree(), 1);
    }
}
