use std::fs;

use bit_set::BitSet;

use crate::graph::Graph;

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a graph coloring run.
colors are 1-based so that 0 can mean "uncolored" while a run is in
progress; a finished solution has every entry in `1..=nb_vertices`. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// colors[v]: color of vertex v (0 = uncolored)
    pub colors: Vec<usize>,
    /// number of distinct colors used
    pub nb_colors: usize,
}

impl Coloring {

    /** writes a string encoding the solution, one color per line in vertex
    order (use this to export the solution) */
    pub fn solution_to_string(&self) -> String {
        let mut res = String::default();
        for c in &self.colors {
            res += format!("{}\n", c).as_str();
        }
        res
    }

    /// writes the solution into a file
    pub fn write_solution(&self, filename:&str) -> std::io::Result<()> {
        fs::write(filename, self.solution_to_string())
    }
}

/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the solution is proper and complete (number of distinct colors)
    Valid(usize),
    /// some vertex is still uncolored
    UncoloredVertex(VertexId),
    /// some vertex has a color larger than nb_vertices
    ColorOutOfRange(VertexId),
    /// two adjacent vertices share the same color
    ConflictingEdge(VertexId, VertexId),
}

/** checks a color assignment against the graph: every vertex colored, every
color within `1..=nb_vertices`, no edge monochromatic. entries beyond
`nb_vertices` are ignored; missing entries count as uncolored. */
pub fn checker(graph:&Graph, colors:&[usize]) -> CheckerResult {
    let n = graph.nb_vertices();
    // check that all vertices got a valid color
    for v in 0..n {
        let c = colors.get(v).copied().unwrap_or(0);
        if c == 0 { return CheckerResult::UncoloredVertex(v); }
        if c > n { return CheckerResult::ColorOutOfRange(v); }
    }
    // check conflicts
    for u in 0..n {
        for v in graph.neighbors(u) {
            if u < v && colors[u] == colors[v] {
                return CheckerResult::ConflictingEdge(u,v);
            }
        }
    }
    // if ok: return the number of colors
    let mut seen = BitSet::with_capacity(n+1);
    for &c in colors.iter().take(n) { seen.insert(c); }
    CheckerResult::Valid(seen.len())
}
