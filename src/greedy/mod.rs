//! Greedy coloring heuristics.
//!
//! All six algorithms are deterministic: every selection scan visits
//! vertices in ascending id order and resolves full ties to the lowest id.

/// First Fit (input order)
pub mod first_fit;

/// Welsh-Powell (degree-sorted color-class growth)
pub mod welsh_powell;

/// Largest-Degree-Ordering (degree-sorted First Fit)
pub mod largest_degree;

/// Incidence-Degree-Ordering (most colored neighbors first)
pub mod incidence_degree;

/// DSATUR (most distinct neighbor colors first)
pub mod dsatur;

/// Recursive-Largest-First (one color class at a time)
pub mod rlf;

use crate::color::{Coloring, VertexId};
use crate::graph::Graph;

/** smallest color (≥ 1) not used by an already-colored neighbor of v.
`used` is a scratch of length `nb_vertices+1`, cleared on entry. */
pub(crate) fn smallest_available_color(
    graph:&Graph, v:VertexId, colors:&[usize], used:&mut [bool]
) -> usize {
    for u in used.iter_mut() { *u = false; }
    for w in graph.neighbors(v) {
        let c = colors[w];
        if c != 0 { used[c] = true; }
    }
    let mut color = 1;
    while used[color] { color += 1; }
    color
}

/** the available coloring heuristics (see the submodule of each) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First Fit (input order)
    FirstFit,
    /// Welsh-Powell
    WelshPowell,
    /// Largest-Degree-Ordering
    LargestDegree,
    /// Incidence-Degree-Ordering
    IncidenceDegree,
    /// DSATUR
    Dsatur,
    /// Recursive-Largest-First
    Rlf,
}

impl Algorithm {
    /// every algorithm, in benchmark order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::FirstFit,
        Algorithm::WelshPowell,
        Algorithm::LargestDegree,
        Algorithm::IncidenceDegree,
        Algorithm::Dsatur,
        Algorithm::Rlf,
    ];

    /// canonical name (accepted by `from_name`)
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::FirstFit => "first_fit",
            Algorithm::WelshPowell => "welsh_powell",
            Algorithm::LargestDegree => "largest_degree",
            Algorithm::IncidenceDegree => "incidence_degree",
            Algorithm::Dsatur => "dsatur",
            Algorithm::Rlf => "rlf",
        }
    }

    /// parses an algorithm name (canonical or short form)
    pub fn from_name(name:&str) -> Option<Self> {
        match name {
            "first_fit" | "ff" => Some(Algorithm::FirstFit),
            "welsh_powell" | "wp" => Some(Algorithm::WelshPowell),
            "largest_degree" | "ldo" => Some(Algorithm::LargestDegree),
            "incidence_degree" | "ido" => Some(Algorithm::IncidenceDegree),
            "dsatur" => Some(Algorithm::Dsatur),
            "rlf" => Some(Algorithm::Rlf),
            _ => None,
        }
    }

    /// runs the heuristic on the graph
    pub fn run(self, graph:&Graph) -> Coloring {
        match self {
            Algorithm::FirstFit => first_fit::first_fit(graph),
            Algorithm::WelshPowell => welsh_powell::welsh_powell(graph),
            Algorithm::LargestDegree => largest_degree::largest_degree_ordering(graph),
            Algorithm::IncidenceDegree => incidence_degree::incidence_degree_ordering(graph),
            Algorithm::Dsatur => dsatur::dsatur(graph),
            Algorithm::Rlf => rlf::rlf(graph),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f:&mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{checker, CheckerResult};

    fn battery() -> Vec<Graph> {
        vec![
            // single vertex
            Graph::from_edges(1, &[]).unwrap(),
            // triangle
            Graph::from_edges(3, &[(0,1),(1,2),(0,2)]).unwrap(),
            // 4-cycle
            Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]).unwrap(),
            // star K1,4
            Graph::from_edges(5, &[(0,1),(0,2),(0,3),(0,4)]).unwrap(),
            // path P5
            Graph::from_edges(5, &[(0,1),(1,2),(2,3),(3,4)]).unwrap(),
            // K5
            Graph::from_edges(5, &[(0,1),(0,2),(0,3),(0,4),(1,2),(1,3),(1,4),(2,3),(2,4),(3,4)]).unwrap(),
            // crown graph (K3,3 minus a perfect matching)
            Graph::from_edges(6, &[(0,4),(0,5),(1,3),(1,5),(2,3),(2,4)]).unwrap(),
            // two components + an isolated vertex
            Graph::from_edges(7, &[(0,1),(1,2),(0,2),(3,4),(4,5)]).unwrap(),
            // Petersen graph
            Graph::from_edges(10, &[
                (0,1),(1,2),(2,3),(3,4),(4,0),
                (5,7),(7,9),(9,6),(6,8),(8,5),
                (0,5),(1,6),(2,7),(3,8),(4,9),
            ]).unwrap(),
        ]
    }

    #[test]
    fn proper_and_complete_on_every_graph() {
        for graph in &battery() {
            for algo in Algorithm::ALL {
                let sol = algo.run(graph);
                assert_eq!(sol.colors.len(), graph.nb_vertices(), "{}", algo);
                assert_eq!(
                    checker(graph, &sol.colors),
                    CheckerResult::Valid(sol.nb_colors),
                    "{}", algo
                );
            }
        }
    }

    #[test]
    fn count_matches_max_color() {
        for graph in &battery() {
            for algo in Algorithm::ALL {
                let sol = algo.run(graph);
                assert_eq!(
                    sol.nb_colors,
                    sol.colors.iter().copied().max().unwrap_or(0),
                    "{}", algo
                );
            }
        }
    }

    #[test]
    fn count_within_bounds() {
        for graph in &battery() {
            for algo in Algorithm::ALL {
                let sol = algo.run(graph);
                assert!(sol.nb_colors >= 1, "{}", algo);
                assert!(sol.nb_colors <= graph.nb_vertices(), "{}", algo);
                assert!(sol.nb_colors <= graph.max_degree()+1, "{}", algo);
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        for graph in &battery() {
            for algo in Algorithm::ALL {
                assert_eq!(algo.run(graph), algo.run(graph), "{}", algo);
            }
        }
    }

    #[test]
    fn triangle_needs_three_colors() {
        let graph = Graph::from_edges(3, &[(0,1),(1,2),(0,2)]).unwrap();
        for algo in Algorithm::ALL {
            assert_eq!(algo.run(&graph).nb_colors, 3, "{}", algo);
        }
    }

    #[test]
    fn single_vertex_gets_color_one() {
        let graph = Graph::from_edges(1, &[]).unwrap();
        for algo in Algorithm::ALL {
            let sol = algo.run(&graph);
            assert_eq!(sol.colors, vec![1], "{}", algo);
            assert_eq!(sol.nb_colors, 1, "{}", algo);
        }
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algo.name()), Some(algo));
        }
        assert_eq!(Algorithm::from_name("ldo"), Some(Algorithm::LargestDegree));
        assert_eq!(Algorithm::from_name("nope"), None);
    }
}
