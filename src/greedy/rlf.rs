use std::cmp::Reverse;

use bit_set::BitSet;

use crate::color::Coloring;
use crate::degree::degrees;
use crate::graph::Graph;

/** implements the Recursive-Largest-First greedy. Builds one color class at
a time as a maximal independent set:
    1. the uncolored vertex of maximum original degree seeds the class
       (ties: lowest id); its neighbors form the frontier U
    2. among vertices neither colored nor in U, repeatedly color the one
       with the most neighbors inside U (ties: larger original degree, then
       lowest id), adding its neighbors to U
    3. when no candidate remains the class is closed: advance to the next
       color and reset U

Degrees are the static ones of the input graph. U may absorb vertices of
earlier classes, and candidate scores count those members too. */
pub fn rlf(graph:&Graph) -> Coloring {
    let n:usize = graph.nb_vertices();
    let degree_of = degrees(graph);
    let mut colors:Vec<usize> = vec![0 ; n]; // colors[v]: color assigned to vertex v
    let mut nb_colored:usize = 0;
    let mut current_color:usize = 0;
    while nb_colored < n { // add a new color until everything is colored
        current_color += 1;
        let seed = match (0..n)
            .filter(|&v| colors[v] == 0)
            .max_by_key(|&v| (degree_of[v], Reverse(v)))
        {
            Some(v) => v,
            None => break,
        };
        colors[seed] = current_color;
        nb_colored += 1;
        let mut frontier:BitSet = BitSet::with_capacity(n); // U: vertices adjacent to the class
        frontier.union_with(graph.neighbors_bitset(seed));
        // grow the class while an eligible vertex remains
        loop {
            let candidate = (0..n)
                .filter(|&v| colors[v] == 0 && !frontier.contains(v))
                .max_by_key(|&v| (
                    graph.neighbors_bitset(v).intersection(&frontier).count(),
                    degree_of[v],
                    Reverse(v),
                ));
            match candidate {
                None => break,
                Some(v) => {
                    colors[v] = current_color;
                    nb_colored += 1;
                    frontier.union_with(graph.neighbors_bitset(v));
                }
            }
        }
    }
    Coloring { colors, nb_colors: current_color }
}
