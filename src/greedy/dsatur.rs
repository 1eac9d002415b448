use std::cmp::{max, Reverse};

use bit_set::BitSet;

use crate::color::Coloring;
use crate::degree::degrees;
use crate::graph::Graph;
use crate::greedy::smallest_available_color;

/** implements the DSATUR greedy.
    1. select the uncolored vertex that sees the most distinct colors in its
       neighborhood (saturation degree; ties: largest degree, then lowest id)
    2. give it the smallest color it does not see
    3. mark the new color as seen by its uncolored neighbors
    4. repeat until every vertex is colored

Saturation counts *distinct* colors: counting colored neighbors instead
would degrade this to
[`incidence_degree_ordering`](crate::greedy::incidence_degree). */
pub fn dsatur(graph:&Graph) -> Coloring {
    let n:usize = graph.nb_vertices();
    let degree_of = degrees(graph);
    let mut colors:Vec<usize> = vec![0 ; n]; // colors[v]: color assigned to vertex v
    let mut used:Vec<bool> = vec![false ; n+1];
    let mut adj_colors:Vec<BitSet> = vec![BitSet::with_capacity(n+1) ; n]; // adj_colors[v]: colors v sees
    let mut nb_colors:usize = 0;
    for _ in 0..n {
        let current_vertex = match (0..n)
            .filter(|&v| colors[v] == 0)
            .max_by_key(|&v| (adj_colors[v].len(), degree_of[v], Reverse(v)))
        {
            Some(v) => v,
            None => break,
        };
        let color = smallest_available_color(graph, current_vertex, &colors, &mut used);
        colors[current_vertex] = color;
        nb_colors = max(nb_colors, color);
        // update the saturation information of its uncolored neighbors
        for w in graph.neighbors(current_vertex) {
            if colors[w] == 0 { adj_colors[w].insert(color); }
        }
    }
    Coloring { colors, nb_colors }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::greedy::incidence_degree::incidence_degree_ordering;

    #[test]
    fn four_cycle() {
        let graph = Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]).unwrap();
        let sol = dsatur(&graph);
        assert_eq!(sol.colors, vec![1,2,1,2]);
        assert_eq!(sol.nb_colors, 2);
    }

    #[test]
    fn triangle() {
        let graph = Graph::from_edges(3, &[(0,1),(1,2),(0,2)]).unwrap();
        assert_eq!(dsatur(&graph).colors, vec![1,2,3]);
    }

    #[test]
    fn saturation_differs_from_neighbor_count() {
        // after 0, 1 and 2 are colored (1, 2, 1), vertices 3 and 4 both have
        // two colored neighbors, but 3 sees one distinct color {1} while 4
        // sees two {1,2}: DSATUR colors 4 next, incidence-degree ordering
        // prefers 3 (larger degree). The runs end with colors 3 and 4
        // swapped between vertices 4 and 5.
        let graph = Graph::from_edges(11, &[
            (0,1),(0,3),(0,5),(0,6),(0,7),(0,10),
            (1,2),(1,4),(1,8),(1,9),
            (2,3),(2,4),(2,5),(2,6),
            (3,4),(3,5),(3,8),
            (4,5),
            (5,7),
        ]).unwrap();
        let by_saturation = dsatur(&graph);
        let by_count = incidence_degree_ordering(&graph);
        assert_eq!(by_saturation.colors, vec![1,2,1,2,3,4,2,2,1,1,2]);
        assert_eq!(by_count.colors,      vec![1,2,1,2,4,3,2,2,1,1,2]);
        assert_ne!(by_saturation.colors, by_count.colors);
        assert_eq!(by_saturation.nb_colors, 4);
        assert_eq!(by_count.nb_colors, 4);
    }
}
