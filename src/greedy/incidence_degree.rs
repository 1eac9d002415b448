use std::cmp::{max, Reverse};

use crate::color::Coloring;
use crate::degree::degrees;
use crate::graph::Graph;
use crate::greedy::smallest_available_color;

/** implements the Incidence-Degree-Ordering greedy.
    1. select the uncolored vertex with the most colored neighbors (ties:
       largest degree, then lowest id — the first pick is therefore the
       lowest-id vertex of maximum degree)
    2. give it the smallest color unused among its colored neighbors
    3. update the colored-neighbor count of its uncolored neighbors
    4. repeat until every vertex is colored

The selection key counts how *many* neighbors are colored; see
[`dsatur`](crate::greedy::dsatur) for the distinct-colors variant. */
pub fn incidence_degree_ordering(graph:&Graph) -> Coloring {
    let n:usize = graph.nb_vertices();
    let degree_of = degrees(graph);
    let mut colors:Vec<usize> = vec![0 ; n]; // colors[v]: color assigned to vertex v
    let mut used:Vec<bool> = vec![false ; n+1];
    let mut nb_colored_neighbors:Vec<usize> = vec![0 ; n]; // nb_colored_neighbors[v]: colored neighbors of v
    let mut nb_colors:usize = 0;
    for _ in 0..n {
        let current_vertex = match (0..n)
            .filter(|&v| colors[v] == 0)
            .max_by_key(|&v| (nb_colored_neighbors[v], degree_of[v], Reverse(v)))
        {
            Some(v) => v,
            None => break,
        };
        let color = smallest_available_color(graph, current_vertex, &colors, &mut used);
        colors[current_vertex] = color;
        nb_colors = max(nb_colors, color);
        for w in graph.neighbors(current_vertex) {
            if colors[w] == 0 { nb_colored_neighbors[w] += 1; }
        }
    }
    Coloring { colors, nb_colors }
}
