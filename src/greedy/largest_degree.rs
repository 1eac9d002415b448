use std::cmp::max;

use crate::color::Coloring;
use crate::degree::sorted_by_degree_desc;
use crate::graph::Graph;
use crate::greedy::smallest_available_color;

/** implements the Largest-Degree-Ordering greedy: First Fit applied in
descending-degree order (equal degrees: ascending id) instead of input
order. */
pub fn largest_degree_ordering(graph:&Graph) -> Coloring {
    let n:usize = graph.nb_vertices();
    let ranked = sorted_by_degree_desc(graph);
    let mut colors:Vec<usize> = vec![0 ; n]; // colors[v]: color assigned to vertex v
    let mut used:Vec<bool> = vec![false ; n+1];
    let mut nb_colors:usize = 0;
    for vd in &ranked {
        let color = smallest_available_color(graph, vd.vertex, &colors, &mut used);
        colors[vd.vertex] = color;
        nb_colors = max(nb_colors, color);
    }
    Coloring { colors, nb_colors }
}
