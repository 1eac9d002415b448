use std::cmp::max;

use crate::color::Coloring;
use crate::graph::Graph;
use crate::greedy::smallest_available_color;

/** implements the First Fit greedy. Visits vertices in input order
`0..nb_vertices` and gives each one the smallest color not used by an
already-colored neighbor. The result depends solely on the input labeling. */
pub fn first_fit(graph:&Graph) -> Coloring {
    let n:usize = graph.nb_vertices();
    let mut colors:Vec<usize> = vec![0 ; n]; // colors[v]: color assigned to vertex v
    let mut used:Vec<bool> = vec![false ; n+1];
    let mut nb_colors:usize = 0;
    for v in 0..n {
        let color = smallest_available_color(graph, v, &colors, &mut used);
        colors[v] = color;
        nb_colors = max(nb_colors, color);
    }
    Coloring { colors, nb_colors }
}
