use crate::color::Coloring;
use crate::degree::sorted_by_degree_desc;
use crate::graph::Graph;

/** implements the Welsh-Powell greedy. Builds one color class per pass over
the degree-sorted vertex list:
    1. sort vertices by descending degree (equal degrees: ascending id)
    2. the first uncolored vertex opens the class and takes the current color
    3. continuing in sorted order, every uncolored vertex joins the class if
       it is adjacent neither to the class opener nor to any vertex already
       given the current color
    4. when the pass ends, advance to the next color and repeat
*/
pub fn welsh_powell(graph:&Graph) -> Coloring {
    let n:usize = graph.nb_vertices();
    let ranked = sorted_by_degree_desc(graph);
    let mut colors:Vec<usize> = vec![0 ; n]; // colors[v]: color assigned to vertex v
    let mut nb_colored:usize = 0;
    let mut current_color:usize = 0;
    while nb_colored < n {
        current_color += 1;
        // open the class with the first uncolored vertex in ranked order
        let start = match ranked.iter().find(|vd| colors[vd.vertex] == 0) {
            Some(vd) => vd.vertex,
            None => break,
        };
        colors[start] = current_color;
        nb_colored += 1;
        // grow the class in the same order
        for vd in &ranked {
            let v = vd.vertex;
            if colors[v] != 0 || graph.are_adjacent(start, v) { continue; }
            if graph.neighbors(v).any(|w| colors[w] == current_color) { continue; }
            colors[v] = current_color;
            nb_colored += 1;
        }
    }
    Coloring { colors, nb_colors: current_color }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_cycle() {
        let graph = Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]).unwrap();
        let sol = welsh_powell(&graph);
        assert_eq!(sol.colors, vec![1,2,1,2]);
        assert_eq!(sol.nb_colors, 2);
    }

    #[test]
    fn triangle() {
        let graph = Graph::from_edges(3, &[(0,1),(1,2),(0,2)]).unwrap();
        let sol = welsh_powell(&graph);
        assert_eq!(sol.colors, vec![1,2,3]);
        assert_eq!(sol.nb_colors, 3);
    }

    #[test]
    fn crown_graph_is_two_colored() {
        // K3,3 minus a perfect matching; both sides form one class each
        let graph = Graph::from_edges(6, &[(0,4),(0,5),(1,3),(1,5),(2,3),(2,4)]).unwrap();
        let sol = welsh_powell(&graph);
        assert_eq!(sol.colors, vec![1,1,1,2,2,2]);
        assert_eq!(sol.nb_colors, 2);
    }

    #[test]
    fn class_growth_skips_class_neighbors() {
        // path 0-1-2: vertex 1 has the largest degree and opens class 1;
        // 0 and 2 both join it
        let graph = Graph::from_edges(3, &[(0,1),(1,2)]).unwrap();
        let sol = welsh_powell(&graph);
        assert_eq!(sol.colors, vec![2,1,2]);
        assert_eq!(sol.nb_colors, 2);
    }
}
