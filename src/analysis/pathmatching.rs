use crate::analysis::components::is_forest;
use crate::analysis::subsets::Subsets;
use crate::core::graph::Graph;
use crate::core::ids::NodeId;

// edge subsets whose candidate subgraph has degree at most 2 everywhere and
// no cycle, i.e. a disjoint union of simple paths and isolated vertices; the
// empty subset always qualifies
pub fn number_of_pathmatching(graph: &Graph) -> u64 {
    let mut count = 0;
    for subset in Subsets::new(graph.edge_count()) {
        let h = graph.edge_subgraph(&subset);
        let degree_bounded = (0..h.node_count() as NodeId).all(|v| h.degree(v) <= 2);
        if degree_bounded && is_forest(&h) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::GraphBuilder;
    use crate::ingest::synthetic::{complete_graph, cycle_graph, path_graph, star_graph};

    #[test]
    fn test_edgeless_graph() {
        let g = GraphBuilder::new(4).freeze();
        assert_eq!(1, number_of_pathmatching(&g));
    }

    #[test]
    fn test_path_all_subsets_qualify() {
        assert_eq!(4, number_of_pathmatching(&path_graph(3)));
    }

    #[test]
    fn test_triangle_excludes_cycle() {
        // only the full edge set forms a cycle
        assert_eq!(7, number_of_pathmatching(&complete_graph(3)));
    }

    #[test]
    fn test_four_cycle_excludes_cycle() {
        assert_eq!(15, number_of_pathmatching(&cycle_graph(4)));
    }

    #[test]
    fn test_star_excludes_high_degree() {
        // K1,3: subsets of size 3 give the center degree 3
        assert_eq!(7, number_of_pathmatching(&star_graph(4)));
    }

    #[test]
    fn test_always_at_least_one() {
        for n in 0..5 {
            assert!(number_of_pathmatching(&GraphBuilder::new(n).freeze()) >= 1);
        }
    }
}
