use crate::core::graph::Graph;
use crate::core::ids::NodeId;

// all simple paths from source to target by depth-first search with
// backtracking; fine for the small graphs this crate targets
pub fn simple_paths(graph: &Graph, source: NodeId, target: NodeId) -> Vec<Vec<NodeId>> {
    let mut paths = vec![];
    if source == target || graph.node_count() == 0 {
        return paths;
    }
    let mut on_path = vec![false; graph.node_count()];
    let mut current = vec![source];
    on_path[source as usize] = true;
    extend(graph, target, &mut current, &mut on_path, &mut paths);
    paths
}

fn extend(
    graph: &Graph,
    target: NodeId,
    current: &mut Vec<NodeId>,
    on_path: &mut Vec<bool>,
    paths: &mut Vec<Vec<NodeId>>,
) {
    let last = *current.last().unwrap();
    for &next in graph.neighbors(last) {
        if on_path[next as usize] {
            continue;
        }
        current.push(next);
        if next == target {
            paths.push(current.clone());
        } else {
            on_path[next as usize] = true;
            extend(graph, target, current, on_path, paths);
            on_path[next as usize] = false;
        }
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::GraphBuilder;
    use crate::ingest::synthetic::{cycle_graph, path_graph};

    #[test]
    fn test_path_graph_single_route() {
        let paths = simple_paths(&path_graph(3), 0, 2);
        assert_eq!(vec![vec![0, 1, 2]], paths);
    }

    #[test]
    fn test_four_cycle_two_routes() {
        let mut paths = simple_paths(&cycle_graph(4), 0, 3);
        paths.sort();
        assert_eq!(vec![vec![0, 1, 2, 3], vec![0, 3]], paths);
    }

    #[test]
    fn test_no_route_between_components() {
        let mut gb = GraphBuilder::new(4);
        gb.add_edge(0, 1);
        gb.add_edge(2, 3);
        let g = gb.freeze();

        assert!(simple_paths(&g, 0, 3).is_empty());
    }

    #[test]
    fn test_diamond_routes() {
        // 0-1-3, 0-2-3 and the chord 1-2 giving 0-1-2-3 and 0-2-1-3
        let mut gb = GraphBuilder::new(4);
        gb.add_edge(0, 1);
        gb.add_edge(0, 2);
        gb.add_edge(1, 3);
        gb.add_edge(2, 3);
        gb.add_edge(1, 2);
        let g = gb.freeze();

        assert_eq!(4, simple_paths(&g, 0, 3).len());
    }
}
