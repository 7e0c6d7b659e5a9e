use crate::core::graph::{Graph, GraphBuilder};
use crate::core::ids::NodeId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Erdős–Rényi G(n, p): every pair of nodes gets an edge independently with
// probability p; the same seed always yields the same graph
pub fn gnp_random_graph(node_count: usize, edge_probability: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new(node_count);
    for u in 0..node_count {
        for v in u + 1..node_count {
            if rng.random_bool(edge_probability) {
                builder.add_edge(u as NodeId, v as NodeId);
            }
        }
    }
    builder.freeze()
}

pub fn path_graph(node_count: usize) -> Graph {
    let mut builder = GraphBuilder::new(node_count);
    for u in 1..node_count {
        builder.add_edge(u as NodeId - 1, u as NodeId);
    }
    builder.freeze()
}

pub fn cycle_graph(node_count: usize) -> Graph {
    assert!(node_count >= 3, "a cycle needs at least 3 nodes");
    let mut builder = GraphBuilder::new(node_count);
    for u in 1..node_count {
        builder.add_edge(u as NodeId - 1, u as NodeId);
    }
    builder.add_edge(node_count as NodeId - 1, 0);
    builder.freeze()
}

pub fn complete_graph(node_count: usize) -> Graph {
    let mut builder = GraphBuilder::new(node_count);
    for u in 0..node_count {
        for v in u + 1..node_count {
            builder.add_edge(u as NodeId, v as NodeId);
        }
    }
    builder.freeze()
}

// node 0 is the center
pub fn star_graph(node_count: usize) -> Graph {
    let mut builder = GraphBuilder::new(node_count);
    for leaf in 1..node_count {
        builder.add_edge(0, leaf as NodeId);
    }
    builder.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::components::is_connected;

    #[test]
    fn test_gnp_deterministic_for_seed() {
        let a = gnp_random_graph(8, 0.4, 7);
        let b = gnp_random_graph(8, 0.4, 7);
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_gnp_extreme_probabilities() {
        let empty = gnp_random_graph(6, 0.0, 1);
        assert_eq!(0, empty.edge_count());

        let full = gnp_random_graph(6, 1.0, 1);
        assert_eq!(15, full.edge_count());
    }

    #[test]
    fn test_gnp_edges_are_valid() {
        let g = gnp_random_graph(8, 0.6, 3);
        for (u, v) in g.edges() {
            assert!(u < v);
            assert!((*v as usize) < g.node_count());
        }
    }

    #[test]
    fn test_fixtures() {
        assert_eq!(&[(0, 1), (1, 2)], path_graph(3).edges());
        assert_eq!(&[(0, 1), (1, 2), (2, 3), (3, 0)], cycle_graph(4).edges());
        assert_eq!(3, complete_graph(3).edge_count());
        assert_eq!(3, star_graph(4).degree(0));
        assert!(is_connected(&complete_graph(5)));
    }
}
