use crate::analysis::components::is_connected;
use crate::analysis::subsets::Subsets;
use crate::core::graph::Graph;
use crate::core::ids::NodeId;

fn to_nodes(subset: &[usize]) -> Vec<NodeId> {
    subset.iter().map(|&i| i as NodeId).collect()
}

fn complement(graph: &Graph, taken: &[NodeId]) -> Vec<NodeId> {
    let mut in_taken = vec![false; graph.node_count()];
    for node in taken {
        in_taken[*node as usize] = true;
    }
    (0..graph.node_count() as NodeId)
        .filter(|v| !in_taken[*v as usize])
        .collect()
}

// partitions of the vertex set into two non-empty blocks whose induced
// subgraphs are both connected; the enumeration visits each unordered
// partition once per block, hence the division by 2
pub fn number_of_partition(graph: &Graph) -> u64 {
    let mut raw = 0u64;
    for subset in Subsets::new(graph.node_count()) {
        if subset.is_empty() || subset.len() == graph.node_count() {
            continue;
        }
        let block = to_nodes(&subset);
        if !is_connected(&graph.induced_subgraph(&block)) {
            continue;
        }
        let rest = complement(graph, &block);
        if !is_connected(&graph.induced_subgraph(&rest)) {
            continue;
        }
        raw += 1;
    }
    // a remainder means the classification itself is broken
    assert_eq!(0, raw % 2, "2-partition tally {raw} is not divisible by 2");
    raw / 2
}

// same idea with three non-empty connected blocks; the nested enumeration
// produces each unordered partition in all 3! block orderings
pub fn number_of_3partition(graph: &Graph) -> u64 {
    let mut raw = 0u64;
    for subset in Subsets::new(graph.node_count()) {
        if subset.is_empty() {
            continue;
        }
        let first = to_nodes(&subset);
        if !is_connected(&graph.induced_subgraph(&first)) {
            continue;
        }
        let others = complement(graph, &first);
        for inner in Subsets::new(others.len()) {
            if inner.is_empty() || inner.len() == others.len() {
                continue;
            }
            let second = inner.iter().map(|&i| others[i]).collect::<Vec<_>>();
            if !is_connected(&graph.induced_subgraph(&second)) {
                continue;
            }
            let mut taken = first.clone();
            taken.extend_from_slice(&second);
            let third = complement(graph, &taken);
            if !is_connected(&graph.induced_subgraph(&third)) {
                continue;
            }
            raw += 1;
        }
    }
    assert_eq!(0, raw % 6, "3-partition tally {raw} is not divisible by 6");
    raw / 6
}
