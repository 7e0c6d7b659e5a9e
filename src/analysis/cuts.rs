use crate::analysis::components::{component_count, has_path, is_connected, is_forest};
use crate::analysis::subsets::Subsets;
use crate::core::graph::Graph;
use crate::core::ids::NodeId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TerminalError {
    #[error("terminals must be two distinct vertices of the graph, got {0} and {1}")]
    InvalidTerminal(NodeId, NodeId),
    #[error("terminal counters need at least 2 vertices, graph has {0}")]
    InsufficientVertices(usize),
}

fn check_terminals(graph: &Graph, r1: NodeId, r2: NodeId) -> Result<(), TerminalError> {
    if graph.node_count() < 2 {
        return Err(TerminalError::InsufficientVertices(graph.node_count()));
    }
    let n = graph.node_count() as NodeId;
    if r1 == r2 || r1 >= n || r2 >= n {
        return Err(TerminalError::InvalidTerminal(r1, r2));
    }
    Ok(())
}

// number of edge subsets whose candidate subgraph is disconnected; the empty
// subset counts whenever the graph has at least 2 vertices
pub fn number_of_cuts(graph: &Graph) -> u64 {
    let mut count = 0;
    for subset in Subsets::new(graph.edge_count()) {
        let h = graph.edge_subgraph(&subset);
        if !is_connected(&h) {
            count += 1;
        }
    }
    count
}

// edge subsets that leave r1 and r2 in different components AND split the
// graph into exactly two components; fragmentations into 3+ pieces that
// happen to separate the terminals do not qualify
pub fn number_of_rcuts(graph: &Graph, r1: NodeId, r2: NodeId) -> Result<u64, TerminalError> {
    check_terminals(graph, r1, r2)?;
    let mut count = 0;
    for subset in Subsets::new(graph.edge_count()) {
        let h = graph.edge_subgraph(&subset);
        if !has_path(&h, r1, r2) && component_count(&h) == 2 {
            count += 1;
        }
    }
    Ok(count)
}

// terminal-separating cuts that are additionally acyclic, i.e. spanning
// forests of the two resulting components
pub fn number_of_rforest(graph: &Graph, r1: NodeId, r2: NodeId) -> Result<u64, TerminalError> {
    check_terminals(graph, r1, r2)?;
    let mut count = 0;
    for subset in Subsets::new(graph.edge_count()) {
        let h = graph.edge_subgraph(&subset);
        if !has_path(&h, r1, r2) && component_count(&h) == 2 && is_forest(&h) {
            count += 1;
        }
    }
    Ok(count)
}
