use crate::core::graph::Graph;
use crate::core::ids::NodeId;
use std::collections::HashMap;

struct DisjointSet {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            size: vec![1; size],
        }
    }

    fn find(&mut self, u: u32) -> u32 {
        let mut ru = u;
        while ru != self.parent[ru as usize] {
            ru = self.parent[ru as usize];
        }
        let mut v = u;
        while v != self.parent[v as usize] {
            let w = v;
            v = self.parent[v as usize];
            self.parent[w as usize] = ru;
        }
        ru
    }

    // returns false when both nodes were already in the same set
    fn union(&mut self, u: u32, v: u32) -> bool {
        let ru = self.find(u) as usize;
        let rv = self.find(v) as usize;
        if ru == rv {
            return false;
        }
        if self.size[ru] > self.size[rv] {
            self.parent[rv] = ru as u32;
            self.size[ru] += self.size[rv];
        } else {
            self.parent[ru] = rv as u32;
            self.size[rv] += self.size[ru];
        }
        true
    }
}

fn union_edges(graph: &Graph) -> DisjointSet {
    let mut dsu = DisjointSet::new(graph.node_count());
    for (u, v) in graph.edges() {
        dsu.union(*u, *v);
    }
    dsu
}

pub fn connected_components(graph: &Graph) -> Vec<u32> {
    let mut clusters = HashMap::new();
    let mut dsu = union_edges(graph);
    for u in 0..graph.node_count() as u32 {
        let ru = dsu.find(u);
        if !clusters.contains_key(&ru) {
            let clusters_count = clusters.len() as u32;
            clusters.insert(ru, clusters_count);
        }
    }
    let mut result = vec![0; graph.node_count()];
    for u in 0..graph.node_count() as u32 {
        let ru = dsu.find(u);
        let cluster_id = *clusters.get(&ru).unwrap();
        result[u as usize] = cluster_id;
    }
    result
}

pub fn component_count(graph: &Graph) -> usize {
    let mut dsu = union_edges(graph);
    let mut count = 0;
    for u in 0..graph.node_count() as u32 {
        if dsu.find(u) == u {
            count += 1;
        }
    }
    count
}

// graphs with fewer than two nodes count as connected
pub fn is_connected(graph: &Graph) -> bool {
    if graph.node_count() < 2 {
        return true;
    }
    component_count(graph) == 1
}

pub fn has_path(graph: &Graph, u: NodeId, v: NodeId) -> bool {
    let mut dsu = union_edges(graph);
    dsu.find(u) == dsu.find(v)
}

pub fn is_forest(graph: &Graph) -> bool {
    let mut dsu = DisjointSet::new(graph.node_count());
    for (u, v) in graph.edges() {
        // an edge inside an existing component closes a cycle
        if !dsu.union(*u, *v) {
            return false;
        }
    }
    true
}
