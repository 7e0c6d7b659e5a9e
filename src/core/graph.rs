use crate::core::ids::{EdgeId, NodeId};

pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new(node_count: usize) -> Self {
        Self {
            graph: Graph::new(node_count),
        }
    }

    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        assert_ne!(u, v, "self-loops are not supported");
        assert!(
            (u as usize) < self.graph.node_count && (v as usize) < self.graph.node_count,
            "edge endpoint out of range"
        );
        self.graph.edges.push((u, v));
    }

    pub fn freeze(mut self) -> Graph {
        if self.graph.edge_count() == 0 {
            return self.graph;
        }

        let mut buf = vec![0; self.graph.node_count];

        // every undirected edge appears in both endpoint neighborhoods
        for (u, v) in &self.graph.edges {
            buf[*u as usize] += 1;
            buf[*v as usize] += 1;
        }

        // compute adjacency offsets per node
        let mut next = 0;
        for (i, degree) in buf.iter().enumerate() {
            let from = next;
            let to = from + degree;
            self.graph.offsets[i] = from;
            self.graph.offsets[i + 1] = to;
            next = to;
        }

        buf.fill(0);
        self.graph.adjacency = vec![0; 2 * self.graph.edge_count()];
        for (u, v) in &self.graph.edges {
            let (u, v) = (*u as usize, *v as usize);
            self.graph.adjacency[self.graph.offsets[u] + buf[u]] = v as NodeId;
            buf[u] += 1;
            self.graph.adjacency[self.graph.offsets[v] + buf[v]] = u as NodeId;
            buf[v] += 1;
        }

        self.graph
    }
}

pub struct Graph {
    node_count: usize,
    edges: Vec<(NodeId, NodeId)>,
    adjacency: Vec<NodeId>,
    offsets: Vec<usize>,
}

impl Graph {
    fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: vec![],
            adjacency: vec![],
            offsets: vec![0; node_count + 1],
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[self.offsets[node as usize]..self.offsets[node as usize + 1]]
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.offsets[node as usize + 1] - self.offsets[node as usize]
    }

    // candidate subgraph: all original nodes, only the edges at the given
    // positions in the edge list
    pub fn edge_subgraph(&self, edge_ids: &[EdgeId]) -> Graph {
        let mut builder = GraphBuilder::new(self.node_count);
        for id in edge_ids {
            let (u, v) = self.edges[*id];
            builder.add_edge(u, v);
        }
        builder.freeze()
    }

    // induced subgraph: the given nodes plus every edge with both endpoints
    // inside; kept nodes are relabeled to 0..k in the order given, which the
    // connectivity checks never observe
    pub fn induced_subgraph(&self, nodes: &[NodeId]) -> Graph {
        let mut relabel = vec![NodeId::MAX; self.node_count];
        for (new, old) in nodes.iter().enumerate() {
            relabel[*old as usize] = new as NodeId;
        }

        let mut builder = GraphBuilder::new(nodes.len());
        for (u, v) in &self.edges {
            let ru = relabel[*u as usize];
            let rv = relabel[*v as usize];
            if ru != NodeId::MAX && rv != NodeId::MAX {
                builder.add_edge(ru, rv);
            }
        }
        builder.freeze()
    }
}
