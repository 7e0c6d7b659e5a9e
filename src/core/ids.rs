pub type NodeId = u32;

// index into the graph's edge list; edge order is load-bearing for the
// subset counters, so edges are always addressed by position
pub type EdgeId = usize;
