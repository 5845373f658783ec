/// Counters collected while walking one root's dependency graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Nodes rendered, root included
    pub nodes: usize,
    /// Edges rendered, including edges to already visited nodes
    pub edges: usize,
}

impl WalkStats {
    pub fn new(nodes: usize, edges: usize) -> Self {
        Self { nodes, edges }
    }
}
