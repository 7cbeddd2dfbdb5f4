//! In-memory co-sponsorship graph on top of petgraph
//!
//! Vertices carry no data; a vertex's index is the member id minus one.
//! Edges are undirected and weighted by the number of shared bills.
//! Parallel edges and self-loops are kept as inserted.

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Number of bills two members co-sponsored together
pub type Weight = usize;

/// Largest vertex count petgraph's default `u32` indices can address
pub const MAX_VERTICES: u64 = u32::MAX as u64;

/// One edge as `(source, target, weight)` with 0-based vertex indices
pub type WeightedEdge = (usize, usize, Weight);

#[derive(Debug, Clone, Default)]
pub struct CosponsorGraph {
    graph: UnGraph<(), Weight>,
}

impl CosponsorGraph {
    /// Graph with `count` unlabelled vertices and no edges
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = UnGraph::with_capacity(count, 0);
        for _ in 0..count {
            graph.add_node(());
        }
        Self { graph }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_vertex(&self, index: usize) -> bool {
        index < self.graph.node_count()
    }

    /// Add a weighted edge between two vertices.
    ///
    /// Returns `None` when either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: Weight) -> Option<EdgeIndex> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return None;
        }
        Some(
            self.graph
                .add_edge(NodeIndex::new(source), NodeIndex::new(target), weight),
        )
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    /// Weights of every edge joining `a` and `b`, in either direction
    pub fn weights_between(&self, a: usize, b: usize) -> Vec<Weight> {
        let pair = (a.min(b), a.max(b));
        self.edges()
            .filter(|&(s, t, _)| (s.min(t), s.max(t)) == pair)
            .map(|(_, _, w)| w)
            .collect()
    }

    /// Edges as a sorted list with each pair normalised to `(min, max)`.
    ///
    /// Two graphs built from the same cells in any order compare equal here.
    pub fn canonical_edges(&self) -> Vec<WeightedEdge> {
        let mut edges: Vec<WeightedEdge> = self
            .edges()
            .map(|(s, t, w)| (s.min(t), s.max(t), w))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Underlying petgraph graph, for callers that need its algorithms
    pub fn as_petgraph(&self) -> &UnGraph<(), Weight> {
        &self.graph
    }
}
