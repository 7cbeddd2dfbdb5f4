//! Plain-text rendering of a built graph
//!
//! ```text
//! COSIGN U-W- 3 2
//! + attr: weight (e)
//! + edges:
//! 0--1 (1)
//! 1--2 (3)
//! ```
//!
//! `U` marks the graph undirected and `W` weighted. At most `edge_limit`
//! edges are listed.

use super::store::CosponsorGraph;
use std::fmt;

pub const DEFAULT_EDGE_LIMIT: usize = 20;

pub struct GraphSummary<'a> {
    graph: &'a CosponsorGraph,
    edge_limit: usize,
}

impl<'a> GraphSummary<'a> {
    pub fn new(graph: &'a CosponsorGraph) -> Self {
        Self {
            graph,
            edge_limit: DEFAULT_EDGE_LIMIT,
        }
    }

    /// Number of edges to list; 0 prints the header only
    pub fn edge_limit(mut self, limit: usize) -> Self {
        self.edge_limit = limit;
        self
    }
}

impl fmt::Display for GraphSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = self.graph.edge_count();
        writeln!(f, "COSIGN U-W- {} {}", self.graph.vertex_count(), edges)?;
        writeln!(f, "+ attr: weight (e)")?;
        if self.edge_limit == 0 || edges == 0 {
            return Ok(());
        }

        writeln!(f, "+ edges:")?;
        for (s, t, w) in self.graph.edges().take(self.edge_limit) {
            writeln!(f, "{}--{} ({})", s, t, w)?;
        }
        if edges > self.edge_limit {
            writeln!(f, "  ... and {} more", edges - self.edge_limit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CosponsorGraph {
        let mut graph = CosponsorGraph::with_vertices(3);
        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 2, 3);
        graph
    }

    #[test]
    fn test_summary_lists_edges() {
        let text = GraphSummary::new(&sample()).to_string();
        assert_eq!(
            text,
            "COSIGN U-W- 3 2\n+ attr: weight (e)\n+ edges:\n0--1 (1)\n1--2 (3)\n"
        );
    }

    #[test]
    fn test_summary_truncates() {
        let text = GraphSummary::new(&sample()).edge_limit(1).to_string();
        assert!(text.ends_with("0--1 (1)\n  ... and 1 more\n"));
    }

    #[test]
    fn test_summary_header_only() {
        let graph = sample();
        let text = GraphSummary::new(&graph).edge_limit(0).to_string();
        assert_eq!(text, "COSIGN U-W- 3 2\n+ attr: weight (e)\n");

        let empty = CosponsorGraph::with_vertices(5);
        assert_eq!(
            GraphSummary::new(&empty).to_string(),
            "COSIGN U-W- 5 0\n+ attr: weight (e)\n"
        );
    }
}
