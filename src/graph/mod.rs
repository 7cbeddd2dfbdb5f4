//! Co-sponsorship graph
//!
//! Pure Rust implementation on petgraph: vertices are members, edges are
//! adjacency cells weighted by shared bill count.

pub mod builder;
pub mod position;
pub mod store;
pub mod summary;

pub use builder::{build, build_with_progress, GraphBuilder};
pub use position::{format_position, parse_position, POSITION_SEPARATOR};
pub use store::{CosponsorGraph, Weight, WeightedEdge, MAX_VERTICES};
pub use summary::{GraphSummary, DEFAULT_EDGE_LIMIT};
