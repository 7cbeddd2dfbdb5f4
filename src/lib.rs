//! cosign-graph - House co-sponsorship graph builder
//!
//! Reads the `members` and `cells` collections of the cosign dataset and
//! builds a weighted, undirected graph: one vertex per member, one edge per
//! pair of members who co-sponsored at least one bill together.

pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod source;

pub use error::{BuildError, ConfigError, PositionError, SourceError};
pub use graph::{build, CosponsorGraph, GraphSummary};
pub use models::{BillId, Cell};
