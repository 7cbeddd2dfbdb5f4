//! Read-only data sources consumed by the graph builder
//!
//! The builder needs two things: how many members exist, and the stream of
//! adjacency cells. Both are passed in explicitly; no connection state is
//! kept in globals.

mod memory;
mod mongo;

pub use memory::MemorySource;
pub use mongo::{MongoCells, MongoSource};

use crate::error::SourceError;
use crate::models::Cell;

/// Counts the entities that become graph vertices
pub trait EntityCounter {
    fn entity_count(&self) -> Result<u64, SourceError>;
}

/// Yields adjacency cells, lazily and in a stable order for one pass
pub trait AdjacencySource {
    type Cells: Iterator<Item = Result<Cell, SourceError>>;

    fn cells(&self) -> Result<Self::Cells, SourceError>;
}
