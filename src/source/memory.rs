use super::{AdjacencySource, EntityCounter};
use crate::error::SourceError;
use crate::models::Cell;

/// Vector-backed source
///
/// Failures can be planted to exercise the builder's error paths: an
/// unavailable counter, or a read error at a given position of the stream.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entity_count: u64,
    cells: Vec<Cell>,
    count_failure: Option<String>,
    cell_failure: Option<(usize, String)>,
}

impl MemorySource {
    pub fn new(entity_count: u64, cells: Vec<Cell>) -> Self {
        Self {
            entity_count,
            cells,
            ..Default::default()
        }
    }

    pub fn with_count_failure(mut self, message: &str) -> Self {
        self.count_failure = Some(message.to_string());
        self
    }

    /// Yield an error instead of the cell at `index`, then stop
    pub fn with_cell_failure(mut self, index: usize, message: &str) -> Self {
        self.cell_failure = Some((index, message.to_string()));
        self
    }
}

impl EntityCounter for MemorySource {
    fn entity_count(&self) -> Result<u64, SourceError> {
        match &self.count_failure {
            Some(msg) => Err(SourceError::Unavailable(msg.clone())),
            None => Ok(self.entity_count),
        }
    }
}

impl AdjacencySource for MemorySource {
    type Cells = std::vec::IntoIter<Result<Cell, SourceError>>;

    fn cells(&self) -> Result<Self::Cells, SourceError> {
        let mut items: Vec<Result<Cell, SourceError>> =
            self.cells.iter().cloned().map(Ok).collect();
        if let Some((index, msg)) = &self.cell_failure {
            items.truncate(*index);
            items.push(Err(SourceError::Unavailable(msg.clone())));
        }
        Ok(items.into_iter())
    }
}
