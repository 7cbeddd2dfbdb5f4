//! Graph construction from adjacency cells
//!
//! One vertex per member, one edge per cell, weighted by the number of bills
//! in the cell. Cells are consumed once, in the order the source yields them.
//! The first bad cell aborts the build; no partial graph is handed out.

use super::position::parse_position;
use super::store::{CosponsorGraph, MAX_VERTICES};
use crate::error::{BuildError, SourceError};
use crate::models::Cell;
use crate::source::{AdjacencySource, EntityCounter};
use indicatif::ProgressBar;

/// Incremental builder over a fixed vertex set
#[derive(Debug)]
pub struct GraphBuilder {
    graph: CosponsorGraph,
    cells_seen: usize,
    progress: Option<ProgressBar>,
}

impl GraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        tracing::info!("Allocating {} vertices", vertex_count);
        Self {
            graph: CosponsorGraph::with_vertices(vertex_count),
            cells_seen: 0,
            progress: None,
        }
    }

    /// Tick `progress` once per cell
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Turn one cell into one edge
    pub fn add_cell(&mut self, cell: &Cell) -> Result<(), BuildError> {
        let record = self.cells_seen;
        self.cells_seen += 1;

        let (source, target) =
            parse_position(&cell.position).map_err(|source| BuildError::MalformedPosition {
                record,
                position: cell.position.clone(),
                source,
            })?;

        let out_of_range = |index| BuildError::IndexOutOfRange {
            record,
            position: cell.position.clone(),
            index,
            vertex_count: self.graph.vertex_count(),
        };
        let s = self.vertex(source).ok_or_else(|| out_of_range(source))?;
        let t = self.vertex(target).ok_or_else(|| out_of_range(target))?;

        let weight = cell.weight();
        self.graph.add_edge(s, t, weight);
        tracing::trace!("edge {}--{} weight {}", source, target, weight);

        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
        Ok(())
    }

    fn vertex(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| self.graph.contains_vertex(i))
    }

    /// Consume a cell stream, stopping at the first error
    pub fn extend<I>(&mut self, cells: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = Result<Cell, SourceError>>,
    {
        for cell in cells {
            self.add_cell(&cell?)?;
        }
        Ok(())
    }

    pub fn finish(self) -> CosponsorGraph {
        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }
        tracing::info!(
            "Built graph: {} vertices, {} edges from {} cells",
            self.graph.vertex_count(),
            self.graph.edge_count(),
            self.cells_seen
        );
        self.graph
    }
}

/// Build the graph from a member counter and a cell source
pub fn build<C, A>(counter: &C, cells: &A) -> Result<CosponsorGraph, BuildError>
where
    C: EntityCounter + ?Sized,
    A: AdjacencySource + ?Sized,
{
    build_with_progress(counter, cells, None)
}

/// Same as [`build`], ticking `progress` for each cell
pub fn build_with_progress<C, A>(
    counter: &C,
    cells: &A,
    progress: Option<ProgressBar>,
) -> Result<CosponsorGraph, BuildError>
where
    C: EntityCounter + ?Sized,
    A: AdjacencySource + ?Sized,
{
    let count = counter.entity_count()?;
    let vertex_count = usize::try_from(count)
        .ok()
        .filter(|_| count <= MAX_VERTICES)
        .ok_or(SourceError::CountOverflow(count))?;

    let mut builder = GraphBuilder::new(vertex_count);
    if let Some(pb) = progress {
        builder = builder.with_progress(pb);
    }
    builder.extend(cells.cells()?)?;
    Ok(builder.finish())
}
