//! Graph construction tests against the library API
//!
//! Uses the in-memory source, so no database is needed.

use cosign_graph::graph::{build, format_position, GraphBuilder, GraphSummary};
use cosign_graph::source::MemorySource;
use cosign_graph::{BuildError, Cell, PositionError};

/// A small, deterministic set of cells over `n` members
fn sample_cells(n: usize) -> Vec<Cell> {
    let mut cells = Vec::new();
    for s in 0..n {
        for t in (s + 1)..n {
            let bills: Vec<i64> = (0..((s * 7 + t * 3) % 5) as i64).collect();
            cells.push(Cell::new(&format_position(s, t), bills));
        }
    }
    cells
}

#[test]
fn every_cell_becomes_one_edge() {
    let cells = sample_cells(8);
    let source = MemorySource::new(8, cells.clone());
    let graph = build(&source, &source).unwrap();

    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), cells.len());
    for cell in &cells {
        let (s, t) = cosign_graph::graph::parse_position(&cell.position).unwrap();
        let (s, t) = (usize::try_from(s).unwrap(), usize::try_from(t).unwrap());
        assert!(graph.weights_between(s, t).contains(&cell.bill_numbers.len()));
    }
}

#[test]
fn cell_order_does_not_change_the_graph() {
    let cells = sample_cells(6);
    let mut reversed = cells.clone();
    reversed.reverse();
    let mut rotated = cells.clone();
    rotated.rotate_left(4);

    let expected = {
        let source = MemorySource::new(6, cells);
        build(&source, &source).unwrap().canonical_edges()
    };
    for shuffled in [reversed, rotated] {
        let source = MemorySource::new(6, shuffled);
        let graph = build(&source, &source).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.canonical_edges(), expected);
    }
}

#[test]
fn rebuilding_gives_the_same_graph() {
    let source = MemorySource::new(5, sample_cells(5));
    let first = build(&source, &source).unwrap();
    let second = build(&source, &source).unwrap();
    assert_eq!(first.vertex_count(), second.vertex_count());
    assert_eq!(first.edges().collect::<Vec<_>>(), second.edges().collect::<Vec<_>>());
}

#[test]
fn malformed_cell_yields_no_graph() {
    let mut cells = sample_cells(4);
    cells.insert(2, Cell::new("2-3", [1i64]));
    let source = MemorySource::new(4, cells);

    match build(&source, &source) {
        Err(BuildError::MalformedPosition { record, source, .. }) => {
            assert_eq!(record, 2);
            assert_eq!(source, PositionError::MissingSeparator);
        }
        other => panic!("expected a parse failure, got {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn error_messages_identify_the_record() {
    let source = MemorySource::new(2, vec![Cell::new("1_2", [1i64]), Cell::new("1_9", [1i64])]);
    let message = build(&source, &source).unwrap_err().to_string();
    assert!(message.contains("cell #1"), "{message}");
    assert!(message.contains("'1_9'"), "{message}");
    assert!(message.contains("vertex 8"), "{message}");
}

#[test]
fn id_zero_is_out_of_range_not_malformed() {
    let source = MemorySource::new(3, vec![Cell::new("0_1", [1i64])]);
    match build(&source, &source) {
        Err(BuildError::IndexOutOfRange { index, .. }) => assert_eq!(index, -1),
        other => panic!("expected out of range, got {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn builder_can_be_fed_cell_by_cell() {
    let mut builder = GraphBuilder::new(3);
    builder.add_cell(&Cell::new("1_2", ["HR1", "HR2"])).unwrap();
    builder.add_cell(&Cell::new("3_1", ["HR9"])).unwrap();
    assert!(builder.add_cell(&Cell::new("0_1", ["HR3"])).is_err());

    let graph = builder.finish();
    assert_eq!(graph.canonical_edges(), vec![(0, 1, 2), (0, 2, 1)]);
}

#[test]
fn summary_reports_counts() {
    let source = MemorySource::new(
        3,
        vec![
            Cell::new("1_2", ["HR1"]),
            Cell::new("2_3", ["HR2", "HR3", "HR4"]),
        ],
    );
    let graph = build(&source, &source).unwrap();
    let text = GraphSummary::new(&graph).to_string();
    assert!(text.starts_with("COSIGN U-W- 3 2\n"));
    assert!(text.contains("0--1 (1)\n"));
    assert!(text.contains("1--2 (3)\n"));
}
