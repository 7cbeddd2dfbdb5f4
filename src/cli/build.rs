//! Build command - construct the graph and print its summary

use anyhow::{Context, Result};
use console::style;
use cosign_graph::config::ConnectionSettings;
use cosign_graph::graph::{build_with_progress, GraphSummary};
use cosign_graph::source::MongoSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn run(settings: &ConnectionSettings, edge_limit: usize) -> Result<()> {
    let source = MongoSource::connect(settings)
        .with_context(|| format!("Failed to connect to {}", settings.redacted_uri()))?;

    let progress = match source.cell_count() {
        Ok(total) => ProgressBar::new(total).with_style(create_bar_style()),
        Err(e) => {
            tracing::debug!("Cell count unavailable, using a spinner: {}", e);
            ProgressBar::new_spinner().with_style(create_spinner_style())
        }
    };
    progress.set_message("Adding co-sponsorship edges...");
    progress.enable_steady_tick(Duration::from_millis(100));

    let graph = build_with_progress(&source, &source, Some(progress.clone()))
        .with_context(|| format!("Failed to build graph from '{}'", source.database_name()));
    if graph.is_err() {
        progress.abandon_with_message(format!("{}Build aborted", style("✗ ").red()));
    }
    let graph = graph?;
    drop(source);

    print!("{}", GraphSummary::new(&graph).edge_limit(edge_limit));
    Ok(())
}

/// Create spinner progress style
fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg} {pos}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Create bar progress style
fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░  ")
}
