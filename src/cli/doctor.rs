//! Doctor command - check configuration and database reachability

use anyhow::Result;
use console::style;
use cosign_graph::config::{ConnectionOverrides, ConnectionSettings, UserConfig};
use cosign_graph::source::{EntityCounter, MongoSource};

pub fn run(overrides: &ConnectionOverrides) -> Result<()> {
    println!("cosign-graph doctor\n");

    let config = match UserConfig::load() {
        Ok(config) => {
            println!("{} Configuration: OK", style("✓").green());
            config
        }
        Err(e) => {
            println!("{} Configuration: {}", style("✗").red(), e);
            anyhow::bail!("configuration check failed");
        }
    };

    let settings = match ConnectionSettings::resolve(&config, overrides) {
        Ok(settings) => {
            println!(
                "{} Connection: {}",
                style("✓").green(),
                style(settings.redacted_uri()).cyan()
            );
            settings
        }
        Err(e) => {
            println!("{} Connection: {}", style("✗").red(), e);
            anyhow::bail!("connection settings are incomplete");
        }
    };

    let source = match MongoSource::connect(&settings) {
        Ok(source) => {
            println!("{} Database reachable", style("✓").green());
            source
        }
        Err(e) => {
            println!("{} Database unreachable: {}", style("✗").red(), e);
            anyhow::bail!("database check failed");
        }
    };

    let members = source.entity_count()?;
    let cells = source.cell_count()?;
    let mark = if members > 0 {
        style("✓").green()
    } else {
        style("○").yellow()
    };
    println!(
        "{} '{}': {} members ({}), ~{} cells ({})",
        mark,
        settings.database,
        members,
        settings.members_collection,
        cells,
        settings.cells_collection
    );

    println!("\nAll checks passed!");
    Ok(())
}
