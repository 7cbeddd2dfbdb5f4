//! CLI command definitions and handlers

mod build;
mod doctor;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cosign_graph::config::{ConnectionOverrides, ConnectionSettings, UserConfig};

/// cosign-graph - House co-sponsorship graph builder
#[derive(Parser, Debug)]
#[command(name = "cosign-graph")]
#[command(
    version,
    about = "Build the House co-sponsorship graph from the cosign MongoDB dataset",
    long_about = "Reads the members and adjacency cells of the cosign dataset and builds \
an undirected weighted graph: one vertex per member, one edge per pair of members who \
co-sponsored a bill together, weighted by the number of shared bills.\n\n\
Run without a subcommand to build the graph and print its summary.",
    after_help = "\
Examples:
  cosign-graph -d                      Build from the local database
  cosign-graph                         Build from Atlas (MONGO_USER / MONGO_PASSWORD)
  cosign-graph --edges 0               Only print vertex and edge counts
  cosign-graph doctor -d               Check that the local database is reachable
  cosign-graph config init             Write an example user config"
)]
pub struct Cli {
    /// Use the local development database (mongodb://localhost:27017)
    #[arg(short = 'd', long = "dev", global = true)]
    pub dev: bool,

    /// Connection string; overrides --dev and all configured credentials
    #[arg(long, global = true)]
    pub uri: Option<String>,

    /// Database name (default: cosign)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Number of edges to list in the summary (0 = counts only)
    #[arg(long, global = true, default_value_t = cosign_graph::graph::DEFAULT_EDGE_LIMIT)]
    pub edges: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the graph and print its summary (default)
    Build,

    /// Check configuration and database reachability
    Doctor,

    /// Manage the user configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example config file if none exists
    Init,
    /// Show config paths and the resolved connection
    Show,
}

impl Cli {
    fn overrides(&self) -> ConnectionOverrides {
        ConnectionOverrides {
            dev: self.dev,
            uri: self.uri.clone(),
            database: self.database.clone(),
        }
    }

    fn connection_settings(&self) -> Result<ConnectionSettings> {
        let config = UserConfig::load().context("Failed to load configuration")?;
        ConnectionSettings::resolve(&config, &self.overrides())
            .context("Failed to resolve database connection")
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Build) => build::run(&cli.connection_settings()?, cli.edges),
        Some(Commands::Doctor) => doctor::run(&cli.overrides()),
        Some(Commands::Config { action }) => run_config_action(action, &cli.overrides()),
    }
}

fn run_config_action(action: &ConfigAction, overrides: &ConnectionOverrides) -> Result<()> {
    use console::style;

    match action {
        ConfigAction::Init => {
            let path = UserConfig::init_user_config()?;
            println!("{} Config initialized at: {}", style("✓").green(), path.display());
            println!("\nEdit it to add your Atlas credentials, or set them via environment:");
            println!("  export MONGO_USER=\"...\"");
            println!("  export MONGO_PASSWORD=\"...\"");
            Ok(())
        }
        ConfigAction::Show => {
            let config = UserConfig::load()?;
            println!("Config paths:");
            if let Some(user_path) = UserConfig::user_config_path() {
                let status = if user_path.exists() { "✓" } else { "(not found)" };
                println!("  User: {} {}", user_path.display(), status);
            }
            let env_status = if std::path::Path::new(".env").exists() {
                "✓"
            } else {
                "(not found)"
            };
            println!("  Env:  ./.env {}", env_status);
            println!();
            match ConnectionSettings::resolve(&config, overrides) {
                Ok(settings) => {
                    println!("  URI:      {}", style(settings.redacted_uri()).cyan());
                    println!("  Database: {}", settings.database);
                    println!("  Members:  {}", settings.members_collection);
                    println!("  Cells:    {}", settings.cells_collection);
                }
                Err(e) => println!("  {} {}", style("✗").red(), e),
            }
            Ok(())
        }
    }
}
