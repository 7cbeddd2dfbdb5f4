//! Error types for graph construction and its data sources

use thiserror::Error;

/// Why a position key could not be turned into a vertex pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("missing '_' separator")]
    MissingSeparator,

    #[error("expected 2 tokens, found {0}")]
    WrongTokenCount(usize),

    #[error("'{0}' is not an integer")]
    InvalidIndex(String),
}

/// Failures of the entity counter or the adjacency iterator
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("entity count {0} does not fit in memory")]
    CountOverflow(u64),

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Errors that abort a graph build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("malformed position '{position}' in cell #{record}: {source}")]
    MalformedPosition {
        record: usize,
        position: String,
        #[source]
        source: PositionError,
    },

    #[error(
        "cell #{record} ('{position}') references vertex {index}, but only {vertex_count} vertices exist"
    )]
    IndexOutOfRange {
        record: usize,
        position: String,
        index: i64,
        vertex_count: usize,
    },

    #[error("failed to read cells: {0}")]
    Source(#[from] SourceError),
}

/// Errors while resolving connection settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing {0} (set it in the environment, .env, or the user config, or pass --dev)")]
    MissingCredentials(&'static str),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
