//! Configuration module for cosign-graph
//!
//! This module handles:
//! - User-level configuration (~/.config/cosign-graph/config.toml)
//! - Environment and `.env` credentials
//! - Resolving the MongoDB connection to use

mod connection;
mod user_config;

pub use connection::{
    ConnectionOverrides, ConnectionSettings, DEFAULT_CELLS_COLLECTION, DEFAULT_DATABASE,
    DEFAULT_HOST, DEFAULT_MEMBERS_COLLECTION, DEV_URI,
};
pub use user_config::{MongoConfig, UserConfig};
