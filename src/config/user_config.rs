//! User-level configuration for cosign-graph
//!
//! Supports loading config from:
//! - Environment variables (a `.env` file in the working directory is read first)
//! - ~/.config/cosign-graph/config.toml

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub mongo: MongoConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MongoConfig {
    /// Full connection string; wins over user/password/host
    pub uri: Option<String>,

    /// Atlas user
    pub user: Option<String>,

    /// Atlas password
    pub password: Option<String>,

    /// Atlas cluster host (default: cluster0.wht7g.mongodb.net)
    pub host: Option<String>,

    /// Database name (default: cosign)
    pub database: Option<String>,

    /// Collection holding one document per member (default: members)
    pub members_collection: Option<String>,

    /// Collection holding the adjacency cells (default: cells)
    pub cells_collection: Option<String>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/cosign-graph/config.toml)
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        let mut config = UserConfig::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            config.merge(Self::from_file(&path)?);
        }

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Get the user config directory path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cosign-graph").join("config.toml"))
    }

    /// Override fields from environment variables, looked up through `var`
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(uri) = var("MONGO_URI") {
            self.mongo.uri = Some(uri);
        }
        if let Some(user) = var("MONGO_USER") {
            self.mongo.user = Some(user);
        }
        if let Some(password) = var("MONGO_PASSWORD") {
            self.mongo.password = Some(password);
        }
        if let Some(host) = var("MONGO_HOST") {
            self.mongo.host = Some(host);
        }
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        let MongoConfig {
            uri,
            user,
            password,
            host,
            database,
            members_collection,
            cells_collection,
        } = other.mongo;

        if uri.is_some() {
            self.mongo.uri = uri;
        }
        if user.is_some() {
            self.mongo.user = user;
        }
        if password.is_some() {
            self.mongo.password = password;
        }
        if host.is_some() {
            self.mongo.host = host;
        }
        if database.is_some() {
            self.mongo.database = database;
        }
        if members_collection.is_some() {
            self.mongo.members_collection = members_collection;
        }
        if cells_collection.is_some() {
            self.mongo.cells_collection = cells_collection;
        }
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> Result<PathBuf, ConfigError> {
        let config_path = Self::user_config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::write_example(&config_path)?;
        Ok(config_path)
    }

    /// Write the example config to `path` unless a file is already there
    pub fn write_example(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Ok(());
        }
        let io_err = |source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let example = r#"# cosign-graph user configuration

[mongo]
# Atlas credentials (MONGO_USER / MONGO_PASSWORD override these)
# user = "..."
# password = "..."
# host = "cluster0.wht7g.mongodb.net"

# Or a complete connection string (MONGO_URI overrides this)
# uri = "mongodb://localhost:27017"

# database = "cosign"
# members_collection = "members"
# cells_collection = "cells"
"#;
        std::fs::write(path, example).map_err(io_err)
    }
}
