//! Resolved database connection settings

use super::UserConfig;
use crate::error::ConfigError;

pub const DEV_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_HOST: &str = "cluster0.wht7g.mongodb.net";
pub const DEFAULT_DATABASE: &str = "cosign";
pub const DEFAULT_MEMBERS_COLLECTION: &str = "members";
pub const DEFAULT_CELLS_COLLECTION: &str = "cells";

/// Values given on the command line; they beat every other source
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub dev: bool,
    pub uri: Option<String>,
    pub database: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub uri: String,
    pub database: String,
    pub members_collection: String,
    pub cells_collection: String,
}

impl ConnectionSettings {
    /// Pick the connection string and names.
    ///
    /// URI precedence: `--uri`, then `--dev`, then a configured URI, then an
    /// Atlas SRV string built from user, password and host.
    pub fn resolve(
        config: &UserConfig,
        overrides: &ConnectionOverrides,
    ) -> Result<Self, ConfigError> {
        let mongo = &config.mongo;

        let uri = if let Some(uri) = &overrides.uri {
            uri.clone()
        } else if overrides.dev {
            DEV_URI.to_string()
        } else if let Some(uri) = &mongo.uri {
            uri.clone()
        } else {
            let user = mongo
                .user
                .as_deref()
                .ok_or(ConfigError::MissingCredentials("MONGO_USER"))?;
            let password = mongo
                .password
                .as_deref()
                .ok_or(ConfigError::MissingCredentials("MONGO_PASSWORD"))?;
            let host = mongo.host.as_deref().unwrap_or(DEFAULT_HOST);
            format!(
                "mongodb+srv://{}:{}@{}/admin?retryWrites=true&w=majority",
                user, password, host
            )
        };

        Ok(Self {
            uri,
            database: overrides
                .database
                .clone()
                .or_else(|| mongo.database.clone())
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            members_collection: mongo
                .members_collection
                .clone()
                .unwrap_or_else(|| DEFAULT_MEMBERS_COLLECTION.to_string()),
            cells_collection: mongo
                .cells_collection
                .clone()
                .unwrap_or_else(|| DEFAULT_CELLS_COLLECTION.to_string()),
        })
    }

    /// The URI with any password replaced by `***`, safe for logs
    pub fn redacted_uri(&self) -> String {
        redact_uri(&self.uri)
    }
}

fn redact_uri(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://").map(|i| i + 3) else {
        return uri.to_string();
    };
    let authority_end = uri[scheme_end..]
        .find('/')
        .map_or(uri.len(), |i| scheme_end + i);
    let Some(at) = uri[scheme_end..authority_end].rfind('@').map(|i| scheme_end + i) else {
        return uri.to_string();
    };
    match uri[scheme_end..at].find(':') {
        Some(colon) => format!("{}***{}", &uri[..scheme_end + colon + 1], &uri[at..]),
        None => uri.to_string(),
    }
}
