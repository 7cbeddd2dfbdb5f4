//! MongoDB-backed source (members count + cells cursor)

use super::{AdjacencySource, EntityCounter};
use crate::config::ConnectionSettings;
use crate::error::SourceError;
use crate::models::Cell;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::sync::{Client, Collection, Cursor};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Open connection to the cosign database.
///
/// The client is released when this value is dropped.
pub struct MongoSource {
    client: Client,
    members: Collection<Document>,
    cells: Collection<Cell>,
    database: String,
}

impl MongoSource {
    /// Connect and ping the server so an unreachable database fails here,
    /// not halfway through a build.
    pub fn connect(settings: &ConnectionSettings) -> Result<Self, SourceError> {
        let mut options = ClientOptions::parse(settings.uri.as_str()).run()?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)?;
        ping(&client)?;

        tracing::info!(
            "Connected to MongoDB at {} (database '{}')",
            settings.redacted_uri(),
            settings.database
        );
        let db = client.database(&settings.database);
        Ok(Self {
            members: db.collection(&settings.members_collection),
            cells: db.collection(&settings.cells_collection),
            database: settings.database.clone(),
            client,
        })
    }

    pub fn ping(&self) -> Result<(), SourceError> {
        ping(&self.client)
    }

    /// Number of adjacency cells stored, for progress reporting
    pub fn cell_count(&self) -> Result<u64, SourceError> {
        Ok(self.cells.estimated_document_count().run()?)
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }
}

impl Drop for MongoSource {
    fn drop(&mut self) {
        tracing::info!("Disconnected from MongoDB");
    }
}

impl EntityCounter for MongoSource {
    fn entity_count(&self) -> Result<u64, SourceError> {
        Ok(self.members.count_documents(doc! {}).run()?)
    }
}

impl AdjacencySource for MongoSource {
    type Cells = MongoCells;

    fn cells(&self) -> Result<Self::Cells, SourceError> {
        let cursor = self.cells.find(doc! {}).run()?;
        Ok(MongoCells { cursor })
    }
}

fn ping(client: &Client) -> Result<(), SourceError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .run()?;
    Ok(())
}

/// Cursor over the cells collection
pub struct MongoCells {
    cursor: Cursor<Cell>,
}

impl Iterator for MongoCells {
    type Item = Result<Cell, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().map(|r| r.map_err(SourceError::from))
    }
}

impl std::fmt::Debug for MongoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoSource")
            .field("database", &self.database)
            .field("members", &self.members.name())
            .field("cells", &self.cells.name())
            .finish_non_exhaustive()
    }
}
