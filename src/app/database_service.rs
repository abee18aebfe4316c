//! The collection reader.
//!
//! Owns the MongoDB client for the configured collection. The driver pools
//! connections internally, so one instance is shared by every request.

use crate::domain::{DocumentSource, StoreError};
use crate::infra::config::Settings;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

pub struct DatabaseService {
    database: Database,
    collection: Collection<Document>,
}

impl DatabaseService {
    /// Parses the connection URI and selects the database and collection.
    ///
    /// The driver connects lazily: an unreachable store surfaces on the first
    /// operation, not here.
    pub async fn connect(settings: &Settings) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&settings.connection_uri).await?;
        if options.app_name.is_none() {
            options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        }

        let database_name = settings
            .database
            .clone()
            .or_else(|| options.default_database.clone())
            .ok_or(StoreError::MissingDatabase)?;

        let client = Client::with_options(options)?;
        let database = client.database(&database_name);
        let collection = database.collection::<Document>(&settings.collection);
        info!(
            database = %database_name,
            collection = %settings.collection,
            "document store client configured"
        );

        Ok(Self {
            database,
            collection,
        })
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Estimated number of documents, from collection metadata.
    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.collection.estimated_document_count(None).await?)
    }
}

#[async_trait]
impl DocumentSource for DatabaseService {
    async fn fetch_all(&self) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection.find(None, None).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        debug!(count = docs.len(), collection = %self.collection.name(), "fetched collection");
        Ok(docs)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
