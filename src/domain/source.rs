use async_trait::async_trait;
use mongodb::bson::Document;
use thiserror::Error;

/// Store access failure. Covers unreachable stores, authentication failures
/// and misconfiguration alike.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store error: {0}")]
    Driver(#[from] mongodb::error::Error),
    #[error("no database name: set MONGO_DATABASE or add one to the connection URI")]
    MissingDatabase,
    /// Failure reported by a `DocumentSource` that is not backed by the MongoDB driver.
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to one collection.
///
/// Implementations are created once at start-up and shared by every request.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Every document in the collection, in store-defined order.
    async fn fetch_all(&self) -> Result<Vec<Document>, StoreError>;

    /// Round-trips to the store without reading the collection.
    async fn ping(&self) -> Result<(), StoreError>;
}
