use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;
use crate::query::QueryParameter;

/// Staged connection establishment against the remote document store.
///
/// Each stage may fail independently; the handles are opaque to the facade
/// and only flow forward into the next stage.
#[async_trait]
pub trait DocumentStoreConnector: Send + Sync {
    type Client: Send + Sync;
    type Database: Send + Sync;
    type Store: DocumentStoreOps;

    /// Establish the transport client from endpoint + key.
    async fn create_client(&self, endpoint: &str, key: &str) -> Result<Self::Client>;

    /// Resolve the database-scoped handle.
    async fn get_database(
        &self,
        client: &Self::Client,
        database_id: &str,
    ) -> Result<Self::Database>;

    /// Resolve the container-scoped handle.
    async fn get_container(
        &self,
        database: &Self::Database,
        container_id: &str,
    ) -> Result<Self::Store>;
}

/// The container-scoped capability set consumed by the facade.
///
/// Items are JSON objects. `read_item` and `delete_item` report a missing
/// item through [`crate::DocumentDbError::ResourceNotFound`]; how that
/// signal is handled (soft miss vs hard failure) is the facade's decision,
/// not the store's.
#[async_trait]
pub trait DocumentStoreOps: Send + Sync {
    /// Point read of a single item.
    async fn read_item(&self, id: &str, partition_key: &str) -> Result<Value>;

    /// Delete a single item.
    async fn delete_item(&self, id: &str, partition_key: &str) -> Result<()>;

    /// Insert-or-replace an item, returning the persisted (possibly
    /// server-augmented) item.
    async fn upsert_item(&self, item: &Value) -> Result<Value>;

    /// Execute a parameterized query, returning zero or more items.
    async fn query_items(
        &self,
        query_text: &str,
        parameters: &[QueryParameter],
    ) -> Result<Vec<Value>>;
}
