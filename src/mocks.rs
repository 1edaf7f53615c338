//! Mock implementations of the consumed capability traits, for isolated unit
//! testing without a live document store.
//!
//! - [`MockStore`] mocks [`crate::store::DocumentStoreOps`]
//! - [`MockConnector`] mocks [`crate::store::DocumentStoreConnector`]
//!
//! A mock with no expectations set panics on any call, which is how tests
//! assert that validation failures never reach an I/O capability.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::errors::Result;
use crate::query::QueryParameter;
use crate::store::{DocumentStoreConnector, DocumentStoreOps};

mock! {
    pub Store {}

    #[async_trait]
    impl DocumentStoreOps for Store {
        async fn read_item(&self, id: &str, partition_key: &str) -> Result<Value>;
        async fn delete_item(&self, id: &str, partition_key: &str) -> Result<()>;
        async fn upsert_item(&self, item: &Value) -> Result<Value>;
        async fn query_items(
            &self,
            query_text: &str,
            parameters: &[QueryParameter],
        ) -> Result<Vec<Value>>;
    }
}

mock! {
    pub Connector {}

    #[async_trait]
    impl DocumentStoreConnector for Connector {
        type Client = ();
        type Database = ();
        type Store = MockStore;

        async fn create_client(&self, endpoint: &str, key: &str) -> Result<()>;
        async fn get_database(&self, client: &(), database_id: &str) -> Result<()>;
        async fn get_container(&self, database: &(), container_id: &str) -> Result<MockStore>;
    }
}
