//! Live client for a Cosmos-style document database REST dialect.
//!
//! Connection establishment is staged to match the consumed capability set:
//! [`RestConnector::create_client`] validates the endpoint and produces a
//! transport client, then the database and container metadata routes are
//! probed to resolve the scoped handles. Item operations run against
//! `/dbs/{db}/colls/{coll}/docs`. The access key is sent as an
//! authorization header; signature schemes are out of scope.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use crate::errors::{DocumentDbError, Result};
use crate::query::QueryParameter;
use crate::store::{DocumentStoreConnector, DocumentStoreOps};


static CLIENT: Lazy<Client> = Lazy::new(Client::new);

const PARTITION_KEY_HEADER: &str = "x-ms-documentdb-partitionkey";
const IS_UPSERT_HEADER: &str = "x-ms-documentdb-is-upsert";
const IS_QUERY_HEADER: &str = "x-ms-documentdb-isquery";
const QUERY_CONTENT_TYPE: &str = "application/query+json";

/// Connector producing REST-backed handles.
#[derive(Debug, Default, Clone, Copy)]
pub struct RestConnector;

/// Transport client scoped to an endpoint + access key.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    endpoint: String,
    key: String,
}

/// Database-scoped handle.
#[derive(Debug, Clone)]
pub struct RestDatabase {
    client: RestClient,
    database_id: String,
}

/// Container-scoped handle implementing the item capability set.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: RestClient,
    database_id: String,
    container_id: String,
}

fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let endpoint = endpoint.trim().trim_end_matches('/');
    if endpoint.is_empty() {
        return Err(DocumentDbError::invalid_argument(
            "endpoint",
            "must not be blank",
        ));
    }
    if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
        return Err(DocumentDbError::invalid_argument(
            "endpoint",
            "must be an http(s) URL",
        ));
    }
    Ok(endpoint.to_string())
}

/// Partition keys travel as a JSON array header, e.g. `["user"]`.
fn partition_key_header(partition_key: &str) -> String {
    json!([partition_key]).to_string()
}

fn check_status(operation: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    error!("{} returned status {}", operation, status);
    Err(DocumentDbError::request_failed(
        operation,
        format!("unexpected status {status}"),
    ))
}

#[async_trait]
impl DocumentStoreConnector for RestConnector {
    type Client = RestClient;
    type Database = RestDatabase;
    type Store = RestStore;

    async fn create_client(&self, endpoint: &str, key: &str) -> Result<RestClient> {
        let endpoint = normalize_endpoint(endpoint)?;
        Ok(RestClient {
            http: CLIENT.clone(),
            endpoint,
            key: key.to_string(),
        })
    }

    async fn get_database(&self, client: &RestClient, database_id: &str) -> Result<RestDatabase> {
        let url = format!("{}/dbs/{}", client.endpoint, database_id);
        let response = client
            .http
            .get(&url)
            .header("authorization", &client.key)
            .send()
            .await?;
        check_status("get_database", response)?;
        Ok(RestDatabase {
            client: client.clone(),
            database_id: database_id.to_string(),
        })
    }

    async fn get_container(
        &self,
        database: &RestDatabase,
        container_id: &str,
    ) -> Result<RestStore> {
        let url = format!(
            "{}/dbs/{}/colls/{}",
            database.client.endpoint, database.database_id, container_id
        );
        let response = database
            .client
            .http
            .get(&url)
            .header("authorization", &database.client.key)
            .send()
            .await?;
        check_status("get_container", response)?;
        Ok(RestStore {
            client: database.client.clone(),
            database_id: database.database_id.clone(),
            container_id: container_id.to_string(),
        })
    }
}

impl RestStore {
    fn docs_url(&self) -> String {
        format!(
            "{}/dbs/{}/colls/{}/docs",
            self.client.endpoint, self.database_id, self.container_id
        )
    }

    fn doc_url(&self, id: &str) -> String {
        format!("{}/{}", self.docs_url(), id)
    }
}

/// Query responses arrive as an envelope around the matching documents.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(rename = "Documents", default)]
    documents: Vec<Value>,
}

#[async_trait]
impl DocumentStoreOps for RestStore {
    async fn read_item(&self, id: &str, partition_key: &str) -> Result<Value> {
        let response = self
            .client
            .http
            .get(self.doc_url(id))
            .header("authorization", &self.client.key)
            .header(PARTITION_KEY_HEADER, partition_key_header(partition_key))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(DocumentDbError::resource_not_found(id));
        }
        let response = check_status("read_item", response)?;
        Ok(response.json::<Value>().await?)
    }

    async fn delete_item(&self, id: &str, partition_key: &str) -> Result<()> {
        let response = self
            .client
            .http
            .delete(self.doc_url(id))
            .header("authorization", &self.client.key)
            .header(PARTITION_KEY_HEADER, partition_key_header(partition_key))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(DocumentDbError::resource_not_found(id));
        }
        check_status("delete_item", response)?;
        Ok(())
    }

    async fn upsert_item(&self, item: &Value) -> Result<Value> {
        let response = self
            .client
            .http
            .post(self.docs_url())
            .header("authorization", &self.client.key)
            .header(IS_UPSERT_HEADER, "true")
            .json(item)
            .send()
            .await?;
        let response = check_status("upsert_item", response)?;
        Ok(response.json::<Value>().await?)
    }

    async fn query_items(
        &self,
        query_text: &str,
        parameters: &[QueryParameter],
    ) -> Result<Vec<Value>> {
        let body = json!({
            "query": query_text,
            "parameters": parameters,
        });
        let response = self
            .client
            .http
            .post(self.docs_url())
            .header("authorization", &self.client.key)
            .header(IS_QUERY_HEADER, "true")
            .header("content-type", QUERY_CONTENT_TYPE)
            .body(body.to_string())
            .send()
            .await?;
        let response = check_status("query_items", response)?;
        Ok(response.json::<QueryResponse>().await?.documents)
    }
}
