use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::errors::{ConnectStage, DocumentDbError, Result};
use crate::events::{Operation, OperationOutcome, OutcomeObserver, Severity, TracingObserver};
use crate::options::DbOptions;
use crate::query::QuerySpec;
use crate::store::{DocumentStoreConnector, DocumentStoreOps};


/// Connection-managing facade over a remote document store.
///
/// A service only exists once [`DocumentDbService::connect`] has succeeded:
/// it owns the immutable container-scoped store handle, so no operation can
/// run against a half-established connection. Operations take `&self` and
/// the service can be shared freely as long as the store is `Sync`.
///
/// Every operation validates its input before any I/O, executes a single
/// remote round trip, and reports exactly one terminal outcome through the
/// [`OutcomeObserver`] hook: Info on success, Warning on a soft miss, Error
/// on any validation failure or propagated failure.
pub struct DocumentDbService<S> {
    store: S,
    observer: Arc<dyn OutcomeObserver>,
}

impl<S> std::fmt::Debug for DocumentDbService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentDbService").finish_non_exhaustive()
    }
}

impl<S: DocumentStoreOps> DocumentDbService<S> {
    /// Wraps an already-connected container-scoped store, reporting outcomes
    /// through the default tracing observer.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_observer(store, Arc::new(TracingObserver))
    }

    /// Wraps an already-connected container-scoped store with an explicit
    /// outcome observer.
    #[must_use]
    pub fn with_observer(store: S, observer: Arc<dyn OutcomeObserver>) -> Self {
        Self { store, observer }
    }

    /// Establishes a connection and returns the service owning the
    /// container-scoped handle.
    ///
    /// Fails without touching the connector if `options` is absent. The
    /// three stages (client creation, database lookup, container lookup)
    /// each fail independently; a stage failure is reported once at Error
    /// severity with the stage identifiable, and no partial connection
    /// state escapes.
    pub async fn connect<C>(connector: &C, options: Option<&DbOptions>) -> Result<Self>
    where
        C: DocumentStoreConnector<Store = S>,
    {
        Self::connect_with_observer(connector, options, Arc::new(TracingObserver)).await
    }

    /// [`DocumentDbService::connect`] with an explicit outcome observer.
    pub async fn connect_with_observer<C>(
        connector: &C,
        options: Option<&DbOptions>,
        observer: Arc<dyn OutcomeObserver>,
    ) -> Result<Self>
    where
        C: DocumentStoreConnector<Store = S>,
    {
        let Some(options) = options else {
            let err =
                DocumentDbError::configuration("db_options", "connection options not provided");
            observer.observe(&OperationOutcome::new(
                Operation::Connect,
                Severity::Error,
                err.to_string(),
            ));
            return Err(err);
        };

        let client = connector
            .create_client(&options.endpoint, &options.key)
            .await
            .map_err(|e| connect_failure(observer.as_ref(), ConnectStage::Client, &e))?;

        let database = connector
            .get_database(&client, &options.database_id)
            .await
            .map_err(|e| connect_failure(observer.as_ref(), ConnectStage::Database, &e))?;

        let store = connector
            .get_container(&database, &options.container_id)
            .await
            .map_err(|e| connect_failure(observer.as_ref(), ConnectStage::Container, &e))?;

        observer.observe(&OperationOutcome::new(
            Operation::Connect,
            Severity::Info,
            format!(
                "connected to container '{}' in database '{}'",
                options.container_id, options.database_id
            ),
        ));

        Ok(Self::with_observer(store, observer))
    }

    /// Point read of an item, serialized to a JSON string.
    ///
    /// A missing item is a soft miss: it yields `Ok(None)` and a Warning
    /// outcome, not an error.
    pub async fn get(&self, id: &str, partition_key: &str) -> Result<Option<String>> {
        self.validate_point_args(Operation::Get, id, partition_key)?;

        match self.store.read_item(id, partition_key).await {
            Ok(item) => {
                let json = self.serialize(Operation::Get, &item)?;
                self.emit(
                    Operation::Get,
                    Severity::Info,
                    format!("retrieved item '{id}'"),
                );
                Ok(Some(json))
            }
            Err(err) if err.is_not_found() => {
                self.emit(
                    Operation::Get,
                    Severity::Warning,
                    format!("item '{id}' not found"),
                );
                Ok(None)
            }
            Err(err) => {
                self.emit(Operation::Get, Severity::Error, err.to_string());
                Err(err)
            }
        }
    }

    /// Deletes an item.
    ///
    /// Unlike [`DocumentDbService::get`], a missing item is a hard failure:
    /// the store's not-found error is reported at Error severity and
    /// re-raised to the caller.
    pub async fn delete(&self, id: &str, partition_key: &str) -> Result<()> {
        self.validate_point_args(Operation::Delete, id, partition_key)?;

        match self.store.delete_item(id, partition_key).await {
            Ok(()) => {
                self.emit(
                    Operation::Delete,
                    Severity::Info,
                    format!("deleted item '{id}'"),
                );
                Ok(())
            }
            Err(err) => {
                self.emit(Operation::Delete, Severity::Error, err.to_string());
                Err(err)
            }
        }
    }

    /// Insert-or-replace an item, returning the persisted item serialized to
    /// a JSON string.
    ///
    /// The item must be a JSON object; anything else fails before any I/O.
    pub async fn upsert(&self, item: &Value) -> Result<String> {
        if !item.is_object() {
            let err = DocumentDbError::invalid_item("item must be a JSON object");
            self.emit(Operation::Upsert, Severity::Error, err.to_string());
            return Err(err);
        }

        match self.store.upsert_item(item).await {
            Ok(persisted) => {
                let json = self.serialize(Operation::Upsert, &persisted)?;
                self.emit(Operation::Upsert, Severity::Info, "upserted item");
                Ok(json)
            }
            Err(err) => {
                self.emit(Operation::Upsert, Severity::Error, err.to_string());
                Err(err)
            }
        }
    }

    /// Executes a parameterized query.
    ///
    /// Zero results is a soft miss (`Ok(None)`, Warning outcome); one or
    /// more results are serialized as a JSON array string. Store failures
    /// are reported at Error severity and re-raised, matching the other
    /// operations.
    pub async fn query(&self, spec: &QuerySpec) -> Result<Option<String>> {
        let parameters = spec.build_where_params();

        match self.store.query_items(spec.text(), &parameters).await {
            Ok(items) if items.is_empty() => {
                self.emit(Operation::Query, Severity::Warning, "query matched no items");
                Ok(None)
            }
            Ok(items) => {
                let json = self.serialize(Operation::Query, &items)?;
                self.emit(
                    Operation::Query,
                    Severity::Info,
                    format!("query matched {} items", items.len()),
                );
                Ok(Some(json))
            }
            Err(err) => {
                self.emit(Operation::Query, Severity::Error, err.to_string());
                Err(err)
            }
        }
    }

    fn validate_point_args(
        &self,
        operation: Operation,
        id: &str,
        partition_key: &str,
    ) -> Result<()> {
        self.require_non_blank(operation, "id", id)?;
        self.require_non_blank(operation, "partition_key", partition_key)
    }

    fn require_non_blank(&self, operation: Operation, parameter: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            let err = DocumentDbError::invalid_argument(parameter, "must not be blank");
            self.emit(operation, Severity::Error, err.to_string());
            return Err(err);
        }
        Ok(())
    }

    fn serialize<T: Serialize>(&self, operation: Operation, value: &T) -> Result<String> {
        match serde_json::to_string(value) {
            Ok(json) => Ok(json),
            Err(e) => {
                let err = DocumentDbError::from(e);
                self.emit(operation, Severity::Error, err.to_string());
                Err(err)
            }
        }
    }

    fn emit(&self, operation: Operation, severity: Severity, detail: impl Into<String>) {
        self.observer
            .observe(&OperationOutcome::new(operation, severity, detail));
    }
}

fn connect_failure(
    observer: &dyn OutcomeObserver,
    stage: ConnectStage,
    source: &DocumentDbError,
) -> DocumentDbError {
    let err = DocumentDbError::connection_failed(stage, source.to_string());
    observer.observe(&OperationOutcome::new(
        Operation::Connect,
        Severity::Error,
        err.to_string(),
    ));
    err
}
