//! # Document DB Service
//!
//! A connection-managing data-access facade over a remote document database
//! (Cosmos-style REST dialect). The facade owns the connection lifecycle,
//! exposes CRUD and parameterized-query operations, validates caller input
//! before any I/O, and translates the remote store's failure modes into a
//! small error taxonomy with differentiated handling per operation.
//!
//! ## Architecture Overview
//!
//! The crate is organized into a few modules with clear boundaries:
//!
//! - [`errors`] - The error taxonomy raised by validation and I/O translation
//! - [`options`] - Immutable connection options (endpoint, key, database,
//!   container), constructible from the environment
//! - [`query`] - Validated, immutable query specifications with ordered
//!   named parameters
//! - [`events`] - Structured operation outcomes and the observer hook the
//!   facade reports through (Info on success, Warning on a soft miss, Error
//!   on any failure)
//! - [`store`] - The consumed capability set: staged connection
//!   establishment plus the container-scoped item operations
//! - [`service`] - The facade itself
//! - [`rest`] - The live `reqwest`-backed implementation of the capability
//!   set
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docdb_service::{DbOptions, DocumentDbService, QuerySpec, RestConnector};
//!
//! # async fn example() -> docdb_service::Result<()> {
//! let options = DbOptions::from_env()?;
//! let service = DocumentDbService::connect(&RestConnector, Some(&options)).await?;
//!
//! let spec = QuerySpec::new("SELECT * FROM users WHERE id = @id")?
//!     .with_param("@id", "user::test");
//! if let Some(json) = service.query(&spec).await? {
//!     println!("{json}");
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod errors;
pub mod events;
pub mod options;
pub mod query;
pub mod rest;
pub mod service;
pub mod store;

#[cfg(test)]
mod mocks;
#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod test_utils;

// Public re-exports for simplified API
pub use errors::{ConnectStage, DocumentDbError, Result};
pub use events::{Operation, OperationOutcome, OutcomeObserver, Severity, TracingObserver};
pub use options::DbOptions;
pub use query::{QueryParameter, QuerySpec};
pub use rest::RestConnector;
pub use service::DocumentDbService;
pub use store::{DocumentStoreConnector, DocumentStoreOps};
