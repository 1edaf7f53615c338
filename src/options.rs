use crate::errors::{DocumentDbError, Result};

/// Immutable connection options for the document database.
///
/// The facade performs no per-field validation; an entirely absent options
/// value is the only configuration state `connect` rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbOptions {
    pub endpoint: String,
    pub key: String,
    pub database_id: String,
    pub container_id: String,
}

impl DbOptions {
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        key: impl Into<String>,
        database_id: impl Into<String>,
        container_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            key: key.into(),
            database_id: database_id.into(),
            container_id: container_id.into(),
        }
    }

    /// Loads options from `DOCDB_ENDPOINT`, `DOCDB_KEY`, `DOCDB_DATABASE_ID`
    /// and `DOCDB_CONTAINER_ID`. Each missing variable is a configuration
    /// error naming the variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            endpoint: require_env("DOCDB_ENDPOINT")?,
            key: require_env("DOCDB_KEY")?,
            database_id: require_env("DOCDB_DATABASE_ID")?,
            container_id: require_env("DOCDB_CONTAINER_ID")?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    dotenvy::var(name)
        .map_err(|_| DocumentDbError::configuration(name, "environment variable not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_all_variables() {
        std::env::set_var("DOCDB_ENDPOINT", "https://localhost:8081");
        std::env::set_var("DOCDB_KEY", "test_key");
        std::env::set_var("DOCDB_DATABASE_ID", "test_db_id");
        std::env::set_var("DOCDB_CONTAINER_ID", "test_container_id");

        let options = DbOptions::from_env().unwrap();
        assert_eq!(options.endpoint, "https://localhost:8081");
        assert_eq!(options.key, "test_key");
        assert_eq!(options.database_id, "test_db_id");
        assert_eq!(options.container_id, "test_container_id");
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_missing_variable_names_it() {
        std::env::set_var("DOCDB_ENDPOINT", "https://localhost:8081");
        std::env::set_var("DOCDB_KEY", "test_key");
        std::env::set_var("DOCDB_DATABASE_ID", "test_db_id");
        std::env::remove_var("DOCDB_CONTAINER_ID");

        let err = DbOptions::from_env().unwrap_err();
        assert!(matches!(
            err,
            DocumentDbError::Configuration { ref parameter, .. } if parameter == "DOCDB_CONTAINER_ID"
        ));
    }
}
