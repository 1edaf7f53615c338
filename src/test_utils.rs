//! Shared fixtures and helpers for unit tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

#[cfg(test)]
pub mod fixtures {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    /// The record shape used throughout the test suite.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub user: String,
        pub password: String,
    }

    impl User {
        pub fn new(user: &str, password: &str) -> Self {
            Self {
                user: user.to_string(),
                password: password.to_string(),
            }
        }
    }

    pub fn sample_user() -> User {
        User::new("test", "testing")
    }

    pub fn sample_user_value() -> Value {
        serde_json::to_value(sample_user()).unwrap()
    }

    pub fn test_options() -> crate::options::DbOptions {
        crate::options::DbOptions::new(
            "https://localhost:8081",
            "test_key",
            "test_db_id",
            "test_container_id",
        )
    }
}

#[cfg(test)]
pub mod observers {
    use std::sync::{Arc, Mutex};

    use crate::events::{OperationOutcome, OutcomeObserver, Severity};

    /// Observer that records every outcome, so tests can assert on the
    /// exactly-one-event-per-operation contract and its severity.
    #[derive(Debug, Default)]
    pub struct RecordingObserver {
        events: Mutex<Vec<OperationOutcome>>,
    }

    impl RecordingObserver {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn events(&self) -> Vec<OperationOutcome> {
            self.events.lock().unwrap().clone()
        }

        pub fn severities(&self) -> Vec<Severity> {
            self.events().iter().map(|e| e.severity).collect()
        }
    }

    impl OutcomeObserver for RecordingObserver {
        fn observe(&self, outcome: &OperationOutcome) {
            self.events.lock().unwrap().push(outcome.clone());
        }
    }
}
