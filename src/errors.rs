use thiserror::Error;

/// The stage of connection establishment that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectStage {
    /// Creating the transport client from endpoint + key.
    Client,
    /// Resolving the database-scoped handle.
    Database,
    /// Resolving the container-scoped handle.
    Container,
}

impl std::fmt::Display for ConnectStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "client creation"),
            Self::Database => write!(f, "database lookup"),
            Self::Container => write!(f, "container lookup"),
        }
    }
}

/// Domain-specific error types for the document database facade
#[derive(Error, Debug)]
pub enum DocumentDbError {
    /// A required string argument was blank
    #[error("Invalid argument: {parameter} - {message}")]
    InvalidArgument { parameter: String, message: String },

    /// An upsert payload was not the expected record shape
    #[error("Invalid item: {message}")]
    InvalidItem { message: String },

    /// A query specification could not be constructed
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// Connection options or environment configuration were missing
    #[error("Configuration error: {parameter} - {message}")]
    Configuration { parameter: String, message: String },

    /// Connection establishment failed at a specific stage
    #[error("Connection failed during {stage}: {message}")]
    ConnectionFailed { stage: ConnectStage, message: String },

    /// The remote store signalled that the addressed resource does not exist
    #[error("Resource not found: {resource}")]
    ResourceNotFound { resource: String },

    /// Any other failure reported by the remote store
    #[error("Request failed during {operation}: {message}")]
    RequestFailed { operation: String, message: String },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DocumentDbError {
    /// Create an invalid argument error for a blank required parameter
    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an invalid item error
    pub fn invalid_item(message: impl Into<String>) -> Self {
        Self::InvalidItem {
            message: message.into(),
        }
    }

    /// Create an invalid query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a connection failure for a specific stage
    pub fn connection_failed(stage: ConnectStage, message: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            stage,
            message: message.into(),
        }
    }

    /// Create a resource not found error
    pub fn resource_not_found(resource: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource: resource.into(),
        }
    }

    /// Create a generic request failure
    pub fn request_failed(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Checks if this error is the remote store's not-found signal
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// Checks if this error was raised by input validation, before any I/O
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::InvalidItem { .. } | Self::InvalidQuery { .. }
        )
    }
}

/// Result type alias for facade operations
pub type Result<T> = std::result::Result<T, DocumentDbError>;

/// Convert from serde JSON errors
impl From<serde_json::Error> for DocumentDbError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {err}"))
    }
}

/// Convert from reqwest errors
impl From<reqwest::Error> for DocumentDbError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::request_failed("transport", format!("connection error: {err}"))
        } else {
            Self::request_failed("transport", format!("request error: {err}"))
        }
    }
}
