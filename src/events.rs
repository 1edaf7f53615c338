use tracing::{error, info, warn};

/// Severity of a terminal operation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// The facade operation that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Connect,
    Get,
    Delete,
    Upsert,
    Query,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::Get => write!(f, "get"),
            Self::Delete => write!(f, "delete"),
            Self::Upsert => write!(f, "upsert"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// Structured descriptor of a single terminal operation outcome.
///
/// Every facade operation emits exactly one of these: `Info` on success,
/// `Warning` on a defined soft miss, `Error` on any validation failure or
/// propagated failure.
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    pub operation: Operation,
    pub severity: Severity,
    pub detail: String,
}

impl OperationOutcome {
    #[must_use]
    pub fn new(operation: Operation, severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            operation,
            severity,
            detail: detail.into(),
        }
    }
}

/// Notification hook invoked by the facade with each terminal outcome.
///
/// The core logic never logs directly; it reports outcomes here, so tests
/// can assert on severities without capturing log output.
pub trait OutcomeObserver: Send + Sync {
    fn observe(&self, outcome: &OperationOutcome);
}

/// Default observer: forwards each outcome to `tracing` at the matching
/// level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl OutcomeObserver for TracingObserver {
    fn observe(&self, outcome: &OperationOutcome) {
        match outcome.severity {
            Severity::Info => info!(operation = %outcome.operation, "{}", outcome.detail),
            Severity::Warning => warn!(operation = %outcome.operation, "{}", outcome.detail),
            Severity::Error => error!(operation = %outcome.operation, "{}", outcome.detail),
        }
    }
}
