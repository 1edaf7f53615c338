use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{DocumentDbError, Result};


/// A name/value pair substituted into a parameterized query.
///
/// This is the wire shape the remote store expects for parameter
/// substitution, e.g. `{"name": "@id", "value": "user::test"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub name: String,
    pub value: Value,
}

/// A validated, immutable description of a query string plus optional named
/// parameters.
///
/// A `QuerySpec` can only be built through [`QuerySpec::new`], which rejects
/// blank query text, so an invalid query can never exist as a value.
/// Parameters keep mapping semantics: adding a name twice replaces the value
/// in place, and insertion order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    text: String,
    where_params: Vec<(String, Value)>,
}

impl QuerySpec {
    /// Creates a query specification, rejecting blank or whitespace-only
    /// query text.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DocumentDbError::invalid_query(
                "query text must not be blank",
            ));
        }
        Ok(Self {
            text,
            where_params: Vec::new(),
        })
    }

    /// Adds a named parameter, conventionally prefixed (e.g. `"@id"`).
    ///
    /// Re-adding an existing name replaces its value without changing the
    /// name's position.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.where_params.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.where_params.push((name, value)),
        }
        self
    }

    /// The query text, as given at construction.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The named parameters in insertion order.
    #[must_use]
    pub fn where_params(&self) -> &[(String, Value)] {
        &self.where_params
    }

    /// Builds the parameter-descriptor list the remote store expects: one
    /// descriptor per entry, in insertion order.
    #[must_use]
    pub fn build_where_params(&self) -> Vec<QueryParameter> {
        self.where_params
            .iter()
            .map(|(name, value)| QueryParameter {
                name: name.clone(),
                value: value.clone(),
            })
            .collect()
    }
}
