/**
 * query module
 *
 * - sparql: read query builders (class discovery, sample, entity focus)
 * - mutation: triple and label mutation payloads, label validation
 */

pub mod mutation;
pub mod sparql;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use mutation::{LabelAnnotation, LabelDraft, LabelForm, TriplePayload, LABEL_PREDICATE};
pub use sparql::{SparqlQuery, DEFAULT_SAMPLE_LIMIT, VAR_CLASS, VAR_OBJECT, VAR_PREDICATE, VAR_SUBJECT};

/// One result row: variable name to bound term string
pub type Binding = HashMap<String, String>;

/// Query service response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub count: usize,
    pub results: Vec<Binding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vars: Vec<String>,
}

impl QueryResponse {
    pub fn from_results(results: Vec<Binding>) -> Self {
        Self {
            count: results.len(),
            results,
            vars: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
