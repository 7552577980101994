/**
 * sparql.rs
 * Read query builders for the three navigation modes
 */

use std::fmt;

use crate::term::TermCodec;

/// Variable bound by [`SparqlQuery::class_discovery`]
pub const VAR_CLASS: &str = "class";
pub const VAR_SUBJECT: &str = "s";
pub const VAR_PREDICATE: &str = "p";
pub const VAR_OBJECT: &str = "o";

/// Sample size used when class discovery comes back empty
pub const DEFAULT_SAMPLE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlQuery {
    query: String,
}

impl SparqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn into_string(self) -> String {
        self.query
    }

    /// Every distinct object of an `rdf:type` statement (landing view)
    pub fn class_discovery() -> Self {
        Self::new("SELECT DISTINCT ?class WHERE { ?s a ?class }")
    }

    /// Up to `limit` arbitrary triples.
    ///
    /// Fallback for stores without typed entities.
    pub fn sample(limit: usize) -> Self {
        Self::new(format!(
            "SELECT ?s ?p ?o WHERE {{ ?s ?p ?o }} LIMIT {}",
            limit
        ))
    }

    /// Every triple mentioning `term` as subject, predicate or object.
    ///
    /// Each side of the OR is formatted independently through [`TermCodec`];
    /// matching is exact term equality.
    pub fn entity_focus(term: &str) -> Self {
        let formatted = TermCodec::format_for_query(term);
        Self::new(format!(
            r#"
            SELECT ?s ?p ?o WHERE {{
                ?s ?p ?o .
                FILTER ( ?s = {} ||
                         ?p = {} ||
                         ?o = {} )
            }}
            "#,
            formatted, formatted, formatted
        ))
    }
}

impl fmt::Display for SparqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}
