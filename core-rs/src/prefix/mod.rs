/**
 * prefix module
 * Namespace prefixes and IRI compaction
 *
 * The registry is an ordered snapshot. Compaction is first-match-wins in that
 * order; nothing here re-sorts by specificity.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::errors::{NavError, Result};

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// A `(prefix, uri)` namespace abbreviation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefix {
    pub prefix: String,
    pub uri: String,
}

impl Prefix {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

pub struct PrefixCompactor;

impl PrefixCompactor {
    /// Render `uri` as `prefix:local` using the first prefix whose uri is a
    /// string prefix of it. Unmatched input comes back unchanged.
    ///
    /// # Example
    /// ```
    /// use triple_lens::{Prefix, PrefixCompactor};
    ///
    /// let prefixes = vec![Prefix::new("ex", "http://ex.org/")];
    /// assert_eq!(PrefixCompactor::compact("http://ex.org/Bob", &prefixes), "ex:Bob");
    /// assert_eq!(PrefixCompactor::compact("http://other.org/x", &prefixes), "http://other.org/x");
    /// ```
    pub fn compact(uri: &str, prefixes: &[Prefix]) -> String {
        for p in prefixes {
            if let Some(local) = uri.strip_prefix(p.uri.as_str()) {
                return format!("{}:{}", p.prefix, local);
            }
        }
        uri.to_string()
    }
}

/// Ordered prefix snapshot handed to the compactor and the priority resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixRegistry {
    prefixes: Vec<Prefix>,
}

impl PrefixRegistry {
    pub fn new(prefixes: Vec<Prefix>) -> Self {
        Self { prefixes }
    }

    /// Well-known W3C vocabularies
    pub fn defaults() -> Self {
        Self::new(vec![
            Prefix::new("rdf", RDF_NS),
            Prefix::new("rdfs", RDFS_NS),
            Prefix::new("owl", OWL_NS),
            Prefix::new("xsd", XSD_NS),
        ])
    }

    /// Parse a registry from JSON.
    ///
    /// Accepts either the list form `[{"prefix": "ex", "uri": "..."}]` or the
    /// object form `{"ex": "..."}` used by prefix files on disk. The object
    /// form yields prefixes in key order.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        match value {
            JsonValue::Array(_) => Ok(Self::new(serde_json::from_value(value)?)),
            JsonValue::Object(map) => {
                let mut prefixes = Vec::with_capacity(map.len());
                for (prefix, uri) in map {
                    let uri = uri.as_str().ok_or_else(|| {
                        NavError::Config(format!("Prefix '{}' must map to a string uri", prefix))
                    })?;
                    prefixes.push(Prefix::new(prefix, uri));
                }
                Ok(Self::new(prefixes))
            }
            other => Err(NavError::Config(format!(
                "Expected prefix list or object, got {}",
                other
            ))),
        }
    }

    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Exact lookup of a prefix name
    pub fn get(&self, prefix: &str) -> Option<&Prefix> {
        self.prefixes.iter().find(|p| p.prefix == prefix)
    }

    pub fn compact(&self, uri: &str) -> String {
        PrefixCompactor::compact(uri, &self.prefixes)
    }

    /// Expand `prefix:local` to a full IRI when the prefix is registered.
    ///
    /// Used for typed-in terms; anything else is returned unchanged.
    pub fn expand(&self, value: &str) -> String {
        if value.contains("://") || value.starts_with("_:") || value.contains(' ') {
            return value.to_string();
        }
        if let Some((prefix, local)) = value.split_once(':') {
            if let Some(p) = self.get(prefix) {
                return format!("{}{}", p.uri, local);
            }
        }
        value.to_string()
    }
}

impl From<Vec<Prefix>> for PrefixRegistry {
    fn from(prefixes: Vec<Prefix>) -> Self {
        Self::new(prefixes)
    }
}
