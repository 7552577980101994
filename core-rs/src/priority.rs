//! Predicate priority resolution
//!
//! Turns the user's comma-separated priority setting into namespace IRIs.
//! The result only ranks rows for display; it never filters them.

use crate::prefix::Prefix;
use tracing::debug;

/// Priority setting used when the user has not configured one
pub const DEFAULT_PRIORITY_CONFIG: &str = "rdf, rdfs, owl";

/// Ordered, de-duplicated namespace IRIs treated as semantic priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrioritySet {
    namespaces: Vec<String>,
}

impl PrioritySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: impl Into<String>) -> bool {
        let namespace = namespace.into();
        if self.namespaces.contains(&namespace) {
            return false;
        }
        self.namespaces.push(namespace);
        true
    }

    /// True when `iri` starts with any priority namespace
    pub fn matches(&self, iri: &str) -> bool {
        self.namespaces.iter().any(|ns| iri.starts_with(ns.as_str()))
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.iter().any(|ns| ns == namespace)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PrioritySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PrioritySet::new();
        for ns in iter {
            set.insert(ns);
        }
        set
    }
}

pub struct PredicatePriorityResolver;

impl PredicatePriorityResolver {
    /// Resolve a priority setting against the current prefix snapshot.
    ///
    /// Tokens containing `://` are taken verbatim; other tokens are looked up
    /// by exact prefix name. Unknown tokens are dropped without error.
    ///
    /// # Example
    /// ```
    /// use triple_lens::{PredicatePriorityResolver, Prefix};
    ///
    /// let prefixes = vec![Prefix::new("ex", "http://ex.org/")];
    /// let set = PredicatePriorityResolver::resolve("ex, nope, http://other.org/", &prefixes);
    /// assert!(set.contains("http://ex.org/"));
    /// assert!(set.contains("http://other.org/"));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn resolve(config_text: &str, prefixes: &[Prefix]) -> PrioritySet {
        let mut set = PrioritySet::new();

        for token in config_text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token.contains("://") {
                set.insert(token);
                continue;
            }
            match prefixes.iter().find(|p| p.prefix == token) {
                Some(p) => {
                    set.insert(p.uri.clone());
                }
                None => debug!("Priority token '{}' matches no registered prefix", token),
            }
        }

        set
    }

    /// Resolve the user's setting, falling back to [`DEFAULT_PRIORITY_CONFIG`]
    /// when none is stored.
    pub fn resolve_or_default(config_text: Option<&str>, prefixes: &[Prefix]) -> PrioritySet {
        Self::resolve(config_text.unwrap_or(DEFAULT_PRIORITY_CONFIG), prefixes)
    }
}
