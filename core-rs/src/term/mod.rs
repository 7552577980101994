/**
 * term module
 *
 * - Term: raw RDF term tagged as IRI, blank node or literal at ingestion
 * - codec: TermCodec heuristics (SPARQL formatting, literal detection)
 */

pub mod codec;

pub use codec::TermCodec;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic RDF term, kept in its raw string form.
///
/// The tag is derived once from the string content (see [`TermCodec::classify`]);
/// the raw value is what gets compared, formatted and sent back to services.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Term {
    Iri(String),
    BlankNode(String),
    Literal(String),
}

impl Term {
    pub fn new(raw: impl AsRef<str>) -> Self {
        TermCodec::classify(raw.as_ref())
    }

    /// Raw value as received
    pub fn as_str(&self) -> &str {
        match self {
            Term::Iri(s) | Term::BlankNode(s) | Term::Literal(s) => s,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// IRI without enclosing angle brackets; `None` for non-IRIs.
    pub fn iri(&self) -> Option<&str> {
        match self {
            Term::Iri(s) => Some(
                s.strip_prefix('<')
                    .and_then(|rest| rest.strip_suffix('>'))
                    .unwrap_or(s),
            ),
            _ => None,
        }
    }

    /// Lexical form of a literal.
    ///
    /// `"Bob"@en` yields `Bob`; an unquoted literal is its own lexical form.
    pub fn lexical(&self) -> Option<&str> {
        match self {
            Term::Literal(s) => Some(split_quoted(s).map(|(value, _)| value).unwrap_or(s)),
            _ => None,
        }
    }

    /// Language tag of a `"value"@lang` literal
    pub fn lang(&self) -> Option<&str> {
        match self {
            Term::Literal(s) => split_quoted(s)
                .and_then(|(_, suffix)| suffix.strip_prefix('@'))
                .filter(|tag| !tag.is_empty()),
            _ => None,
        }
    }

    /// Datatype of a `"value"^^dtype` literal, brackets stripped
    pub fn datatype(&self) -> Option<&str> {
        match self {
            Term::Literal(s) => split_quoted(s)
                .and_then(|(_, suffix)| suffix.strip_prefix("^^"))
                .map(|dt| {
                    dt.strip_prefix('<')
                        .and_then(|rest| rest.strip_suffix('>'))
                        .unwrap_or(dt)
                })
                .filter(|dt| !dt.is_empty()),
            _ => None,
        }
    }
}

/// Split `"value"suffix` into `(value, suffix)`.
fn split_quoted(raw: &str) -> Option<(&str, &str)> {
    let inner = raw.strip_prefix('"')?;
    let close = inner.rfind('"')?;
    Some((&inner[..close], &inner[close + 1..]))
}

impl From<String> for Term {
    fn from(raw: String) -> Self {
        TermCodec::classify(&raw)
    }
}

impl From<&str> for Term {
    fn from(raw: &str) -> Self {
        TermCodec::classify(raw)
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        match term {
            Term::Iri(s) | Term::BlankNode(s) | Term::Literal(s) => s,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subject/predicate/object statement built from a binding row or user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<Term>, predicate: impl Into<Term>, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}
