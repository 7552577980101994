/**
 * codec.rs
 * Syntactic term classification and SPARQL formatting
 *
 * All decisions here are string heuristics, not an IRI grammar. Keeping them
 * behind TermCodec lets a stricter parser replace them without touching callers.
 */

use super::Term;

pub struct TermCodec;

impl TermCodec {
    /// Format a raw term for embedding in a SPARQL filter.
    ///
    /// Rules, first match wins:
    /// 1. `<...>` is returned unchanged
    /// 2. anything containing `http://` or `https://` becomes `<term>`
    /// 3. everything else becomes the quoted literal `"term"`
    ///
    /// # Example
    /// ```
    /// use triple_lens::TermCodec;
    ///
    /// assert_eq!(TermCodec::format_for_query("http://ex.org/Bob"), "<http://ex.org/Bob>");
    /// assert_eq!(TermCodec::format_for_query("<urn:x:1>"), "<urn:x:1>");
    /// assert_eq!(TermCodec::format_for_query("Bob"), "\"Bob\"");
    /// ```
    pub fn format_for_query(term: &str) -> String {
        if Self::is_bracketed(term) {
            return term.to_string();
        }
        if Self::has_web_scheme(term) {
            return format!("<{}>", term);
        }
        format!("\"{}\"", term)
    }

    /// Whether [`TermCodec::format_for_query`] brackets this unbracketed value
    /// on its own. Any other IRI must be handed over as `<iri>` to be
    /// queried as a resource.
    pub fn has_web_scheme(term: &str) -> bool {
        term.contains("http://") || term.contains("https://")
    }

    /// Display heuristic: does this (possibly compacted) value read as a literal?
    ///
    /// Blank nodes, anything with `://` and any `prefix:local` shape without
    /// whitespace are treated as resources. `"12:30 today"` is a literal,
    /// `"12:30"` is not (known imprecision).
    pub fn classify_as_literal(value: &str) -> bool {
        if value.starts_with("_:") {
            return false;
        }
        if value.contains("://") {
            return false;
        }
        if value.contains(':') && !value.contains(' ') {
            return false;
        }
        true
    }

    /// Classify a raw value coming out of a binding or user input.
    ///
    /// Total over all strings: blank node marker first, then quoted literal
    /// syntax, then bracketed IRIs; everything else goes through
    /// [`TermCodec::classify_as_literal`].
    pub fn classify(raw: &str) -> Term {
        if raw.starts_with("_:") {
            return Term::BlankNode(raw.to_string());
        }
        if raw.starts_with('"') {
            return Term::Literal(raw.to_string());
        }
        if Self::is_bracketed(raw) || !Self::classify_as_literal(raw) {
            return Term::Iri(raw.to_string());
        }
        Term::Literal(raw.to_string())
    }

    fn is_bracketed(term: &str) -> bool {
        term.len() >= 2 && term.starts_with('<') && term.ends_with('>')
    }
}
