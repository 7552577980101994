// Term Codec Contract Tests
//
// These tests pin the string-level behavior of term formatting, classification
// and prefix compaction. Queries, display and mutation round trips all depend
// on these exact rules, so they are checked over a spread of awkward inputs
// rather than one happy path each.

use triple_lens::{Prefix, PrefixCompactor, SparqlQuery, Term, TermCodec};

const AWKWARD: &[&str] = &[
    "",
    " ",
    "Bob",
    "Bob Smith",
    "\"quoted\"",
    "\"Bob\"@en",
    "\"42\"^^xsd:integer",
    "_:b0",
    "<urn:isbn:42>",
    "<>",
    "<",
    ">",
    "rdf:type",
    "12:30",
    "12:30 today",
    "http://ex.org/Bob",
    "https://ex.org/a b",
    "ftp://files.ex.org/x",
    "mailto:bob@ex.org",
    "urn:isbn:42",
    "ünïcödé",
];

/// WHY: Anything carrying an http(s) scheme must reach the store as an IRI
/// REASON: A quoted IRI compares as a string literal and matches nothing
/// BREAKS: Focusing on any web IRI returns an empty view
#[test]
fn web_iris_are_bracketed_unless_already_bracketed() {
    for s in ["http://ex.org/Bob", "https://ex.org/x#y", "see http://ex.org/", "x://http://y"] {
        assert_eq!(TermCodec::format_for_query(s), format!("<{}>", s), "input {:?}", s);
    }
    assert_eq!(TermCodec::format_for_query("<http://ex.org/Bob>"), "<http://ex.org/Bob>");
}

/// WHY: Plain values become quoted literals, nothing added or escaped
/// BREAKS: Literal focus queries if extra escaping or trimming sneaks in
#[test]
fn plain_values_are_quoted_verbatim() {
    for s in ["Bob", "", " padded ", "12:30", "urn:isbn:42", "ftp://files.ex.org/x"] {
        assert_eq!(TermCodec::format_for_query(s), format!("\"{}\"", s), "input {:?}", s);
    }
}

/// WHY: Classification is total; every string gets exactly one kind
/// BREAKS: Display and mutation code that matches exhaustively on Term
#[test]
fn classification_is_total_and_exclusive() {
    for s in AWKWARD {
        let term = Term::new(*s);
        let kinds = [term.is_iri(), term.is_blank_node(), term.is_literal()];
        assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "input {:?}", s);
        assert_eq!(term.as_str(), *s, "classification must not rewrite {:?}", s);

        // Formatting never panics either
        let _ = TermCodec::format_for_query(s);
        let _ = TermCodec::classify_as_literal(s);
    }
}

/// WHY: The display heuristic treats colon-without-space as a compacted IRI
/// REASON: Compacted names like `rdf:type` must not render as literals
/// SACRIFICES: `12:30` reads as an IRI; accepted imprecision
#[test]
fn literal_heuristic_matches_documented_rules() {
    assert!(!TermCodec::classify_as_literal("_:b0"));
    assert!(!TermCodec::classify_as_literal("http://ex.org/a b"));
    assert!(!TermCodec::classify_as_literal("rdf:type"));
    assert!(!TermCodec::classify_as_literal("12:30"));
    assert!(TermCodec::classify_as_literal("12:30 today"));
    assert!(TermCodec::classify_as_literal("Bob"));
    assert!(TermCodec::classify_as_literal(""));
}

/// WHY: Entity focus filters every position with the same formatted term
#[test]
fn entity_focus_formats_all_three_positions() {
    let query = SparqlQuery::entity_focus("http://ex.org/Bob");
    let text = query.as_str();
    assert!(text.contains("?s = <http://ex.org/Bob>"));
    assert!(text.contains("?p = <http://ex.org/Bob>"));
    assert!(text.contains("?o = <http://ex.org/Bob>"));
    assert_eq!(text.matches("<http://ex.org/Bob>").count(), 3);
}

/// WHY: Compacting an already compacted value must not change it
/// REASON: Display code may compact values that were compacted upstream
#[test]
fn compaction_is_idempotent() {
    let prefixes = vec![
        Prefix::new("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        Prefix::new("ex", "http://ex.org/"),
    ];
    for s in AWKWARD.iter().chain(["http://www.w3.org/1999/02/22-rdf-syntax-ns#type"].iter()) {
        let once = PrefixCompactor::compact(s, &prefixes);
        assert_eq!(PrefixCompactor::compact(&once, &prefixes), once, "input {:?}", s);
    }
}

/// WHY: First match in caller order wins; no specificity re-sorting
/// BREAKS: Registries that deliberately order overlapping namespaces
#[test]
fn compaction_honors_caller_order() {
    let broad_first = vec![
        Prefix::new("ex", "http://ex.org/"),
        Prefix::new("exv", "http://ex.org/vocab#"),
    ];
    let narrow_first = vec![broad_first[1].clone(), broad_first[0].clone()];
    let iri = "http://ex.org/vocab#name";

    assert_eq!(PrefixCompactor::compact(iri, &broad_first), "ex:vocab#name");
    assert_eq!(PrefixCompactor::compact(iri, &narrow_first), "exv:name");
    assert_eq!(PrefixCompactor::compact("http://other.org/x", &broad_first), "http://other.org/x");
}
