// Focus Ordering Contract Tests
//
// Display order is asserted on by users and by tests alike, so the ordering
// must be deterministic: rank first, priority inside subject rows, and input
// order for everything else.

use triple_lens::prefix::{RDFS_NS, RDF_NS};
use triple_lens::{FocusOrderingEngine, Prefix, PredicatePriorityResolver, PrioritySet, Triple};

const X: &str = "http://ex.org/X";

fn rdf(local: &str) -> String {
    format!("{}{}", RDF_NS, local)
}

fn rdfs(local: &str) -> String {
    format!("{}{}", RDFS_NS, local)
}

fn priority() -> PrioritySet {
    vec![RDF_NS, RDFS_NS].into_iter().collect()
}

/// WHY: No focus means no ordering at all
/// BREAKS: Sample views, whose order comes straight from the store
#[test]
fn empty_focus_preserves_input_order() {
    let input = vec![
        Triple::new("http://ex.org/c", "http://ex.org/p", X),
        Triple::new(X, rdf("type"), "http://ex.org/Y"),
        Triple::new("http://ex.org/a", X, "1"),
    ];
    assert_eq!(FocusOrderingEngine::order(input.clone(), None, &priority()), input);
    assert_eq!(FocusOrderingEngine::order(input.clone(), Some(""), &priority()), input);
}

/// WHY: Reference example; type statements lead the entity's own rows
#[test]
fn type_statement_precedes_plain_property() {
    let input = vec![
        Triple::new(X, "http://ex.org/name", "Bob"),
        Triple::new(X, rdf("type"), "http://ex.org/Y"),
    ];
    let prefixes = vec![Prefix::new("rdf", RDF_NS)];
    let set = PredicatePriorityResolver::resolve("rdf", &prefixes);

    let out = FocusOrderingEngine::order(input, Some(X), &set);
    assert_eq!(out[0], Triple::new(X, rdf("type"), "http://ex.org/Y"));
    assert_eq!(out[1], Triple::new(X, "http://ex.org/name", "Bob"));
}

/// WHY: Rows in the same bucket keep their relative input order
/// REASON: Equal rows have no other defined order; an unstable sort shuffles them
#[test]
fn ordering_is_stable_within_each_bucket() {
    let input = vec![
        Triple::new("http://ex.org/o1", "http://ex.org/p", X),
        Triple::new(X, "http://ex.org/b", "1"),
        Triple::new(X, rdfs("label"), "X"),
        Triple::new("http://ex.org/o2", "http://ex.org/p", X),
        Triple::new(X, "http://ex.org/a", "2"),
        Triple::new("http://ex.org/s", X, "3"),
        Triple::new(X, rdf("type"), "http://ex.org/T"),
        Triple::new("http://ex.org/o3", "http://ex.org/p", X),
    ];

    let out = FocusOrderingEngine::order(input, Some(X), &priority());

    let expected = vec![
        // subject rows, priority predicates in input order
        Triple::new(X, rdfs("label"), "X"),
        Triple::new(X, rdf("type"), "http://ex.org/T"),
        // subject rows, other predicates in input order
        Triple::new(X, "http://ex.org/b", "1"),
        Triple::new(X, "http://ex.org/a", "2"),
        // predicate rows
        Triple::new("http://ex.org/s", X, "3"),
        // object rows in input order
        Triple::new("http://ex.org/o1", "http://ex.org/p", X),
        Triple::new("http://ex.org/o2", "http://ex.org/p", X),
        Triple::new("http://ex.org/o3", "http://ex.org/p", X),
    ];
    assert_eq!(out, expected);
}

/// WHY: Priority only reorders subject rows; it never promotes other ranks
#[test]
fn priority_does_not_cross_ranks() {
    let input = vec![
        Triple::new("http://ex.org/other", rdf("type"), X),
        Triple::new(X, "http://ex.org/p", "1"),
    ];
    let out = FocusOrderingEngine::order(input, Some(X), &priority());
    assert_eq!(out[0].subject.as_str(), X);
}

/// WHY: Priority is a ranking signal, never a filter
/// BREAKS: Users would silently lose rows that fall outside the priority set
#[test]
fn ordering_never_drops_rows() {
    let input: Vec<Triple> = (0..20)
        .map(|i| match i % 4 {
            0 => Triple::new(X, format!("http://ex.org/p{}", i), "v"),
            1 => Triple::new(X, rdf("type"), format!("http://ex.org/T{}", i)),
            2 => Triple::new(format!("http://ex.org/s{}", i), "http://ex.org/p", X),
            _ => Triple::new("http://ex.org/u", "http://ex.org/p", "unrelated"),
        })
        .collect();

    let out = FocusOrderingEngine::order(input.clone(), Some(X), &PrioritySet::new());
    assert_eq!(out.len(), input.len());

    let mut sorted_in: Vec<String> = input.iter().map(|t| format!("{:?}", t)).collect();
    let mut sorted_out: Vec<String> = out.iter().map(|t| format!("{:?}", t)).collect();
    sorted_in.sort();
    sorted_out.sort();
    assert_eq!(sorted_in, sorted_out);

    // Unrelated rows sink to the bottom
    assert_eq!(out.last().unwrap().object.as_str(), "unrelated");
}

/// WHY: Unregistered default prefixes fail open
/// REASON: A registry without `owl` still yields rdf and rdfs priority
#[test]
fn default_priority_fails_open() {
    let prefixes = vec![Prefix::new("rdf", RDF_NS), Prefix::new("rdfs", RDFS_NS)];
    let set = PredicatePriorityResolver::resolve_or_default(None, &prefixes);
    assert_eq!(set.len(), 2);
    assert!(set.matches(&rdf("type")));
    assert!(!set.matches("http://www.w3.org/2002/07/owl#sameAs"));
}
