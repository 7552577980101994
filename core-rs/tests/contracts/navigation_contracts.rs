// Navigation Contract Tests
//
// These tests drive NavigationState and Navigator through scripted services
// and check the load cycle rules:
// - class discovery falls back to a sample exactly once, and only when empty
// - the latest request wins when completions arrive out of order
// - failures keep the previously loaded view
// - validation failures never reach a service

use std::collections::VecDeque;
use std::sync::Mutex;

use triple_lens::{
    Binding, Completion, LabelForm, LoadKind, LoadState, NavError, NavigationState, Navigator,
    PrefixRegistry, PrioritySet, QueryResponse, QueryService, SparqlQuery, TriplePayload,
    TripleService,
};

const BOB: &str = "http://ex.org/Bob";

/// Query service replaying canned responses and logging every query
#[derive(Default)]
struct ScriptedQueries {
    responses: Mutex<VecDeque<Result<QueryResponse, NavError>>>,
    issued: Mutex<Vec<String>>,
}

impl ScriptedQueries {
    fn new(responses: Vec<Result<QueryResponse, NavError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            issued: Mutex::new(Vec::new()),
        }
    }

    fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }
}

impl QueryService for ScriptedQueries {
    async fn execute(&self, query: &SparqlQuery) -> Result<QueryResponse, NavError> {
        self.issued.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(QueryResponse::default()))
    }
}

/// Mutation service counting calls
#[derive(Default)]
struct CountingMutations {
    calls: Mutex<usize>,
}

impl CountingMutations {
    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl TripleService for CountingMutations {
    async fn create_triple(&self, _payload: &TriplePayload) -> Result<(), NavError> {
        *self.calls.lock().unwrap() += 1;
        Ok(())
    }

    async fn delete_triple(&self, _payload: &TriplePayload) -> Result<(), NavError> {
        *self.calls.lock().unwrap() += 1;
        Ok(())
    }
}

fn state() -> NavigationState {
    NavigationState::new(PrefixRegistry::defaults(), PrioritySet::new())
}

fn row(pairs: &[(&str, &str)]) -> Binding {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn triples(n: usize) -> QueryResponse {
    QueryResponse::from_results(
        (0..n)
            .map(|i| {
                let o = i.to_string();
                row(&[("s", BOB), ("p", "http://ex.org/p"), ("o", o.as_str())])
            })
            .collect(),
    )
}

/// WHY: An untyped graph still gets a landing view
/// REASON: Zero classes triggers sample(10), automatically and exactly once
#[tokio::test]
async fn empty_class_discovery_samples_exactly_once() {
    let queries = ScriptedQueries::new(vec![
        Ok(QueryResponse::default()),
        Ok(QueryResponse::default()),
    ]);
    let mut nav = Navigator::new(queries, CountingMutations::default(), state());

    assert_eq!(nav.clear_focus().await, Completion::Applied);

    let issued = nav_issued(&nav);
    assert_eq!(
        issued,
        vec![
            SparqlQuery::class_discovery().to_string(),
            SparqlQuery::sample(10).to_string()
        ]
    );
    // An empty sample does not loop back into discovery
    assert_eq!(nav.state().state(), LoadState::Loaded);
}

/// WHY: Only emptiness triggers the fallback; errors surface as errors
#[test]
fn failed_class_discovery_does_not_fall_back() {
    let mut state = state();
    let ticket = state.begin_focus(None);
    assert_eq!(ticket.kind(), LoadKind::ClassDiscovery);

    let completion = state.complete(&ticket, Err(NavError::QueryFailed("boom".to_string())));

    assert_eq!(completion, Completion::Failed);
    assert_eq!(state.state(), LoadState::Error);
    assert!(state.error().unwrap().contains("boom"));
}

/// WHY: Non-empty discovery is shown as is
#[test]
fn typed_graph_shows_classes_without_sampling() {
    let mut state = state();
    let ticket = state.begin_focus(None);
    let response = QueryResponse::from_results(vec![row(&[("class", "http://ex.org/Person")])]);

    assert_eq!(state.complete(&ticket, Ok(response)), Completion::Applied);
    assert_eq!(state.view().len(), 1);
}

/// WHY: A slow response for an old focus must not overwrite the new one
/// REASON: Latest request wins via the generation counter
#[test]
fn late_response_for_superseded_focus_is_discarded() {
    let mut state = state();
    let old = state.begin_focus(Some("http://ex.org/Alice"));
    let new = state.begin_focus(Some(BOB));
    assert!(new.generation() > old.generation());

    assert_eq!(state.complete(&new, Ok(triples(2))), Completion::Applied);
    assert_eq!(state.complete(&old, Ok(triples(5))), Completion::Stale);

    assert_eq!(state.view().len(), 2);
    assert_eq!(state.focus().value().unwrap().as_str(), BOB);
}

/// WHY: A stale failure is discarded as well
#[test]
fn late_failure_for_superseded_focus_is_discarded() {
    let mut state = state();
    let old = state.begin_focus(Some("http://ex.org/Alice"));
    let new = state.begin_focus(Some(BOB));

    assert_eq!(
        state.complete(&old, Err(NavError::QueryFailed("late".to_string()))),
        Completion::Stale
    );
    assert_eq!(state.state(), LoadState::Loading);
    assert_eq!(state.complete(&new, Ok(triples(1))), Completion::Applied);
    assert_eq!(state.state(), LoadState::Loaded);
}

/// WHY: Stale-but-visible beats a blank screen
#[test]
fn query_failure_keeps_previous_view() {
    let mut state = state();
    let ticket = state.begin_focus(Some(BOB));
    state.complete(&ticket, Ok(triples(3)));
    let before = state.view().clone();

    let ticket = state.begin_refresh();
    state.complete(&ticket, Err(NavError::QueryFailed("offline".to_string())));

    assert_eq!(state.state(), LoadState::Error);
    assert_eq!(state.view(), &before);
}

/// WHY: Refresh re-runs the query of the current focus; it is not a focus change
#[test]
fn refresh_reissues_same_query() {
    let mut state = state();
    let focus_ticket = state.begin_focus(Some(BOB));
    state.complete(&focus_ticket, Ok(triples(1)));

    let refresh_ticket = state.begin_refresh();
    assert_eq!(refresh_ticket.query(), focus_ticket.query());
    assert_eq!(refresh_ticket.kind(), LoadKind::EntityFocus);
    assert_eq!(state.focus().value().unwrap().as_str(), BOB);
}

/// WHY: Rows missing a required variable are a query failure, not a panic
#[test]
fn malformed_binding_is_an_error() {
    let mut state = state();
    let ticket = state.begin_focus(Some(BOB));
    let response = QueryResponse::from_results(vec![row(&[("s", BOB), ("p", "http://ex.org/p")])]);

    assert_eq!(state.complete(&ticket, Ok(response)), Completion::Failed);
    assert!(state.error().unwrap().contains("'o'"));
}

/// WHY: Conflicting label annotations are rejected before any request
/// REASON: Checked on the flags alone, whatever the field contents
#[tokio::test]
async fn conflicting_label_annotations_never_reach_services() {
    let mut nav = Navigator::new(
        ScriptedQueries::default(),
        CountingMutations::default(),
        state(),
    );
    nav.focus(BOB).await;
    let queries_before = nav_issued(&nav).len();

    for form in [
        LabelForm::new("Bob").lang("en").datatype("xsd:string"),
        LabelForm::new("").lang("").datatype(""),
    ] {
        assert!(nav.add_label(&form).await.is_err());
    }

    assert_eq!(nav_mutations(&nav), 0);
    assert_eq!(nav_issued(&nav).len(), queries_before);
}

/// WHY: Required triple fields are checked before the mutation service
#[tokio::test]
async fn blank_triple_fields_never_reach_services() {
    let mut nav = Navigator::new(
        ScriptedQueries::default(),
        CountingMutations::default(),
        state(),
    );

    for (s, p, o) in [("", "p", "o"), ("s", "", "o"), ("s", "p", "  ")] {
        assert!(matches!(
            nav.add_triple(s, p, o).await,
            Err(NavError::MissingField(_))
        ));
    }
    assert_eq!(nav_mutations(&nav), 0);
}

fn nav_issued(nav: &Navigator<ScriptedQueries, CountingMutations>) -> Vec<String> {
    nav.queries().issued()
}

fn nav_mutations(nav: &Navigator<ScriptedQueries, CountingMutations>) -> usize {
    nav.mutations().calls()
}
