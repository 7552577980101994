//! NavigationState - focus state machine
//!
//! ```text
//!   Idle ──focus set/cleared──▶ Loading ──resolves──▶ Loaded
//!                                  │                    │
//!                                  └──rejects──▶ Error  │
//!   Loaded/Error ──mutation ok──▶ Loading (same focus)  │
//!   any state ──focus change──▶ Loading ◀───────────────┘
//! ```
//!
//! Every load is described by a [`LoadTicket`] carrying a generation number.
//! A new focus change or refresh bumps the generation; completions from older
//! tickets are discarded, so the latest request wins regardless of the order
//! responses arrive in.

use tracing::{debug, info, warn};

use crate::errors::{NavError, Result};
use crate::ordering::FocusOrderingEngine;
use crate::prefix::{PrefixRegistry, RDFS_NS};
use crate::priority::PrioritySet;
use crate::query::{
    Binding, QueryResponse, SparqlQuery, DEFAULT_SAMPLE_LIMIT, VAR_CLASS, VAR_OBJECT,
    VAR_PREDICATE, VAR_SUBJECT,
};
use crate::term::{Term, Triple};

/// Focus label shown while no entity is selected
pub const DEFAULT_FOCUS_LABEL: &str = "Graph entities";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Which read query a ticket runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    ClassDiscovery,
    Sample,
    EntityFocus,
}

/// One issued read query, tied to the generation that requested it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    kind: LoadKind,
    query: SparqlQuery,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn kind(&self) -> LoadKind {
        self.kind
    }

    pub fn query(&self) -> &SparqlQuery {
        &self.query
    }
}

/// What happened when a response was handed back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Result stored; state is `Loaded`
    Applied,
    /// Ticket superseded by a newer request; nothing changed
    Stale,
    /// Class discovery was empty; run this sample ticket next
    Fallback(LoadTicket),
    /// Query rejected; state is `Error`, previous view kept
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusState {
    value: Option<Term>,
    label: String,
}

impl FocusState {
    pub fn none() -> Self {
        Self {
            value: None,
            label: DEFAULT_FOCUS_LABEL.to_string(),
        }
    }

    pub fn value(&self) -> Option<&Term> {
        self.value.as_ref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl Default for FocusState {
    fn default() -> Self {
        Self::none()
    }
}

/// A term with its compacted display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTerm {
    pub term: Term,
    pub display: String,
}

impl DisplayTerm {
    pub fn render(term: Term, prefixes: &PrefixRegistry) -> Self {
        let display = match term.iri() {
            Some(iri) => prefixes.compact(iri),
            None => term.as_str().to_string(),
        };
        Self { term, display }
    }

    pub fn is_literal(&self) -> bool {
        self.term.is_literal()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTriple {
    pub subject: DisplayTerm,
    pub predicate: DisplayTerm,
    pub object: DisplayTerm,
}

impl DisplayTriple {
    pub fn render(triple: Triple, prefixes: &PrefixRegistry) -> Self {
        Self {
            subject: DisplayTerm::render(triple.subject, prefixes),
            predicate: DisplayTerm::render(triple.predicate, prefixes),
            object: DisplayTerm::render(triple.object, prefixes),
        }
    }

    pub fn triple(&self) -> Triple {
        Triple {
            subject: self.subject.term.clone(),
            predicate: self.predicate.term.clone(),
            object: self.object.term.clone(),
        }
    }

    pub fn cell(&self, column: Column) -> Option<&DisplayTerm> {
        match column {
            Column::Subject => Some(&self.subject),
            Column::Predicate => Some(&self.predicate),
            Column::Object => Some(&self.object),
            Column::Class => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Class,
    Subject,
    Predicate,
    Object,
}

/// What the presentation layer shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Empty,
    /// Class discovery: one `class` column
    Classes(Vec<DisplayTerm>),
    /// Sample or entity focus: subject/predicate/object rows
    Triples(Vec<DisplayTriple>),
}

impl View {
    pub fn len(&self) -> usize {
        match self {
            View::Empty => 0,
            View::Classes(classes) => classes.len(),
            View::Triples(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            View::Empty => &[],
            View::Classes(_) => &[Column::Class],
            View::Triples(_) => &[Column::Subject, Column::Predicate, Column::Object],
        }
    }

    pub fn cell(&self, row: usize, column: Column) -> Option<&DisplayTerm> {
        match (self, column) {
            (View::Classes(classes), Column::Class) => classes.get(row),
            (View::Triples(rows), column) => rows.get(row).and_then(|r| r.cell(column)),
            _ => None,
        }
    }
}

pub struct NavigationState {
    focus: FocusState,
    prefixes: PrefixRegistry,
    priority: PrioritySet,
    sample_limit: usize,
    state: LoadState,
    view: View,
    error: Option<String>,
    notice: Option<String>,
    generation: u64,
}

impl NavigationState {
    pub fn new(prefixes: PrefixRegistry, priority: PrioritySet) -> Self {
        Self {
            focus: FocusState::none(),
            prefixes,
            priority,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            state: LoadState::Idle,
            view: View::Empty,
            error: None,
            notice: None,
            generation: 0,
        }
    }

    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Transient message from the last failed mutation
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn prefixes(&self) -> &PrefixRegistry {
        &self.prefixes
    }

    pub fn priority(&self) -> &PrioritySet {
        &self.priority
    }

    pub fn sample_limit(&self) -> usize {
        self.sample_limit
    }

    /// Replace the prefix snapshot; applies from the next load
    pub fn set_prefixes(&mut self, prefixes: PrefixRegistry) {
        self.prefixes = prefixes;
    }

    pub fn set_priority(&mut self, priority: PrioritySet) {
        self.priority = priority;
    }

    /// Query for the current focus: entity focus, or class discovery when empty
    pub fn current_query(&self) -> (LoadKind, SparqlQuery) {
        match self.focus.value() {
            Some(term) => (LoadKind::EntityFocus, SparqlQuery::entity_focus(term.as_str())),
            None => (LoadKind::ClassDiscovery, SparqlQuery::class_discovery()),
        }
    }

    /// Change (or clear, with `None` or `""`) the focus and start a load
    pub fn begin_focus(&mut self, focus: Option<&str>) -> LoadTicket {
        self.focus = match focus.filter(|f| !f.is_empty()) {
            Some(raw) => {
                let term = Term::new(raw);
                let label = DisplayTerm::render(term.clone(), &self.prefixes).display;
                FocusState {
                    value: Some(term),
                    label,
                }
            }
            None => FocusState::none(),
        };
        info!("Focus changed to '{}'", self.focus.label);
        self.issue()
    }

    /// Re-run the query for the current focus
    pub fn begin_refresh(&mut self) -> LoadTicket {
        debug!("Refreshing focus '{}'", self.focus.label);
        self.issue()
    }

    /// Focus on the raw value of a table cell
    pub fn select(&mut self, row: usize, column: Column) -> Option<LoadTicket> {
        let raw = self.view.cell(row, column)?.term.as_str().to_string();
        Some(self.begin_focus(Some(&raw)))
    }

    fn issue(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.notice = None;
        let (kind, query) = self.current_query();
        debug!("Issuing {:?} query (generation {})", kind, self.generation);
        LoadTicket {
            generation: self.generation,
            kind,
            query,
        }
    }

    /// Hand back the outcome of a ticket's query
    pub fn complete(&mut self, ticket: &LoadTicket, outcome: Result<QueryResponse>) -> Completion {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale {:?} response (generation {}, current {})",
                ticket.kind, ticket.generation, self.generation
            );
            return Completion::Stale;
        }

        let applied = outcome.and_then(|response| self.apply(ticket, response));
        match applied {
            Ok(completion) => completion,
            Err(e) => {
                warn!("{:?} query failed: {}", ticket.kind, e);
                self.state = LoadState::Error;
                self.error = Some(e.to_string());
                Completion::Failed
            }
        }
    }

    fn apply(&mut self, ticket: &LoadTicket, response: QueryResponse) -> Result<Completion> {
        match ticket.kind {
            LoadKind::ClassDiscovery if response.count == 0 => {
                info!("No typed entities; sampling {} triples", self.sample_limit);
                return Ok(Completion::Fallback(LoadTicket {
                    generation: ticket.generation,
                    kind: LoadKind::Sample,
                    query: SparqlQuery::sample(self.sample_limit),
                }));
            }
            LoadKind::ClassDiscovery => {
                let classes = response
                    .results
                    .iter()
                    .map(|row| {
                        binding_term(row, VAR_CLASS).map(|t| DisplayTerm::render(t, &self.prefixes))
                    })
                    .collect::<Result<Vec<_>>>()?;
                self.view = View::Classes(classes);
            }
            LoadKind::Sample | LoadKind::EntityFocus => {
                let triples = response
                    .results
                    .iter()
                    .map(binding_triple)
                    .collect::<Result<Vec<_>>>()?;
                let focus = self.focus.value().map(Term::as_str);
                let ordered = FocusOrderingEngine::order(triples, focus, &self.priority);
                self.update_label(&ordered);
                self.view = View::Triples(
                    ordered
                        .into_iter()
                        .map(|t| DisplayTriple::render(t, &self.prefixes))
                        .collect(),
                );
            }
        }

        self.state = LoadState::Loaded;
        self.error = None;
        debug!("{:?} loaded {} rows", ticket.kind, self.view.len());
        Ok(Completion::Applied)
    }

    /// Use the focus entity's own `rdfs:label` as the focus label when present,
    /// the compacted focus otherwise
    fn update_label(&mut self, triples: &[Triple]) {
        let Some(focus) = self.focus.value.as_ref() else {
            return;
        };
        let label_iri = format!("{}label", RDFS_NS);
        let found = triples.iter().find(|t| {
            t.subject == *focus
                && t.predicate.iri().map_or(false, |p| p == label_iri)
        });
        self.focus.label = match found {
            Some(triple) => triple
                .object
                .lexical()
                .unwrap_or_else(|| triple.object.as_str())
                .to_string(),
            None => DisplayTerm::render(focus.clone(), &self.prefixes).display,
        };
    }

    /// Record a rejected mutation; the loaded view stays as it was
    pub fn record_mutation_failure(&mut self, err: &NavError) {
        warn!("Mutation failed: {}", err);
        self.notice = Some(err.to_string());
    }
}

fn binding_term(row: &Binding, var: &str) -> Result<Term> {
    row.get(var)
        .map(Term::new)
        .ok_or_else(|| NavError::MalformedBinding(var.to_string()))
}

fn binding_triple(row: &Binding) -> Result<Triple> {
    Ok(Triple {
        subject: binding_term(row, VAR_SUBJECT)?,
        predicate: binding_term(row, VAR_PREDICATE)?,
        object: binding_term(row, VAR_OBJECT)?,
    })
}
