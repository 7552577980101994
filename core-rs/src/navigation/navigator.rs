//! Navigator - drives NavigationState against the external services
//!
//! Loads run to completion before the next call, so within one navigator the
//! generation check never fires. Callers that race requests themselves (UI
//! event loops) use `NavigationState::begin_*` / `complete` directly.

use tracing::{debug, info};

use super::state::{Column, Completion, LoadTicket, NavigationState};
use crate::drivers::{PrefixSource, QueryService, TripleService};
use crate::errors::{NavError, Result};
use crate::priority::PredicatePriorityResolver;
use crate::query::{LabelForm, TriplePayload};
use crate::term::Triple;

pub struct Navigator<Q, M> {
    queries: Q,
    mutations: M,
    state: NavigationState,
}

impl<Q: QueryService, M: TripleService> Navigator<Q, M> {
    pub fn new(queries: Q, mutations: M, state: NavigationState) -> Self {
        Self {
            queries,
            mutations,
            state,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn into_state(self) -> NavigationState {
        self.state
    }

    pub fn queries(&self) -> &Q {
        &self.queries
    }

    pub fn mutations(&self) -> &M {
        &self.mutations
    }

    /// Refresh prefixes and priority from their sources at session start
    pub async fn sync_prefixes<P: PrefixSource>(&mut self, source: &P, priority_config: Option<&str>) -> Result<()> {
        let registry = source.prefixes().await?;
        let priority = PredicatePriorityResolver::resolve_or_default(priority_config, registry.prefixes());
        debug!("Loaded {} prefixes, {} priority namespaces", registry.len(), priority.len());
        self.state.set_prefixes(registry);
        self.state.set_priority(priority);
        Ok(())
    }

    /// Focus on `term` and load every triple mentioning it
    pub async fn focus(&mut self, term: &str) -> Completion {
        let ticket = self.state.begin_focus(Some(term));
        self.run(ticket).await
    }

    /// Back to the class discovery landing view
    pub async fn clear_focus(&mut self) -> Completion {
        let ticket = self.state.begin_focus(None);
        self.run(ticket).await
    }

    /// Focus on a table cell; `None` when the cell does not exist
    pub async fn select(&mut self, row: usize, column: Column) -> Option<Completion> {
        let ticket = self.state.select(row, column)?;
        Some(self.run(ticket).await)
    }

    pub async fn refresh(&mut self) -> Completion {
        let ticket = self.state.begin_refresh();
        self.run(ticket).await
    }

    async fn run(&mut self, mut ticket: LoadTicket) -> Completion {
        loop {
            let outcome = self.queries.execute(ticket.query()).await;
            match self.state.complete(&ticket, outcome) {
                Completion::Fallback(next) => ticket = next,
                completion => return completion,
            }
        }
    }

    /// Create a triple from raw user input, then refresh
    pub async fn add_triple(&mut self, subject: &str, predicate: &str, object: &str) -> Result<Completion> {
        for (name, value) in [("Subject", subject), ("Predicate", predicate), ("Object", object)] {
            if value.trim().is_empty() {
                return Err(NavError::MissingField(name.to_string()));
            }
        }
        let payload = TriplePayload::new(subject, predicate, object);
        self.mutate(payload, false).await
    }

    /// Delete a displayed triple by its exact values, then refresh
    pub async fn delete_triple(&mut self, triple: &Triple) -> Result<Completion> {
        self.mutate(TriplePayload::from_triple(triple), true).await
    }

    /// Attach an `rdfs:label` to the focused entity, then refresh
    pub async fn add_label(&mut self, form: &LabelForm) -> Result<Completion> {
        let focus = self.state.focus().value().map(|t| t.as_str().to_string());
        let payload = form.payload(focus.as_deref())?;
        self.mutate(payload, false).await
    }

    async fn mutate(&mut self, payload: TriplePayload, delete: bool) -> Result<Completion> {
        let result = if delete {
            self.mutations.delete_triple(&payload).await
        } else {
            self.mutations.create_triple(&payload).await
        };

        if let Err(e) = result {
            self.state.record_mutation_failure(&e);
            return Err(e);
        }

        info!(
            "{} ({}, {}, {})",
            if delete { "Deleted" } else { "Created" },
            payload.subject,
            payload.predicate,
            payload.object
        );
        Ok(self.refresh().await)
    }
}
