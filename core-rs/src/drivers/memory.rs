//! MemoryStore - in-process oxigraph store behind the service traits
//!
//! Renders bindings the same way the REST backend does, so the engine sees
//! identical strings from either side:
//! - http(s) IRIs unbracketed, every other IRI as `<iri>` (`<urn:...>`,
//!   `<ftp://...>`), so any binding can be fed back as a focus
//! - blank nodes as `_:id`
//! - literals as their lexical form only

use std::path::Path;

use oxigraph::io::RdfFormat;
use oxigraph::model::{
    BlankNode, GraphName, GraphNameRef, Literal, NamedNode, Quad, Subject, Term as RdfTerm,
};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use tracing::debug;

use super::traits::{PrefixSource, QueryService, TripleService};
use crate::errors::{NavError, Result};
use crate::prefix::PrefixRegistry;
use crate::query::{Binding, QueryResponse, SparqlQuery, TriplePayload};
use crate::term::{Term, TermCodec};

pub struct MemoryStore {
    store: Store,
    prefixes: PrefixRegistry,
}

impl MemoryStore {
    /// Empty store with the default W3C prefixes
    pub fn new() -> Result<Self> {
        Self::with_prefixes(PrefixRegistry::defaults())
    }

    pub fn with_prefixes(prefixes: PrefixRegistry) -> Result<Self> {
        Ok(Self {
            store: Store::new()?,
            prefixes,
        })
    }

    pub fn load_turtle(&self, data: &str) -> Result<()> {
        self.load(RdfFormat::Turtle, data.as_bytes())
    }

    /// Load an RDF file; the format follows the file extension, Turtle otherwise.
    pub fn load_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(NavError::FileNotFound(path.display().to_string()));
        }
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(RdfFormat::from_extension)
            .unwrap_or(RdfFormat::Turtle);
        let content = std::fs::read(path)?;
        debug!("Loading {} as {:?}", path.display(), format);
        self.load(format, content.as_slice())
    }

    fn load(&self, format: RdfFormat, data: &[u8]) -> Result<()> {
        self.store
            .load_from_reader(format, data)
            .map_err(|e| NavError::Store(e.to_string()))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.store.len()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store.is_empty()?)
    }

    pub fn prefix_registry(&self) -> &PrefixRegistry {
        &self.prefixes
    }

    fn run_query(&self, query: &SparqlQuery) -> Result<QueryResponse> {
        let results = self
            .store
            .query(query.as_str())
            .map_err(|e| NavError::QueryFailed(e.to_string()))?;

        match results {
            QueryResults::Solutions(solutions) => {
                let vars: Vec<String> = solutions
                    .variables()
                    .iter()
                    .map(|v| v.as_str().to_string())
                    .collect();

                let mut rows = Vec::new();
                for solution in solutions {
                    let solution = solution.map_err(|e| NavError::QueryFailed(e.to_string()))?;
                    let mut row = Binding::new();
                    for (var, term) in solution.iter() {
                        row.insert(var.as_str().to_string(), render_term(term));
                    }
                    rows.push(row);
                }

                let mut response = QueryResponse::from_results(rows);
                response.vars = vars;
                Ok(response)
            }
            QueryResults::Boolean(_) | QueryResults::Graph(_) => Err(NavError::QueryFailed(
                "Expected SELECT solutions".to_string(),
            )),
        }
    }

    /// Classify a raw payload field after prefix expansion
    fn interpret(&self, raw: &str) -> Term {
        Term::new(self.prefixes.expand(raw))
    }

    fn parse_subject(&self, raw: &str) -> Result<Subject> {
        match self.interpret(raw) {
            term @ Term::Iri(_) => Ok(self.named_node(&term)?.into()),
            Term::BlankNode(id) => Ok(blank_node(&id)?.into()),
            Term::Literal(_) => Err(NavError::InvalidTerm(format!(
                "Subject must be an IRI or blank node: {}",
                raw
            ))),
        }
    }

    fn parse_predicate(&self, raw: &str) -> Result<NamedNode> {
        match self.interpret(raw) {
            term @ Term::Iri(_) => self.named_node(&term),
            _ => Err(NavError::InvalidTerm(format!("Predicate must be an IRI: {}", raw))),
        }
    }

    fn parse_object(&self, raw: &str) -> Result<RdfTerm> {
        let term = self.interpret(raw);
        match &term {
            Term::Iri(_) => Ok(self.named_node(&term)?.into()),
            Term::BlankNode(id) => Ok(blank_node(id)?.into()),
            Term::Literal(_) => {
                let lexical = term.lexical().unwrap_or_default();
                let literal = if let Some(lang) = term.lang() {
                    Literal::new_language_tagged_literal(lexical, lang)
                        .map_err(|e| NavError::InvalidTerm(e.to_string()))?
                } else if let Some(datatype) = term.datatype() {
                    let datatype = NamedNode::new(self.prefixes.expand(datatype))
                        .map_err(|e| NavError::InvalidTerm(e.to_string()))?;
                    Literal::new_typed_literal(lexical, datatype)
                } else {
                    Literal::new_simple_literal(lexical)
                };
                Ok(literal.into())
            }
        }
    }

    fn named_node(&self, term: &Term) -> Result<NamedNode> {
        let iri = term.iri().unwrap_or_else(|| term.as_str());
        NamedNode::new(iri).map_err(|e| NavError::InvalidTerm(format!("{}: {}", iri, e)))
    }

    fn insert(&self, payload: &TriplePayload) -> Result<()> {
        let quad = Quad::new(
            self.parse_subject(&payload.subject)?,
            self.parse_predicate(&payload.predicate)?,
            self.parse_object(&payload.object)?,
            GraphName::DefaultGraph,
        );
        if !self.store.insert(&quad)? {
            debug!("Triple already present: {}", quad);
        }
        Ok(())
    }

    /// Remove one triple matching the payload.
    ///
    /// An object that parses to the stored term exactly wins; otherwise the
    /// first triple whose object renders to the payload text is removed, so
    /// `"Bob"` deletes one of `"Bob"@en` / `"Bob"@fr`, never both.
    fn remove(&self, payload: &TriplePayload) -> Result<()> {
        let subject = self.parse_subject(&payload.subject)?;
        let predicate = self.parse_predicate(&payload.predicate)?;
        let parsed_object = self.parse_object(&payload.object).ok();

        let candidates = self
            .store
            .quads_for_pattern(
                Some(subject.as_ref()),
                Some(predicate.as_ref()),
                None,
                Some(GraphNameRef::DefaultGraph),
            )
            .collect::<std::result::Result<Vec<Quad>, _>>()?;

        let target = candidates
            .iter()
            .find(|quad| parsed_object.as_ref() == Some(&quad.object))
            .or_else(|| {
                candidates
                    .iter()
                    .find(|quad| render_term(&quad.object) == payload.object)
            });

        match target {
            Some(quad) if self.store.remove(quad)? => Ok(()),
            _ => Err(NavError::MutationFailed(format!(
                "No triple matches ({}, {}, {})",
                payload.subject, payload.predicate, payload.object
            ))),
        }
    }
}

fn blank_node(raw: &str) -> Result<BlankNode> {
    let id = raw.strip_prefix("_:").unwrap_or(raw);
    BlankNode::new(id).map_err(|e| NavError::InvalidTerm(format!("{}: {}", raw, e)))
}

/// Binding string for an oxigraph term
pub fn render_term(term: &RdfTerm) -> String {
    match term {
        RdfTerm::NamedNode(node) => {
            let iri = node.as_str();
            if TermCodec::has_web_scheme(iri) {
                iri.to_string()
            } else {
                format!("<{}>", iri)
            }
        }
        RdfTerm::BlankNode(node) => node.to_string(),
        RdfTerm::Literal(literal) => literal.value().to_string(),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}

impl QueryService for MemoryStore {
    async fn execute(&self, query: &SparqlQuery) -> Result<QueryResponse> {
        self.run_query(query)
    }
}

impl TripleService for MemoryStore {
    async fn create_triple(&self, payload: &TriplePayload) -> Result<()> {
        self.insert(payload)
            .map_err(|e| NavError::MutationFailed(e.to_string()))
    }

    async fn delete_triple(&self, payload: &TriplePayload) -> Result<()> {
        self.remove(payload).map_err(|e| match e {
            NavError::MutationFailed(_) => e,
            other => NavError::MutationFailed(other.to_string()),
        })
    }
}

impl PrefixSource for MemoryStore {
    async fn prefixes(&self) -> Result<PrefixRegistry> {
        Ok(self.prefixes.clone())
    }
}
