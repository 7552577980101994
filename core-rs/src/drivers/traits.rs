//! Service traits consumed by the navigation engine
//!
//! The engine never talks to a store directly. Implementations include:
//! - MemoryStore (in-process oxigraph store)
//! - HttpBackend (REST backend over reqwest)

use std::future::Future;
use std::sync::Arc;

use crate::errors::Result;
use crate::prefix::PrefixRegistry;
use crate::query::{QueryResponse, SparqlQuery, TriplePayload};

/// Executes read queries and returns variable bindings.
///
/// # Contract
///
/// - `count` must equal the number of rows in `results`
/// - Bound values are raw term strings (IRIs without brackets when they carry
///   a `://` scheme, `_:` blank nodes, literal lexical forms)
/// - Failures map to [`crate::NavError::QueryFailed`]
pub trait QueryService: Send + Sync {
    fn execute(&self, query: &SparqlQuery) -> impl Future<Output = Result<QueryResponse>> + Send;
}

/// Creates and deletes single triples.
///
/// Payload fields are raw strings; interpreting them (prefix expansion,
/// literal annotations) is the implementation's job. A delete is identified
/// only by the three field values.
pub trait TripleService: Send + Sync {
    fn create_triple(&self, payload: &TriplePayload) -> impl Future<Output = Result<()>> + Send;

    fn delete_triple(&self, payload: &TriplePayload) -> impl Future<Output = Result<()>> + Send;
}

/// Supplies the ordered prefix snapshot.
pub trait PrefixSource: Send + Sync {
    fn prefixes(&self) -> impl Future<Output = Result<PrefixRegistry>> + Send;
}

impl<T: QueryService> QueryService for Arc<T> {
    fn execute(&self, query: &SparqlQuery) -> impl Future<Output = Result<QueryResponse>> + Send {
        (**self).execute(query)
    }
}

impl<T: TripleService> TripleService for Arc<T> {
    fn create_triple(&self, payload: &TriplePayload) -> impl Future<Output = Result<()>> + Send {
        (**self).create_triple(payload)
    }

    fn delete_triple(&self, payload: &TriplePayload) -> impl Future<Output = Result<()>> + Send {
        (**self).delete_triple(payload)
    }
}

impl<T: PrefixSource> PrefixSource for Arc<T> {
    fn prefixes(&self) -> impl Future<Output = Result<PrefixRegistry>> + Send {
        (**self).prefixes()
    }
}
