//! # Triple Lens - entity-centric navigation over RDF triple stores
//!
//! Triple Lens builds the read queries a graph browser issues, orders the
//! triples that come back around the entity in focus, and drives the
//! focus/refresh cycle against pluggable query and mutation services.
//!
//! ## Core Principle
//!
//! **The focus IS the query**: every view is derived from one focus value.
//! No focus means class discovery (falling back to a sample); a focus means
//! every triple mentioning it, ordered subject-first.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │        NavigationState / Navigator   │
//! │  focus ─▶ SparqlQuery ─▶ ordering    │
//! └──────────────────────────────────────┘
//!           │                 │
//!     QueryService      TripleService
//!           │                 │
//!   ┌───────┴──────┐   ┌──────┴───────┐
//!   │ MemoryStore  │   │ HttpBackend  │
//!   │  (oxigraph)  │   │  (reqwest)   │
//!   └──────────────┘   └──────────────┘
//! ```

pub mod config;
pub mod drivers;
pub mod errors;
pub mod navigation;
pub mod ordering;
pub mod prefix;
pub mod priority;
pub mod query;
pub mod term;

pub use config::NavigatorConfig;
pub use drivers::{HttpBackend, MemoryStore, PrefixSource, QueryService, TripleService};
pub use errors::{LabelError, NavError};
pub use navigation::{
    Column, Completion, DisplayTerm, DisplayTriple, FocusState, LoadKind, LoadState, LoadTicket,
    NavigationState, Navigator, View,
};
pub use ordering::FocusOrderingEngine;
pub use prefix::{Prefix, PrefixCompactor, PrefixRegistry};
pub use priority::{PredicatePriorityResolver, PrioritySet};
pub use query::{Binding, LabelDraft, LabelForm, QueryResponse, SparqlQuery, TriplePayload};
pub use term::{Term, TermCodec, Triple};

/// Crate version reported by the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
