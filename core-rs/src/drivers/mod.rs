//! Drivers module for the external services
//!
//! Provides the service traits the engine consumes and two implementations:
//! - MemoryStore: in-process oxigraph store (Turtle/N-Triples files)
//! - HttpBackend: REST graph backend over HTTP

mod http;
mod memory;
mod traits;

pub use http::{HttpBackend, DEFAULT_GRAPH_ID};
pub use memory::{render_term, MemoryStore};
pub use traits::{PrefixSource, QueryService, TripleService};
