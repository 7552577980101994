//! HttpBackend - REST backend client
//!
//! Thin reqwest adapter for the graph backend:
//! - `POST /api/queries` executes a read query
//! - `POST /api/graphs/{id}/triples` creates a triple
//! - `POST /api/graphs/{id}/triples/delete` deletes a triple
//! - `GET /api/prefixes` lists namespace prefixes
//!
//! No retries and no timeouts beyond reqwest's defaults; a failure surfaces
//! to the caller immediately.

use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use super::traits::{PrefixSource, QueryService, TripleService};
use crate::errors::{NavError, Result};
use crate::prefix::PrefixRegistry;
use crate::query::{QueryResponse, SparqlQuery, TriplePayload};

pub const DEFAULT_GRAPH_ID: &str = "default";

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    graph_id: String,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    graph_id: &'a str,
}

impl HttpBackend {
    /// Create a backend client
    ///
    /// # Example
    ///
    /// ```
    /// use triple_lens::drivers::HttpBackend;
    ///
    /// let backend = HttpBackend::new("http://localhost:5000/").with_graph("people");
    /// assert_eq!(backend.queries_url(), "http://localhost:5000/api/queries");
    /// assert_eq!(backend.triples_url(), "http://localhost:5000/api/graphs/people/triples");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            graph_id: DEFAULT_GRAPH_ID.to_string(),
        }
    }

    pub fn with_graph(mut self, graph_id: impl Into<String>) -> Self {
        self.graph_id = graph_id.into();
        self
    }

    pub fn graph_id(&self) -> &str {
        &self.graph_id
    }

    pub fn queries_url(&self) -> String {
        format!("{}/api/queries", self.base_url)
    }

    pub fn triples_url(&self) -> String {
        format!("{}/api/graphs/{}/triples", self.base_url, self.graph_id)
    }

    pub fn delete_url(&self) -> String {
        format!("{}/delete", self.triples_url())
    }

    pub fn prefixes_url(&self) -> String {
        format!("{}/api/prefixes", self.base_url)
    }

    async fn post_triple(&self, url: String, payload: &TriplePayload) -> Result<()> {
        debug!("POST {} {:?}", url, payload);
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| NavError::MutationFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NavError::MutationFailed(error_message(response).await));
        }
        Ok(())
    }
}

/// Backend error text: `{"error": "..."}` when present, status code otherwise
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<JsonValue>().await {
        Ok(body) => body
            .get("error")
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Server returned code {}", status.as_u16())),
        Err(_) => format!("Server returned code {}", status.as_u16()),
    }
}

impl QueryService for HttpBackend {
    async fn execute(&self, query: &SparqlQuery) -> Result<QueryResponse> {
        let url = self.queries_url();
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(&QueryRequest {
                query: query.as_str(),
                graph_id: &self.graph_id,
            })
            .send()
            .await
            .map_err(|e| NavError::QueryFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NavError::QueryFailed(error_message(response).await));
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| NavError::QueryFailed(format!("Invalid response body: {}", e)))
    }
}

impl TripleService for HttpBackend {
    async fn create_triple(&self, payload: &TriplePayload) -> Result<()> {
        self.post_triple(self.triples_url(), payload).await
    }

    async fn delete_triple(&self, payload: &TriplePayload) -> Result<()> {
        self.post_triple(self.delete_url(), payload).await
    }
}

impl PrefixSource for HttpBackend {
    async fn prefixes(&self) -> Result<PrefixRegistry> {
        let response = self.client.get(self.prefixes_url()).send().await?;
        if !response.status().is_success() {
            return Err(NavError::Config(error_message(response).await));
        }
        let body = response.text().await?;
        PrefixRegistry::from_json_str(&body)
    }
}
