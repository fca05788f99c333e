//! Shared HTTP client for the graph services.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use gw_graph::Graph;

use crate::classify::{self, Classification, ClassifyRequest};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::shortest_path::{self, PathQuery, ShortestPath};

/// Stateless client; cheap to clone.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    config: ClientConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl ServiceClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask the service for an unweighted shortest path.
    ///
    /// Validation failures return before any connection is made.
    pub async fn shortest_path(&self, query: &PathQuery) -> ClientResult<ShortestPath> {
        query.validate()?;

        let url = self.config.endpoint("shortest_path");
        debug!(%url, start = %query.start, end = %query.end, edges = query.edges.len(), "requesting shortest path");
        let resp = self.client.post(&url).json(query).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        let result = shortest_path::interpret_response(query, status, &body);
        match &result {
            Ok(p) => info!(length = p.length, "shortest path found"),
            Err(ClientError::NoPath(msg)) => info!(%msg, "no path"),
            Err(e) => warn!(%status, error = %e, "shortest path request failed"),
        }
        result
    }

    /// Ask the service for a structural label of `graph`.
    pub async fn classify(&self, graph: &Graph) -> ClientResult<Classification> {
        self.classify_request(&ClassifyRequest::from_graph(graph)).await
    }

    pub async fn classify_request(&self, request: &ClassifyRequest) -> ClientResult<Classification> {
        let url = self.config.endpoint("classify");
        debug!(%url, edges = request.edges.len(), "requesting classification");
        let resp = self.client.post(&url).json(request).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        let result = classify::interpret_response(status, &body);
        match &result {
            Ok(c) => info!(kind = %c.kind, confidence = ?c.confidence, "graph classified"),
            Err(e) => warn!(%status, error = %e, "classification failed"),
        }
        result
    }

    /// `GET /health`; true when the service reports `healthy`.
    pub async fn health(&self) -> ClientResult<bool> {
        let url = self.config.endpoint("health");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Ok(false);
        }
        let body: HealthResponse = serde_json::from_str(&resp.text().await?)?;
        Ok(body.status == "healthy")
    }
}
