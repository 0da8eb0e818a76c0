//! # Screening Backend HTTP Client
//!
//! `ScreeningClient` wraps a `reqwest::Client` with the backend base URL
//! and request/response mapping — one async method per endpoint. It is
//! `Send + Sync` and designed to be shared via `Arc` across tasks.
//!
//! ## Error Handling
//!
//! Transport failures, non-2xx statuses, and decode failures map to
//! [`ApiError`] with the endpoint path, HTTP status, and response body
//! preserved. Retries are deliberately NOT built in: the polling layer
//! owns the cadence and a failed tick simply fires again.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use sanscreen_core::{BatchId, DecisionId};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::types::{
    BatchDetailPage, BatchDetailParams, BatchSummary, Decision, DecisionAuditEntry,
    DecisionCreated, DecisionRequest, SanctionListKpi, SearchLogEntry, SearchLogQuery,
    SingleScreeningOutcome, SingleScreeningRequest,
};

/// Typed client for the screening backend REST API.
#[derive(Debug, Clone)]
pub struct ScreeningClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScreeningClient {
    /// Build a client from configuration. Fails on an unparseable base URL.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.validated_base_url()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| ApiError::Http {
                endpoint: base_url.clone(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    /// Build a client from `SANSCREEN_API_BASE`, falling back to the local
    /// development backend.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env())
    }

    /// The resolved base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send a request and map transport and status failures consistently.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, ApiError> {
        debug!(endpoint, "screening API request");
        let resp = request.send().await.map_err(|source| ApiError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        resp.json().await.map_err(|source| ApiError::Deserialization {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    // ─── Batches ────────────────────────────────────────────────────────

    /// List uploaded batches, most recent first.
    pub async fn list_batches(&self) -> Result<Vec<BatchSummary>, ApiError> {
        let endpoint = "/api/v1/batch/";
        let resp = self.send(self.client.get(self.url(endpoint)), endpoint).await?;
        self.decode(resp, endpoint).await
    }

    /// Upload a CSV/Excel file of names as a new batch. The file goes up as
    /// the multipart field `file`; the backend owns column mapping.
    pub async fn upload_batch(
        &self,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<BatchSummary, ApiError> {
        let endpoint = "/api/v1/batch/upload";
        let part = reqwest::multipart::Part::bytes(content).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let resp = self
            .send(self.client.post(self.url(endpoint)).multipart(form), endpoint)
            .await?;
        self.decode(resp, endpoint).await
    }

    /// Fetch one page of a batch's screening results plus batch metadata
    /// and the total count for the current filter combination.
    pub async fn batch_detail(
        &self,
        id: BatchId,
        params: &BatchDetailParams,
    ) -> Result<BatchDetailPage, ApiError> {
        let endpoint = format!("/api/v1/batch/{id}");
        let resp = self
            .send(
                self.client.get(self.url(&endpoint)).query(&params.query_pairs()),
                &endpoint,
            )
            .await?;
        self.decode(resp, &endpoint).await
    }

    // ─── Decisions ──────────────────────────────────────────────────────

    /// Record a reviewer decision. The backend auto-revokes any previous
    /// active decision for the same (term, sanction) pair; the client
    /// observes the effect only through subsequent reads.
    pub async fn create_decision(
        &self,
        request: &DecisionRequest,
    ) -> Result<DecisionCreated, ApiError> {
        let endpoint = "/api/v1/decision/create";
        let resp = self
            .send(self.client.post(self.url(endpoint)).json(request), endpoint)
            .await?;
        self.decode(resp, endpoint).await
    }

    /// List recorded decisions, optionally restricted to active
    /// (non-revoked) ones.
    pub async fn list_decisions(&self, active_only: bool) -> Result<Vec<Decision>, ApiError> {
        let endpoint = "/api/v1/decision/list";
        let resp = self
            .send(
                self.client
                    .get(self.url(endpoint))
                    .query(&[("active_only", active_only.to_string())]),
                endpoint,
            )
            .await?;
        self.decode(resp, endpoint).await
    }

    /// Fetch the ordered audit history of one decision.
    pub async fn decision_audit(
        &self,
        id: DecisionId,
    ) -> Result<Vec<DecisionAuditEntry>, ApiError> {
        let endpoint = format!("/api/v1/decision/audit/{id}");
        let resp = self.send(self.client.get(self.url(&endpoint)), &endpoint).await?;
        self.decode(resp, &endpoint).await
    }

    // ─── Single screening & search log ──────────────────────────────────

    /// Screen a single name against the sanctions lists.
    pub async fn single_screening(
        &self,
        request: &SingleScreeningRequest,
    ) -> Result<SingleScreeningOutcome, ApiError> {
        let endpoint = "/api/v1/single_screening/";
        let resp = self
            .send(self.client.post(self.url(endpoint)).json(request), endpoint)
            .await?;
        self.decode(resp, endpoint).await
    }

    /// Fetch prior single screenings for a company.
    pub async fn search_log(
        &self,
        query: &SearchLogQuery,
    ) -> Result<Vec<SearchLogEntry>, ApiError> {
        let endpoint = "/api/v1/search_log/";
        let resp = self
            .send(
                self.client.get(self.url(endpoint)).query(&query.query_pairs()),
                endpoint,
            )
            .await?;
        self.decode(resp, endpoint).await
    }

    // ─── KPIs & probes ──────────────────────────────────────────────────

    /// Fetch per-list KPI rows. The `days` window is appended only when it
    /// widens the default single-day view.
    pub async fn sanction_list_kpis(&self, days: u32) -> Result<Vec<SanctionListKpi>, ApiError> {
        let endpoint = "/api/v1/kpi/sanction-lists";
        let mut request = self.client.get(self.url(endpoint));
        if days > 1 {
            request = request.query(&[("days", days.to_string())]);
        }
        let resp = self.send(request, endpoint).await?;
        self.decode(resp, endpoint).await
    }

    /// Fetch the backend's system status payload.
    pub async fn system_status(&self) -> Result<serde_json::Value, ApiError> {
        let endpoint = "/api/v1/system/status";
        let resp = self.send(self.client.get(self.url(endpoint)), endpoint).await?;
        self.decode(resp, endpoint).await
    }

    /// Probe the root health endpoint.
    pub async fn health(&self) -> Result<serde_json::Value, ApiError> {
        let endpoint = "/";
        let resp = self.send(self.client.get(self.url(endpoint)), endpoint).await?;
        self.decode(resp, endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_endpoint() {
        let client = ScreeningClient::new(ClientConfig::new("http://localhost:8001/"))
            .expect("client build");
        assert_eq!(
            client.url("/api/v1/batch/"),
            "http://localhost:8001/api/v1/batch/"
        );
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        let err = ScreeningClient::new(ClientConfig::new("::::")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
