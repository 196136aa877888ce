//! REST gateway against the hosted projects API.
//!
//! A thin JSON client over three endpoints: list, create, and
//! merge-patch. No retry at this layer — the board store's caching
//! policy decides what a failure means.

use std::time::Duration;

use async_trait::async_trait;

use atelier_core::{BoardError, CreateProject, ProjectGateway, ProjectRecord, UpdateProject};

use crate::config::GatewayConfig;

/// HTTP request timeout for a single gateway call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`ProjectGateway`] backed by the hosted database's REST endpoint.
pub struct RestGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl RestGateway {
    /// Create a gateway with a pre-configured HTTP client.
    pub fn new(config: GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// Map a non-2xx response onto a [`BoardError`] kind.
    ///
    /// 404 becomes `NotFound` (when the request targeted a single
    /// project), other 4xx become `Validation`, everything else is
    /// `Transient`.
    async fn error_for(response: reqwest::Response, project_id: Option<&str>) -> BoardError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, "Projects API returned an error response");

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = project_id {
                return BoardError::project_not_found(id);
            }
        }
        if status.is_client_error() {
            BoardError::Validation(format!("HTTP {status}: {body}"))
        } else {
            BoardError::Transient(format!("HTTP {status}: {body}"))
        }
    }
}

/// Network-level failures (DNS, connect, timeout) are all transient.
fn transport(err: reqwest::Error) -> BoardError {
    BoardError::Transient(err.to_string())
}

fn decode(err: reqwest::Error) -> BoardError {
    BoardError::Transient(format!("Invalid response body: {err}"))
}

#[async_trait]
impl ProjectGateway for RestGateway {
    async fn fetch_all(&self) -> Result<Vec<ProjectRecord>, BoardError> {
        let response = self
            .authorize(self.client.get(self.url("projects")))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response, None).await);
        }
        response.json().await.map_err(decode)
    }

    async fn create(&self, input: &CreateProject) -> Result<ProjectRecord, BoardError> {
        let response = self
            .authorize(self.client.post(self.url("projects")).json(input))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response, None).await);
        }
        response.json().await.map_err(decode)
    }

    async fn update(&self, id: &str, patch: &UpdateProject) -> Result<ProjectRecord, BoardError> {
        let response = self
            .authorize(
                self.client
                    .patch(self.url(&format!("projects/{id}")))
                    .json(patch),
            )
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response, Some(id)).await);
        }
        response.json().await.map_err(decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let gateway = RestGateway::new(GatewayConfig::new("http://localhost:54321/rest/v1", None));
        assert_eq!(gateway.url("projects"), "http://localhost:54321/rest/v1/projects");
        assert_eq!(
            gateway.url("projects/p1"),
            "http://localhost:54321/rest/v1/projects/p1"
        );
    }
}
