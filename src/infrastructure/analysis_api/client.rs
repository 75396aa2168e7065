//! HTTP adapter for the analysis service.
//!
//! Sends one multipart `POST {base_url}/analyze` per analysis. The multipart
//! field names are part of the service contract and must not change.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::error::extract_error_message;
use crate::domain::errors::{AnalysisError, ServiceResult};
use crate::domain::models::{AnalysisRequest, AnalysisResult};
use crate::domain::ports::AnalysisService;

/// Analysis endpoint, relative to the base URL.
pub const ANALYZE_PATH: &str = "/analyze";
/// Health endpoint, relative to the base URL.
pub const HEALTH_PATH: &str = "/health";

/// Multipart field carrying the user story text.
pub const FIELD_USER_STORY: &str = "user_story";
/// Multipart field carrying the acceptance criteria text.
pub const FIELD_ACCEPTANCE_CRITERIA: &str = "acceptance_criteria";
/// Multipart field repeated once per uploaded document.
pub const FIELD_DOCUMENTS: &str = "documents";

/// reqwest-backed [`AnalysisService`].
///
/// No timeout and no retry: a request either settles with a result or with
/// exactly one error.
#[derive(Debug, Clone)]
pub struct AnalysisClientImpl {
    http: Client,
    base_url: String,
}

impl AnalysisClientImpl {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("subtext/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the multipart body for a request.
    pub fn build_form(request: &AnalysisRequest) -> ServiceResult<Form> {
        let mut form = Form::new()
            .text(FIELD_USER_STORY, request.user_story.clone())
            .text(FIELD_ACCEPTANCE_CRITERIA, request.acceptance_criteria.clone());

        for document in &request.documents {
            let part = Part::bytes(document.content.clone())
                .file_name(document.name.clone())
                .mime_str(&document.content_type)
                .map_err(|e| AnalysisError::InvalidDocument {
                    name: document.name.clone(),
                    reason: e.to_string(),
                })?;
            form = form.part(FIELD_DOCUMENTS, part);
        }

        Ok(form)
    }
}

#[async_trait]
impl AnalysisService for AnalysisClientImpl {
    #[instrument(skip(self, request), fields(documents = request.documents.len()))]
    async fn analyze(&self, request: &AnalysisRequest) -> ServiceResult<AnalysisResult> {
        let form = Self::build_form(request)?;
        let url = self.endpoint(ANALYZE_PATH);
        debug!(%url, "submitting analysis request");

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "analysis request failed to send"))?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            warn!(status = status.as_u16(), %message, "analysis service returned an error");
            return Err(AnalysisError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "analysis response did not parse");
            AnalysisError::InvalidResponse(e.to_string())
        })?;

        info!(
            status = status.as_u16(),
            findings = result.finding_total(),
            "analysis completed"
        );
        Ok(result)
    }

    async fn health_check(&self) -> ServiceResult<bool> {
        let url = self.endpoint(HEALTH_PATH);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            debug!(status = response.status().as_u16(), "health check failed");
            return Ok(false);
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        Ok(body
            .get("ok")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true))
    }
}
