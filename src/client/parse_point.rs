//! Client for the ParsePoint statement parsing API.
//!
//! One call, one request: the statement is read from disk, sent as a
//! multipart form and the body decoded with the configured schema. There
//! are no retries.

use reqwest::multipart::{Form, Part};

use super::http::{HttpClient, HttpConfig};
use crate::domain::{ResponseSchema, SummaryResponse, UploadError, UploadSelection};

/// Default endpoint of the hosted parsing service.
pub const DEFAULT_ENDPOINT: &str = "https://parse-point.vercel.app/pdf/";

/// Multipart field carrying the statement.
pub const FILE_FIELD: &str = "file";

// ============================================================================
// ParsePointClient
// ============================================================================

/// Uploads statements and decodes the returned summary.
#[derive(Debug, Clone)]
pub struct ParsePointClient {
    http: HttpClient,
    endpoint: String,
    schema: ResponseSchema,
}

impl ParsePointClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, schema: ResponseSchema, config: HttpConfig) -> Self {
        Self {
            http: HttpClient::with_config(config),
            endpoint: endpoint.into(),
            schema,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn schema(&self) -> ResponseSchema {
        self.schema
    }

    /// Submits a statement and returns the decoded summary.
    ///
    /// # Errors
    ///
    /// Returns an [`UploadError`] if the file cannot be read, the request
    /// fails, the service answers non-2xx, or the body does not decode.
    pub async fn submit(
        &self,
        selection: &UploadSelection,
    ) -> Result<SummaryResponse, UploadError> {
        let bytes = tokio::fs::read(&selection.path).await?;
        tracing::info!(
            file = %selection.name,
            bytes = bytes.len(),
            endpoint = %self.endpoint,
            schema = self.schema.as_str(),
            timeout_secs = self.http.config().timeout.as_secs(),
            "uploading statement"
        );

        let part = Part::bytes(bytes)
            .file_name(selection.name.clone())
            .mime_str(selection.mime)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post_multipart(&self.endpoint, form)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("upload request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "parsing service returned error status");
            return Err(UploadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        SummaryResponse::decode(self.schema, &body)
            .inspect_err(|e| tracing::warn!("could not decode response: {e}"))
    }
}

// ============================================================================
// Tests
// ============================================================================
