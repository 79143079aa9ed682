use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::backend::ImageBackend;
use super::error::GenerationError;
use crate::app::types::ArtifactRef;

/// Longest slice of a response body quoted in an error message.
const MAX_ERROR_BODY: usize = 200;

#[derive(Serialize)]
struct ImageRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct ImageResponse {
    url: String,
}

/// Real generation backend reached over HTTP.
///
/// Sends `POST <endpoint>` with `{"prompt": "..."}` and expects
/// `{"url": "..."}` in a 2xx response.
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Backend(format!("cannot build HTTP client: {}", e)))?;
        Ok(HttpBackend {
            client,
            endpoint: endpoint.into(),
        })
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

/// Map a non-success HTTP status to the matching error kind.
pub(crate) fn classify_status(status: StatusCode, body: &str) -> GenerationError {
    let detail = if body.trim().is_empty() {
        status.to_string()
    } else {
        format!("{}: {}", status, excerpt(body))
    };
    match status {
        StatusCode::TOO_MANY_REQUESTS => GenerationError::Quota(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => GenerationError::InvalidPrompt(detail),
        _ => GenerationError::Backend(detail),
    }
}

pub(crate) fn parse_response(body: &str) -> Result<ArtifactRef, GenerationError> {
    let parsed: ImageResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Backend(format!("malformed response: {}", e)))?;
    let url = parsed.url.trim();
    if url.is_empty() {
        return Err(GenerationError::Backend("response did not contain an image url".to_string()));
    }
    Ok(ArtifactRef::new(url))
}

#[async_trait]
impl ImageBackend for HttpBackend {
    async fn request_image(&self, prompt: &str) -> Result<ArtifactRef, GenerationError> {
        debug!(endpoint = %self.endpoint, "requesting image");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ImageRequest { prompt })
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !status.is_success() {
            let err = classify_status(status, &body);
            warn!(endpoint = %self.endpoint, %status, "image request rejected");
            return Err(err);
        }
        parse_response(&body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
