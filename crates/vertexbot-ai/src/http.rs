//! Shared reqwest plumbing for the Vertex AI REST endpoints.

use std::time::Duration;

use tracing::debug;
use vertexbot_config::BotConfig;

use crate::{AiError, VertexAuth};

/// Build the HTTP client shared by both transports.
///
/// The request timeout is the only timeout a chat turn is subject to.
pub(crate) fn build_client() -> Result<reqwest::Client, AiError> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(300))
        .build()
        .map_err(|e| AiError::Config(format!("failed to build HTTP client: {e}")))
}

/// A publisher model resource in one project and region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEndpoint {
    pub project_id: String,
    pub location: String,
    pub model: String,
}

impl ModelEndpoint {
    pub fn from_config(config: &BotConfig) -> Result<Self, AiError> {
        let vertexai = &config.vertexai;
        if vertexai.project_id.trim().is_empty() {
            return Err(AiError::Config(
                "vertexai.project_id is not set (or VERTEXBOT_PROJECT_ID)".into(),
            ));
        }
        Ok(Self {
            project_id: vertexai.project_id.clone(),
            location: vertexai.location.clone(),
            model: vertexai.model.clone(),
        })
    }

    /// Resource name, `projects/{p}/locations/{l}/publishers/google/models/{m}`.
    pub fn resource_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/publishers/google/models/{}",
            self.project_id, self.location, self.model
        )
    }

    /// Full REST URL for a model method such as `generateContent`.
    pub fn url(&self, method: &str) -> String {
        format!(
            "{}/v1/{}:{}",
            api_base(&self.location),
            self.resource_name(),
            method
        )
    }
}

pub(crate) fn api_base(location: &str) -> String {
    format!("https://{location}-aiplatform.googleapis.com")
}

/// POST a JSON body and decode the JSON reply, mapping HTTP failures onto
/// `AiError`.
pub(crate) async fn post_json(
    http: &reqwest::Client,
    url: &str,
    auth: &VertexAuth,
    body: &serde_json::Value,
) -> Result<serde_json::Value, AiError> {
    debug!(%url, "Vertex AI request");

    let response = http
        .post(url)
        .bearer_auth(auth.bearer())
        .json(body)
        .send()
        .await
        .map_err(|e| AiError::NetworkError(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::RateLimited);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        let text = response.text().await.unwrap_or_default();
        return Err(AiError::Auth(format!("HTTP {status}: {text}")));
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
    }

    response
        .json()
        .await
        .map_err(|e| AiError::ParseError(e.to_string()))
}
