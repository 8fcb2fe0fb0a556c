//! Predict transport seam and its Vertex AI REST implementation.

use async_trait::async_trait;
use serde_json::json;

use crate::http;
use crate::{AiError, VertexAuth};

use super::proto;
use super::types::{PredictRequest, PredictResponse};

/// A stateless prediction endpoint.
#[async_trait]
pub trait PredictTransport: Send + Sync {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, AiError>;
}

/// `predict` over HTTPS against the regional Vertex AI host.
pub struct VertexPredictTransport {
    http: reqwest::Client,
    location: String,
    auth: VertexAuth,
}

impl VertexPredictTransport {
    pub fn new(http: reqwest::Client, location: impl Into<String>, auth: VertexAuth) -> Self {
        Self {
            http,
            location: location.into(),
            auth,
        }
    }

    pub(crate) fn url(&self, request: &PredictRequest) -> String {
        format!(
            "{}/v1/{}:predict",
            http::api_base(&self.location),
            request.endpoint
        )
    }
}

#[async_trait]
impl PredictTransport for VertexPredictTransport {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, AiError> {
        let body = json!({
            "instances": request.instances,
            "parameters": request.parameters,
        });

        let json = http::post_json(&self.http, &self.url(request), &self.auth, &body).await?;

        let predictions = json["predictions"]
            .as_array()
            .map(|items| items.iter().map(proto::to_value).collect())
            .unwrap_or_default();

        Ok(PredictResponse { predictions })
    }
}
