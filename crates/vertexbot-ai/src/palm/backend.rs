//! Stateless history-payload backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use vertexbot_config::BotConfig;

use crate::http::ModelEndpoint;
use crate::{AiError, ChatBackend, Turn};

use super::transport::PredictTransport;
use super::types::{PredictInstance, PredictMessage, PredictParameters, PredictRequest};

/// Backend for models without a session concept.
///
/// Owns the transcript: every successful turn appends the user message
/// and then the reply. Not safe to share between concurrent callers; the
/// `&mut self` receiver on `send_message` enforces one call at a time.
pub struct PalmPredictBackend {
    config: Arc<BotConfig>,
    transport: Arc<dyn PredictTransport>,
    endpoint: String,
    context: String,
    transcript: Vec<Turn>,
}

impl PalmPredictBackend {
    pub fn new(
        config: Arc<BotConfig>,
        endpoint: &ModelEndpoint,
        transport: Arc<dyn PredictTransport>,
    ) -> Self {
        let context = config.system_preamble();
        Self {
            config,
            transport,
            endpoint: endpoint.resource_name(),
            context,
            transcript: Vec::new(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    fn build_request(&self) -> PredictRequest {
        let params = self.config.generation_params();
        PredictRequest {
            endpoint: self.endpoint.clone(),
            instances: vec![PredictInstance {
                context: self.context.clone(),
                messages: self.transcript.iter().map(PredictMessage::from).collect(),
            }],
            parameters: PredictParameters {
                temperature: params.temperature,
                max_output_tokens: params.max_output_tokens,
                top_p: params.top_p,
                top_k: params.top_k,
            },
        }
    }
}

#[async_trait]
impl ChatBackend for PalmPredictBackend {
    async fn send_message(&mut self, text: &str) -> Result<String, AiError> {
        self.transcript.push(Turn::user(text));
        let request = self.build_request();

        if self.config.debug {
            let dump = serde_json::to_string_pretty(&request)
                .unwrap_or_else(|e| format!("<unserializable request: {e}>"));
            info!("predict request: {dump}");
        }

        let response = match self.transport.predict(&request).await {
            Ok(response) => response,
            Err(e) => {
                // Drop the unanswered turn; the transcript holds pairs only.
                self.transcript.pop();
                return Err(e);
            }
        };

        if self.config.debug {
            let dump = serde_json::to_string_pretty(&response)
                .unwrap_or_else(|e| format!("<unserializable response: {e}>"));
            info!("predict response: {dump}");
        }

        let reply = response.text();
        self.transcript.push(Turn::model(reply.clone()));
        Ok(reply)
    }

    fn transcript(&self) -> Option<&[Turn]> {
        Some(self.transcript.as_slice())
    }
}
