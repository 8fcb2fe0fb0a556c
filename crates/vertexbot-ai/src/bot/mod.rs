//! Session facade: the one entry point callers use.


use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use vertexbot_common::new_correlation_id;
use vertexbot_config::BotConfig;

use crate::gemini::{ChatTransport, GeminiChatBackend, VertexChatTransport};
use crate::http::{self, ModelEndpoint};
use crate::palm::{PalmPredictBackend, PredictTransport, VertexPredictTransport};
use crate::{AiError, BackendKind, ChatBackend, Turn, VertexAuth};

/// Conversational session over the configured Vertex AI model.
///
/// The backend is picked once from the model id and kept for the life of
/// the bot. `chat` never returns an error: failures are logged and turned
/// into an empty reply.
pub struct Bot {
    config: Arc<BotConfig>,
    kind: BackendKind,
    backend: Box<dyn ChatBackend>,
}

impl Bot {
    /// Build a bot talking to Vertex AI over HTTPS, with the access token
    /// taken from the environment.
    pub fn new(config: BotConfig) -> Result<Self, AiError> {
        let auth = VertexAuth::from_env()?;
        Self::with_auth(config, auth)
    }

    pub fn with_auth(config: BotConfig, auth: VertexAuth) -> Result<Self, AiError> {
        let endpoint = ModelEndpoint::from_config(&config)?;
        let client = http::build_client()?;
        let config = Arc::new(config);
        let kind = BackendKind::for_model(&config.vertexai.model);

        let backend: Box<dyn ChatBackend> = match kind {
            BackendKind::Chat => {
                let transport = VertexChatTransport::new(
                    client,
                    endpoint,
                    auth,
                    config.generation_params(),
                );
                Box::new(GeminiChatBackend::new(Arc::clone(&config), &transport))
            }
            BackendKind::Predict => {
                let transport = Arc::new(VertexPredictTransport::new(
                    client,
                    endpoint.location.clone(),
                    auth,
                ));
                Box::new(PalmPredictBackend::new(
                    Arc::clone(&config),
                    &endpoint,
                    transport,
                ))
            }
        };

        info!(
            model = %config.vertexai.model,
            backend = kind.label(),
            "vertexai bot ready"
        );
        Ok(Self {
            config,
            kind,
            backend,
        })
    }

    /// Build a bot over caller-supplied transports. Only the transport of
    /// the selected backend is used.
    pub fn with_transports(
        config: BotConfig,
        chat: &dyn ChatTransport,
        predict: Arc<dyn PredictTransport>,
    ) -> Result<Self, AiError> {
        let endpoint = ModelEndpoint::from_config(&config)?;
        let config = Arc::new(config);
        let kind = BackendKind::for_model(&config.vertexai.model);
        let backend: Box<dyn ChatBackend> = match kind {
            BackendKind::Chat => Box::new(GeminiChatBackend::new(Arc::clone(&config), chat)),
            BackendKind::Predict => Box::new(PalmPredictBackend::new(
                Arc::clone(&config),
                &endpoint,
                predict,
            )),
        };
        Ok(Self {
            config,
            kind,
            backend,
        })
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.kind
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Transcript kept by the predict backend; `None` for session backends.
    pub fn transcript(&self) -> Option<&[Turn]> {
        self.backend.transcript()
    }

    /// Send one turn and return the reply, or `""` if there is none.
    ///
    /// An empty message returns `""` without contacting the backend.
    pub async fn chat(&mut self, message: &str) -> String {
        if message.is_empty() {
            return String::new();
        }

        let turn = new_correlation_id();
        info!(%turn, "----- MESSAGE START -----\n{message}\n----- MESSAGE END -----");

        let start = Instant::now();
        let result = self.backend.send_message(message).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            %turn,
            backend = self.kind.label(),
            elapsed_ms,
            "vertexai send_message response time: {elapsed_ms} ms"
        );

        match result {
            Ok(text) if text.is_empty() => {
                warn!(%turn, "vertexai response is empty");
                text
            }
            Ok(text) => {
                if self.config.debug {
                    info!(%turn, "vertexai response: {text}");
                }
                text
            }
            Err(e) => {
                warn!(%turn, error = %e, "failed to send message to vertexai: {e}");
                String::new()
            }
        }
    }
}
