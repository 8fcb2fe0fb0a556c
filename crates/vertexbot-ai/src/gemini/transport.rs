//! Session-based transport seam and its Vertex AI REST implementation.

use async_trait::async_trait;
use serde_json::json;
use vertexbot_config::GenerationParams;

use crate::http::{self, ModelEndpoint};
use crate::{AiError, Role, VertexAuth};

use super::types::{Content, GenerateContentResponse};

/// Opens chat sessions that remember their own history.
pub trait ChatTransport: Send + Sync {
    fn start_chat(&self, history: Vec<Content>) -> Box<dyn ChatSession>;
}

/// A backend-owned conversation. Each call appends the turn and its reply
/// to the session's history.
#[async_trait]
pub trait ChatSession: Send {
    async fn send_message(&mut self, text: &str) -> Result<GenerateContentResponse, AiError>;
}

/// `generateContent` over HTTPS for one model.
pub struct VertexChatTransport {
    http: reqwest::Client,
    endpoint: ModelEndpoint,
    auth: VertexAuth,
    params: GenerationParams,
}

impl VertexChatTransport {
    pub fn new(
        http: reqwest::Client,
        endpoint: ModelEndpoint,
        auth: VertexAuth,
        params: GenerationParams,
    ) -> Self {
        Self {
            http,
            endpoint,
            auth,
            params,
        }
    }
}

impl ChatTransport for VertexChatTransport {
    fn start_chat(&self, history: Vec<Content>) -> Box<dyn ChatSession> {
        Box::new(VertexChatSession {
            http: self.http.clone(),
            url: self.endpoint.url("generateContent"),
            auth: self.auth.clone(),
            params: self.params,
            history,
        })
    }
}

/// Session whose history lives client-side and is replayed on each call,
/// which is what the Vertex SDK chat session does.
pub struct VertexChatSession {
    pub(super) http: reqwest::Client,
    pub(super) url: String,
    pub(super) auth: VertexAuth,
    pub(super) params: GenerationParams,
    pub(super) history: Vec<Content>,
}

impl VertexChatSession {
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub(crate) fn request_body(&self, user: &Content) -> serde_json::Value {
        let contents: Vec<&Content> = self.history.iter().chain(std::iter::once(user)).collect();
        json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.params.max_output_tokens,
                "temperature": self.params.temperature,
                "topP": self.params.top_p,
                "topK": self.params.top_k,
            }
        })
    }
}

#[async_trait]
impl ChatSession for VertexChatSession {
    async fn send_message(&mut self, text: &str) -> Result<GenerateContentResponse, AiError> {
        let user = Content::text(Role::User, text);
        let body = self.request_body(&user);

        let json = http::post_json(&self.http, &self.url, &self.auth, &body).await?;
        let response: GenerateContentResponse =
            serde_json::from_value(json).map_err(|e| AiError::ParseError(e.to_string()))?;

        // History only grows by complete user/model pairs.
        if let Some(content) = response.first_content() {
            let mut reply = content.clone();
            reply.role = Some(Role::Model);
            self.history.push(user);
            self.history.push(reply);
        }

        Ok(response)
    }
}
