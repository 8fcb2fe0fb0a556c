//! Scripted fake transports for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::gemini::{Candidate, ChatSession, ChatTransport, Content, GenerateContentResponse};
use crate::palm::{proto, PredictRequest, PredictResponse, PredictTransport};
use crate::{AiError, Role};

pub(crate) fn gemini_reply(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content::text(Role::Model, text)),
            finish_reason: Some("STOP".into()),
        }],
    }
}

pub(crate) fn predict_reply(text: &str) -> PredictResponse {
    PredictResponse {
        predictions: vec![proto::to_value(&json!({
            "candidates": [{ "author": "1", "content": text }],
            "safetyAttributes": [],
        }))],
    }
}

#[derive(Default)]
struct ChatLog {
    started: Vec<Vec<Content>>,
    sent: Vec<String>,
    replies: VecDeque<Result<GenerateContentResponse, AiError>>,
}

/// Records `start_chat` histories and every message sent on any session.
#[derive(Clone, Default)]
pub(crate) struct FakeChatTransport {
    log: Arc<Mutex<ChatLog>>,
}

impl FakeChatTransport {
    pub(crate) fn with_replies(
        replies: impl IntoIterator<Item = Result<GenerateContentResponse, AiError>>,
    ) -> Self {
        let fake = Self::default();
        fake.log.lock().unwrap().replies.extend(replies);
        fake
    }

    pub(crate) fn started(&self) -> Vec<Vec<Content>> {
        self.log.lock().unwrap().started.clone()
    }

    pub(crate) fn sent(&self) -> Vec<String> {
        self.log.lock().unwrap().sent.clone()
    }
}

impl ChatTransport for FakeChatTransport {
    fn start_chat(&self, history: Vec<Content>) -> Box<dyn ChatSession> {
        self.log.lock().unwrap().started.push(history);
        Box::new(FakeChatSession {
            log: Arc::clone(&self.log),
        })
    }
}

struct FakeChatSession {
    log: Arc<Mutex<ChatLog>>,
}

#[async_trait]
impl ChatSession for FakeChatSession {
    async fn send_message(&mut self, text: &str) -> Result<GenerateContentResponse, AiError> {
        let mut log = self.log.lock().unwrap();
        log.sent.push(text.to_string());
        log.replies
            .pop_front()
            .unwrap_or_else(|| Ok(GenerateContentResponse::default()))
    }
}

#[derive(Default)]
struct PredictLog {
    requests: Vec<PredictRequest>,
    replies: VecDeque<Result<PredictResponse, AiError>>,
}

/// Records every predict request and answers from a script.
#[derive(Clone, Default)]
pub(crate) struct FakePredictTransport {
    log: Arc<Mutex<PredictLog>>,
}

impl FakePredictTransport {
    pub(crate) fn with_replies(
        replies: impl IntoIterator<Item = Result<PredictResponse, AiError>>,
    ) -> Self {
        let fake = Self::default();
        fake.log.lock().unwrap().replies.extend(replies);
        fake
    }

    pub(crate) fn requests(&self) -> Vec<PredictRequest> {
        self.log.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl PredictTransport for FakePredictTransport {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, AiError> {
        let mut log = self.log.lock().unwrap();
        log.requests.push(request.clone());
        log.replies
            .pop_front()
            .unwrap_or_else(|| Ok(PredictResponse::default()))
    }
}
