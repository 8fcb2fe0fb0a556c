//! Tests for the Gemini chat backend and its wire types.

use std::sync::Arc;

use serde_json::json;
use vertexbot_config::{BotConfig, GenerationParams};

use super::*;
use crate::testing::{gemini_reply, FakeChatTransport};
use crate::{AiError, ChatBackend, Role, VertexAuth};

fn config() -> Arc<BotConfig> {
    let mut config = BotConfig::default();
    config.prompt.system_message = "Review carefully.".into();
    config.prompt.reply_for_system_message = "Ready.".into();
    config.prompt.language = "es-ES".into();
    Arc::new(config)
}

#[test]
fn session_is_seeded_with_preamble_and_acknowledgment() {
    let transport = FakeChatTransport::default();
    let _backend = GeminiChatBackend::new(config(), &transport);

    let started = transport.started();
    assert_eq!(started.len(), 1);
    let history = &started[0];
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Some(Role::User));
    assert_eq!(
        history[0].parts[0].text.as_deref(),
        Some("Review carefully.\nIMPORTANT: Entire response must be in the language with ISO code: es-ES\n")
    );
    assert_eq!(history[1].role, Some(Role::Model));
    assert_eq!(history[1].parts[0].text.as_deref(), Some("Ready."));
}

#[tokio::test]
async fn each_turn_is_one_call_on_the_same_session() {
    let transport =
        FakeChatTransport::with_replies([Ok(gemini_reply("hi there")), Ok(gemini_reply("fine"))]);
    let mut backend = GeminiChatBackend::new(config(), &transport);

    assert_eq!(backend.send_message("hello").await.unwrap(), "hi there");
    assert_eq!(backend.send_message("how are you").await.unwrap(), "fine");

    assert_eq!(transport.started().len(), 1);
    assert_eq!(transport.sent(), vec!["hello", "how are you"]);
    assert!(backend.transcript().is_none());
}

#[tokio::test]
async fn missing_candidate_yields_empty_text() {
    let transport = FakeChatTransport::with_replies([Ok(GenerateContentResponse::default())]);
    let mut backend = GeminiChatBackend::new(config(), &transport);
    assert_eq!(backend.send_message("hello").await.unwrap(), "");
}

#[tokio::test]
async fn transport_error_propagates() {
    let transport =
        FakeChatTransport::with_replies([Err(AiError::NetworkError("connection reset".into()))]);
    let mut backend = GeminiChatBackend::new(config(), &transport);
    let err = backend.send_message("hello").await.unwrap_err();
    assert!(matches!(err, AiError::NetworkError(_)));
}

#[test]
fn text_extraction_defaults_at_every_level() {
    let cases = [
        json!({}),
        json!({ "candidates": [] }),
        json!({ "candidates": [{}] }),
        json!({ "candidates": [{ "content": {} }] }),
        json!({ "candidates": [{ "content": { "parts": [] } }] }),
        json!({ "candidates": [{ "content": { "parts": [{}] } }] }),
    ];
    for case in cases {
        let response: GenerateContentResponse = serde_json::from_value(case.clone()).unwrap();
        assert_eq!(response.text(), "", "{case}");
    }
}

#[test]
fn text_extraction_reads_first_part_of_first_candidate() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [
            {
                "content": { "role": "model", "parts": [{ "text": "first" }, { "text": "second" }] },
                "finishReason": "STOP"
            },
            { "content": { "role": "model", "parts": [{ "text": "other" }] } }
        ],
        "usageMetadata": { "promptTokenCount": 3 }
    }))
    .unwrap();
    assert_eq!(response.text(), "first");
    assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
}

#[test]
fn vertex_session_request_replays_history() {
    let session = VertexChatSession {
        http: reqwest::Client::new(),
        url: String::new(),
        auth: VertexAuth::new("token"),
        params: GenerationParams {
            temperature: 0.2,
            top_p: 0.9,
            top_k: 32,
            max_output_tokens: 512,
        },
        history: vec![
            Content::text(Role::User, "system"),
            Content::text(Role::Model, "ok"),
        ],
    };

    let body = session.request_body(&Content::text(Role::User, "hello"));
    assert_eq!(
        body,
        json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "system" }] },
                { "role": "model", "parts": [{ "text": "ok" }] },
                { "role": "user", "parts": [{ "text": "hello" }] }
            ],
            "generationConfig": {
                "maxOutputTokens": 512,
                "temperature": 0.2,
                "topP": 0.9,
                "topK": 32
            }
        })
    );
    assert_eq!(session.history().len(), 2);
}
