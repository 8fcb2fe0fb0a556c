//! `predict` request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Role, Turn};

use super::proto;

/// One message of the resent transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictMessage {
    pub author: Role,
    pub content: String,
}

impl From<&Turn> for PredictMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            author: turn.role,
            content: turn.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictInstance {
    pub context: String,
    pub messages: Vec<PredictMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Model resource name the request is addressed to.
    pub endpoint: String,
    pub instances: Vec<PredictInstance>,
    pub parameters: PredictParameters,
}

/// Predictions in protobuf `Value` JSON encoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Value>,
}

impl PredictResponse {
    /// `predictions[0].candidates[0].content`, or `""` when any step of that
    /// path is missing.
    pub fn text(&self) -> String {
        self.predictions
            .first()
            .and_then(|prediction| proto::field(prediction, "candidates"))
            .and_then(|candidates| proto::element(candidates, 0))
            .and_then(|candidate| proto::field(candidate, "content"))
            .and_then(proto::string_value)
            .unwrap_or_default()
            .to_string()
    }
}
