//! Vertex AI model and sampling configuration types.

use serde::{Deserialize, Serialize};

/// Model selection, project placement and sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexAiConfig {
    /// Model id, e.g. `gemini-pro` or `text-bison`.
    pub model: String,
    /// Google Cloud project id.
    pub project_id: String,
    /// Google Cloud region.
    pub location: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Nucleus sampling mass (valid range: 0.0-1.0).
    pub top_p: f64,
    /// Top-k sampling (valid range: 1-40).
    pub top_k: u32,
    /// Overrides the model's response-token budget when set.
    pub max_output_tokens: Option<u32>,
}

impl Default for VertexAiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".into(),
            project_id: String::new(),
            location: "us-central1".into(),
            temperature: 0.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: None,
        }
    }
}
