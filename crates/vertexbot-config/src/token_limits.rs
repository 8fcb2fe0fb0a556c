//! Per-model token budgets.

use serde::{Deserialize, Serialize};

/// Tokens held back from the request budget.
const REQUEST_MARGIN: u32 = 100;

/// Context and response token budgets for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLimits {
    /// Total context window.
    pub max_tokens: u32,
    /// Tokens reserved for the model's reply.
    pub response_tokens: u32,
    /// Tokens left for the request after the reply and a safety margin.
    pub request_tokens: u32,
}

impl TokenLimits {
    fn new(max_tokens: u32, response_tokens: u32) -> Self {
        Self {
            max_tokens,
            response_tokens,
            request_tokens: max_tokens.saturating_sub(response_tokens + REQUEST_MARGIN),
        }
    }

    /// Look up the budgets for a model id, ignoring case and surrounding
    /// whitespace. Unknown models get the PaLM text defaults.
    pub fn for_model(model: &str) -> Self {
        match model.trim().to_ascii_lowercase().as_str() {
            m if m.starts_with("gemini") => Self::new(32_760, 8_192),
            m if m.ends_with("-32k") => Self::new(32_768, 8_192),
            m if m.starts_with("code-bison") || m.starts_with("codechat-bison") => {
                Self::new(6_144, 1_024)
            }
            _ => Self::new(8_192, 1_024),
        }
    }
}
