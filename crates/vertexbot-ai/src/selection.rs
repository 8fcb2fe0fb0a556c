//! Construction-time choice between the two backend families.

use std::sync::LazyLock;

use regex::Regex;

static GEMINI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^gemini").unwrap());

/// Which backend a model id is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Session-based `generateContent` chat (Gemini).
    Chat,
    /// Stateless `predict` with the transcript in every payload (PaLM).
    Predict,
}

impl BackendKind {
    pub fn for_model(model: &str) -> Self {
        if GEMINI_RE.is_match(model.trim()) {
            Self::Chat
        } else {
            Self::Predict
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Predict => "predict",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_models_use_chat() {
        assert_eq!(BackendKind::for_model("gemini-pro"), BackendKind::Chat);
        assert_eq!(BackendKind::for_model("gemini-1.0-pro-001"), BackendKind::Chat);
        assert_eq!(BackendKind::for_model("Gemini-Pro"), BackendKind::Chat);
    }

    #[test]
    fn other_models_use_predict() {
        assert_eq!(BackendKind::for_model("text-bison"), BackendKind::Predict);
        assert_eq!(BackendKind::for_model("chat-bison@002"), BackendKind::Predict);
        assert_eq!(BackendKind::for_model("my-gemini-clone"), BackendKind::Predict);
        assert_eq!(BackendKind::for_model(""), BackendKind::Predict);
    }
}
