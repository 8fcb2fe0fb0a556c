//! Bearer-token credentials for Vertex AI.

use std::fmt;

use crate::AiError;

const TOKEN_VARS: [&str; 2] = ["VERTEXBOT_ACCESS_TOKEN", "GOOGLE_OAUTH_ACCESS_TOKEN"];

/// OAuth access token sent as `Authorization: Bearer`.
#[derive(Clone)]
pub struct VertexAuth {
    token: String,
}

impl fmt::Debug for VertexAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexAuth")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl VertexAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Read the token from the environment.
    ///
    /// Resolution order:
    /// 1. `VERTEXBOT_ACCESS_TOKEN`
    /// 2. `GOOGLE_OAUTH_ACCESS_TOKEN` (e.g. from `gcloud auth print-access-token`)
    pub fn from_env() -> Result<Self, AiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AiError> {
        TOKEN_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|token| token.trim().to_string())
            .find(|token| !token.is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                AiError::Auth(
                    "Vertex AI not configured. Set VERTEXBOT_ACCESS_TOKEN or \
                     GOOGLE_OAUTH_ACCESS_TOKEN."
                        .into(),
                )
            })
    }

    pub(crate) fn bearer(&self) -> &str {
        &self.token
    }
}
