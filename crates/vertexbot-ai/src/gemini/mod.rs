//! Gemini chat backend.
//!
//! The backend session owns the conversation history; this side only
//! seeds it with the system preamble and issues one call per turn.

mod backend;
mod transport;
mod types;

#[cfg(test)]
mod tests;

pub use backend::GeminiChatBackend;
pub use transport::{ChatSession, ChatTransport, VertexChatSession, VertexChatTransport};
pub use types::{Candidate, Content, GenerateContentResponse, Part};
