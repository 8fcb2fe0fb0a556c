//! PaLM predict backend.
//!
//! `predict` has no session, so the backend keeps the transcript and
//! resends all of it, with the system preamble as context, on every call.

mod backend;
pub mod proto;
mod transport;
mod types;


pub use backend::PalmPredictBackend;
pub use transport::{PredictTransport, VertexPredictTransport};
pub use types::{PredictInstance, PredictMessage, PredictParameters, PredictRequest, PredictResponse};
