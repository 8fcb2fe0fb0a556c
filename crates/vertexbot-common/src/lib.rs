pub mod errors;
pub mod id;

pub use errors::{BotError, ConfigError};
pub use id::new_correlation_id;

pub type Result<T> = std::result::Result<T, BotError>;
