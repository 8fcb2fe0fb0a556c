//! TOML config file loading.

mod loader;
mod template;


pub use loader::{load_default, load_from_path};
