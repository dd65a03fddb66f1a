//! Application configuration: TOML schema, loading, and the default
//! template written on first run.

mod loader;
mod schema;
mod template;

pub use loader::load_config;
pub use schema::{ViewDecl, VitrineConfig};
