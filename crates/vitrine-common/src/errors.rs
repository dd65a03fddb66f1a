use std::path::PathBuf;

use crate::types::ViewId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine initialization failed: {0}")]
    Initialize(String),

    #[error("view creation failed: {0}")]
    CreateView(String),

    #[error("no such view: {0}")]
    ViewNotFound(ViewId),

    #[error("engine already shut down")]
    ShutDown,
}

#[derive(Debug, thiserror::Error)]
pub enum VitrineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}
