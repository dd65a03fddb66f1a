pub mod errors;
pub mod types;

pub use errors::{ConfigError, EngineError, VitrineError};
pub use types::{Color, FracRect, Rect, ViewId};

pub type Result<T> = std::result::Result<T, VitrineError>;
