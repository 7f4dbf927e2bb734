//! Error types for surface configuration and the interactive host.

use thiserror::Error;

/// Result alias for surface configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected surface configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid has no interior samples
    #[error("grid must be at least 2x2 samples, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    /// NaN or infinite parameter
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    /// Parameter outside its documented range
    #[error("parameter `{name}` = {value} is outside {range}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        range: &'static str,
    },
}

/// Top-level application error (viewer and headless runner)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid surface configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("renderer setup failed: {0}")]
    Render(String),

    #[error("failed to write snapshot {path}: {source}")]
    Snapshot {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
