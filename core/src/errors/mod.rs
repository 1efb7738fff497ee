mod config_error;
mod render_error;

pub use config_error::ConfigError;
pub use render_error::RenderError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all jtrace errors.
#[derive(Debug, Error, Diagnostic)]
pub enum TraceError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
