pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod render;
pub mod value;

pub use config::{Limit, TraceConfig, TraceConfigBuilder};
pub use diagnostics::{Call, ErrorRecord, Frame};
pub use errors::TraceError;
pub use render::StackTraceRenderer;
pub use value::ArgValue;

/// Convenience function to render an error chain end-to-end.
pub fn render(record: &ErrorRecord, config: &TraceConfig) -> Result<String, TraceError> {
    StackTraceRenderer::new(config).render(record)
}

/// Parse a JSON error record and render it.
pub fn render_json(json: &str, config: &TraceConfig) -> Result<String, TraceError> {
    let record = ErrorRecord::from_json(json)?;
    render(&record, config)
}
