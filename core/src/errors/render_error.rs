use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum RenderError {
    #[error("frame #{index} of {type_name} has neither a file nor a declaring type")]
    #[diagnostic(help("the capturing host produced a malformed frame"))]
    FrameWithoutLocation { index: usize, type_name: String },
}
