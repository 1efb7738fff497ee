use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ConfigError {
    #[error("argsMaxLength must be at least {min}, got {value}")]
    #[diagnostic(help("use a value of {min} or more, or leave the argument length unlimited"))]
    ArgsMaxLengthTooSmall { value: usize, min: usize },

    #[error("unknown limit '{value}' for {option}")]
    #[diagnostic(help("expected a non-negative integer or \"unlimited\""))]
    UnknownLimit { option: &'static str, value: String },
}
