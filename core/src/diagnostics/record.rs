use serde::{Deserialize, Serialize};

use super::stack_trace::Frame;
use crate::value::ArgValue;

/// A captured error and its chain of causes, as handed over by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<ErrorRecord>>,
}

impl ErrorRecord {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            code: None,
            message: None,
            file: None,
            line: None,
            frames: Vec::new(),
            cause: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_code(mut self, code: impl Into<ArgValue>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn thrown_at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn with_cause(mut self, cause: ErrorRecord) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The location the error was raised at, rendered before the call frames.
    /// Records captured without a file have no throw site.
    pub fn throw_site(&self) -> Option<Frame> {
        self.file
            .as_ref()
            .map(|file| Frame::at_file(file.clone(), self.line))
    }

    pub fn cause(&self) -> Option<&ErrorRecord> {
        self.cause.as_deref()
    }

    /// Walk the cause chain, not including `self`.
    pub fn causes(&self) -> Causes<'_> {
        Causes { next: self.cause() }
    }
}

pub struct Causes<'a> {
    next: Option<&'a ErrorRecord>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a ErrorRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
