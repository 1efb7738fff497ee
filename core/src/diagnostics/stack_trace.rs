use serde::{Deserialize, Serialize};

use crate::value::ArgValue;

/// The function invoked at a call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    /// Separator between location and function name, e.g. `->` or `::`.
    pub operator: String,
    pub function: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<ArgValue>>,
}

impl Call {
    pub fn new(operator: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            function: function.into(),
            args: None,
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = ArgValue>) -> Self {
        self.args = Some(args.into_iter().collect());
        self
    }
}

/// One call-site entry of a trace. At least one of `file` and `declaring_type` must be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<Call>,
}

impl Frame {
    pub fn at_file(file: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            file: Some(file.into()),
            line,
            ..Self::default()
        }
    }

    pub fn in_type(declaring_type: impl Into<String>) -> Self {
        Self {
            declaring_type: Some(declaring_type.into()),
            ..Self::default()
        }
    }

    pub fn with_call(mut self, call: Call) -> Self {
        self.call = Some(call);
        self
    }
}
