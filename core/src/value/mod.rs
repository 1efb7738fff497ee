mod display;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A captured call argument, inspected read-only while rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ArgValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    DateTime(DateTime<FixedOffset>),
    /// Ordered key/value pairs. Lists use their indices as keys.
    Seq(Vec<(ArgValue, ArgValue)>),
    #[serde(rename_all = "camelCase")]
    Object {
        type_name: String,
        /// The object's own text conversion, if it defines one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    Resource { kind: String },
}

impl ArgValue {
    /// Build a list-shaped sequence keyed by position.
    pub fn seq(items: impl IntoIterator<Item = ArgValue>) -> Self {
        ArgValue::Seq(
            items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| (ArgValue::Int(idx as i64), item))
                .collect(),
        )
    }

    pub fn object(type_name: impl Into<String>) -> Self {
        ArgValue::Object {
            type_name: type_name.into(),
            text: None,
        }
    }

    /// Values that are always rendered in full, even when complex arguments are hidden.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ArgValue::Null
                | ArgValue::Bool(_)
                | ArgValue::Int(_)
                | ArgValue::Float(_)
                | ArgValue::Str(_)
        )
    }

    pub fn type_name(&self) -> String {
        match self {
            ArgValue::Null => "null".to_string(),
            ArgValue::Bool(_) => "bool".to_string(),
            ArgValue::Int(_) => "int".to_string(),
            ArgValue::Float(_) => "float".to_string(),
            ArgValue::Str(_) => "string".to_string(),
            ArgValue::DateTime(_) => "DateTime".to_string(),
            ArgValue::Seq(_) => "array".to_string(),
            ArgValue::Object { type_name, .. } => type_name.clone(),
            ArgValue::Resource { kind } => format!("resource ({kind})"),
        }
    }

    /// Full stringification when `complex` is set or the value is scalar, otherwise the type name.
    pub fn render(&self, complex: bool) -> String {
        if complex || self.is_scalar() {
            self.to_string()
        } else {
            self.type_name()
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<DateTime<FixedOffset>> for ArgValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        ArgValue::DateTime(value)
    }
}
