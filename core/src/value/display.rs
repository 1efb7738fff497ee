use super::ArgValue;
use chrono::SecondsFormat;
use std::fmt;

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'{}'", s.replace('\'', "\\'"))
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Null => write!(f, "null"),
            ArgValue::Bool(b) => write!(f, "{b}"),
            ArgValue::Int(n) => write!(f, "{n}"),
            ArgValue::Float(n) => write!(f, "{n}"),
            ArgValue::Str(s) => write_quoted(f, s),
            ArgValue::DateTime(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, false))
            }
            ArgValue::Seq(pairs) => {
                let items: Vec<String> = pairs
                    .iter()
                    .map(|(key, value)| format!("{key} => {value}"))
                    .collect();
                write!(f, "[{}]", items.join(", "))
            }
            ArgValue::Object {
                text: Some(text), ..
            } => write_quoted(f, text),
            ArgValue::Object { type_name, .. } => write!(f, "{type_name}"),
            ArgValue::Resource { .. } => write!(f, "{}", self.type_name()),
        }
    }
}
