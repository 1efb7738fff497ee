use std::fmt;
use std::io;

use crate::config::TraceConfig;
use crate::diagnostics::{ErrorRecord, Frame};
use crate::errors::{RenderError, TraceError};
use crate::value::ArgValue;

use super::frame::render_frame;

const FRAME_PREFIX: &str = "\n    at ";
const CAUSED_BY: &str = "\n\nCaused by:\n";
const NO_CODE: &str = "<no code>";

/// Renders an error and its causes as a Java-style stack trace.
#[derive(Debug, Clone, Copy)]
pub struct StackTraceRenderer<'a> {
    config: &'a TraceConfig,
}

impl<'a> StackTraceRenderer<'a> {
    pub fn new(config: &'a TraceConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, record: &ErrorRecord) -> Result<String, TraceError> {
        let mut out = String::new();
        self.render_into(&mut out, record, 0)?;
        Ok(out)
    }

    /// Stream the rendered trace. Nothing is written if rendering fails.
    pub fn write_to<W: io::Write>(
        &self,
        out: &mut W,
        record: &ErrorRecord,
    ) -> Result<(), TraceError> {
        let text = self.render(record)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn render_into(
        &self,
        out: &mut String,
        record: &ErrorRecord,
        depth: usize,
    ) -> Result<(), RenderError> {
        out.push_str(&header(record));
        self.render_frames(out, record)?;

        let Some(cause) = record.cause() else {
            return Ok(());
        };
        match self.config.max_causes() {
            Some(max) if depth >= max => {
                if max > 0 {
                    let remaining = record.causes().count();
                    log::debug!("summarizing {remaining} causes past depth {depth}");
                    out.push_str(&format!("\n\nAnd other {remaining} causes..."));
                }
            }
            _ => {
                out.push_str(CAUSED_BY);
                self.render_into(out, cause, depth + 1)?;
            }
        }
        Ok(())
    }

    fn render_frames(&self, out: &mut String, record: &ErrorRecord) -> Result<(), RenderError> {
        let max_items = self.config.max_items();
        if max_items == Some(0) {
            return Ok(());
        }

        let throw_site = record.throw_site();
        let frames: Vec<&Frame> = throw_site.iter().chain(&record.frames).collect();
        let total = frames.len();

        let cap = match max_items {
            // Never print "1 more..." when the remaining line fits in its place.
            Some(max) if total.checked_sub(max) == Some(1) => total,
            Some(max) => max,
            None => total,
        };

        for (index, frame) in frames.iter().take(cap).enumerate() {
            out.push_str(FRAME_PREFIX);
            out.push_str(&render_frame(frame, self.config, index, &record.type_name)?);
        }

        if let Some(max) = max_items
            && total > cap
        {
            let omitted = total - max;
            log::debug!("omitting {omitted} of {total} frames of {}", record.type_name);
            out.push_str(&format!("\n    {omitted} more..."));
        }
        Ok(())
    }
}

fn header(record: &ErrorRecord) -> String {
    let code = match &record.code {
        Some(ArgValue::Str(s)) => s.clone(),
        Some(code @ (ArgValue::Int(_) | ArgValue::Float(_) | ArgValue::Bool(_))) => {
            code.to_string()
        }
        Some(other) => other.type_name(),
        None => NO_CODE.to_string(),
    };
    match record.message.as_deref() {
        Some(message) if !message.is_empty() => {
            format!("{} ({code}): {message}", record.type_name)
        }
        _ => format!("{} ({code})", record.type_name),
    }
}

/// A fully rendered trace, returned by [`ErrorRecord::display`].
///
/// Rendering happens up front, so formatting it with `{}` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceDisplay {
    text: String,
}

impl TraceDisplay {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for TraceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl ErrorRecord {
    /// Render this record for use with `{}`. Malformed frames are reported here.
    pub fn display(&self, config: &TraceConfig) -> Result<TraceDisplay, TraceError> {
        let text = StackTraceRenderer::new(config).render(self)?;
        Ok(TraceDisplay { text })
    }
}
