use crate::config::TraceConfig;
use crate::diagnostics::Frame;
use crate::errors::RenderError;

use super::args::format_args;

/// Render one frame as a single line, without the leading `at`.
///
/// `index` and `type_name` only identify the frame in the error returned for a
/// frame that has neither a file nor a declaring type.
pub fn render_frame(
    frame: &Frame,
    config: &TraceConfig,
    index: usize,
    type_name: &str,
) -> Result<String, RenderError> {
    let mut out = match (&frame.file, &frame.declaring_type) {
        (Some(file), _) => file.clone(),
        (None, Some(declaring_type)) => format!("\\{declaring_type}"),
        (None, None) => {
            return Err(RenderError::FrameWithoutLocation {
                index,
                type_name: type_name.to_string(),
            });
        }
    };

    if let Some(line) = frame.line {
        out.push_str(&format!(":{line}"));
    }

    if let Some(call) = &frame.call {
        out.push_str(&call.operator);
        out.push_str(&call.function);
        out.push('(');
        if config.include_args()
            && let Some(args) = &call.args
        {
            let rendered: Vec<String> = args
                .iter()
                .map(|arg| arg.render(config.include_complex_args()))
                .collect();
            out.push_str(&format_args(&rendered, config));
        }
        out.push(')');
    }

    Ok(out)
}
