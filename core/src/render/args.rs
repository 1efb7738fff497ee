//! Fair-share truncation of rendered argument lists.
//!
//! The budget of a frame is split evenly across its arguments. Arguments that fit
//! their share are kept as-is and donate the unused part to the ones that do not,
//! so only the longest arguments are ever shortened.

use crate::config::TraceConfig;

pub const SEPARATOR: &str = ", ";
pub const ELLIPSIS: &str = "...";

const ELLIPSIS_LEN: usize = 3;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn shorten(s: &str, keep: usize) -> String {
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Shorten `args` so their combined length stays within `max_length`.
///
/// Returns `None` when the budget is too small to give every long argument
/// room for an ellipsis.
pub fn truncate(args: &[String], max_length: usize) -> Option<Vec<String>> {
    let lens: Vec<usize> = args.iter().map(|arg| char_len(arg)).collect();
    if lens.iter().sum::<usize>() <= max_length {
        return Some(args.to_vec());
    }

    let count = args.len();
    let avg = max_length / count;
    let rest = max_length % count;
    if avg == 0 {
        return None;
    }

    let mut spare = rest;
    let mut long = Vec::new();
    for (idx, &len) in lens.iter().enumerate() {
        if len <= avg {
            spare += avg - len;
        } else {
            long.push(idx);
            spare += avg;
        }
    }

    let mut result = args.to_vec();

    if long.len() < count {
        let long_args: Vec<String> = long.iter().map(|&idx| args[idx].clone()).collect();
        log::trace!(
            "re-truncating {} of {count} arguments within {spare} chars",
            long_args.len()
        );
        if let Some(shortened) = truncate(&long_args, spare) {
            for (idx, value) in long.into_iter().zip(shortened) {
                result[idx] = value;
            }
            return Some(result);
        }
    }

    for (nth, &idx) in long.iter().enumerate() {
        let extra = usize::from(nth < rest);
        let keep = (avg + extra).checked_sub(ELLIPSIS_LEN)?;
        result[idx] = shorten(&args[idx], keep);
    }
    Some(result)
}

/// Join rendered arguments, applying the configured length budget.
pub fn format_args(args: &[String], config: &TraceConfig) -> String {
    let Some(max_length) = config.args_max_length() else {
        return args.join(SEPARATOR);
    };

    let separators = args.len().saturating_sub(1) * SEPARATOR.len();
    let budget = max_length.saturating_sub(separators);
    if budget == 0 {
        return String::new();
    }

    match truncate(args, budget) {
        Some(truncated) => truncated.join(SEPARATOR),
        None => {
            log::debug!(
                "{} arguments do not fit in {budget} chars, eliding the list",
                args.len()
            );
            ELLIPSIS.to_string()
        }
    }
}
