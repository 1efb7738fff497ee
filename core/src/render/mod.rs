pub mod args;
pub mod frame;
pub mod trace;

pub use args::{format_args, truncate};
pub use frame::render_frame;
pub use trace::{StackTraceRenderer, TraceDisplay};
