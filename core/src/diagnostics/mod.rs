pub mod record;
pub mod stack_trace;

pub use record::{Causes, ErrorRecord};
pub use stack_trace::{Call, Frame};
