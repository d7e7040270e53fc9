//! Submission sink: where validated form values end up

mod log_sink;
mod traits;

pub use log_sink::LogSink;
pub use traits::{SubmissionRecord, SubmissionSink};

#[cfg(test)]
pub use traits::MockSubmissionSink;
