use crate::log::{log_error::SinkError, log_msg::LogMsg};

/// Destination for log messages.
///
/// Implementations must be safe to call from several threads at once; a
/// `Logger` adds no locking of its own around its sinks.
pub trait LogSink: Send + Sync {
    fn append(&self, msg: &LogMsg) -> Result<(), SinkError>;
}
