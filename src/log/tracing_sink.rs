//! Sink that hands messages to the `tracing` ecosystem.

use crate::log::{log_error::SinkError, log_level::LogLevel, log_msg::LogMsg, log_sink::LogSink};

/// Forwards each message to the matching `tracing` macro.
///
/// Useful when the process already installs a `tracing` subscriber and the
/// logger should feed into it alongside its other sinks. Never fails.
///
/// ```rust
/// use std::sync::Arc;
/// use rustylog::log::{LogLevel, Logger, TracingSink};
///
/// let mut logger = Logger::new();
/// logger.add_sink(LogLevel::Trace, Arc::new(TracingSink));
/// logger.info(format_args!("forwarded to tracing"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn append(&self, msg: &LogMsg) -> Result<(), SinkError> {
        match msg.level {
            LogLevel::Trace => tracing::trace!(time = %msg.time, "{}", msg.text),
            LogLevel::Info => tracing::info!(time = %msg.time, "{}", msg.text),
            LogLevel::Error => tracing::error!(time = %msg.time, "{}", msg.text),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn accepts_every_level_without_subscriber() {
        for level in [LogLevel::Trace, LogLevel::Info, LogLevel::Error] {
            assert!(TracingSink.append(&LogMsg::new(level, "hello", Utc::now())).is_ok());
        }
    }

    #[test]
    fn tracing_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingSink>();
    }
}
