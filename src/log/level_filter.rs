use std::sync::Arc;

use crate::log::{log_error::SinkError, log_level::LogLevel, log_msg::LogMsg, log_sink::LogSink};

/// Sink wrapper that only forwards messages at or above `level`.
///
/// Messages below the threshold are dropped and reported as delivered.
#[derive(Clone)]
pub struct LevelFilter {
    sink: Arc<dyn LogSink>,
    level: LogLevel,
}

impl LevelFilter {
    pub fn new(level: LogLevel, sink: Arc<dyn LogSink>) -> Self {
        Self { sink, level }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl LogSink for LevelFilter {
    fn append(&self, msg: &LogMsg) -> Result<(), SinkError> {
        if msg.level >= self.level {
            return self.sink.append(msg);
        }
        Ok(())
    }
}
