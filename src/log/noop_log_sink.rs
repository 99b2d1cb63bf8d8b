use crate::log::{log_error::SinkError, log_msg::LogMsg, log_sink::LogSink};

#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn append(&self, _msg: &LogMsg) -> Result<(), SinkError> {
        Ok(())
    }
}
