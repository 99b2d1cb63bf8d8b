//! Error types for log destinations and logger configuration.

use std::io;

use thiserror::Error;

/// Failure reported by a [`LogSink`](crate::log::log_sink::LogSink).
///
/// The `Display` text is what a `Logger` uses as the message of the
/// escalated error event, so it should read as a complete description.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A previous writer panicked while holding the sink's lock.
    #[error("log sink lock poisoned")]
    Poisoned,

    /// The sink refused the message; the string is shown as-is.
    #[error("{0}")]
    Rejected(String),
}

impl SinkError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),
}
