use chrono::{DateTime, Utc};

use crate::log::log_level::LogLevel;

/// Represents a single log message event.
///
/// A message is built once per log call and handed to every destination by
/// reference; destinations that want to keep it clone it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMsg {
    /// The severity level of the log (e.g., Info, Error).
    pub level: LogLevel,
    /// When the message was created, as reported by the logger's clock.
    pub time: DateTime<Utc>,
    /// The rendered content of the log message.
    pub text: String,
}

impl LogMsg {
    /// Creates a new `LogMsg` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Utc;
    /// use rustylog::log::{LogLevel, LogMsg};
    ///
    /// let msg = LogMsg::new(LogLevel::Info, "Connection established", Utc::now());
    /// assert_eq!(msg.text, "Connection established");
    /// ```
    pub fn new(level: LogLevel, text: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            level,
            time,
            text: text.into(),
        }
    }
}
