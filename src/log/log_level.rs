use std::fmt;
use std::str::FromStr;

use crate::log::log_error::LogError;

/// Defines the severity levels for log messages.
///
/// Levels are totally ordered by their numeric value: `Trace < Info < Error`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Designates very fine-grained informational events.
    Trace = 0,
    /// Designates informational messages that highlight the progress of the application.
    Info = 1,
    /// Designates error events that might still allow the application to continue running.
    Error = 2,
}

impl LogLevel {
    /// Label printed for raw values that do not name a level.
    pub const UNKNOWN_LABEL: &'static str = "NONE";

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Short uppercase label, e.g. `"INFO"`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::Trace),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// Renders a raw level value. Values outside the known range render as `"NONE"`.
    pub fn label_for(raw: u8) -> &'static str {
        Self::from_u8(raw).map_or(Self::UNKNOWN_LABEL, Self::as_str)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            _ => Err(LogError::UnknownLevel(s.to_owned())),
        }
    }
}
