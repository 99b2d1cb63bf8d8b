use std::sync::Arc;

use crate::log::{
    log_error::LogError, log_level::LogLevel, logger::Logger, stream_sink::StreamSink,
};

/// Environment variable holding the stderr threshold (`trace`, `info` or `error`).
pub const LEVEL_ENV: &str = "RUSTYLOG_LEVEL";

/// Startup settings for the default process logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Minimum level written to standard error.
    pub stderr_level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            stderr_level: LogLevel::Info,
        }
    }
}

impl LogConfig {
    /// Reads [`LEVEL_ENV`]; unset or empty keeps the default.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::UnknownLevel`] if the variable names no level.
    pub fn from_env() -> Result<Self, LogError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::UnknownLevel`] if the value names no level.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(LEVEL_ENV).filter(|s| !s.trim().is_empty()) {
            cfg.stderr_level = raw.parse()?;
        }
        Ok(cfg)
    }

    /// Builds a logger writing to stderr at the configured level.
    #[must_use]
    pub fn build_logger(&self) -> Logger {
        let mut logger = Logger::new();
        logger.add_sink(self.stderr_level, Arc::new(StreamSink::stderr()));
        logger
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn lookup(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key| (key == LEVEL_ENV).then(|| value.to_owned())
    }

    #[test]
    fn defaults_to_info_when_unset() {
        let cfg = LogConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.stderr_level, LogLevel::Info);
    }

    #[test]
    fn blank_value_keeps_default() {
        let cfg = LogConfig::from_lookup(lookup("  ")).unwrap();
        assert_eq!(cfg, LogConfig::default());
    }

    #[test]
    fn reads_level_case_insensitively() {
        assert_eq!(
            LogConfig::from_lookup(lookup("TRACE")).unwrap().stderr_level,
            LogLevel::Trace
        );
        assert_eq!(
            LogConfig::from_lookup(lookup("error")).unwrap().stderr_level,
            LogLevel::Error
        );
    }

    #[test]
    fn rejects_unknown_level() {
        let err = LogConfig::from_lookup(lookup("verbose")).unwrap_err();
        assert_eq!(err, LogError::UnknownLevel("verbose".into()));
    }

    #[test]
    fn build_logger_registers_stderr_sink() {
        let logger = LogConfig::default().build_logger();
        assert_eq!(logger.sink_count(), 1);
    }
}
