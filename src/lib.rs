//! RustyLog is a leveled, multi-destination logging dispatcher.
//!
//! A [`Logger`](log::Logger) owns an ordered list of sinks, each filtered by a
//! minimum [`LogLevel`](log::LogLevel). Every message is delivered to the sinks
//! that accept its level, in registration order. A failing sink never fails the
//! caller; its error is logged once more at `Error` level instead.
//!
//! ```rust
//! use std::sync::Arc;
//! use rustylog::log::{LogLevel, Logger, StreamSink};
//! use rustylog::logger_info;
//!
//! let mut logger = Logger::new();
//! logger.add_sink(LogLevel::Info, Arc::new(StreamSink::stderr()));
//! logger_info!(logger, "started with {} workers", 4);
//! ```

/// Logging levels, messages, sinks and the fan-out logger.
pub mod log;
