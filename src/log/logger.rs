use std::{error::Error, fmt, sync::Arc};

use crate::log::{
    clock::{Clock, SystemClock},
    level_filter::LevelFilter,
    log_error::SinkError,
    log_level::LogLevel,
    log_msg::LogMsg,
    log_sink::LogSink,
    terminate::{ProcessExit, Terminate},
};

/// Fan-out logger that delivers each message to a list of filtered sinks.
///
/// Sinks are registered during setup with [`add_sink`](Self::add_sink) and
/// visited in registration order on every call. The logger is a [`LogSink`]
/// itself, so loggers can be nested.
///
/// # Failure handling
///
/// Logging never fails the caller. When a sink rejects a message whose level
/// is below [`LogLevel::Error`], the logger builds a new `Error` message with
/// the sink's error text and delivers it to all sinks once. That message is
/// already at `Error`, so a second failure is not escalated again.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use rustylog::log::{LogLevel, Logger, NoopLogSink};
///
/// let mut logger = Logger::new();
/// logger.add_sink(LogLevel::Info, Arc::new(NoopLogSink));
/// logger.info(format_args!("listening on {}", "0.0.0.0:5000"));
/// ```
pub struct Logger {
    sinks: Vec<LevelFilter>,
    clock: Arc<dyn Clock>,
    terminator: Arc<dyn Terminate>,
}

impl Logger {
    /// Creates a logger with no sinks, stamping messages with [`SystemClock`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            clock: Arc::new(SystemClock),
            terminator: Arc::new(ProcessExit),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces what [`fatal`](Self::fatal) does after logging. Defaults to [`ProcessExit`].
    #[must_use]
    pub fn with_terminator(mut self, terminator: Arc<dyn Terminate>) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn set_clock(&mut self, clock: Arc<dyn Clock>) {
        self.clock = clock;
    }

    /// Registers `sink` to receive messages at `level` or above.
    pub fn add_sink(&mut self, level: LogLevel, sink: Arc<dyn LogSink>) {
        self.sinks.push(LevelFilter::new(level, sink));
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Formats, timestamps and delivers a message at `level`.
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.log_str(level, args.to_string());
    }

    /// Delivers `text` as-is at `level`.
    pub fn log_str(&self, level: LogLevel, text: impl Into<String>) {
        let msg = LogMsg::new(level, text, self.clock.now());
        let _ = self.append(&msg);
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    /// Logs the error's `Display` text at `Error`.
    pub fn error(&self, err: &dyn Error) {
        self.log_str(LogLevel::Error, err.to_string());
    }

    /// Logs at `Error`, then asks the terminator to end the process with status 1.
    ///
    /// With the default [`ProcessExit`] terminator this call does not return.
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.errorf(args);
        self.terminator.terminate(1);
    }

    /// [`error`](Self::error) followed by termination, as in [`fatal`](Self::fatal).
    pub fn fatal_error(&self, err: &dyn Error) {
        self.error(err);
        self.terminator.terminate(1);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

impl LogSink for Logger {
    fn append(&self, msg: &LogMsg) -> Result<(), SinkError> {
        for sink in &self.sinks {
            if let Err(err) = sink.append(msg) {
                // Escalated messages are at Error, so this recurses at most once.
                if msg.level < LogLevel::Error {
                    self.error(&err);
                }
            }
        }
        Ok(())
    }
}
