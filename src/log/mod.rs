pub mod clock;
pub mod level_filter;
pub mod log_config;
pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub mod stream_sink;
pub mod terminate;
pub mod tracing_sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use level_filter::LevelFilter;
pub use log_config::LogConfig;
pub use log_error::{LogError, SinkError};
pub use log_level::LogLevel;
pub use log_msg::LogMsg;
pub use log_sink::LogSink;
pub use logger::Logger;
pub use noop_log_sink::NoopLogSink;
pub use stream_sink::StreamSink;
pub use terminate::{ProcessExit, Terminate};
pub use tracing_sink::TracingSink;
