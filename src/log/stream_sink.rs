use std::{
    io::{self, Write},
    sync::Mutex,
};

use crate::log::{log_error::SinkError, log_msg::LogMsg, log_sink::LogSink};

struct StreamState<W> {
    buf: Vec<u8>,
    out: W,
}

/// Writes each message's text as one line to a byte stream.
///
/// Only the text is written: no level and no timestamp. Callers that want
/// those in the output must format them into the message themselves.
///
/// A single buffer is reused across writes; it and the writer sit behind one
/// mutex, so concurrent appends never interleave within a line.
pub struct StreamSink<W: Write + Send> {
    state: Mutex<StreamState<W>>,
}

impl StreamSink<io::Stderr> {
    /// Sink over the process' standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: Mutex::new(StreamState {
                buf: Vec::new(),
                out,
            }),
        }
    }

    /// Writes `text`, adding a trailing `'\n'` if it does not already end in one.
    ///
    /// # Errors
    ///
    /// - [`SinkError::Poisoned`] if another writer panicked mid-write.
    /// - [`SinkError::Io`] if the underlying stream rejects the bytes.
    pub fn write_line(&self, text: &str) -> Result<(), SinkError> {
        let mut guard = self.state.lock().map_err(|_| SinkError::Poisoned)?;
        let StreamState { buf, out } = &mut *guard;

        buf.clear();
        buf.extend_from_slice(text.as_bytes());
        if !text.ends_with('\n') {
            buf.push(b'\n');
        }
        out.write_all(buf.as_slice())?;
        Ok(())
    }

    /// Consumes the sink and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Poisoned`] if a writer panicked while holding the lock.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.state
            .into_inner()
            .map(|state| state.out)
            .map_err(|_| SinkError::Poisoned)
    }
}

impl<W: Write + Send> LogSink for StreamSink<W> {
    fn append(&self, msg: &LogMsg) -> Result<(), SinkError> {
        self.write_line(&msg.text)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::log_level::LogLevel;
    use chrono::Utc;
    use std::{sync::Arc, thread};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(sink: StreamSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn appends_newline_only_when_missing() {
        let sink = StreamSink::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second\n").unwrap();
        sink.write_line("").unwrap();

        assert_eq!(output(sink), "first\nsecond\n\n");
    }

    #[test]
    fn writes_text_without_level_or_time() {
        let sink = StreamSink::new(Vec::new());
        sink.append(&LogMsg::new(LogLevel::Error, "disk almost full", Utc::now()))
            .unwrap();

        assert_eq!(output(sink), "disk almost full\n");
    }

    #[test]
    fn io_failures_surface_as_sink_errors() {
        let sink = StreamSink::new(BrokenPipe);
        match sink.write_line("lost") {
            Err(SinkError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io error, got: {:?}", other),
        }
        // lock is released after the failed write
        assert!(matches!(sink.write_line("again"), Err(SinkError::Io(_))));
    }

    #[test]
    fn concurrent_appends_keep_lines_whole() {
        let sink = Arc::new(StreamSink::new(Vec::new()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for n in 0..50 {
                        sink.write_line(&format!("thread-{i}-line-{n}")).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("writer panicked");
        }

        let sink = Arc::try_unwrap(sink).ok().expect("sink still shared");
        let text = output(sink);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 200);
        assert!(lines.iter().all(|l| l.starts_with("thread-") && l.contains("-line-")));
    }
}
