
use std::fmt;
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, line: &str);
}

/// Stdout belongs to the child, and a successful run must stay silent,
/// so the console only ever sees errors.
#[derive(Default)]
struct StderrSink;
impl LogSink for StderrSink {
    fn log(&self, level: LogLevel, line: &str) {
        if matches!(level, LogLevel::Error) {
            eprintln!("{line}");
        }
    }
}

/// Keeps every message with its level.
#[cfg(test)]
#[derive(Default, Clone)]
pub(crate) struct MemorySink {
    lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

#[cfg(test)]
impl MemorySink {
    pub(crate) fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl LogSink for MemorySink {
    fn log(&self, level: LogLevel, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, line.to_string()));
        }
    }
}

/// Leveled logger for the shim.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            sink: Arc::new(StderrSink),
        }
    }

    #[cfg(test)]
    pub(crate) fn capturing() -> (Self, MemorySink) {
        let sink = MemorySink::default();
        (
            Self {
                sink: Arc::new(sink.clone()),
            },
            sink,
        )
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.sink.log(level, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message.as_ref());
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
