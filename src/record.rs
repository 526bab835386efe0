//! Captured log records

use chrono::Local;
use serde_json::Value;

/// Kind of a captured record.
///
/// Mirrors the five facade levels one-to-one; `Trace` has no dedicated
/// kind and maps to the plain [`RecordKind::Log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Log,
    Warn,
    Error,
    Info,
    Debug,
}

impl RecordKind {
    /// Uppercase tag used in rendered entries: `[ERROR]`, `[WARN]`, ...
    pub fn tag(&self) -> &'static str {
        match self {
            RecordKind::Log => "LOG",
            RecordKind::Warn => "WARN",
            RecordKind::Error => "ERROR",
            RecordKind::Info => "INFO",
            RecordKind::Debug => "DEBUG",
        }
    }
}

impl From<log::Level> for RecordKind {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => RecordKind::Error,
            log::Level::Warn => RecordKind::Warn,
            log::Level::Info => RecordKind::Info,
            log::Level::Debug => RecordKind::Debug,
            log::Level::Trace => RecordKind::Log,
        }
    }
}

/// One captured logging event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub kind: RecordKind,
    pub message: String,
    /// Local time of day at capture, `HH:MM:SS`.
    pub timestamp: String,
}

impl LogRecord {
    pub fn new(kind: RecordKind, message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Create a record stamped with the current local time of day.
    pub fn now(kind: RecordKind, message: impl Into<String>) -> Self {
        Self::new(kind, message, Local::now().format("%H:%M:%S").to_string())
    }
}

/// Join structured arguments into one message.
///
/// Objects and arrays become indented pretty JSON, strings contribute their
/// raw content, everything else its display form. Parts are joined with
/// single spaces; an empty argument list yields an empty message.
pub fn format_args(args: &[Value]) -> String {
    args.iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
