//! Structured logging with card context.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CardId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Unrecognized log level name.
#[derive(Debug, Error)]
#[error("Unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Card instance for correlation.
    pub card_id: String,
    /// Component name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Product shown by the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
    /// Microseconds since the logger was created. Absent on targets without a clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(elapsed) = self.elapsed_us {
            s.push_str(&format!(" ({}us)", elapsed));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let mut fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// Where formatted entries go.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// Write to stderr.
    #[default]
    Stderr,
    /// Keep entries in memory.
    Memory(Arc<Mutex<Vec<LogEntry>>>),
    /// Forward to `tracing` only.
    Discard,
}

impl LogSink {
    /// Create an in-memory sink and return a handle to its buffer.
    pub fn memory() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        (Self::Memory(buf.clone()), buf)
    }
}

/// Structured logger with card context.
///
/// Every entry is also forwarded as a `tracing` event, so a subscriber
/// installed by the host application sees card activity too.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    card_id: CardId,
    component: Option<String>,
    product_id: Option<String>,
    start_time: Option<Instant>,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger for a card instance.
    pub fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            component: None,
            product_id: None,
            start_time: clock_start(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
        }
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the product ID.
    pub fn with_product(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set output sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, HashMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, HashMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, HashMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: HashMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        forward_to_tracing(level, self.card_id.as_str(), message);

        let entry = LogEntry {
            level,
            message: message.to_string(),
            card_id: self.card_id.to_string(),
            component: self.component.clone(),
            product_id: self.product_id.clone(),
            fields,
            elapsed_us: self.elapsed_us(),
        };

        match &self.sink {
            LogSink::Stderr => {
                let output = match self.format {
                    LogFormat::Json => entry.to_json(),
                    LogFormat::Human => entry.to_human(),
                };
                eprintln!("{}", output);
            }
            LogSink::Memory(buf) => {
                if let Ok(mut entries) = buf.lock() {
                    entries.push(entry);
                }
            }
            LogSink::Discard => {}
        }
    }

    /// Get the card ID.
    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> Option<u64> {
        self.start_time.map(|t| t.elapsed().as_micros() as u64)
    }
}

// `Instant::now` panics on wasm32-unknown-unknown.
#[cfg(not(target_arch = "wasm32"))]
fn clock_start() -> Option<Instant> {
    Some(Instant::now())
}

#[cfg(target_arch = "wasm32")]
fn clock_start() -> Option<Instant> {
    None
}

fn forward_to_tracing(level: LogLevel, card_id: &str, message: &str) {
    match level {
        LogLevel::Trace => tracing::trace!(card_id, "{}", message),
        LogLevel::Debug => tracing::debug!(card_id, "{}", message),
        LogLevel::Info => tracing::info!(card_id, "{}", message),
        LogLevel::Warn => tracing::warn!(card_id, "{}", message),
        LogLevel::Error => tracing::error!(card_id, "{}", message),
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: HashMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in milliseconds).
    pub fn duration_ms(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_millis() as u64));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_logger(level: LogLevel) -> (StructuredLogger, Arc<Mutex<Vec<LogEntry>>>) {
        let (sink, buf) = LogSink::memory();
        let logger = StructuredLogger::new(CardId::from_string("card-test"))
            .with_component("product-card")
            .with_product("P-1")
            .with_min_level(level)
            .with_sink(sink);
        (logger, buf)
    }

    #[test]
    fn test_min_level_filters_entries() {
        let (logger, buf) = memory_logger(LogLevel::Info);
        logger.debug("hidden");
        logger.info("shown");
        logger.warn("also shown");

        let entries = buf.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "shown");
        assert_eq!(entries[1].level, LogLevel::Warn);
    }

    #[test]
    fn test_entry_carries_card_context() {
        let (logger, buf) = memory_logger(LogLevel::Trace);
        logger.info("mounted");

        let entries = buf.lock().unwrap();
        assert_eq!(entries[0].card_id, "card-test");
        assert_eq!(entries[0].component.as_deref(), Some("product-card"));
        assert_eq!(entries[0].product_id.as_deref(), Some("P-1"));
    }

    #[test]
    fn test_builder_fields_serialize_flat() {
        let (logger, buf) = memory_logger(LogLevel::Debug);
        logger
            .info_builder("toggled")
            .field("label", "Added to Cart")
            .field_bool("added", true)
            .field_i64("count", 3)
            .emit();

        let entries = buf.lock().unwrap();
        let json: serde_json::Value = serde_json::from_str(&entries[0].to_json()).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["label"], "Added to Cart");
        assert_eq!(json["added"], true);
        assert_eq!(json["count"], 3);
    }

    #[test]
    fn test_human_format_sorts_fields() {
        let entry = LogEntry {
            level: LogLevel::Warn,
            message: "notice dropped".to_string(),
            card_id: "c".to_string(),
            component: None,
            product_id: None,
            fields: HashMap::from([
                ("b".to_string(), serde_json::json!(2)),
                ("a".to_string(), serde_json::json!(1)),
            ]),
            elapsed_us: None,
        };
        assert_eq!(entry.to_human(), "[WARN] notice dropped | a=1 b=2");
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_format_display_matches_config_keyword() {
        for format in [LogFormat::Json, LogFormat::Human] {
            let keyword = serde_json::to_value(format).unwrap();
            assert_eq!(keyword, format.to_string());
        }
    }
}
