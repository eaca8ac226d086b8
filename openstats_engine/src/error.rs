use openstats_schema::{Millis, Weekday};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsErrorKind {
    Input,
    Io,
    Calendar,
}

impl StatsErrorKind {
    pub(crate) fn from_code(code: &'static str) -> Self {
        match code {
            // Input
            "E1001" => Self::Input,

            // IO
            "E2001" | "E2002" => Self::Io,

            // Calendar
            "E3001" | "E3002" => Self::Calendar,

            // Default: treat unknown codes as Input.
            _ => Self::Input,
        }
    }
}

#[derive(Debug, Error, Clone)]
#[error("{code}: {message}")]
pub struct StatsError {
    pub code: &'static str,
    pub kind: StatsErrorKind,
    pub message: String,

    // --- Structured fields (optional, message stays source-of-truth) ---
    pub file: Option<String>,
    pub record_index: Option<usize>,
    pub timestamp_ms: Option<Millis>,
    pub expected_weekday: Option<Weekday>,
    pub actual_weekday: Option<Weekday>,
}

impl StatsError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: StatsErrorKind::from_code(code),
            message: message.into(),

            file: None,
            record_index: None,
            timestamp_ms: None,
            expected_weekday: None,
            actual_weekday: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_record_index(mut self, record_index: usize) -> Self {
        self.record_index = Some(record_index);
        self
    }

    pub fn with_timestamp_ms(mut self, timestamp_ms: Millis) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    pub fn with_weekdays(mut self, expected: Weekday, actual: Weekday) -> Self {
        self.expected_weekday = Some(expected);
        self.actual_weekday = Some(actual);
        self
    }
}
