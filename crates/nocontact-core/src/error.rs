//! Core error types for nocontact-core.
//!
//! Two layers: per-record errors (`DateParseError`, `RecordError`) are
//! recoverable and absorbed inside the engine (the record is skipped and
//! counted), while `EngineError` is fatal to the whole computation and
//! propagates to the caller.

use chrono::NaiveDate;
use thiserror::Error;

/// A raw date string could not be interpreted in any accepted format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Neither `YYYY-MM-DD` nor an ISO-8601 timestamp.
    #[error("unrecognized date format '{0}' (expected YYYY-MM-DD or ISO-8601 timestamp)")]
    Unrecognized(String),
}

/// A single check-in record could not be normalized.
///
/// These never abort a batch; the engine logs, skips the record, and keeps
/// going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record's date string failed to parse.
    #[error(transparent)]
    Date(#[from] DateParseError),

    /// The record's kind string was neither "success" nor "slip".
    #[error("unknown check-in kind '{0}' (expected 'success' or 'slip')")]
    UnknownKind(String),
}

/// Fatal computation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Calendar arithmetic walked off the representable date range.
    /// Indicates an environment problem, not a data problem.
    #[error("calendar arithmetic out of range near {day}")]
    DayOutOfRange { day: NaiveDate },
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
