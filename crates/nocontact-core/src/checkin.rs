//! Check-in records.
//!
//! A check-in is one user action per calendar day: either the user stayed
//! no-contact ("success") or broke it ("slip"). Records arrive from the
//! persistence layer as loosely-typed strings ([`RawCheckIn`]) and are
//! normalized into [`CheckIn`] values before any computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::DayNormalizer;
use crate::error::RecordError;

/// Outcome of one logged day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInKind {
    /// Stayed no-contact that day.
    Success,
    /// Broke no-contact that day.
    Slip,
}

impl CheckInKind {
    /// Parse the persistence layer's kind string.
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        match raw {
            "success" => Ok(CheckInKind::Success),
            "slip" => Ok(CheckInKind::Slip),
            other => Err(RecordError::UnknownKind(other.to_string())),
        }
    }

    /// The persistence layer's string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckInKind::Success => "success",
            CheckInKind::Slip => "slip",
        }
    }
}

/// A check-in record as stored: date and kind as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCheckIn {
    /// `YYYY-MM-DD` or a full ISO-8601 timestamp.
    pub date: String,
    /// `"success"` or `"slip"`.
    pub kind: String,
}

impl RawCheckIn {
    pub fn new(date: impl Into<String>, kind: CheckInKind) -> Self {
        Self {
            date: date.into(),
            kind: kind.as_str().to_string(),
        }
    }
}

/// A normalized check-in: one calendar day, one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub day: NaiveDate,
    pub kind: CheckInKind,
}

impl CheckIn {
    /// Normalize a raw record.
    ///
    /// Fails on an unparseable date or an unknown kind; callers skip such
    /// records rather than aborting the batch.
    pub fn from_record(raw: &RawCheckIn, normalizer: &DayNormalizer) -> Result<Self, RecordError> {
        let day = normalizer.normalize(&raw.date)?;
        let kind = CheckInKind::parse(&raw.kind)?;
        Ok(CheckIn { day, kind })
    }
}
