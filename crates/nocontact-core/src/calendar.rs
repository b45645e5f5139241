//! Calendar-day normalization.
//!
//! Check-in dates arrive from the persistence layer either as plain
//! `YYYY-MM-DD` strings or as full ISO-8601 timestamps. Everything collapses
//! to a day-granularity [`NaiveDate`] in a fixed UTC offset, so two
//! timestamps on the same wall-clock day normalize to the same value
//! regardless of time of day.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::error::DateParseError;

/// Normalizes raw date strings to calendar days in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayNormalizer {
    offset: FixedOffset,
}

impl DayNormalizer {
    /// Normalizer anchored at UTC.
    pub fn utc() -> Self {
        Self {
            offset: FixedOffset::east_opt(0).unwrap(),
        }
    }

    /// Normalizer anchored at a whole-hour UTC offset.
    ///
    /// Returns `None` for offsets outside `-23..=23` hours.
    pub fn with_offset_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours * 3600).map(|offset| Self { offset })
    }

    /// The fixed offset this normalizer collapses timestamps into.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Normalize a raw date string to a calendar day.
    ///
    /// Tries strict `YYYY-MM-DD` first, then an offset-aware RFC 3339
    /// timestamp (converted into this normalizer's offset before taking the
    /// date), then a naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamp whose date
    /// is taken as written.
    pub fn normalize(&self, raw: &str) -> Result<NaiveDate, DateParseError> {
        if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(day);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(ts.with_timezone(&self.offset).date_naive());
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(naive.date());
        }
        Err(DateParseError::Unrecognized(raw.to_string()))
    }
}

impl Default for DayNormalizer {
    fn default() -> Self {
        Self::utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_date() {
        let n = DayNormalizer::utc();
        assert_eq!(n.normalize("2024-03-01").unwrap(), day(2024, 3, 1));
    }

    #[test]
    fn test_rfc3339_collapses_to_same_day() {
        let n = DayNormalizer::utc();
        assert_eq!(n.normalize("2024-03-01T00:00:01Z").unwrap(), day(2024, 3, 1));
        assert_eq!(n.normalize("2024-03-01T23:59:59Z").unwrap(), day(2024, 3, 1));
        assert_eq!(
            n.normalize("2024-03-01").unwrap(),
            n.normalize("2024-03-01T23:59:59Z").unwrap()
        );
    }

    #[test]
    fn test_offset_shifts_wall_clock_day() {
        // 23:30 UTC is already the next day at UTC+9.
        let tokyo = DayNormalizer::with_offset_hours(9).unwrap();
        assert_eq!(
            tokyo.normalize("2024-03-01T23:30:00Z").unwrap(),
            day(2024, 3, 2)
        );
        let utc = DayNormalizer::utc();
        assert_eq!(
            utc.normalize("2024-03-01T23:30:00Z").unwrap(),
            day(2024, 3, 1)
        );
    }

    #[test]
    fn test_naive_timestamp_taken_as_written() {
        let n = DayNormalizer::with_offset_hours(-5).unwrap();
        assert_eq!(
            n.normalize("2024-03-01T23:59:59").unwrap(),
            day(2024, 3, 1)
        );
        assert_eq!(
            n.normalize("2024-03-01T10:00:00.500").unwrap(),
            day(2024, 3, 1)
        );
    }

    #[test]
    fn test_malformed_input() {
        let n = DayNormalizer::utc();
        assert!(matches!(
            n.normalize("03/01/2024"),
            Err(DateParseError::Unrecognized(_))
        ));
        assert!(n.normalize("").is_err());
        assert!(n.normalize("2024-13-40").is_err());
    }

    #[test]
    fn test_offset_bounds() {
        assert!(DayNormalizer::with_offset_hours(14).is_some());
        assert!(DayNormalizer::with_offset_hours(-12).is_some());
        assert!(DayNormalizer::with_offset_hours(24).is_none());
    }
}
