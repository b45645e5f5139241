pub mod log;
pub mod stats;

use chrono::{NaiveDate, Utc};
use nocontact_core::{DayNormalizer, StreakEngine};

use crate::config::Config;

/// Build the engine from config and read "today" in the configured offset.
///
/// The clock is read here, at the caller boundary, and injected into the
/// engine as a plain value.
pub(crate) fn engine_and_today(
    config: &Config,
) -> Result<(StreakEngine, NaiveDate), Box<dyn std::error::Error>> {
    let normalizer = DayNormalizer::with_offset_hours(config.timezone_offset_hours)
        .ok_or("timezone_offset_hours out of range (expected -23..=23)")?;
    let today = Utc::now().with_timezone(&normalizer.offset()).date_naive();
    Ok((StreakEngine::with_normalizer(normalizer), today))
}
