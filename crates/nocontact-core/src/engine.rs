//! Streak and milestone-metric computation.
//!
//! The engine converts a full check-in history plus an injected "today"
//! into a [`StreakSnapshot`]: total success days, current streak, longest
//! streak, the 91-cell heatmap, and month labels. It is a pure function:
//! it never reads the clock, performs no I/O, retains no state, and always
//! recomputes from the complete history. Callers must never feed it a
//! partial delta; full recomputation is what keeps the derived metrics
//! consistent with the underlying event log.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::DayNormalizer;
use crate::checkin::{CheckIn, CheckInKind, RawCheckIn};
use crate::error::{EngineError, Result};
use crate::heatmap::{heatmap_cells, month_labels, CellState};

/// Safety cap on the backward current-streak walk.
///
/// Bounds cost on corrupted data; when hit, the snapshot flags
/// `streak_cap_hit` and a warning is emitted rather than silently
/// truncating.
pub const STREAK_WALK_CAP: u32 = 365;

/// Derived streak metrics, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSnapshot {
    /// Distinct calendar days with a success check-in.
    pub total_success_days: u32,
    /// Consecutive success days ending at "today".
    pub current_streak: u32,
    /// Longest consecutive success run across all history.
    pub longest_streak: u32,
    /// 91 cells, oldest (today − 90) first.
    pub heatmap: Vec<CellState>,
    /// Three short month names spanning the heatmap window, oldest first.
    pub month_labels: Vec<String>,
    /// The current-streak walk stopped at [`STREAK_WALK_CAP`]; the real
    /// streak may be longer.
    pub streak_cap_hit: bool,
    /// Records dropped for an unparseable date or unknown kind.
    pub skipped_records: u32,
}

/// Stateless computation engine over check-in histories.
#[derive(Debug, Clone, Copy)]
pub struct StreakEngine {
    normalizer: DayNormalizer,
    streak_cap: u32,
}

impl Default for StreakEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StreakEngine {
    /// Engine with a UTC-anchored normalizer and the default walk cap.
    pub fn new() -> Self {
        Self {
            normalizer: DayNormalizer::utc(),
            streak_cap: STREAK_WALK_CAP,
        }
    }

    /// Engine normalizing timestamps into the given fixed offset.
    pub fn with_normalizer(normalizer: DayNormalizer) -> Self {
        Self {
            normalizer,
            streak_cap: STREAK_WALK_CAP,
        }
    }

    /// Compute a snapshot from the complete raw history and an injected
    /// "today".
    ///
    /// Per-record failures (bad date, unknown kind) are logged, skipped,
    /// and counted in `skipped_records`; one bad record never invalidates
    /// the batch. Empty input yields an all-zero snapshot with every cell
    /// `Missed`. Only calendar-arithmetic overflow is fatal.
    ///
    /// Conflicting records on the same day (both a success and a slip)
    /// resolve success-dominant: the day counts toward totals and streaks,
    /// and renders as `Logged`.
    pub fn compute_snapshot(
        &self,
        records: &[RawCheckIn],
        today: NaiveDate,
    ) -> Result<StreakSnapshot> {
        let mut success_days: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut slip_days: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut skipped_records = 0u32;

        for record in records {
            match CheckIn::from_record(record, &self.normalizer) {
                Ok(checkin) => {
                    match checkin.kind {
                        CheckInKind::Success => success_days.insert(checkin.day),
                        CheckInKind::Slip => slip_days.insert(checkin.day),
                    };
                }
                Err(err) => {
                    warn!(date = %record.date, kind = %record.kind, %err, "skipping check-in record");
                    skipped_records += 1;
                }
            }
        }

        let (current_streak, streak_cap_hit) = self.current_streak(&success_days, today)?;

        Ok(StreakSnapshot {
            total_success_days: success_days.len() as u32,
            current_streak,
            longest_streak: longest_streak(&success_days),
            heatmap: heatmap_cells(&success_days, &slip_days, today)?,
            month_labels: month_labels(today),
            streak_cap_hit,
            skipped_records,
        })
    }

    /// Walk backward from `today` while each day has a success check-in.
    ///
    /// A day that is missing or slip-only breaks the streak. The walk is
    /// capped; the returned flag reports whether the cap was hit.
    fn current_streak(
        &self,
        success_days: &BTreeSet<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(u32, bool)> {
        let mut streak = 0u32;
        let mut cursor = today;
        while success_days.contains(&cursor) {
            streak += 1;
            if streak >= self.streak_cap {
                warn!(cap = self.streak_cap, "current-streak walk hit the safety cap");
                return Ok((streak, true));
            }
            cursor = cursor
                .pred_opt()
                .ok_or(EngineError::DayOutOfRange { day: cursor })?;
        }
        Ok((streak, false))
    }
}

/// Longest run of consecutive days in an ordered success set.
fn longest_streak(success_days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in success_days {
        run = match prev {
            Some(p) if day.signed_duration_since(p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}
