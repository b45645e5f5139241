//! Rolling 91-day heatmap generation.
//!
//! The heatmap is a fixed 13-week window ending at "today": 91 cells,
//! oldest (today − 90) first, each classified from the success/slip day
//! sets. Month labels cover the three calendar months the window spans.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Number of cells in the rolling heatmap window (13 weeks).
pub const HEATMAP_DAYS: usize = 91;

/// Number of month labels spanning the heatmap window.
pub const MONTH_LABELS: usize = 3;

/// Classification of one heatmap day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// A success check-in exists for the day.
    Logged,
    /// Only a slip check-in exists for the day.
    Slip,
    /// No check-in exists for the day.
    Missed,
    /// The day lies after "today". Defensive: unreachable for a stable
    /// `today`, since the window ends at offset 0.
    Future,
}

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Classify the 91-day window ending at `today`, oldest cell first.
///
/// Success takes precedence over slip when a day appears in both sets.
pub(crate) fn heatmap_cells(
    success_days: &BTreeSet<NaiveDate>,
    slip_days: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> Result<Vec<CellState>, EngineError> {
    let mut cells = Vec::with_capacity(HEATMAP_DAYS);
    for offset in (0..HEATMAP_DAYS as u64).rev() {
        let day = today
            .checked_sub_days(Days::new(offset))
            .ok_or(EngineError::DayOutOfRange { day: today })?;
        let state = if day > today {
            CellState::Future
        } else if success_days.contains(&day) {
            CellState::Logged
        } else if slip_days.contains(&day) {
            CellState::Slip
        } else {
            CellState::Missed
        };
        cells.push(state);
    }
    Ok(cells)
}

/// Short names of the three calendar months ending at `today`'s month,
/// oldest first. Wraps across year boundaries.
pub(crate) fn month_labels(today: NaiveDate) -> Vec<String> {
    (0..MONTH_LABELS as i32)
        .rev()
        .map(|back| {
            let month0 = (today.month0() as i32 - back).rem_euclid(12);
            SHORT_MONTHS[month0 as usize].to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_sets_all_missed() {
        let cells = heatmap_cells(&BTreeSet::new(), &BTreeSet::new(), day(2024, 3, 15)).unwrap();
        assert_eq!(cells.len(), HEATMAP_DAYS);
        assert!(cells.iter().all(|c| *c == CellState::Missed));
    }

    #[test]
    fn test_last_cell_is_today() {
        let mut success = BTreeSet::new();
        success.insert(day(2024, 3, 15));
        let cells = heatmap_cells(&success, &BTreeSet::new(), day(2024, 3, 15)).unwrap();
        assert_eq!(cells[HEATMAP_DAYS - 1], CellState::Logged);
        assert_eq!(cells[HEATMAP_DAYS - 2], CellState::Missed);
    }

    #[test]
    fn test_first_cell_is_ninety_days_back() {
        let mut slip = BTreeSet::new();
        slip.insert(day(2024, 3, 15) - Days::new(90));
        let cells = heatmap_cells(&BTreeSet::new(), &slip, day(2024, 3, 15)).unwrap();
        assert_eq!(cells[0], CellState::Slip);
        // One day older falls outside the window.
        let mut slip = BTreeSet::new();
        slip.insert(day(2024, 3, 15) - Days::new(91));
        let cells = heatmap_cells(&BTreeSet::new(), &slip, day(2024, 3, 15)).unwrap();
        assert!(cells.iter().all(|c| *c == CellState::Missed));
    }

    #[test]
    fn test_success_wins_over_slip() {
        let today = day(2024, 3, 15);
        let mut success = BTreeSet::new();
        let mut slip = BTreeSet::new();
        success.insert(today);
        slip.insert(today);
        let cells = heatmap_cells(&success, &slip, today).unwrap();
        assert_eq!(cells[HEATMAP_DAYS - 1], CellState::Logged);
    }

    #[test]
    fn test_month_labels_mid_march() {
        assert_eq!(month_labels(day(2024, 3, 15)), vec!["Jan", "Feb", "Mar"]);
    }

    #[test]
    fn test_month_labels_wrap_year() {
        assert_eq!(month_labels(day(2024, 1, 10)), vec!["Nov", "Dec", "Jan"]);
        assert_eq!(month_labels(day(2024, 2, 1)), vec!["Dec", "Jan", "Feb"]);
    }
}
