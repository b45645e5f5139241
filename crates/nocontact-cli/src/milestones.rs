//! Milestone badge thresholds.
//!
//! Milestones are presentation-owned: static threshold lists compared
//! against the engine's snapshot. The engine itself knows nothing about
//! them.

use nocontact_core::StreakSnapshot;
use serde::{Deserialize, Serialize};

/// Total-success-day thresholds, in unlock order.
pub const DAY_MILESTONES: &[u32] = &[1, 3, 7, 14, 30, 60, 100, 180, 365];

/// Current-streak-length thresholds, in unlock order.
pub const STREAK_MILESTONES: &[u32] = &[7, 14, 21, 28];

/// Which snapshot metric a milestone compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    TotalDays,
    StreakLength,
}

/// One badge and its unlock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub threshold: u32,
    pub unlocked: bool,
}

/// Evaluate every milestone against a snapshot.
pub fn milestones(snapshot: &StreakSnapshot) -> Vec<Milestone> {
    let days = DAY_MILESTONES.iter().map(|&threshold| Milestone {
        kind: MilestoneKind::TotalDays,
        threshold,
        unlocked: snapshot.total_success_days >= threshold,
    });
    let streaks = STREAK_MILESTONES.iter().map(|&threshold| Milestone {
        kind: MilestoneKind::StreakLength,
        threshold,
        unlocked: snapshot.current_streak >= threshold,
    });
    days.chain(streaks).collect()
}

/// The next locked total-days milestone, if any remain.
pub fn next_day_milestone(snapshot: &StreakSnapshot) -> Option<u32> {
    DAY_MILESTONES
        .iter()
        .copied()
        .find(|&threshold| snapshot.total_success_days < threshold)
}
