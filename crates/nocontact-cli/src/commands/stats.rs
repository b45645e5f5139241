//! The `stats` command: render snapshots, the heatmap grid, and milestones.

use std::path::PathBuf;

use clap::Subcommand;
use nocontact_core::{CellState, StreakSnapshot, HEATMAP_DAYS};

use crate::commands::engine_and_today;
use crate::config::Config;
use crate::milestones::{milestones, next_day_milestone, MilestoneKind};
use crate::store::CheckInStore;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Full snapshot as JSON
    Show,
    /// 13-week heatmap grid
    Heatmap,
    /// Milestone badges
    Milestones,
}

pub fn run(action: StatsAction, file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let path = match file {
        Some(path) => path,
        None => config.data_file()?,
    };
    let (engine, today) = engine_and_today(&config)?;

    let store = CheckInStore::open(&path)?;
    let snapshot = engine.compute_snapshot(store.records(), today)?;

    match action {
        StatsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        StatsAction::Heatmap => {
            print!("{}", render_heatmap(&snapshot));
        }
        StatsAction::Milestones => {
            print!("{}", render_milestones(&snapshot));
        }
    }
    Ok(())
}

fn cell_char(state: CellState) -> char {
    match state {
        CellState::Logged => '█',
        CellState::Slip => '░',
        CellState::Missed => '·',
        CellState::Future => ' ',
    }
}

/// Render the 91 cells as a 7-row by 13-week grid, oldest week first.
fn render_heatmap(snapshot: &StreakSnapshot) -> String {
    let mut output = String::new();

    output.push_str("No-Contact Heatmap (last 13 weeks)\n");
    output.push_str(&format!("Months: {}\n\n", snapshot.month_labels.join(" ")));

    for row in 0..7 {
        for week in 0..HEATMAP_DAYS / 7 {
            let idx = week * 7 + row;
            output.push(cell_char(snapshot.heatmap[idx]));
            output.push(' ');
        }
        output.push('\n');
    }

    output.push('\n');
    output.push_str("Legend: █ logged  ░ slip  · missed\n");
    output.push_str(&format!(
        "Current streak: {} | Longest: {} | Total: {}\n",
        snapshot.current_streak, snapshot.longest_streak, snapshot.total_success_days
    ));
    if snapshot.streak_cap_hit {
        output.push_str("Note: streak display capped at 365 days.\n");
    }
    output
}

fn render_milestones(snapshot: &StreakSnapshot) -> String {
    let mut output = String::new();

    output.push_str("Milestones\n");
    for milestone in milestones(snapshot) {
        let mark = if milestone.unlocked { "[x]" } else { "[ ]" };
        let label = match milestone.kind {
            MilestoneKind::TotalDays => format!("{} total no-contact days", milestone.threshold),
            MilestoneKind::StreakLength => format!("{}-day streak", milestone.threshold),
        };
        output.push_str(&format!("{mark} {label}\n"));
    }
    if let Some(next) = next_day_milestone(snapshot) {
        output.push_str(&format!(
            "Next badge at {} days ({} to go)\n",
            next,
            next - snapshot.total_success_days
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nocontact_core::{CheckInKind, RawCheckIn, StreakEngine};

    fn snapshot() -> StreakSnapshot {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let records = vec![
            RawCheckIn::new("2024-03-15", CheckInKind::Success),
            RawCheckIn::new("2024-03-14", CheckInKind::Success),
            RawCheckIn::new("2024-03-13", CheckInKind::Slip),
        ];
        StreakEngine::new().compute_snapshot(&records, today).unwrap()
    }

    #[test]
    fn test_render_heatmap_shape() {
        let output = render_heatmap(&snapshot());
        assert!(output.contains("Months: Jan Feb Mar"));
        assert!(output.contains("Current streak: 2"));
        // 7 grid rows of 13 cells each.
        let grid_rows: Vec<_> = output
            .lines()
            .filter(|l| l.chars().next().is_some_and(|c| "█░· ".contains(c)))
            .collect();
        assert_eq!(grid_rows.len(), 7);
    }

    #[test]
    fn test_render_milestones_lists_next() {
        let output = render_milestones(&snapshot());
        assert!(output.contains("[x] 1 total no-contact days"));
        assert!(output.contains("[ ] 7 total no-contact days"));
        assert!(output.contains("Next badge at 3 days (1 to go)"));
    }
}
