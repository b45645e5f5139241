//! The `log` command: record today's check-in.
//!
//! Appends exactly one record to the store, then reloads and recomputes
//! the full snapshot. There is no incremental mutation path.

use std::path::PathBuf;

use clap::Subcommand;
use nocontact_core::{CheckInKind, RawCheckIn};

use crate::commands::engine_and_today;
use crate::config::Config;
use crate::store::CheckInStore;

#[derive(Subcommand)]
pub enum LogAction {
    /// Record today as a no-contact success
    Success,
    /// Record today as a slip
    Slip,
}

pub fn run(action: LogAction, file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let path = match file {
        Some(path) => path,
        None => config.data_file()?,
    };
    let (engine, today) = engine_and_today(&config)?;

    let kind = match action {
        LogAction::Success => CheckInKind::Success,
        LogAction::Slip => CheckInKind::Slip,
    };

    let mut store = CheckInStore::open(&path)?;
    store.append(RawCheckIn::new(
        today.format("%Y-%m-%d").to_string(),
        kind,
    ));
    store.save()?;

    // Full reload-and-recompute after the write.
    let store = CheckInStore::open(&path)?;
    let snapshot = engine.compute_snapshot(store.records(), today)?;

    println!(
        "Logged {} as {}. Current streak: {} day(s), total success days: {}.",
        today,
        kind.as_str(),
        snapshot.current_streak,
        snapshot.total_success_days
    );
    Ok(())
}
