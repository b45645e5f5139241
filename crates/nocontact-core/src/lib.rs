//! # nocontact Core Library
//!
//! Core business logic for the nocontact streak tracker: given a user's
//! dated check-in history (each day logged as a no-contact success or a
//! slip), derive streak metrics and a rolling 91-day heatmap.
//!
//! ## Architecture
//!
//! - **Check-in model**: raw string records from the persistence layer,
//!   normalized to calendar-day precision
//! - **Streak engine**: a pure, stateless function over the complete
//!   history plus an injected "today": it never reads the clock and never
//!   updates incrementally, so derived metrics cannot drift from the event
//!   log
//! - **Heatmap**: fixed 13-week window classification plus month labels
//!
//! ## Key Components
//!
//! - [`StreakEngine`]: snapshot computation
//! - [`StreakSnapshot`]: the derived metrics
//! - [`DayNormalizer`]: date-string to calendar-day normalization

pub mod calendar;
pub mod checkin;
pub mod engine;
pub mod error;
pub mod heatmap;

pub use calendar::DayNormalizer;
pub use checkin::{CheckIn, CheckInKind, RawCheckIn};
pub use engine::{StreakEngine, StreakSnapshot, STREAK_WALK_CAP};
pub use error::{DateParseError, EngineError, RecordError};
pub use heatmap::{CellState, HEATMAP_DAYS, MONTH_LABELS};
