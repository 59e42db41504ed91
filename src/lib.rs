//! fitroutine - Calisthenics workout planner
//!
//! Weekly push/pull plans from a static exercise catalog, level-scaled reps,
//! streaks and level progression, persisted in SQLite.

pub mod clock;
pub mod db;
pub mod exercises;
pub mod planner;
pub mod workout;

pub use db::Database;
pub use planner::{Planner, PlannerError};
