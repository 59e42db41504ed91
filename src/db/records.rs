//! Typed access to the persisted records.
//!
//! Reads never fail: a missing, unreadable or malformed record comes back as
//! its default. Writes log on failure and report `false`.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use super::Store;
use crate::workout::{
    HistoryEntry, MIN_LEVEL, ProgressionData, Settings, StreakData, WeeklyPlan, Workout, clamp_level,
};

pub const USER_LEVEL: &str = "user_level";
pub const WORKOUT_HISTORY: &str = "workout_history";
pub const CURRENT_WORKOUT: &str = "current_workout";
pub const WEEKLY_PLAN: &str = "weekly_plan";
pub const PLAN_GENERATION_DATE: &str = "plan_generation_date";
pub const SETTINGS: &str = "settings";
pub const STREAK_DATA: &str = "streak_data";
pub const PROGRESSION_DATA: &str = "progression_data";

pub const ALL_KEYS: [&str; 8] = [
    USER_LEVEL,
    WORKOUT_HISTORY,
    CURRENT_WORKOUT,
    WEEKLY_PLAN,
    PLAN_GENERATION_DATE,
    SETTINGS,
    STREAK_DATA,
    PROGRESSION_DATA,
];

pub struct Records<S: Store> {
    store: S,
}

impl<S: Store> Records<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "record read failed, using default");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "malformed record, using default");
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.store.set(key, &json));

        match result {
            Ok(()) => true,
            Err(e) => {
                error!(key, error = %e, "record write failed");
                false
            }
        }
    }

    pub fn user_level(&self) -> u8 {
        self.read::<i32>(USER_LEVEL).map(clamp_level).unwrap_or(MIN_LEVEL)
    }

    pub fn set_user_level(&self, level: u8) -> bool {
        self.write(USER_LEVEL, &level)
    }

    pub fn settings(&self) -> Settings {
        self.read(SETTINGS).unwrap_or_default()
    }

    pub fn save_settings(&self, settings: &Settings) -> bool {
        self.write(SETTINGS, settings)
    }

    pub fn streak(&self) -> StreakData {
        self.read(STREAK_DATA).unwrap_or_default()
    }

    pub fn save_streak(&self, streak: &StreakData) -> bool {
        self.write(STREAK_DATA, streak)
    }

    pub fn progression(&self) -> ProgressionData {
        self.read(PROGRESSION_DATA).unwrap_or_default()
    }

    pub fn save_progression(&self, progression: &ProgressionData) -> bool {
        self.write(PROGRESSION_DATA, progression)
    }

    /// New level and reset progression counter, written as one unit
    pub fn save_level_up(&self, level: u8, progression: &ProgressionData) -> bool {
        match self.try_save_level_up(level, progression) {
            Ok(()) => true,
            Err(e) => {
                error!(level, error = %e, "level up write failed");
                false
            }
        }
    }

    fn try_save_level_up(&self, level: u8, progression: &ProgressionData) -> anyhow::Result<()> {
        let level_json = serde_json::to_string(&level)?;
        let progression_json = serde_json::to_string(progression)?;
        self.store
            .set_many(&[(USER_LEVEL, level_json), (PROGRESSION_DATA, progression_json)])
    }

    pub fn current_workout(&self) -> Option<Workout> {
        self.read(CURRENT_WORKOUT)
    }

    pub fn set_current_workout(&self, workout: &Workout) -> bool {
        self.write(CURRENT_WORKOUT, workout)
    }

    pub fn workout_history(&self) -> Vec<HistoryEntry> {
        self.read(WORKOUT_HISTORY).unwrap_or_default()
    }

    /// Read the whole history, append, write it back
    pub fn append_history(&self, entry: HistoryEntry) -> bool {
        let mut history = self.workout_history();
        history.push(entry);
        self.write(WORKOUT_HISTORY, &history)
    }

    /// Stored plan with its generation time. Both halves must be readable.
    pub fn cached_plan(&self) -> Option<(WeeklyPlan, NaiveDateTime)> {
        let plan = self.read(WEEKLY_PLAN)?;
        let generated_at = self.read(PLAN_GENERATION_DATE)?;
        Some((plan, generated_at))
    }

    /// Plan and generation time go out in a single store write
    pub fn save_plan(&self, plan: &WeeklyPlan, generated_at: NaiveDateTime) -> bool {
        match self.try_save_plan(plan, generated_at) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "weekly plan write failed");
                false
            }
        }
    }

    fn try_save_plan(&self, plan: &WeeklyPlan, generated_at: NaiveDateTime) -> anyhow::Result<()> {
        let plan_json = serde_json::to_string(plan)?;
        let date_json = serde_json::to_string(&generated_at)?;
        self.store
            .set_many(&[(WEEKLY_PLAN, plan_json), (PLAN_GENERATION_DATE, date_json)])
    }

    pub fn clear_plan(&self) -> bool {
        match self.store.remove_many(&[WEEKLY_PLAN, PLAN_GENERATION_DATE]) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "weekly plan clear failed");
                false
            }
        }
    }

    /// Remove every record
    pub fn clear_all(&self) -> bool {
        match self.store.remove_many(&ALL_KEYS) {
            Ok(()) => {
                info!("all records cleared");
                true
            }
            Err(e) => {
                error!(error = %e, "clearing records failed");
                false
            }
        }
    }
}
