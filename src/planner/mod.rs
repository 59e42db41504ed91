//! Planner - workout generation, progression and session state
//!
//! Components:
//! - Rep scaling by level (`reps`)
//! - Focus-driven exercise selection over progression chains (`selector`)
//! - Weekly plan with a push/pull rotation (`weekly`)
//! - Week-aligned plan caching (`cache`)
//! - Streaks and level-ups (`progression`)
//! - Toggle/replace on a workout (`mutations`)
//! - History statistics (`stats`)

pub mod cache;
pub mod mutations;
pub mod progression;
pub mod reps;
pub mod selector;
pub mod stats;
pub mod weekly;

pub use cache::PlanCache;
pub use progression::{CompletionOutcome, ProgressionTracker};
pub use stats::{Analytics, LevelProgress, WorkoutStats};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::db::{Records, Store};
use crate::exercises::{self, Exercise};
use crate::workout::{
    DURATION_OPTIONS, HistoryEntry, ProgressionData, Settings, StreakData, WeeklyPlan, Workout,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("exercise index {index} out of range (workout has {len} exercises)")]
    ExerciseIndexOutOfRange { index: usize, len: usize },

    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("invalid workout duration: {0} minutes")]
    InvalidDuration(u32),
}

/// Result of toggling an exercise on the current workout
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub workout: Workout,
    /// Set when this toggle finished the workout
    pub completion: Option<CompletionOutcome>,
}

pub struct Planner<S: Store> {
    records: Records<S>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
}

impl<S: Store> Planner<S> {
    /// Planner on local system time with an entropy-seeded generator
    pub fn new(store: S) -> Self {
        Self::with_clock_and_rng(store, SystemClock, StdRng::from_entropy())
    }

    pub fn with_clock_and_rng(
        store: S,
        clock: impl Clock + 'static,
        rng: impl RngCore + 'static,
    ) -> Self {
        Self {
            records: Records::new(store),
            clock: Box::new(clock),
            rng: Box::new(rng),
        }
    }

    pub fn records(&self) -> &Records<S> {
        &self.records
    }

    fn cache(&self) -> PlanCache<'_, S> {
        PlanCache::new(&self.records, self.clock.as_ref())
    }

    fn tracker(&self) -> ProgressionTracker<'_, S> {
        ProgressionTracker::new(&self.records, self.clock.as_ref())
    }

    // --- Generation ---

    /// Today's workout, cut from this week's plan
    pub fn generate_daily_workout(&mut self, level: u8, settings: &Settings) -> Workout {
        let cache = PlanCache::new(&self.records, self.clock.as_ref());
        cache.daily_workout(level, settings, &mut *self.rng)
    }

    pub fn get_weekly_plan(&mut self, level: u8, settings: &Settings) -> WeeklyPlan {
        let cache = PlanCache::new(&self.records, self.clock.as_ref());
        cache.weekly_plan(level, settings, &mut *self.rng)
    }

    /// Drop the cached plan; the next read builds a new one
    pub fn regenerate_weekly_plan(&self) -> bool {
        self.cache().invalidate()
    }

    pub fn is_workout_for_today(&self, workout: &Workout) -> bool {
        workout.is_for(self.clock.today())
    }

    pub fn is_rest_day(&self) -> bool {
        self.records.settings().is_rest_date(self.clock.today())
    }

    // --- Mutations ---

    pub fn toggle_exercise_completion(&self, workout: &Workout, index: usize) -> Result<Workout, PlannerError> {
        mutations::toggle_completion(workout, index)
    }

    pub fn replace_exercise(&mut self, workout: &Workout, index: usize, level: u8) -> Result<Workout, PlannerError> {
        mutations::replace_exercise(workout, index, level, &mut *self.rng)
    }

    // --- Session ---

    pub fn current_workout(&self) -> Option<Workout> {
        self.records.current_workout()
    }

    pub fn set_current_workout(&self, workout: &Workout) -> bool {
        self.records.set_current_workout(workout)
    }

    /// The stored current workout when it is for today, otherwise a freshly
    /// generated one that becomes the current workout
    pub fn todays_workout(&mut self) -> Workout {
        if let Some(workout) = self.records.current_workout() {
            if self.is_workout_for_today(&workout) {
                return workout;
            }
            debug!(date = %workout.date, "current workout is stale");
        }

        let level = self.records.user_level();
        let settings = self.records.settings();
        let workout = self.generate_daily_workout(level, &settings);
        self.records.set_current_workout(&workout);
        workout
    }

    /// Toggle an exercise of today's workout and persist it. Finishing the
    /// workout stores it in history and counts it toward streak and level.
    pub fn toggle_current_exercise(&mut self, index: usize) -> Result<ToggleOutcome, PlannerError> {
        let workout = self.todays_workout();
        let updated = mutations::toggle_completion(&workout, index)?;
        self.records.set_current_workout(&updated);

        let completion = if !workout.completed && updated.completed {
            self.save_workout_to_history(&updated);
            Some(self.on_workout_fully_completed())
        } else {
            None
        };

        Ok(ToggleOutcome { workout: updated, completion })
    }

    pub fn replace_current_exercise(&mut self, index: usize) -> Result<Workout, PlannerError> {
        let workout = self.todays_workout();
        let level = self.records.user_level();
        let updated = self.replace_exercise(&workout, index, level)?;
        self.records.set_current_workout(&updated);
        Ok(updated)
    }

    // --- History ---

    pub fn save_workout_to_history(&self, workout: &Workout) -> bool {
        self.records.append_history(HistoryEntry {
            workout: workout.clone(),
            completed_at: self.clock.now(),
        })
    }

    pub fn workout_history(&self) -> Vec<HistoryEntry> {
        self.records.workout_history()
    }

    // --- Progression ---

    pub fn user_level(&self) -> u8 {
        self.records.user_level()
    }

    pub fn set_level_manually(&self, delta: i32) -> u8 {
        self.tracker().set_level_manually(delta)
    }

    pub fn streak(&self) -> StreakData {
        self.records.streak()
    }

    pub fn progression(&self) -> ProgressionData {
        self.records.progression()
    }

    pub fn on_workout_fully_completed(&self) -> CompletionOutcome {
        self.tracker().on_workout_fully_completed()
    }

    pub fn on_workout_abandoned(&self) {
        self.tracker().on_workout_abandoned()
    }

    pub fn stats(&self) -> WorkoutStats {
        let history = self.records.workout_history();
        Analytics::new(&history).summary(
            self.clock.now(),
            self.records.user_level(),
            &self.records.progression(),
            self.records.streak(),
        )
    }

    // --- Settings ---

    pub fn settings(&self) -> Settings {
        self.records.settings()
    }

    /// Store new settings. A different schedule (rest days or duration)
    /// invalidates this week's plan.
    pub fn save_settings(&self, settings: &Settings) -> Result<(), PlannerError> {
        if !DURATION_OPTIONS.contains(&settings.workout_duration) {
            return Err(PlannerError::InvalidDuration(settings.workout_duration));
        }

        let previous = self.records.settings();
        self.records.save_settings(settings);

        if previous.rest_days != settings.rest_days || previous.workout_duration != settings.workout_duration {
            info!(
                duration = settings.workout_duration,
                rest_days = ?settings.rest_days,
                "schedule changed"
            );
            self.cache().invalidate();
        }
        Ok(())
    }

    // --- Catalog ---

    pub fn exercise(&self, id: &str) -> Result<&'static Exercise, PlannerError> {
        exercises::find_exercise(id).ok_or_else(|| PlannerError::UnknownExercise(id.to_string()))
    }

    /// Harder variation of `id`, if the chain continues
    pub fn next_progression(&self, id: &str) -> Result<Option<&'static Exercise>, PlannerError> {
        self.exercise(id)?;
        Ok(exercises::next_progression(id))
    }

    /// Wipe every stored record
    pub fn clear_all_data(&self) -> bool {
        self.records.clear_all()
    }
}
