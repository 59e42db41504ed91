//! Workout statistics read model over the stored history

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::workout::{COMPLETIONS_PER_LEVEL, HistoryEntry, ProgressionData, StreakData};

/// Full workouts collected toward the next level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub current: u32,
    pub needed: u32,
    pub percentage: f64,
}

impl LevelProgress {
    pub fn from_progression(progression: &ProgressionData) -> Self {
        let current = progression.consecutive_completions.min(COMPLETIONS_PER_LEVEL);
        Self {
            current,
            needed: COMPLETIONS_PER_LEVEL,
            percentage: current as f64 * 100.0 / COMPLETIONS_PER_LEVEL as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutStats {
    pub level: u8,
    pub weekly_workouts: usize,
    pub monthly_workouts: usize,
    pub total_exercises: usize,
    pub level_progress: LevelProgress,
    pub streak: StreakData,
}

/// History analytics
pub struct Analytics<'a> {
    history: &'a [HistoryEntry],
}

impl<'a> Analytics<'a> {
    pub fn new(history: &'a [HistoryEntry]) -> Self {
        Self { history }
    }

    /// Workouts completed within the last `days` days
    pub fn completed_within(&self, now: NaiveDateTime, days: i64) -> usize {
        let since = now - Duration::days(days);
        self.history.iter().filter(|e| e.completed_at >= since).count()
    }

    /// Exercises across every stored workout
    pub fn total_exercises(&self) -> usize {
        self.history.iter().map(|e| e.workout.exercises.len()).sum()
    }

    pub fn summary(
        &self,
        now: NaiveDateTime,
        level: u8,
        progression: &ProgressionData,
        streak: StreakData,
    ) -> WorkoutStats {
        WorkoutStats {
            level,
            weekly_workouts: self.completed_within(now, 7),
            monthly_workouts: self.completed_within(now, 30),
            total_exercises: self.total_exercises(),
            level_progress: LevelProgress::from_progression(progression),
            streak,
        }
    }
}
