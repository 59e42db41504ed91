//! Level progression and streak bookkeeping
//!
//! Five full workouts in a row raise the level by one. The streak counts
//! consecutive calendar days with a completed workout; several completions on
//! one day count once.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::info;

use crate::clock::Clock;
use crate::db::{Records, Store};
use crate::workout::{COMPLETIONS_PER_LEVEL, MAX_LEVEL, ProgressionData, StreakData, clamp_level};

/// What a completed workout changed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionOutcome {
    pub leveled_up: bool,
    pub level: u8,
    pub consecutive_completions: u32,
    pub streak: StreakData,
}

/// Streak after a completion on `today`
pub fn advance_streak(streak: &StreakData, today: NaiveDate) -> StreakData {
    if streak.last_workout_date == Some(today) {
        return streak.clone();
    }

    let yesterday = today - Duration::days(1);
    let current_streak = match streak.last_workout_date {
        Some(last) if last == yesterday => streak.current_streak + 1,
        _ => 1,
    };

    StreakData {
        current_streak,
        longest_streak: streak.longest_streak.max(current_streak),
        last_workout_date: Some(today),
        total_workouts: streak.total_workouts + 1,
    }
}

/// Progression counter and level after one more full workout.
/// Returns the new record, the new level and whether the threshold was hit.
pub fn advance_progression(
    progression: &ProgressionData,
    level: u8,
    now: NaiveDateTime,
) -> (ProgressionData, u8, bool) {
    let completions = progression.consecutive_completions + 1;

    if completions >= COMPLETIONS_PER_LEVEL {
        let next = ProgressionData {
            consecutive_completions: 0,
            last_progression_date: Some(now),
        };
        (next, (level + 1).min(MAX_LEVEL), true)
    } else {
        let next = ProgressionData {
            consecutive_completions: completions,
            last_progression_date: progression.last_progression_date,
        };
        (next, level, false)
    }
}

pub struct ProgressionTracker<'a, S: Store> {
    records: &'a Records<S>,
    clock: &'a dyn Clock,
}

impl<'a, S: Store> ProgressionTracker<'a, S> {
    pub fn new(records: &'a Records<S>, clock: &'a dyn Clock) -> Self {
        Self { records, clock }
    }

    /// Record a fully completed workout: streak first, then progression
    pub fn on_workout_fully_completed(&self) -> CompletionOutcome {
        let now = self.clock.now();

        let streak = advance_streak(&self.records.streak(), now.date());
        self.records.save_streak(&streak);

        let level = self.records.user_level();
        let (progression, new_level, threshold_hit) =
            advance_progression(&self.records.progression(), level, now);

        if threshold_hit {
            self.records.save_level_up(new_level, &progression);
        } else {
            self.records.save_progression(&progression);
        }

        let leveled_up = new_level > level;
        if leveled_up {
            info!(from = level, to = new_level, "level up");
        } else if threshold_hit {
            info!(level, "progression threshold reached at max level");
        }

        CompletionOutcome {
            leveled_up,
            level: new_level,
            consecutive_completions: progression.consecutive_completions,
            streak,
        }
    }

    /// A workout was given up: the run of full completions starts over.
    /// The streak is left alone.
    pub fn on_workout_abandoned(&self) {
        let mut progression = self.records.progression();
        progression.consecutive_completions = 0;
        self.records.save_progression(&progression);
    }

    /// Move the level by `delta`, clamped to 1..=10
    pub fn set_level_manually(&self, delta: i32) -> u8 {
        let current = self.records.user_level();
        let level = clamp_level(current as i32 + delta);
        if level != current {
            self.records.set_user_level(level);
            info!(from = current, to = level, "level changed manually");
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::db::{MemoryStore, Store};
    use crate::db::records::PROGRESSION_DATA;
    use anyhow::{Result, bail};
    use std::cell::Cell;

    /// Memory store whose writes touching the progression record can be made to fail
    #[derive(Default)]
    struct ProgressionWritesFail {
        inner: MemoryStore,
        failing: Cell<bool>,
    }

    impl Store for ProgressionWritesFail {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set_many(&self, entries: &[(&str, String)]) -> Result<()> {
            if self.failing.get() && entries.iter().any(|(key, _)| *key == PROGRESSION_DATA) {
                bail!("progression write rejected");
            }
            self.inner.set_many(entries)
        }

        fn remove_many(&self, keys: &[&str]) -> Result<()> {
            self.inner.remove_many(keys)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (Records<MemoryStore>, FixedClock) {
        (Records::new(MemoryStore::new()), FixedClock::at_date(date(2026, 10, 19)))
    }

    #[test]
    fn test_first_completion_starts_streak() {
        let streak = advance_streak(&StreakData::default(), date(2026, 10, 19));
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 1);
        assert_eq!(streak.total_workouts, 1);
        assert_eq!(streak.last_workout_date, Some(date(2026, 10, 19)));
    }

    #[test]
    fn test_same_day_counts_once() {
        let first = advance_streak(&StreakData::default(), date(2026, 10, 19));
        let second = advance_streak(&first, date(2026, 10, 19));
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_day_extends_streak() {
        let first = advance_streak(&StreakData::default(), date(2026, 10, 19));
        let second = advance_streak(&first, date(2026, 10, 20));
        assert_eq!(second.current_streak, 2);
        assert_eq!(second.longest_streak, 2);
        assert_eq!(second.total_workouts, 2);
    }

    #[test]
    fn test_gap_resets_streak_keeps_longest() {
        let streak = StreakData {
            current_streak: 4,
            longest_streak: 6,
            last_workout_date: Some(date(2026, 10, 17)),
            total_workouts: 20,
        };
        let next = advance_streak(&streak, date(2026, 10, 19));
        assert_eq!(next.current_streak, 1);
        assert_eq!(next.longest_streak, 6);
        assert_eq!(next.total_workouts, 21);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let streak = advance_streak(&StreakData::default(), date(2026, 10, 31));
        let next = advance_streak(&streak, date(2026, 11, 1));
        assert_eq!(next.current_streak, 2);
    }

    #[test]
    fn test_five_completions_level_up() {
        let (records, clock) = setup();
        let tracker = ProgressionTracker::new(&records, &clock);

        for i in 1..5 {
            let outcome = tracker.on_workout_fully_completed();
            assert!(!outcome.leveled_up);
            assert_eq!(outcome.level, 1);
            assert_eq!(outcome.consecutive_completions, i);
        }

        let outcome = tracker.on_workout_fully_completed();
        assert!(outcome.leveled_up);
        assert_eq!(outcome.level, 2);
        assert_eq!(records.user_level(), 2);

        let progression = records.progression();
        assert_eq!(progression.consecutive_completions, 0);
        assert_eq!(progression.last_progression_date, Some(clock.now()));
    }

    #[test]
    fn test_failed_level_up_write_changes_nothing() {
        let records = Records::new(ProgressionWritesFail::default());
        records.save_progression(&ProgressionData {
            consecutive_completions: 4,
            last_progression_date: None,
        });
        let clock = FixedClock::at_date(date(2026, 10, 19));
        let tracker = ProgressionTracker::new(&records, &clock);

        records.store().failing.set(true);
        tracker.on_workout_fully_completed();
        // level and counter move together or not at all
        assert_eq!(records.user_level(), 1);
        assert_eq!(records.progression().consecutive_completions, 4);

        records.store().failing.set(false);
        clock.advance_days(1);
        let outcome = tracker.on_workout_fully_completed();
        assert!(outcome.leveled_up);
        assert_eq!(outcome.level, 2);
        assert_eq!(records.user_level(), 2);
        assert_eq!(records.progression().consecutive_completions, 0);

        clock.advance_days(1);
        let outcome = tracker.on_workout_fully_completed();
        assert!(!outcome.leveled_up);
        assert_eq!(records.user_level(), 2);
    }

    #[test]
    fn test_max_level_resets_counter_without_level_up() {
        let (records, clock) = setup();
        records.set_user_level(10);
        records.save_progression(&ProgressionData {
            consecutive_completions: 4,
            last_progression_date: None,
        });
        let tracker = ProgressionTracker::new(&records, &clock);

        let outcome = tracker.on_workout_fully_completed();
        assert!(!outcome.leveled_up);
        assert_eq!(outcome.level, 10);
        assert_eq!(records.progression().consecutive_completions, 0);
    }

    #[test]
    fn test_completion_updates_streak_once_per_day() {
        let (records, clock) = setup();
        let tracker = ProgressionTracker::new(&records, &clock);

        tracker.on_workout_fully_completed();
        let outcome = tracker.on_workout_fully_completed();
        assert_eq!(outcome.streak.total_workouts, 1);
        assert_eq!(outcome.streak.current_streak, 1);
        // progression still counts both
        assert_eq!(outcome.consecutive_completions, 2);

        clock.advance_days(1);
        let outcome = tracker.on_workout_fully_completed();
        assert_eq!(outcome.streak.current_streak, 2);

        clock.advance_days(3);
        let outcome = tracker.on_workout_fully_completed();
        assert_eq!(outcome.streak.current_streak, 1);
        assert_eq!(outcome.streak.longest_streak, 2);
        assert_eq!(records.streak(), outcome.streak);
    }

    #[test]
    fn test_abandon_resets_counter_only() {
        let (records, clock) = setup();
        let tracker = ProgressionTracker::new(&records, &clock);

        tracker.on_workout_fully_completed();
        tracker.on_workout_fully_completed();
        let streak_before = records.streak();

        tracker.on_workout_abandoned();
        assert_eq!(records.progression().consecutive_completions, 0);
        assert_eq!(records.streak(), streak_before);
    }

    #[test]
    fn test_manual_level_clamps() {
        let (records, clock) = setup();
        let tracker = ProgressionTracker::new(&records, &clock);

        assert_eq!(tracker.set_level_manually(-1), 1);
        records.set_user_level(10);
        assert_eq!(tracker.set_level_manually(1), 10);
        assert_eq!(tracker.set_level_manually(-3), 7);
        assert_eq!(records.user_level(), 7);
    }

    #[test]
    fn test_manual_level_leaves_counters() {
        let (records, clock) = setup();
        let tracker = ProgressionTracker::new(&records, &clock);
        tracker.on_workout_fully_completed();

        tracker.set_level_manually(2);
        assert_eq!(records.progression().consecutive_completions, 1);
        assert_eq!(records.streak().total_workouts, 1);
    }
}
