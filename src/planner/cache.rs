//! Plan cache - the weekly plan is built once per calendar week and today's
//! workout is always cut from that same plan, so the daily and weekly views agree.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing::{debug, info, warn};

use super::weekly::{build_training_day, build_week};
use crate::clock::Clock;
use crate::db::{Records, Store};
use crate::workout::{DayPlan, Focus, Settings, TrainingDay, WeeklyPlan, Workout, WorkoutType};

/// Monday of the week containing `date`. Sundays belong to the previous Monday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// `workout_<millis>_<9 random chars>`
pub fn new_workout_id<R: Rng + ?Sized>(now: NaiveDateTime, rng: &mut R) -> String {
    let suffix: String = (0..9)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect();
    format!("workout_{}_{}", now.and_utc().timestamp_millis(), suffix)
}

pub struct PlanCache<'a, S: Store> {
    records: &'a Records<S>,
    clock: &'a dyn Clock,
}

impl<'a, S: Store> PlanCache<'a, S> {
    pub fn new(records: &'a Records<S>, clock: &'a dyn Clock) -> Self {
        Self { records, clock }
    }

    /// This week's plan: the stored one if it was generated this week,
    /// otherwise a fresh one, persisted together with its generation time.
    pub fn weekly_plan<R: Rng + ?Sized>(&self, level: u8, settings: &Settings, rng: &mut R) -> WeeklyPlan {
        let now = self.clock.now();
        let current_week = week_start(now.date());

        if let Some((plan, generated_at)) = self.records.cached_plan() {
            if week_start(generated_at.date()) == current_week && plan.week_start() == Some(current_week) {
                debug!(week = %current_week, "weekly plan cache hit");
                return plan;
            }
            debug!(week = %current_week, generated_at = %generated_at, "weekly plan stale");
        }

        let plan = build_week(level, settings, current_week, rng);
        if self.records.save_plan(&plan, now) {
            info!(week = %current_week, level, "weekly plan generated");
        } else {
            warn!(week = %current_week, "weekly plan generated but not stored");
        }
        plan
    }

    /// Today's slice of the weekly plan as a fresh, untouched workout
    pub fn daily_workout<R: Rng + ?Sized>(&self, level: u8, settings: &Settings, rng: &mut R) -> Workout {
        let plan = self.weekly_plan(level, settings, rng);
        let now = self.clock.now();
        let today = now.date();
        let id = new_workout_id(now, rng);

        match plan.day(today) {
            Some(day) => workout_from_day(day, id, level, settings),
            None => {
                warn!(date = %today, "no plan entry for today, generating standalone workout");
                fallback_workout(id, today, level, settings, rng)
            }
        }
    }

    /// Drop the stored plan so the next read regenerates it
    pub fn invalidate(&self) -> bool {
        let cleared = self.records.clear_plan();
        if cleared {
            info!("weekly plan invalidated");
        }
        cleared
    }
}

fn workout_from_day(day: &DayPlan, id: String, level: u8, settings: &Settings) -> Workout {
    match &day.training {
        Some(training) => from_training(id, day.date, training.clone()),
        None => Workout {
            id,
            date: day.date,
            exercises: Vec::new(),
            workout_type: WorkoutType::SingleSets,
            estimated_duration: settings.workout_duration,
            level,
            focus: None,
            is_rest_day: true,
            completed: false,
            completed_exercises: 0,
        },
    }
}

fn from_training(id: String, date: NaiveDate, training: TrainingDay) -> Workout {
    Workout {
        id,
        date,
        exercises: training.exercises,
        workout_type: training.workout_type,
        estimated_duration: training.estimated_duration,
        level: training.level,
        focus: Some(training.focus),
        is_rest_day: false,
        completed: false,
        completed_exercises: 0,
    }
}

/// Push workout built outside the weekly plan
pub fn fallback_workout<R: Rng + ?Sized>(
    id: String,
    date: NaiveDate,
    level: u8,
    settings: &Settings,
    rng: &mut R,
) -> Workout {
    from_training(id, date, build_training_day(Focus::Push, level, settings, &[], rng))
}
