//! Weekly plan builder - push/pull rotation across the training days of a week

use chrono::{Duration, NaiveDate};
use rand::Rng;

use super::reps::compute_reps;
use super::selector::select_for_focus;
use crate::workout::{DayPlan, Focus, Settings, TrainingDay, WeeklyPlan, WorkoutExercise, WorkoutType};

/// Focus rotation; only training days advance it
pub const TRAINING_PATTERN: [Focus; 6] = [
    Focus::Push,
    Focus::Pull,
    Focus::Push,
    Focus::Pull,
    Focus::Arms,
    Focus::Back,
];

/// Level-weighted coin flip. Beginners mostly get single sets to learn form,
/// intermediates an even mix, advanced users mostly circuits.
pub fn determine_workout_type<R: Rng + ?Sized>(level: u8, rng: &mut R) -> WorkoutType {
    match level {
        0..=3 => {
            if rng.gen_bool(0.7) { WorkoutType::SingleSets } else { WorkoutType::Circuit }
        }
        4..=7 => {
            if rng.gen_bool(0.5) { WorkoutType::SingleSets } else { WorkoutType::Circuit }
        }
        _ => {
            if rng.gen_bool(0.6) { WorkoutType::Circuit } else { WorkoutType::SingleSets }
        }
    }
}

/// Pick exercises and reps for one training day
pub fn build_training_day<R: Rng + ?Sized>(
    focus: Focus,
    level: u8,
    settings: &Settings,
    exclude: &[&str],
    rng: &mut R,
) -> TrainingDay {
    let exercises = select_for_focus(focus, level, exclude, rng);
    let workout_type = determine_workout_type(level, rng);

    let exercises = exercises
        .into_iter()
        .map(|exercise| WorkoutExercise::from_exercise(exercise, compute_reps(exercise, level, workout_type)))
        .collect();

    TrainingDay {
        focus,
        exercises,
        workout_type,
        level,
        estimated_duration: settings.workout_duration,
    }
}

/// Materialize the seven days starting at `week_start` (a Monday).
///
/// Every day is generated independently: the same exercise may show up on
/// several days of one week.
pub fn build_week<R: Rng + ?Sized>(
    level: u8,
    settings: &Settings,
    week_start: NaiveDate,
    rng: &mut R,
) -> WeeklyPlan {
    let mut days = Vec::with_capacity(7);
    let mut pattern_index = 0;

    for offset in 0..7 {
        let date = week_start + Duration::days(offset);

        if settings.is_rest_date(date) {
            days.push(DayPlan::rest(date));
            continue;
        }

        let focus = TRAINING_PATTERN[pattern_index % TRAINING_PATTERN.len()];
        days.push(DayPlan::training(date, build_training_day(focus, level, settings, &[], rng)));
        pattern_index += 1;
    }

    WeeklyPlan { days }
}
