//! Edits applied to a materialized workout
//!
//! Both operations return a new snapshot and keep `completed_exercises` and
//! `completed` consistent with the exercise list.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::PlannerError;
use super::reps::compute_reps;
use super::selector::select_for_focus;
use crate::workout::{Focus, Workout, WorkoutExercise};

fn check_index(workout: &Workout, index: usize) -> Result<(), PlannerError> {
    if index >= workout.exercises.len() {
        return Err(PlannerError::ExerciseIndexOutOfRange {
            index,
            len: workout.exercises.len(),
        });
    }
    Ok(())
}

/// Flip the completion flag of the exercise at `index`
pub fn toggle_completion(workout: &Workout, index: usize) -> Result<Workout, PlannerError> {
    check_index(workout, index)?;

    let mut updated = workout.clone();
    let exercise = &mut updated.exercises[index];
    exercise.completed = !exercise.completed;
    updated.recount();
    Ok(updated)
}

/// Swap the exercise at `index` for another one of the workout's focus.
///
/// Candidates already in the workout are avoided when anything else is
/// available. If the selector comes back empty the workout is returned as is.
pub fn replace_exercise<R: Rng + ?Sized>(
    workout: &Workout,
    index: usize,
    level: u8,
    rng: &mut R,
) -> Result<Workout, PlannerError> {
    check_index(workout, index)?;

    let used = workout.exercise_ids();
    let focus = workout.focus.unwrap_or(Focus::Push);
    let candidates = select_for_focus(focus, level, &used, rng);

    let fresh: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|e| !used.contains(&e.id))
        .collect();
    let pool = if fresh.is_empty() { &candidates } else { &fresh };

    // Unreachable with the current catalog: every focus target has a chain or
    // a non-empty category, so the selector always returns something.
    let Some(picked) = pool.choose(rng) else {
        debug!(focus = focus.name(), index, "no replacement candidates");
        return Ok(workout.clone());
    };

    debug!(replaced = %workout.exercises[index].id, with = picked.id, "exercise replaced");

    let mut updated = workout.clone();
    updated.exercises[index] =
        WorkoutExercise::from_exercise(picked, compute_reps(picked, level, workout.workout_type));
    updated.recount();
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::{Category, find_exercise};
    use crate::workout::WorkoutType;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn workout_with(ids: &[&str], focus: Option<Focus>, workout_type: WorkoutType) -> Workout {
        let exercises = ids
            .iter()
            .map(|id| {
                let exercise = find_exercise(id).unwrap();
                WorkoutExercise::from_exercise(exercise, exercise.default_reps)
            })
            .collect();

        Workout {
            id: "workout_test".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            exercises,
            workout_type,
            estimated_duration: 10,
            level: 1,
            focus,
            is_rest_day: false,
            completed: false,
            completed_exercises: 0,
        }
    }

    fn push_workout() -> Workout {
        workout_with(
            &["incline_pushups", "band_tricep_extensions", "dead_bug"],
            Some(Focus::Push),
            WorkoutType::SingleSets,
        )
    }

    #[test]
    fn test_toggle_sets_counts() {
        let workout = toggle_completion(&push_workout(), 1).unwrap();
        assert!(workout.exercises[1].completed);
        assert_eq!(workout.completed_exercises, 1);
        assert!(!workout.completed);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let original = push_workout();
        let once = toggle_completion(&original, 2).unwrap();
        let twice = toggle_completion(&once, 2).unwrap();
        assert_eq!(twice, original);
    }

    #[test]
    fn test_all_toggled_completes_workout() {
        let mut workout = push_workout();
        for i in 0..3 {
            workout = toggle_completion(&workout, i).unwrap();
        }
        assert!(workout.completed);
        assert_eq!(workout.completed_exercises, 3);

        let workout = toggle_completion(&workout, 0).unwrap();
        assert!(!workout.completed);
        assert_eq!(workout.completed_exercises, 2);
    }

    #[test]
    fn test_count_matches_flags_after_any_sequence() {
        let mut workout = push_workout();
        for i in [0, 2, 2, 1, 0, 1, 1] {
            workout = toggle_completion(&workout, i).unwrap();
            let flagged = workout.exercises.iter().filter(|e| e.completed).count();
            assert_eq!(workout.completed_exercises, flagged);
        }
    }

    #[test]
    fn test_toggle_out_of_range() {
        let err = toggle_completion(&push_workout(), 3).unwrap_err();
        assert_eq!(err, PlannerError::ExerciseIndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn test_replace_picks_unused_exercise() {
        let original = push_workout();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            let workout = replace_exercise(&original, 0, 1, &mut rng).unwrap();
            let ids = workout.exercise_ids();
            assert_eq!(ids.len(), 3);
            assert_eq!(&ids[1..], &["band_tricep_extensions", "dead_bug"]);
            assert!(!original.exercise_ids().contains(&ids[0]), "kept {}", ids[0]);
        }
    }

    #[test]
    fn test_replace_resets_completion() {
        let mut workout = push_workout();
        for i in 0..3 {
            workout = toggle_completion(&workout, i).unwrap();
        }
        assert!(workout.completed);

        let replaced = replace_exercise(&workout, 1, 1, &mut StdRng::seed_from_u64(9)).unwrap();
        assert!(!replaced.exercises[1].completed);
        assert_eq!(replaced.completed_exercises, 2);
        assert!(!replaced.completed);
    }

    #[test]
    fn test_replace_uses_workout_type_for_reps() {
        let workout = workout_with(&["band_rows", "band_bicep_curls", "supermans"], Some(Focus::Pull), WorkoutType::Circuit);
        let replaced = replace_exercise(&workout, 0, 1, &mut StdRng::seed_from_u64(2)).unwrap();

        let new = &replaced.exercises[0];
        let exercise = find_exercise(&new.id).unwrap();
        assert_eq!(new.reps, compute_reps(exercise, 1, WorkoutType::Circuit));
    }

    #[test]
    fn test_replace_without_focus_uses_push() {
        let workout = workout_with(&["plank"], None, WorkoutType::SingleSets);
        let replaced = replace_exercise(&workout, 0, 1, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_ne!(replaced.exercises[0].id, "plank");
        assert!(matches!(replaced.exercises[0].category, Category::Push | Category::Core));
    }

    #[test]
    fn test_replace_out_of_range() {
        let err = replace_exercise(&push_workout(), 7, 1, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, PlannerError::ExerciseIndexOutOfRange { index: 7, len: 3 });
    }
}
