//! Progressive rep scaling by user level

use crate::exercises::Exercise;
use crate::workout::{Reps, WorkoutType};

/// Extra seconds per level for timed exercises
const SECONDS_PER_LEVEL: u32 = 3;
const MAX_SECONDS: u32 = 75;

/// Rep-count growth per level above 1
const REPS_GROWTH_PER_LEVEL: f64 = 0.12;
/// Circuits run at a lower rep count so the whole round stays sustainable
const CIRCUIT_FACTOR: f64 = 0.85;
const MAX_REPS: u32 = 20;

/// Concrete target for `exercise` at `level`.
///
/// Timed work gains 3 seconds a level up to 75 seconds. Counted work grows
/// 12% a level, drops 15% in circuits, and tops out at 20 reps.
pub fn compute_reps(exercise: &Exercise, level: u8, workout_type: WorkoutType) -> Reps {
    let steps = level.saturating_sub(1) as u32;

    match exercise.default_reps {
        Reps::Duration(secs) => Reps::Duration((secs + SECONDS_PER_LEVEL * steps).min(MAX_SECONDS)),
        Reps::Count(base) => {
            let multiplier = 1.0 + REPS_GROWTH_PER_LEVEL * steps as f64;
            let mut reps = (base as f64 * multiplier).round();
            if workout_type == WorkoutType::Circuit {
                reps = (reps * CIRCUIT_FACTOR).round();
            }
            Reps::Count((reps as u32).min(MAX_REPS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::{find_exercise, get_all_exercises};

    fn count(reps: Reps) -> u32 {
        match reps {
            Reps::Count(n) => n,
            Reps::Duration(_) => panic!("expected a rep count"),
        }
    }

    #[test]
    fn test_level_one_single_sets_is_base() {
        let pushups = find_exercise("wall_pushups").unwrap();
        assert_eq!(compute_reps(pushups, 1, WorkoutType::SingleSets), Reps::Count(10));
    }

    #[test]
    fn test_rep_growth() {
        let pushups = find_exercise("wall_pushups").unwrap(); // base 10
        assert_eq!(compute_reps(pushups, 2, WorkoutType::SingleSets), Reps::Count(11));
        assert_eq!(compute_reps(pushups, 5, WorkoutType::SingleSets), Reps::Count(15));
        // 10 * 2.08 = 20.8 -> 21 -> capped
        assert_eq!(compute_reps(pushups, 10, WorkoutType::SingleSets), Reps::Count(20));
    }

    #[test]
    fn test_circuit_reduction() {
        let rows = find_exercise("band_rows").unwrap(); // base 12
        // 12 -> 10.2 -> 10
        assert_eq!(compute_reps(rows, 1, WorkoutType::Circuit), Reps::Count(10));
        // 12 * 1.36 = 16.32 -> 16 -> 13.6 -> 14
        assert_eq!(compute_reps(rows, 4, WorkoutType::Circuit), Reps::Count(14));
    }

    #[test]
    fn test_duration_scaling() {
        let plank = find_exercise("plank").unwrap(); // 30 seconds
        assert_eq!(compute_reps(plank, 1, WorkoutType::Circuit), Reps::Duration(30));
        assert_eq!(compute_reps(plank, 4, WorkoutType::SingleSets), Reps::Duration(39));
        assert_eq!(compute_reps(plank, 10, WorkoutType::SingleSets), Reps::Duration(57));
    }

    #[test]
    fn test_duration_cap() {
        let mut long_hold = find_exercise("plank").unwrap().clone();
        long_hold.default_reps = Reps::Duration(60);
        assert_eq!(compute_reps(&long_hold, 6, WorkoutType::SingleSets), Reps::Duration(75));
        assert_eq!(compute_reps(&long_hold, 10, WorkoutType::SingleSets), Reps::Duration(75));
    }

    #[test]
    fn test_single_sets_bounded_and_monotonic() {
        for exercise in get_all_exercises() {
            let Reps::Count(base) = exercise.default_reps else { continue };
            if base > MAX_REPS {
                continue;
            }
            let mut previous = 0;
            for level in 1..=10 {
                let reps = count(compute_reps(exercise, level, WorkoutType::SingleSets));
                assert!(reps >= base && reps <= MAX_REPS, "{} level {}: {}", exercise.id, level, reps);
                assert!(reps >= previous, "{} not monotonic at level {}", exercise.id, level);
                previous = reps;
            }
        }
    }

    #[test]
    fn test_base_above_cap_is_clamped() {
        let curls = find_exercise("band_21s").unwrap(); // base 21
        assert_eq!(compute_reps(curls, 1, WorkoutType::SingleSets), Reps::Count(20));
    }
}
