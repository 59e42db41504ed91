//! Exercise selection for a training focus
//!
//! Each focus trains three muscle groups: a primary at full intensity, a
//! secondary one step easier and a tertiary finisher two steps easier. Groups
//! with progression chains pick a level-appropriate position on a chain;
//! groups without fall back to a random catalog pick of the right category.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::exercises::{Category, Exercise, MuscleGroup, exercises_in_category, find_exercise};
use crate::workout::Focus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    High,
    Medium,
    Low,
}

impl Intensity {
    /// Steps down the progression chain
    fn offset(&self) -> i64 {
        match self {
            Intensity::High => 0,
            Intensity::Medium => -1,
            Intensity::Low => -2,
        }
    }
}

const INTENSITIES: [Intensity; 3] = [Intensity::High, Intensity::Medium, Intensity::Low];

/// Primary, secondary and tertiary muscle groups of a focus
pub fn focus_targets(focus: Focus) -> [MuscleGroup; 3] {
    match focus {
        Focus::Push => [MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Core],
        Focus::Pull => [MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::LowerBack],
        Focus::Arms => [MuscleGroup::Biceps, MuscleGroup::Triceps, MuscleGroup::Chest],
        Focus::Back => [MuscleGroup::Back, MuscleGroup::LowerBack, MuscleGroup::Core],
        Focus::Core => [MuscleGroup::Core, MuscleGroup::LowerBack, MuscleGroup::Chest],
    }
}

/// Up to three exercises (primary, secondary, tertiary) for `focus`.
///
/// `exclude` is best-effort. A group that yields nothing is skipped, so the
/// result can be shorter than three.
pub fn select_for_focus<R: Rng + ?Sized>(
    focus: Focus,
    level: u8,
    exclude: &[&str],
    rng: &mut R,
) -> Vec<&'static Exercise> {
    focus_targets(focus)
        .into_iter()
        .zip(INTENSITIES)
        .filter_map(|(group, intensity)| pick_from_chain(group, level, intensity, exclude, &mut *rng))
        .collect()
}

/// Position on a chain of `len` exercises for a user at `level`
fn chain_position(level: u8, len: usize) -> usize {
    let fraction = match level {
        0..=3 => 0.2,
        4..=7 => 0.5,
        _ => 0.8,
    };
    (len as f64 * fraction).floor() as usize
}

pub fn pick_from_chain<R: Rng + ?Sized>(
    group: MuscleGroup,
    level: u8,
    intensity: Intensity,
    exclude: &[&str],
    rng: &mut R,
) -> Option<&'static Exercise> {
    let Some(chain) = group.progression_chains().choose(rng) else {
        return select_from_category(group.category(), level, exclude, rng);
    };

    let last = chain.len() as i64 - 1;
    let position = (chain_position(level, chain.len()) as i64 + intensity.offset()).clamp(0, last) as usize;
    let id = chain[position];

    if exclude.contains(&id) {
        let alternate = chain[(position + 1) % chain.len()];
        if !exclude.contains(&alternate) {
            debug!(group = group.name(), excluded = id, picked = alternate, "chain alternate");
            return find_exercise(alternate);
        }
    }

    find_exercise(id)
}

/// Random catalog pick of `category`, restricted to difficulties the level
/// allows when any such exercise survives the exclusions
pub fn select_from_category<R: Rng + ?Sized>(
    category: Category,
    level: u8,
    exclude: &[&str],
    rng: &mut R,
) -> Option<&'static Exercise> {
    let pool: Vec<&'static Exercise> = exercises_in_category(category)
        .filter(|e| !exclude.contains(&e.id))
        .collect();

    let eligible: Vec<&'static Exercise> = pool
        .iter()
        .copied()
        .filter(|e| e.difficulty.allowed_at(level))
        .collect();

    let candidates = if eligible.is_empty() { &pool } else { &eligible };
    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    /// Always picks the first candidate
    fn first_pick() -> StepRng {
        StepRng::new(0, 0)
    }

    fn ids(exercises: &[&Exercise]) -> Vec<&'static str> {
        exercises.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_focus_targets() {
        assert_eq!(focus_targets(Focus::Push), [MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Core]);
        assert_eq!(focus_targets(Focus::Pull), [MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::LowerBack]);
        assert_eq!(focus_targets(Focus::Back)[1], MuscleGroup::LowerBack);
    }

    #[test]
    fn test_chain_position_by_level() {
        assert_eq!(chain_position(1, 7), 1);
        assert_eq!(chain_position(3, 7), 1);
        assert_eq!(chain_position(4, 7), 3);
        assert_eq!(chain_position(7, 7), 3);
        assert_eq!(chain_position(8, 7), 5);
        assert_eq!(chain_position(10, 2), 1);
    }

    #[test]
    fn test_push_beginner() {
        let picked = select_for_focus(Focus::Push, 1, &[], &mut first_pick());
        assert_eq!(ids(&picked), vec!["incline_pushups", "band_tricep_extensions", "dead_bug"]);
    }

    #[test]
    fn test_push_intermediate() {
        let picked = select_for_focus(Focus::Push, 5, &[], &mut first_pick());
        assert_eq!(ids(&picked), vec!["regular_pushups", "band_overhead_extensions", "dead_bug"]);
    }

    #[test]
    fn test_push_advanced_primary() {
        let picked = select_for_focus(Focus::Push, 9, &[], &mut first_pick());
        assert_eq!(picked[0].id, "decline_pushups");
    }

    #[test]
    fn test_intensity_clamps_at_chain_start() {
        let lower_back = pick_from_chain(MuscleGroup::LowerBack, 1, Intensity::Low, &[], &mut first_pick());
        assert_eq!(lower_back.unwrap().id, "supermans");
    }

    #[test]
    fn test_excluded_pick_moves_one_step() {
        let picked = pick_from_chain(MuscleGroup::Chest, 1, Intensity::High, &["incline_pushups"], &mut first_pick());
        assert_eq!(picked.unwrap().id, "knee_pushups");
    }

    #[test]
    fn test_exclusion_is_best_effort() {
        let exclude = ["incline_pushups", "knee_pushups"];
        let picked = pick_from_chain(MuscleGroup::Chest, 1, Intensity::High, &exclude, &mut first_pick());
        assert_eq!(picked.unwrap().id, "incline_pushups");
    }

    #[test]
    fn test_alternate_wraps_around_chain() {
        // level 9 on the 3-long lower back chain lands on the last entry
        let picked = pick_from_chain(
            MuscleGroup::LowerBack,
            9,
            Intensity::High,
            &["reverse_hyperextensions"],
            &mut first_pick(),
        );
        assert_eq!(picked.unwrap().id, "supermans");
    }

    #[test]
    fn test_category_fallback_respects_difficulty() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let core = select_from_category(Category::Core, 2, &[], &mut rng).unwrap();
            assert!(["dead_bug", "plank", "bicycle_crunches"].contains(&core.id));
        }
    }

    #[test]
    fn test_category_fallback_widens_difficulty() {
        let exclude = ["dead_bug", "plank", "bicycle_crunches"];
        let core = select_from_category(Category::Core, 1, &exclude, &mut first_pick()).unwrap();
        assert_eq!(core.id, "plank_shoulder_taps");
    }

    #[test]
    fn test_exhausted_group_shortens_list() {
        let exclude: Vec<&str> = exercises_in_category(Category::Core).map(|e| e.id).collect();
        let picked = select_for_focus(Focus::Push, 1, &exclude, &mut first_pick());
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|e| e.category == Category::Push));
    }

    #[test]
    fn test_every_focus_yields_three() {
        let mut rng = StdRng::seed_from_u64(42);
        for focus in [Focus::Push, Focus::Pull, Focus::Arms, Focus::Back, Focus::Core] {
            for level in 1..=10 {
                assert_eq!(select_for_focus(focus, level, &[], &mut rng).len(), 3);
            }
        }
    }
}
