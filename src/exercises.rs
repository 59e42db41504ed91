//! Exercise catalog - calisthenics records and progression chains
//!
//! Static data: nothing here is mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::workout::Reps;

/// Target muscle groups the planner picks exercises for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuscleGroup {
    Chest,
    Triceps,
    Biceps,
    Back,
    LowerBack,
    Core,
    Legs,
}

impl MuscleGroup {
    pub fn name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Back => "back",
            MuscleGroup::LowerBack => "lower back",
            MuscleGroup::Core => "core",
            MuscleGroup::Legs => "legs",
        }
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Biceps,
            MuscleGroup::Back,
            MuscleGroup::LowerBack,
            MuscleGroup::Core,
            MuscleGroup::Legs,
        ]
    }

    /// Catalog category searched when the group has no progression chain
    pub fn category(&self) -> Category {
        match self {
            MuscleGroup::Chest | MuscleGroup::Triceps => Category::Push,
            MuscleGroup::Back | MuscleGroup::Biceps | MuscleGroup::LowerBack => Category::Pull,
            MuscleGroup::Core => Category::Core,
            MuscleGroup::Legs => Category::Legs,
        }
    }

    /// Progression chains, each ordered from easiest to hardest
    pub fn progression_chains(&self) -> &'static [&'static [&'static str]] {
        match self {
            MuscleGroup::Chest => CHEST_CHAINS,
            MuscleGroup::Back => BACK_CHAINS,
            MuscleGroup::Biceps => BICEPS_CHAINS,
            MuscleGroup::Triceps => TRICEPS_CHAINS,
            MuscleGroup::LowerBack => LOWER_BACK_CHAINS,
            MuscleGroup::Core | MuscleGroup::Legs => &[],
        }
    }
}

const CHEST_CHAINS: &[&[&str]] = &[
    &[
        "wall_pushups",
        "incline_pushups",
        "knee_pushups",
        "regular_pushups",
        "diamond_pushups",
        "decline_pushups",
        "archer_pushups",
    ],
    &["band_chest_press", "band_chest_fly", "band_decline_press"],
];

const BACK_CHAINS: &[&[&str]] = &[
    &["band_rows", "band_rows_single", "band_wide_rows", "band_face_pulls"],
    &["inverted_rows", "band_pull_downs", "band_straight_arm_pulldown"],
];

const BICEPS_CHAINS: &[&[&str]] = &[
    &["band_bicep_curls", "band_hammer_curls", "band_concentration_curls", "band_21s"],
];

const TRICEPS_CHAINS: &[&[&str]] = &[
    &["band_tricep_extensions", "band_overhead_extensions", "band_kickbacks", "diamond_pushups"],
    &["bench_dips", "pike_pushups"],
];

const LOWER_BACK_CHAINS: &[&[&str]] = &[
    &["supermans", "band_good_mornings", "reverse_hyperextensions"],
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Push,
    Pull,
    Legs,
    Core,
}

impl Category {
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Push => "💪",
            Category::Pull => "🏋️",
            Category::Legs => "🦵",
            Category::Core => "🎯",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Push => "push",
            Category::Pull => "pull",
            Category::Legs => "legs",
            Category::Core => "core",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Whether a user at `level` may be given this difficulty.
    /// Levels 1-3 stay on beginner work, 4-7 add intermediate, 8+ get everything.
    pub fn allowed_at(&self, level: u8) -> bool {
        match self {
            Difficulty::Beginner => true,
            Difficulty::Intermediate => level > 3,
            Difficulty::Advanced => level > 7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub equipment: &'static [&'static str],
    pub muscle_groups: &'static [&'static str],
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub default_reps: Reps,
    /// Next harder exercise; points at itself (or back down a cycle) at the top
    pub progression_to: &'static str,
}

pub const EXERCISES: &[Exercise] = &[
    // Push
    Exercise {
        id: "wall_pushups",
        name: "Wall Push-ups",
        category: Category::Push,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["chest", "arms", "shoulders"],
        description: "Stand arm's length from a wall, place hands on wall at shoulder height. Lean in by bending elbows, then push back.",
        instructions: &[
            "Stand about 2 feet from a wall",
            "Place hands on wall at shoulder width",
            "Keep body straight from head to heels",
            "Bend elbows to lean toward wall",
            "Push back to starting position",
        ],
        default_reps: Reps::Count(10),
        progression_to: "incline_pushups",
    },
    Exercise {
        id: "incline_pushups",
        name: "Incline Push-ups",
        category: Category::Push,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["chest", "arms", "shoulders"],
        description: "Push-ups with hands elevated on a sturdy surface (couch, chair). Easier than regular push-ups.",
        instructions: &[
            "Place hands on elevated surface shoulder-width apart",
            "Step back until body is straight",
            "Lower chest toward surface",
            "Push back up to start",
            "Keep core tight throughout",
        ],
        default_reps: Reps::Count(8),
        progression_to: "knee_pushups",
    },
    Exercise {
        id: "knee_pushups",
        name: "Knee Push-ups",
        category: Category::Push,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["chest", "arms", "shoulders"],
        description: "Push-ups performed on knees instead of toes, reducing the weight you need to push.",
        instructions: &[
            "Start on hands and knees on mat",
            "Hands shoulder-width apart",
            "Keep back straight from knees to head",
            "Lower chest to ground",
            "Push back up",
        ],
        default_reps: Reps::Count(10),
        progression_to: "regular_pushups",
    },
    Exercise {
        id: "regular_pushups",
        name: "Push-ups",
        category: Category::Push,
        difficulty: Difficulty::Intermediate,
        equipment: &["mat"],
        muscle_groups: &["chest", "arms", "shoulders", "core"],
        description: "Classic push-up with body straight, lowering chest to ground and pushing back up.",
        instructions: &[
            "Start in plank position",
            "Hands slightly wider than shoulders",
            "Lower body until chest nearly touches ground",
            "Keep elbows at 45-degree angle",
            "Push back up to start",
        ],
        default_reps: Reps::Count(8),
        progression_to: "diamond_pushups",
    },
    // Pull (resistance band)
    Exercise {
        id: "band_rows",
        name: "Resistance Band Rows",
        category: Category::Pull,
        difficulty: Difficulty::Beginner,
        equipment: &["band", "mat"],
        muscle_groups: &["back", "biceps"],
        description: "Sit with legs extended, loop band around feet, pull band toward torso.",
        instructions: &[
            "Sit on mat with legs extended",
            "Loop band around feet",
            "Hold band ends with arms extended",
            "Pull elbows back, squeezing shoulder blades",
            "Return to start with control",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_rows_single",
    },
    Exercise {
        id: "band_rows_single",
        name: "Single-Arm Band Rows",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["back", "biceps", "core"],
        description: "Single-arm variation of band rows for increased difficulty and core engagement.",
        instructions: &[
            "Sit on mat with legs extended",
            "Loop band around one foot",
            "Hold band with opposite hand",
            "Pull elbow back while keeping torso stable",
            "Alternate arms",
        ],
        default_reps: Reps::Count(10),
        progression_to: "band_rows",
    },
    // Legs
    Exercise {
        id: "squats",
        name: "Bodyweight Squats",
        category: Category::Legs,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["quads", "glutes", "hamstrings"],
        description: "Stand with feet shoulder-width apart, lower hips back and down, then return to standing.",
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Toes slightly pointed out",
            "Lower hips back and down",
            "Keep chest up and knees tracking over toes",
            "Rise back to start",
        ],
        default_reps: Reps::Count(12),
        progression_to: "jump_squats",
    },
    Exercise {
        id: "jump_squats",
        name: "Jump Squats",
        category: Category::Legs,
        difficulty: Difficulty::Intermediate,
        equipment: &["mat"],
        muscle_groups: &["quads", "glutes", "hamstrings", "calves"],
        description: "Explosive squat variation where you jump at the top of the movement.",
        instructions: &[
            "Start in squat position",
            "Lower into squat",
            "Explosively jump up",
            "Land softly and immediately lower into next squat",
            "Use arms for momentum",
        ],
        default_reps: Reps::Count(8),
        progression_to: "squats",
    },
    Exercise {
        id: "lunges",
        name: "Forward Lunges",
        category: Category::Legs,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["quads", "glutes", "hamstrings"],
        description: "Step forward into lunge position, alternating legs.",
        instructions: &[
            "Stand with feet hip-width apart",
            "Step forward with one leg",
            "Lower hips until both knees at 90 degrees",
            "Push back to start",
            "Alternate legs",
        ],
        default_reps: Reps::Count(10),
        progression_to: "reverse_lunges",
    },
    Exercise {
        id: "reverse_lunges",
        name: "Reverse Lunges",
        category: Category::Legs,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["quads", "glutes", "hamstrings"],
        description: "Step backward into lunge position, easier on knees than forward lunges.",
        instructions: &[
            "Stand with feet hip-width apart",
            "Step backward with one leg",
            "Lower hips until front knee at 90 degrees",
            "Push through front heel to return",
            "Alternate legs",
        ],
        default_reps: Reps::Count(10),
        progression_to: "walking_lunges",
    },
    Exercise {
        id: "glute_bridge",
        name: "Glute Bridges",
        category: Category::Legs,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["glutes", "hamstrings", "core"],
        description: "Lie on back, knees bent, lift hips toward ceiling, squeezing glutes.",
        instructions: &[
            "Lie on back with knees bent",
            "Feet flat on floor hip-width apart",
            "Lift hips toward ceiling",
            "Squeeze glutes at top",
            "Lower with control",
        ],
        default_reps: Reps::Count(15),
        progression_to: "single_leg_bridge",
    },
    // Core
    Exercise {
        id: "dead_bug",
        name: "Dead Bug",
        category: Category::Core,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["core", "abs"],
        description: "Lie on back, extend opposite arm and leg while keeping lower back pressed to floor.",
        instructions: &[
            "Lie on back with arms extended up",
            "Knees bent at 90 degrees",
            "Slowly extend opposite arm and leg",
            "Return to start",
            "Alternate sides",
        ],
        default_reps: Reps::Count(10),
        progression_to: "bicycle_crunches",
    },
    Exercise {
        id: "plank",
        name: "Forearm Plank",
        category: Category::Core,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["core", "abs", "shoulders"],
        description: "Hold body in straight line on forearms and toes, engaging core.",
        instructions: &[
            "Start on forearms and toes",
            "Elbows under shoulders",
            "Body straight from head to heels",
            "Engage core and glutes",
            "Hold position without sagging",
        ],
        default_reps: Reps::Duration(30),
        progression_to: "plank_shoulder_taps",
    },
    Exercise {
        id: "plank_shoulder_taps",
        name: "Plank Shoulder Taps",
        category: Category::Core,
        difficulty: Difficulty::Intermediate,
        equipment: &["mat"],
        muscle_groups: &["core", "abs", "shoulders"],
        description: "Hold high plank position while alternating tapping opposite shoulder.",
        instructions: &[
            "Start in high plank (hands not forearms)",
            "Keep body stable",
            "Lift one hand to tap opposite shoulder",
            "Return hand to floor",
            "Alternate sides without rotating hips",
        ],
        default_reps: Reps::Count(12),
        progression_to: "plank",
    },
    Exercise {
        id: "bicycle_crunches",
        name: "Bicycle Crunches",
        category: Category::Core,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["core", "abs", "obliques"],
        description: "Alternate bringing opposite elbow to knee in a cycling motion.",
        instructions: &[
            "Lie on back with hands behind head",
            "Lift shoulders off ground",
            "Bring one knee in while extending other leg",
            "Rotate torso to bring opposite elbow to knee",
            "Alternate sides in cycling motion",
        ],
        default_reps: Reps::Count(15),
        progression_to: "bicycle_crunches",
    },
    Exercise {
        id: "mountain_climbers",
        name: "Mountain Climbers",
        category: Category::Core,
        difficulty: Difficulty::Intermediate,
        equipment: &["mat"],
        muscle_groups: &["core", "abs", "shoulders", "cardio"],
        description: "From plank position, alternate driving knees toward chest in running motion.",
        instructions: &[
            "Start in high plank position",
            "Drive one knee toward chest",
            "Quickly switch legs",
            "Keep hips level",
            "Maintain quick pace",
        ],
        default_reps: Reps::Count(20),
        progression_to: "mountain_climbers",
    },
    // Band basics
    Exercise {
        id: "band_chest_press",
        name: "Band Chest Press",
        category: Category::Push,
        difficulty: Difficulty::Beginner,
        equipment: &["band", "mat"],
        muscle_groups: &["chest", "arms", "shoulders"],
        description: "Anchor band behind you, press forward from chest level.",
        instructions: &[
            "Anchor band at chest height behind you",
            "Hold band ends at chest level",
            "Step forward for tension",
            "Press arms forward",
            "Return to start with control",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_chest_press",
    },
    Exercise {
        id: "band_bicep_curls",
        name: "Band Bicep Curls",
        category: Category::Pull,
        difficulty: Difficulty::Beginner,
        equipment: &["band", "mat"],
        muscle_groups: &["biceps", "arms"],
        description: "Stand on band, curl handles toward shoulders.",
        instructions: &[
            "Stand on middle of band",
            "Hold ends with arms extended",
            "Keep elbows at sides",
            "Curl hands toward shoulders",
            "Lower with control",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_bicep_curls",
    },
    Exercise {
        id: "band_shoulder_press",
        name: "Band Shoulder Press",
        category: Category::Push,
        difficulty: Difficulty::Beginner,
        equipment: &["band", "mat"],
        muscle_groups: &["shoulders", "arms"],
        description: "Stand on band, press handles overhead.",
        instructions: &[
            "Stand on middle of band",
            "Hold ends at shoulder height",
            "Press hands overhead",
            "Keep core tight",
            "Lower to shoulders",
        ],
        default_reps: Reps::Count(10),
        progression_to: "band_shoulder_press",
    },
    Exercise {
        id: "band_leg_extensions",
        name: "Band Leg Extensions",
        category: Category::Legs,
        difficulty: Difficulty::Beginner,
        equipment: &["band", "mat"],
        muscle_groups: &["quads", "glutes"],
        description: "Loop band around one ankle, extend leg forward against resistance.",
        instructions: &[
            "Loop band around ankle",
            "Stand on other end or anchor it",
            "Extend banded leg forward",
            "Keep knee straight",
            "Return with control",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_leg_extensions",
    },
    // Arms - triceps
    Exercise {
        id: "band_tricep_extensions",
        name: "Band Tricep Extensions",
        category: Category::Push,
        difficulty: Difficulty::Beginner,
        equipment: &["band", "mat"],
        muscle_groups: &["triceps", "arms"],
        description: "Stand on band, extend arms overhead to work triceps.",
        instructions: &[
            "Stand on middle of band",
            "Hold ends behind your head",
            "Elbows pointing up",
            "Extend arms overhead",
            "Lower back down with control",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_overhead_extensions",
    },
    Exercise {
        id: "band_overhead_extensions",
        name: "Band Overhead Extensions",
        category: Category::Push,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["triceps", "arms", "shoulders"],
        description: "Single-arm overhead tricep extension for increased difficulty.",
        instructions: &[
            "Stand on band with one foot",
            "Hold band with one hand behind head",
            "Extend arm straight up",
            "Keep elbow stationary",
            "Alternate arms",
        ],
        default_reps: Reps::Count(10),
        progression_to: "diamond_pushups",
    },
    Exercise {
        id: "band_kickbacks",
        name: "Band Tricep Kickbacks",
        category: Category::Push,
        difficulty: Difficulty::Beginner,
        equipment: &["band", "mat"],
        muscle_groups: &["triceps", "arms"],
        description: "Hinge forward, extend arm back to isolate triceps.",
        instructions: &[
            "Stand on band, hinge forward at hips",
            "Hold band with elbows bent",
            "Extend arm straight back",
            "Squeeze triceps at full extension",
            "Return to start",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_overhead_extensions",
    },
    Exercise {
        id: "diamond_pushups",
        name: "Diamond Push-ups",
        category: Category::Push,
        difficulty: Difficulty::Advanced,
        equipment: &["mat"],
        muscle_groups: &["triceps", "chest", "arms"],
        description: "Push-ups with hands close together forming a diamond shape.",
        instructions: &[
            "Start in plank position",
            "Place hands close together, thumbs and index fingers touching",
            "Form diamond shape with hands",
            "Lower chest toward hands",
            "Push back up",
        ],
        default_reps: Reps::Count(6),
        progression_to: "diamond_pushups",
    },
    Exercise {
        id: "bench_dips",
        name: "Bench Dips",
        category: Category::Push,
        difficulty: Difficulty::Intermediate,
        equipment: &["mat"],
        muscle_groups: &["triceps", "chest", "shoulders"],
        description: "Use a bench or chair to perform dips for triceps.",
        instructions: &[
            "Sit on edge of bench, hands next to hips",
            "Slide hips off bench, legs extended",
            "Lower body by bending elbows",
            "Keep elbows close to body",
            "Push back up",
        ],
        default_reps: Reps::Count(10),
        progression_to: "diamond_pushups",
    },
    // Arms - biceps
    Exercise {
        id: "band_hammer_curls",
        name: "Band Hammer Curls",
        category: Category::Pull,
        difficulty: Difficulty::Beginner,
        equipment: &["band", "mat"],
        muscle_groups: &["biceps", "forearms", "arms"],
        description: "Hammer grip curl targeting biceps and forearms.",
        instructions: &[
            "Stand on middle of band",
            "Hold ends with palms facing each other",
            "Keep elbows at sides",
            "Curl hands toward shoulders",
            "Lower with control",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_concentration_curls",
    },
    Exercise {
        id: "band_concentration_curls",
        name: "Band Concentration Curls",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["biceps", "arms"],
        description: "Isolated bicep curl for maximum contraction.",
        instructions: &[
            "Sit on mat, place band under one foot",
            "Hold band with same side hand",
            "Rest elbow on inner thigh",
            "Curl toward shoulder",
            "Squeeze at top",
        ],
        default_reps: Reps::Count(10),
        progression_to: "band_21s",
    },
    Exercise {
        id: "band_21s",
        name: "Band 21s (Bicep Burner)",
        category: Category::Pull,
        difficulty: Difficulty::Advanced,
        equipment: &["band", "mat"],
        muscle_groups: &["biceps", "arms"],
        description: "Advanced bicep technique: 7 bottom-half, 7 top-half, 7 full reps.",
        instructions: &[
            "Stand on band, hold ends",
            "Do 7 curls from bottom to halfway up",
            "Do 7 curls from halfway to top",
            "Do 7 full range curls",
            "Thats one set of 21 total reps",
        ],
        default_reps: Reps::Count(21),
        progression_to: "band_21s",
    },
    // Chest
    Exercise {
        id: "band_chest_fly",
        name: "Band Chest Fly",
        category: Category::Push,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["chest", "pecs", "shoulders"],
        description: "Fly motion to isolate chest muscles.",
        instructions: &[
            "Anchor band behind you at chest height",
            "Hold ends with arms extended to sides",
            "Keep slight bend in elbows",
            "Bring hands together in front of chest",
            "Squeeze pecs, return to start",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_decline_press",
    },
    Exercise {
        id: "band_decline_press",
        name: "Band Decline Press",
        category: Category::Push,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["chest", "pecs", "triceps"],
        description: "Press at downward angle to target lower pecs.",
        instructions: &[
            "Anchor band high behind you",
            "Hold ends at upper chest",
            "Step forward into lunge",
            "Press down and forward",
            "Control return to chest",
        ],
        default_reps: Reps::Count(10),
        progression_to: "decline_pushups",
    },
    Exercise {
        id: "decline_pushups",
        name: "Decline Push-ups",
        category: Category::Push,
        difficulty: Difficulty::Advanced,
        equipment: &["mat"],
        muscle_groups: &["chest", "pecs", "shoulders", "triceps"],
        description: "Feet elevated push-ups for upper chest and shoulders.",
        instructions: &[
            "Place feet on elevated surface",
            "Hands on ground shoulder-width apart",
            "Body straight from head to heels",
            "Lower chest to ground",
            "Push back up",
        ],
        default_reps: Reps::Count(8),
        progression_to: "archer_pushups",
    },
    Exercise {
        id: "archer_pushups",
        name: "Archer Push-ups",
        category: Category::Push,
        difficulty: Difficulty::Advanced,
        equipment: &["mat"],
        muscle_groups: &["chest", "pecs", "triceps", "shoulders"],
        description: "One-arm push-up progression, shifting weight side to side.",
        instructions: &[
            "Start in wide push-up position",
            "Lower body while shifting to one side",
            "Opposite arm extends straight",
            "Push back up through working arm",
            "Alternate sides",
        ],
        default_reps: Reps::Count(6),
        progression_to: "archer_pushups",
    },
    Exercise {
        id: "pike_pushups",
        name: "Pike Push-ups",
        category: Category::Push,
        difficulty: Difficulty::Intermediate,
        equipment: &["mat"],
        muscle_groups: &["shoulders", "triceps", "chest"],
        description: "Push-up variation targeting shoulders more than chest.",
        instructions: &[
            "Start in downward dog position (pike)",
            "Hands shoulder-width apart",
            "Bend elbows to lower head toward ground",
            "Push back up",
            "Keep hips high throughout",
        ],
        default_reps: Reps::Count(8),
        progression_to: "decline_pushups",
    },
    // Back
    Exercise {
        id: "band_wide_rows",
        name: "Band Wide Rows",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["back", "lats", "rear delts"],
        description: "Wide grip row to target upper back and lats.",
        instructions: &[
            "Loop band around feet while seated",
            "Hold band with wide grip",
            "Pull elbows out wide to sides",
            "Squeeze shoulder blades together",
            "Return to start",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_face_pulls",
    },
    Exercise {
        id: "band_face_pulls",
        name: "Band Face Pulls",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["back", "rear delts", "traps"],
        description: "Pull band to face level for upper back and rear deltoids.",
        instructions: &[
            "Anchor band at face height",
            "Hold ends with arms extended",
            "Pull band toward face",
            "Elbows high and wide",
            "Squeeze shoulder blades",
        ],
        default_reps: Reps::Count(15),
        progression_to: "band_pull_downs",
    },
    Exercise {
        id: "band_pull_downs",
        name: "Band Lat Pull-downs",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["back", "lats", "biceps"],
        description: "Mimic lat pulldown machine using resistance band.",
        instructions: &[
            "Anchor band high above you",
            "Kneel or stand holding band",
            "Pull band down to chest",
            "Keep chest up, core tight",
            "Control return to top",
        ],
        default_reps: Reps::Count(12),
        progression_to: "inverted_rows",
    },
    Exercise {
        id: "band_straight_arm_pulldown",
        name: "Band Straight-Arm Pulldown",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["lats", "back", "core"],
        description: "Isolate lats with straight-arm pulling motion.",
        instructions: &[
            "Anchor band high above",
            "Hold band with arms straight",
            "Pull down to thighs keeping arms straight",
            "Squeeze lats at bottom",
            "Return to top with control",
        ],
        default_reps: Reps::Count(12),
        progression_to: "band_pull_downs",
    },
    Exercise {
        id: "inverted_rows",
        name: "Inverted Rows (Table/Bar)",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["mat"],
        muscle_groups: &["back", "lats", "biceps", "core"],
        description: "Horizontal pulling exercise using table or bar.",
        instructions: &[
            "Lie under sturdy table or bar",
            "Grab edge with overhand grip",
            "Keep body straight",
            "Pull chest to table/bar",
            "Lower with control",
        ],
        default_reps: Reps::Count(8),
        progression_to: "inverted_rows",
    },
    // Lower back
    Exercise {
        id: "supermans",
        name: "Superman Holds",
        category: Category::Pull,
        difficulty: Difficulty::Beginner,
        equipment: &["mat"],
        muscle_groups: &["lower back", "glutes", "back"],
        description: "Lie face down, lift arms and legs simultaneously.",
        instructions: &[
            "Lie face down on mat",
            "Extend arms forward",
            "Simultaneously lift arms, chest, and legs",
            "Hold for 2 seconds",
            "Lower back down",
        ],
        default_reps: Reps::Count(12),
        progression_to: "reverse_hyperextensions",
    },
    Exercise {
        id: "band_good_mornings",
        name: "Band Good Mornings",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["band", "mat"],
        muscle_groups: &["lower back", "hamstrings", "glutes"],
        description: "Hip hinge movement with band for lower back strength.",
        instructions: &[
            "Stand on band, hold ends at shoulders",
            "Feet hip-width apart",
            "Hinge at hips, push butt back",
            "Keep back straight",
            "Return to standing",
        ],
        default_reps: Reps::Count(12),
        progression_to: "reverse_hyperextensions",
    },
    Exercise {
        id: "reverse_hyperextensions",
        name: "Reverse Hyperextensions",
        category: Category::Pull,
        difficulty: Difficulty::Intermediate,
        equipment: &["mat"],
        muscle_groups: &["lower back", "glutes", "hamstrings"],
        description: "Lie face down, lift legs to strengthen lower back.",
        instructions: &[
            "Lie face down on mat",
            "Arms extended forward or under chin",
            "Lift both legs off ground",
            "Squeeze glutes and lower back",
            "Lower legs with control",
        ],
        default_reps: Reps::Count(12),
        progression_to: "reverse_hyperextensions",
    },
];

pub fn get_all_exercises() -> &'static [Exercise] {
    EXERCISES
}

pub fn find_exercise(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

/// Catalog records of one category, in catalog order
pub fn exercises_in_category(category: Category) -> impl Iterator<Item = &'static Exercise> {
    EXERCISES.iter().filter(move |e| e.category == category)
}

/// Follow `progression_to` one step.
///
/// Returns `None` for terminal records (self-referential) and for links to
/// exercises the catalog does not carry.
pub fn next_progression(id: &str) -> Option<&'static Exercise> {
    let exercise = find_exercise(id)?;
    if exercise.progression_to == exercise.id {
        return None;
    }
    find_exercise(exercise.progression_to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = EXERCISES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), EXERCISES.len());
    }

    #[test]
    fn test_every_chain_entry_exists() {
        for group in MuscleGroup::all() {
            for chain in group.progression_chains() {
                assert!(!chain.is_empty());
                for id in chain.iter() {
                    assert!(find_exercise(id).is_some(), "{} missing from catalog", id);
                }
            }
        }
    }

    #[test]
    fn test_groups_without_chains() {
        assert!(MuscleGroup::Core.progression_chains().is_empty());
        assert!(MuscleGroup::Legs.progression_chains().is_empty());
        assert_eq!(MuscleGroup::Chest.progression_chains().len(), 2);
    }

    #[test]
    fn test_group_category_mapping() {
        assert_eq!(MuscleGroup::Chest.category(), Category::Push);
        assert_eq!(MuscleGroup::Triceps.category(), Category::Push);
        assert_eq!(MuscleGroup::LowerBack.category(), Category::Pull);
        assert_eq!(MuscleGroup::Biceps.category(), Category::Pull);
        assert_eq!(MuscleGroup::Core.category(), Category::Core);
        assert_eq!(MuscleGroup::Legs.category(), Category::Legs);
    }

    #[test]
    fn test_difficulty_eligibility() {
        assert!(Difficulty::Beginner.allowed_at(1));
        assert!(!Difficulty::Intermediate.allowed_at(3));
        assert!(Difficulty::Intermediate.allowed_at(4));
        assert!(!Difficulty::Advanced.allowed_at(7));
        assert!(Difficulty::Advanced.allowed_at(8));
    }

    #[test]
    fn test_plank_is_timed() {
        let plank = find_exercise("plank").unwrap();
        assert_eq!(plank.default_reps, Reps::Duration(30));
        assert_eq!(plank.category, Category::Core);
    }

    #[test]
    fn test_next_progression() {
        assert_eq!(next_progression("wall_pushups").unwrap().id, "incline_pushups");
        assert!(next_progression("archer_pushups").is_none());
        // reverse lunges point at a record the catalog does not carry
        assert!(next_progression("reverse_lunges").is_none());
        assert!(next_progression("unknown").is_none());
    }

    #[test]
    fn test_exercises_in_category() {
        let core: Vec<_> = exercises_in_category(Category::Core).map(|e| e.id).collect();
        assert_eq!(core, vec!["dead_bug", "plank", "plank_shoulder_taps", "bicycle_crunches", "mountain_climbers"]);
        assert_eq!(exercises_in_category(Category::Legs).count(), 6);
    }
}
