//! Workout data model - generated plans, workouts and persisted state records

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::exercises::{Category, Exercise};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// Full workouts needed in a row before the level goes up
pub const COMPLETIONS_PER_LEVEL: u32 = 5;

/// Workout lengths (minutes) the user can pick from
pub const DURATION_OPTIONS: [u32; 5] = [5, 10, 15, 20, 30];

pub fn clamp_level(level: i32) -> u8 {
    level.clamp(MIN_LEVEL as i32, MAX_LEVEL as i32) as u8
}

/// Repetition target: a count, or a hold/work duration in seconds.
///
/// Serialized the way the records store it: counts as plain numbers,
/// durations as `"<N> seconds"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reps {
    Count(u32),
    Duration(u32),
}

impl Reps {
    /// Parse `"12"` or `"30 seconds"`
    pub fn parse(s: &str) -> Option<Reps> {
        let s = s.trim();
        match s.strip_suffix("seconds") {
            Some(secs) => secs.trim().parse().ok().map(Reps::Duration),
            None => s.parse().ok().map(Reps::Count),
        }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(n) => write!(f, "{}", n),
            Reps::Duration(secs) => write!(f, "{} seconds", secs),
        }
    }
}

impl Serialize for Reps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reps::Count(n) => serializer.serialize_u32(*n),
            Reps::Duration(_) => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for Reps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Reps::Count(n)),
            Raw::Text(s) => Reps::parse(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid reps: {:?}", s))),
        }
    }
}

/// Training focus of a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Push,
    Pull,
    Arms,
    Back,
    Core,
}

impl Focus {
    pub fn name(&self) -> &'static str {
        match self {
            Focus::Push => "push",
            Focus::Pull => "pull",
            Focus::Arms => "arms",
            Focus::Back => "back",
            Focus::Core => "core",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Circuit,
    SingleSets,
}

impl WorkoutType {
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutType::Circuit => "circuit",
            WorkoutType::SingleSets => "single sets",
        }
    }
}

/// An exercise as it appears inside one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub reps: Reps,
    pub completed: bool,
    pub description: String,
    pub instructions: Vec<String>,
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<String>,
}

impl WorkoutExercise {
    pub fn from_exercise(exercise: &Exercise, reps: Reps) -> Self {
        Self {
            id: exercise.id.to_string(),
            name: exercise.name.to_string(),
            category: exercise.category,
            reps,
            completed: false,
            description: exercise.description.to_string(),
            instructions: exercise.instructions.iter().map(|s| s.to_string()).collect(),
            muscle_groups: exercise.muscle_groups.iter().map(|s| s.to_string()).collect(),
            equipment: exercise.equipment.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub date: NaiveDate,
    pub exercises: Vec<WorkoutExercise>,
    pub workout_type: WorkoutType,
    pub estimated_duration: u32,
    pub level: u8,
    pub focus: Option<Focus>,
    /// Set when the workout was taken from a rest day of the weekly plan
    #[serde(default)]
    pub is_rest_day: bool,
    pub completed: bool,
    pub completed_exercises: usize,
}

impl Workout {
    /// Recompute `completed_exercises` and `completed` from the exercise list
    pub fn recount(&mut self) {
        self.completed_exercises = self.exercises.iter().filter(|e| e.completed).count();
        self.completed = self.completed_exercises == self.exercises.len();
    }

    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    pub fn exercise_ids(&self) -> Vec<&str> {
        self.exercises.iter().map(|e| e.id.as_str()).collect()
    }
}

/// Completed workout snapshot kept in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub workout: Workout,
    pub completed_at: NaiveDateTime,
}

/// Generated content of a training day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    pub focus: Focus,
    pub exercises: Vec<WorkoutExercise>,
    pub workout_type: WorkoutType,
    pub level: u8,
    pub estimated_duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    pub is_rest_day: bool,
    #[serde(flatten)]
    pub training: Option<TrainingDay>,
}

impl DayPlan {
    pub fn rest(date: NaiveDate) -> Self {
        Self { date, is_rest_day: true, training: None }
    }

    pub fn training(date: NaiveDate, training: TrainingDay) -> Self {
        Self { date, is_rest_day: false, training: Some(training) }
    }

    pub fn focus(&self) -> Option<Focus> {
        self.training.as_ref().map(|t| t.focus)
    }
}

/// Seven consecutive days starting on a Monday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub fn week_start(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn training_days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().filter(|d| !d.is_rest_day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub workout_duration: u32,
    /// Weekday numbers, 0 = Sunday .. 6 = Saturday
    pub rest_days: BTreeSet<u8>,
    pub notifications_enabled: bool,
    pub notification_time: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workout_duration: 10,
            rest_days: BTreeSet::new(),
            notifications_enabled: true,
            notification_time: "07:00".to_string(),
        }
    }
}

impl Settings {
    pub fn is_rest_weekday(&self, weekday: Weekday) -> bool {
        self.rest_days.contains(&(weekday.num_days_from_sunday() as u8))
    }

    pub fn is_rest_date(&self, date: NaiveDate) -> bool {
        self.is_rest_weekday(date.weekday())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakData {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_workout_date: Option<NaiveDate>,
    pub total_workouts: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionData {
    pub consecutive_completions: u32,
    pub last_progression_date: Option<NaiveDateTime>,
}
