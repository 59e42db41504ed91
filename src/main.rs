//! fitroutine - Calisthenics workout planner

use anyhow::Result;
use clap::{Parser, Subcommand};

use fitroutine::db::Database;
use fitroutine::planner::{Planner, ToggleOutcome};
use fitroutine::workout::{DURATION_OPTIONS, Settings, Workout};

#[derive(Parser)]
#[command(name = "fitroutine")]
#[command(author, version, about = "Calisthenics workout planner with weekly plans and level progression")]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "FITROUTINE_DB", default_value = "fitroutine.db")]
    db: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's workout
    Today,

    /// Show this week's plan
    Week,

    /// Toggle an exercise of today's workout as done
    Done {
        /// Exercise number as listed by `today` (starting at 1)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },

    /// Swap an exercise of today's workout for another one
    Replace {
        /// Exercise number as listed by `today` (starting at 1)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },

    /// Give up today's workout (resets the level-up counter)
    Abandon,

    /// Show statistics
    Stats,

    /// List completed workouts
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show or change settings
    Settings {
        /// Workout length in minutes (5, 10, 15, 20 or 30)
        #[arg(short, long)]
        duration: Option<u32>,

        /// Rest days as weekday numbers, 0 = Sunday (e.g. "0,6")
        #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(0..=6))]
        rest_days: Option<Vec<u8>>,

        /// Train every day
        #[arg(long, conflicts_with = "rest_days")]
        no_rest_days: bool,

        /// Enable or disable reminders
        #[arg(short, long)]
        notifications: Option<bool>,

        /// Reminder time, HH:MM
        #[arg(short = 't', long)]
        notification_time: Option<String>,
    },

    /// Move the level up or down (e.g. 1 or -1)
    Level {
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },

    /// Show an exercise from the catalog
    Show {
        /// Exercise id (e.g. "regular_pushups")
        id: String,
    },

    /// Throw away this week's plan and build a new one
    Regenerate,

    /// Delete all stored data
    Reset,
}

fn print_workout(workout: &Workout) {
    if workout.is_rest_day {
        println!("{}: rest day", workout.date.format("%A %Y-%m-%d"));
        return;
    }

    println!(
        "{} | {} | {} | level {} | ~{} min",
        workout.date.format("%A %Y-%m-%d"),
        workout.focus.map(|f| f.name()).unwrap_or("-"),
        workout.workout_type.name(),
        workout.level,
        workout.estimated_duration
    );
    println!("{:-<60}", "");
    for (i, exercise) in workout.exercises.iter().enumerate() {
        println!(
            "{} {}. {:28} {:>12}",
            if exercise.completed { "[x]" } else { "[ ]" },
            i + 1,
            exercise.name,
            exercise.reps.to_string()
        );
    }
    println!("{:-<60}", "");
    println!("{}/{} done", workout.completed_exercises, workout.exercises.len());
}

fn print_settings(settings: &Settings) {
    let rest_days: Vec<String> = settings.rest_days.iter().map(|d| d.to_string()).collect();
    println!("Settings");
    println!("{:-<40}", "");
    println!("Workout duration: {} min", settings.workout_duration);
    println!(
        "Rest days:        {}",
        if rest_days.is_empty() { "none".to_string() } else { rest_days.join(",") }
    );
    println!("Notifications:    {}", if settings.notifications_enabled { "on" } else { "off" });
    println!("Reminder time:    {}", settings.notification_time);
}

/// Exercise numbers on the command line start at 1
fn to_index(number: u64) -> usize {
    number.saturating_sub(1) as usize
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let db = Database::open(&cli.db)?;
    let mut planner = Planner::new(db);

    match cli.command.unwrap_or(Commands::Today) {
        Commands::Today => {
            let workout = planner.todays_workout();
            print_workout(&workout);
        }

        Commands::Week => {
            let level = planner.user_level();
            let settings = planner.settings();
            let plan = planner.get_weekly_plan(level, &settings);

            println!("Weekly plan");
            println!("{:-<60}", "");
            for day in &plan.days {
                match &day.training {
                    Some(training) => {
                        let names: Vec<&str> = training.exercises.iter().map(|e| e.name.as_str()).collect();
                        println!(
                            "{} | {:5} | {:11} | {}",
                            day.date.format("%a %m-%d"),
                            training.focus.name(),
                            training.workout_type.name(),
                            names.join(", ")
                        );
                    }
                    None => println!("{} | rest", day.date.format("%a %m-%d")),
                }
            }
        }

        Commands::Done { number } => {
            let ToggleOutcome { workout, completion } = planner.toggle_current_exercise(to_index(number))?;
            print_workout(&workout);

            if let Some(outcome) = completion {
                println!();
                println!("Workout complete! Streak: {} day(s)", outcome.streak.current_streak);
                if outcome.leveled_up {
                    println!("Level up! You are now level {}", outcome.level);
                }
            }
        }

        Commands::Replace { number } => {
            let workout = planner.replace_current_exercise(to_index(number))?;
            print_workout(&workout);
        }

        Commands::Abandon => {
            planner.on_workout_abandoned();
            println!("Workout abandoned, level-up counter reset");
        }

        Commands::Stats => {
            let stats = planner.stats();

            println!("Statistics");
            println!("{:-<40}", "");
            println!("Level:            {}", stats.level);
            println!(
                "Next level:       {}/{} ({:.0}%)",
                stats.level_progress.current, stats.level_progress.needed, stats.level_progress.percentage
            );
            println!("This week:        {} workouts", stats.weekly_workouts);
            println!("Last 30 days:     {} workouts", stats.monthly_workouts);
            println!("Total exercises:  {}", stats.total_exercises);
            println!("Current streak:   {} days", stats.streak.current_streak);
            println!("Longest streak:   {} days", stats.streak.longest_streak);
            println!("Total workouts:   {}", stats.streak.total_workouts);
        }

        Commands::History { limit } => {
            let history = planner.workout_history();
            println!("Recent workouts:");
            println!("{:-<60}", "");
            for entry in history.iter().rev().take(limit) {
                println!(
                    "{} | {:5} | {:11} | level {} | {} exercises",
                    entry.completed_at.format("%Y-%m-%d %H:%M"),
                    entry.workout.focus.map(|f| f.name()).unwrap_or("-"),
                    entry.workout.workout_type.name(),
                    entry.workout.level,
                    entry.workout.exercises.len()
                );
            }
        }

        Commands::Settings { duration, rest_days, no_rest_days, notifications, notification_time } => {
            let mut settings = planner.settings();
            let changed = duration.is_some()
                || rest_days.is_some()
                || no_rest_days
                || notifications.is_some()
                || notification_time.is_some();

            if let Some(duration) = duration {
                settings.workout_duration = duration;
            }
            if let Some(days) = rest_days {
                settings.rest_days = days.into_iter().collect();
            }
            if no_rest_days {
                settings.rest_days.clear();
            }
            if let Some(enabled) = notifications {
                settings.notifications_enabled = enabled;
            }
            if let Some(time) = notification_time {
                settings.notification_time = time;
            }

            if changed {
                if let Err(e) = planner.save_settings(&settings) {
                    println!("{} (choose from {:?})", e, DURATION_OPTIONS);
                    return Ok(());
                }
                println!("Settings saved");
            }
            print_settings(&planner.settings());
        }

        Commands::Level { delta } => {
            let level = planner.set_level_manually(delta);
            println!("Level: {}", level);
        }

        Commands::Show { id } => {
            let exercise = planner.exercise(&id)?;
            println!(
                "{} {} ({}, {:?})",
                exercise.category.emoji(),
                exercise.name,
                exercise.category.name(),
                exercise.difficulty
            );
            println!("{:-<60}", "");
            println!("{}", exercise.description);
            println!();
            for (i, step) in exercise.instructions.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
            println!();
            println!("Targets:   {}", exercise.muscle_groups.join(", "));
            println!("Equipment: {}", exercise.equipment.join(", "));
            println!("Default:   {}", exercise.default_reps);
            if let Some(next) = planner.next_progression(&id)? {
                println!("Next step: {} ({})", next.name, next.id);
            }
        }

        Commands::Regenerate => {
            planner.regenerate_weekly_plan();
            let level = planner.user_level();
            let settings = planner.settings();
            planner.get_weekly_plan(level, &settings);
            println!("Weekly plan regenerated");
        }

        Commands::Reset => {
            if planner.clear_all_data() {
                println!("All data deleted");
            } else {
                println!("Could not delete data, see log");
            }
        }
    }

    Ok(())
}
