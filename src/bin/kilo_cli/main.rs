// ABOUTME: KILO CLI - command-line front end for the fitness tracker
// ABOUTME: Onboarding, daily goals, meal and step logging, workouts, and the shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calculate goals without storing anything
//! kilo-cli goals --weight 80 --height 180 --age 30 --sex male --activity 3 --goal cut
//!
//! # Onboard, then look at today's dashboard
//! kilo-cli onboard --name Ola --weight 80 --height 180 --age 30 --sex male --activity 3 --goal cut
//! kilo-cli dashboard
//!
//! # Log food and steps
//! kilo-cli stats log-meal --meal lunch --name "Chicken rice" --calories 650 --protein 45 --carbs 80 --fat 12
//! kilo-cli stats add-steps 4200
//!
//! # Record a workout from a JSON file
//! kilo-cli workout log --file push_day.json
//! ```

mod commands;
mod helpers;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use helpers::display::Output;
use kilo::config::{AppConfig, LogLevel};
use kilo::database::Database;
use kilo::errors::{AppError, AppResult};
use kilo::intelligence::GoalCalculator;
use kilo::logging::LoggingConfig;
use kilo::models::{
    ActivityLevel, Biometrics, Goal, MealEntry, MealType, ProfileUpdate, Sex,
};
use kilo::services::TrackerService;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "kilo-cli",
    about = "KILO fitness tracker CLI",
    long_about = "Daily calorie and macro goals from your profile, plus meal, step, and workout logging."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Keep everything in memory for this run
    #[arg(long, global = true, conflicts_with = "database_url")]
    ephemeral: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Biometric flags shared by `goals` and `onboard`
#[derive(clap::Args)]
struct BiometricArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in centimetres
    #[arg(long)]
    height: f64,

    /// Age in whole years
    #[arg(long)]
    age: u32,

    /// male | female
    #[arg(long)]
    sex: Sex,

    /// 1-5 or sedentary | light | moderate | high | extreme
    #[arg(long)]
    activity: ActivityLevel,

    /// cut | bulk | recomp
    #[arg(long)]
    goal: Goal,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate daily goals from flags without storing anything
    Goals {
        #[command(flatten)]
        biometrics: BiometricArgs,
    },

    /// Create the profile and finish onboarding
    Onboard {
        /// Display name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        biometrics: BiometricArgs,
    },

    /// Profile management
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Daily stats
    Stats {
        #[command(subcommand)]
        action: StatsCommand,
    },

    /// Workout logging
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Goals, actuals, and progress for a day
    Dashboard {
        /// Day to show (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Shopping list
    Shopping {
        #[command(subcommand)]
        action: ShoppingCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the stored profile
    Show,

    /// Change profile fields
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// New height in centimetres
        #[arg(long)]
        height: Option<f64>,

        /// New age in years
        #[arg(long)]
        age: Option<u32>,

        /// New sex
        #[arg(long)]
        sex: Option<Sex>,

        /// New activity level
        #[arg(long)]
        activity: Option<ActivityLevel>,

        /// New goal
        #[arg(long)]
        goal: Option<Goal>,
    },

    /// Delete all stored data
    Reset {
        /// Required to confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum StatsCommand {
    /// Show the totals for a day
    Show {
        /// Day to show (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Add a meal to a day's totals
    LogMeal {
        /// breakfast | lunch | dinner | snack
        #[arg(long, default_value = "snack")]
        meal: String,

        /// Food name
        #[arg(long)]
        name: String,

        /// Energy (kcal)
        #[arg(long)]
        calories: u32,

        /// Protein (g)
        #[arg(long, default_value_t = 0)]
        protein: u32,

        /// Carbohydrates (g)
        #[arg(long, default_value_t = 0)]
        carbs: u32,

        /// Fat (g)
        #[arg(long, default_value_t = 0)]
        fat: u32,

        /// Day to log to (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Add walked steps
    AddSteps {
        /// Steps to add
        steps: u32,

        /// Day to log to (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Store a finished session read from a JSON file
    Log {
        /// Path to the session JSON
        #[arg(long)]
        file: PathBuf,
    },

    /// Show recent sessions
    History {
        /// Maximum number of sessions
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ShoppingCommand {
    /// Add a recipe and its ingredients
    Add {
        /// Recipe name
        name: String,

        /// Ingredient (repeatable)
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,
    },

    /// Show the list
    List,

    /// Remove an item by ID
    Remove {
        /// Item ID
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.json);

    match run(cli, &output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            output.error(error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, output: &Output) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    let mut config = AppConfig::from_env()?;
    if let Some(url) = &cli.database_url {
        config = config.with_database_url(url)?;
    }
    let calculator = GoalCalculator::new(config.goals.clone());

    // `goals` never touches storage
    if let Command::Goals { biometrics } = &cli.command {
        return commands::goals::calculate(&calculator, biometrics.to_biometrics(), output);
    }

    let service = if cli.ephemeral {
        debug!("Using in-memory store");
        TrackerService::in_memory(calculator)
    } else {
        TrackerService::with_database(Database::connect(&config.database).await?, calculator)
    };

    match cli.command {
        Command::Goals { .. } => Ok(()),
        Command::Onboard { name, biometrics } => {
            commands::profile::onboard(&service, name, biometrics.to_biometrics(), output).await
        }
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&service, output).await,
            ProfileCommand::Update {
                name,
                weight,
                height,
                age,
                sex,
                activity,
                goal,
            } => {
                let update = ProfileUpdate {
                    name,
                    age_years: age,
                    weight_kg: weight,
                    height_cm: height,
                    sex,
                    activity_level: activity,
                    goal,
                    ..Default::default()
                };
                commands::profile::update(&service, update, output).await
            }
            ProfileCommand::Reset { yes } => commands::profile::reset(&service, yes, output).await,
        },
        Command::Stats { action } => match action {
            StatsCommand::Show { date } => {
                commands::stats::show(&service, date.unwrap_or_else(today), output).await
            }
            StatsCommand::LogMeal {
                meal,
                name,
                calories,
                protein,
                carbs,
                fat,
                date,
            } => {
                let entry = MealEntry {
                    meal_type: MealType::from_str_lossy(&meal),
                    name,
                    calories,
                    protein_g: protein,
                    carbs_g: carbs,
                    fat_g: fat,
                };
                commands::stats::log_meal(&service, date.unwrap_or_else(today), entry, output)
                    .await
            }
            StatsCommand::AddSteps { steps, date } => {
                commands::stats::add_steps(&service, date.unwrap_or_else(today), steps, output)
                    .await
            }
        },
        Command::Workout { action } => match action {
            WorkoutCommand::Log { file } => commands::workout::log(&service, &file, output).await,
            WorkoutCommand::History { limit } => {
                commands::workout::history(&service, limit, output).await
            }
        },
        Command::Dashboard { date } => {
            commands::goals::dashboard(&service, date.unwrap_or_else(today), output).await
        }
        Command::Shopping { action } => match action {
            ShoppingCommand::Add { name, ingredients } => {
                commands::shopping::add(&service, &name, ingredients, output).await
            }
            ShoppingCommand::List => commands::shopping::list(&service, output).await,
            ShoppingCommand::Remove { id } => {
                commands::shopping::remove(&service, id, output).await
            }
        },
    }
}

impl BiometricArgs {
    const fn to_biometrics(&self) -> Biometrics {
        Biometrics {
            weight_kg: self.weight,
            height_cm: self.height,
            age_years: self.age,
            sex: self.sex,
            activity_level: self.activity,
            goal: self.goal,
        }
    }
}

/// The user's local calendar day
fn today() -> NaiveDate {
    Local::now().date_naive()
}
