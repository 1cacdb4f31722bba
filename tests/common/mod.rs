// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging, profile fixtures, and ready-made tracker services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `kilo`

use chrono::NaiveDate;
use kilo::database::Database;
use kilo::intelligence::GoalCalculator;
use kilo::models::{
    ActivityLevel, Biometrics, Exercise, ExerciseSet, Goal, MealEntry, MealType, OnboardingForm,
    Sex, WorkoutSession,
};
use kilo::services::TrackerService;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 80 kg, 180 cm, 30 year old man, moderately active, cutting
pub const fn male_cut() -> Biometrics {
    Biometrics {
        weight_kg: 80.0,
        height_cm: 180.0,
        age_years: 30,
        sex: Sex::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Cut,
    }
}

/// 60 kg, 165 cm, 25 year old woman, lightly active, bulking
pub const fn female_bulk() -> Biometrics {
    Biometrics {
        weight_kg: 60.0,
        height_cm: 165.0,
        age_years: 25,
        sex: Sex::Female,
        activity_level: ActivityLevel::Light,
        goal: Goal::Bulk,
    }
}

/// Onboarding form for [`male_cut`]
pub fn onboarding_form(name: &str) -> OnboardingForm {
    let b = male_cut();
    OnboardingForm {
        name: name.to_owned(),
        age_years: b.age_years,
        weight_kg: b.weight_kg,
        height_cm: b.height_cm,
        sex: b.sex,
        activity_level: b.activity_level,
        goal: b.goal,
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn meal(calories: u32, protein_g: u32, carbs_g: u32, fat_g: u32) -> MealEntry {
    MealEntry {
        meal_type: MealType::Lunch,
        name: "Chicken rice".to_owned(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Session with one exercise of three sets, two of them completed
pub fn push_day() -> WorkoutSession {
    WorkoutSession::new(
        "Push day",
        3600,
        vec![Exercise {
            name: "Bench press".to_owned(),
            sets: vec![
                ExerciseSet {
                    weight_kg: 60.0,
                    reps: 10,
                    completed: true,
                },
                ExerciseSet {
                    weight_kg: 70.0,
                    reps: 8,
                    completed: true,
                },
                ExerciseSet {
                    weight_kg: 80.0,
                    reps: 5,
                    completed: false,
                },
            ],
        }],
    )
}

/// Service over a fresh in-memory store with default goal settings
pub fn memory_service() -> TrackerService {
    init_test_logging();
    TrackerService::in_memory(GoalCalculator::default())
}

/// Service over an in-memory `SQLite` database
pub async fn sqlite_service() -> TrackerService {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await.unwrap();
    TrackerService::with_database(database, GoalCalculator::default())
}
