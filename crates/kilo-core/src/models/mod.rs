// ABOUTME: Core data models for the KILO fitness tracker
// ABOUTME: Profile, daily goals and stats, meals, workouts, and shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod daily;
mod nutrition;
mod profile;
mod shopping;
mod workout;

pub use daily::{DailyGoals, DailyStats};
pub use nutrition::{MealEntry, MealType};
pub use profile::{
    ActivityLevel, Biometrics, Goal, OnboardingForm, ProfileUpdate, Sex, Theme, UserProfile,
};
pub use shopping::ShoppingItem;
pub use workout::{Exercise, ExerciseSet, WorkoutSession};
