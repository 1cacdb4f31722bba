// ABOUTME: Main library entry point for the KILO fitness tracker
// ABOUTME: Daily nutrition goals, daily logging, workouts, and their persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # KILO
//!
//! A single-user fitness and diet tracker. The heart of it is the daily goal
//! calculator, which turns a biometric profile into calorie and macronutrient
//! targets using the Mifflin-St Jeor equation.
//!
//! ## Architecture
//!
//! - **`kilo-core`**: errors, constants, and data models
//! - **`kilo-intelligence`**: the goal calculator and progress math
//! - **database**: repository traits with `SQLite` and in-memory backends
//! - **services**: `TrackerService`, the business rules behind every command
//! - **config** / **logging**: environment-driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kilo::intelligence::calculate_daily_goals;
//! use kilo::models::{ActivityLevel, Biometrics, Goal, Sex};
//!
//! let goals = calculate_daily_goals(&Biometrics {
//!     weight_kg: 80.0,
//!     height_cm: 180.0,
//!     age_years: 30,
//!     sex: Sex::Male,
//!     activity_level: ActivityLevel::Moderate,
//!     goal: Goal::Cut,
//! })?;
//! assert_eq!(goals.calories, 2259);
//! # Ok::<(), kilo::errors::AppError>(())
//! ```

/// Configuration management
pub mod config;

/// Persistence: repository traits, `SQLite`, and in-memory storage
pub mod database;

/// Structured logging setup
pub mod logging;

/// Domain services
pub mod services;

pub use kilo_core::{constants, errors, models};
pub use kilo_intelligence as intelligence;
