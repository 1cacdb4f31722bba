// ABOUTME: Daily goal engine for the KILO fitness tracker
// ABOUTME: Energy expenditure estimation, macro allocation, and goal progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # KILO Intelligence
//!
//! Pure, synchronous calculations with no I/O and no shared mutable state.
//! Every function may be called concurrently from any thread.
//!
//! ## Modules
//!
//! - **config**: `GoalsConfig` with the formula constants and validation
//! - **`goal_calculator`**: BMR, TDEE, and daily macro targets
//! - **progress**: actuals versus goals for progress rings

/// Goal calculator configuration
pub mod config;

/// Daily goal calculation
pub mod goal_calculator;

/// Progress of actuals against goals
pub mod progress;

pub use goal_calculator::{calculate_daily_goals, GoalAdjustment, GoalBreakdown, GoalCalculator};
pub use progress::{DailyProgress, MetricProgress};
