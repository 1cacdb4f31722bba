// ABOUTME: Domain service layer for the tracker
// ABOUTME: Business rules shared by the CLI and any other front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services own the business rules and talk to storage only through the
//! repository traits in [`crate::database::repositories`].

/// Onboarding, goals, daily logging, workouts, and shopping list
pub mod tracker;

pub use tracker::{DashboardSnapshot, TrackerService};
