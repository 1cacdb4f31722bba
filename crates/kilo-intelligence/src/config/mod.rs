// ABOUTME: Configuration for the goal calculator
// ABOUTME: Re-exports GoalsConfig, its sections, and ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Goal calculator configuration sections
pub mod goals;

pub use error::ConfigError;
pub use goals::{
    ActivityFactorsConfig, BiometricLimits, BmrConfig, GoalAdjustmentConfig, GoalsConfig,
    MacroConfig, ProteinConfig,
};
