// ABOUTME: Configuration management module for the tracker
// ABOUTME: Environment-driven settings plus re-exported goal calculator configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: database location, deployment mode, and log level from environment variables
//! - **Goals**: formula constants of the goal calculator (from `kilo-intelligence`)

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, DatabaseUrl, Environment, LogLevel};
pub use kilo_intelligence::config::{ConfigError, GoalsConfig};
