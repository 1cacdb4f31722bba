// ABOUTME: Application-wide constants grouped by domain
// ABOUTME: Energy densities, policy defaults, biometric limits, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Policy defaults that are not derived from biometrics
pub mod defaults {
    /// Daily step goal shown on the dashboard
    pub const DAILY_STEP_GOAL: u32 = 10_000;
    /// Number of workouts returned by history listings when no limit is given
    pub const WORKOUT_HISTORY_LIMIT: u32 = 20;
    /// Default database location for the CLI
    pub const DATABASE_URL: &str = "sqlite:./data/kilo.db";
}

/// Realistic biometric ranges accepted by the goal calculator
pub mod limits {
    /// Minimum body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum age (years)
    pub const MIN_AGE_YEARS: u32 = 13;
    /// Maximum age (years)
    pub const MAX_AGE_YEARS: u32 = 100;
}

/// Names used in structured logs
pub mod service_names {
    /// CLI binary
    pub const KILO_CLI: &str = "kilo-cli";
}

/// Environment variable names
pub mod env_config {
    /// Database connection URL
    pub const DATABASE_URL: &str = "KILO_DATABASE_URL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Daily step goal override
    pub const DAILY_STEP_GOAL: &str = "KILO_DAILY_STEP_GOAL";
    /// Cut deficit override (positive kcal)
    pub const CUT_DEFICIT_KCAL: &str = "KILO_CUT_DEFICIT_KCAL";
    /// Bulk surplus override (kcal)
    pub const BULK_SURPLUS_KCAL: &str = "KILO_BULK_SURPLUS_KCAL";
    /// Fat share of calories override (0-1)
    pub const FAT_SHARE: &str = "KILO_FAT_SHARE";
}
