// ABOUTME: Goal calculator configuration: BMR coefficients, activity factors, macro policy
// ABOUTME: Defaults reproduce the canonical Mifflin-St Jeor goal formula exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Goal Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use kilo_core::constants::{defaults, energy, env_config, limits};
use kilo_core::models::{ActivityLevel, Goal, Sex};
use serde::{Deserialize, Serialize};
use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Complete configuration of the daily goal calculator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalsConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
    /// Caloric adjustment per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein ratio per goal
    pub protein: ProteinConfig,
    /// Fat share and energy densities
    pub macros: MacroConfig,
    /// Constant daily step target
    pub daily_step_goal: u32,
    /// Accepted biometric ranges
    pub limits: BiometricLimits,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl BmrConfig {
    /// Constant term for `sex`
    #[must_use]
    pub const fn sex_constant(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male_constant,
            Sex::Female => self.female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub high: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extreme: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for `level`
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::High => self.high,
            ActivityLevel::Extreme => self.extreme,
        }
    }
}

/// Caloric adjustment applied to TDEE (kcal, signed)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAdjustmentConfig {
    /// Cut: -500
    pub cut_kcal: f64,
    /// Bulk: +300
    pub bulk_kcal: f64,
    /// Recomp: 0
    pub recomp_kcal: f64,
}

impl GoalAdjustmentConfig {
    /// Adjustment for `goal`
    #[must_use]
    pub const fn adjustment(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Cut => self.cut_kcal,
            Goal::Bulk => self.bulk_kcal,
            Goal::Recomp => self.recomp_kcal,
        }
    }
}

/// Protein target per kilogram of body weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProteinConfig {
    /// Cut: 2.2 g/kg (muscle preservation in a deficit)
    pub cut_g_per_kg: f64,
    /// Bulk: 1.8 g/kg
    pub bulk_g_per_kg: f64,
    /// Recomp: 2.0 g/kg
    pub recomp_g_per_kg: f64,
}

impl ProteinConfig {
    /// Ratio for `goal`
    #[must_use]
    pub const fn g_per_kg(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Cut => self.cut_g_per_kg,
            Goal::Bulk => self.bulk_g_per_kg,
            Goal::Recomp => self.recomp_g_per_kg,
        }
    }
}

/// Fat share of calories and macronutrient energy densities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroConfig {
    /// Fraction of target calories allocated to fat (0.25)
    pub fat_share_of_calories: f64,
    /// Protein energy density (4 kcal/g)
    pub protein_kcal_per_g: f64,
    /// Carbohydrate energy density (4 kcal/g)
    pub carbs_kcal_per_g: f64,
    /// Fat energy density (9 kcal/g)
    pub fat_kcal_per_g: f64,
}

/// Realistic input ranges; values outside are rejected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiometricLimits {
    /// Body weight (kg)
    pub weight_kg: RangeInclusive<f64>,
    /// Height (cm)
    pub height_cm: RangeInclusive<f64>,
    /// Age (years)
    pub age_years: RangeInclusive<u32>,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            goal_adjustments: GoalAdjustmentConfig::default(),
            protein: ProteinConfig::default(),
            macros: MacroConfig::default(),
            daily_step_goal: defaults::DAILY_STEP_GOAL,
            limits: BiometricLimits::default(),
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            high: 1.725,
            extreme: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            cut_kcal: -500.0,
            bulk_kcal: 300.0,
            recomp_kcal: 0.0,
        }
    }
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            cut_g_per_kg: 2.2,
            bulk_g_per_kg: 1.8,
            recomp_g_per_kg: 2.0,
        }
    }
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            fat_share_of_calories: 0.25,
            protein_kcal_per_g: energy::PROTEIN_KCAL_PER_G,
            carbs_kcal_per_g: energy::CARBS_KCAL_PER_G,
            fat_kcal_per_g: energy::FAT_KCAL_PER_G,
        }
    }
}

impl Default for BiometricLimits {
    fn default() -> Self {
        Self {
            weight_kg: limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG,
            height_cm: limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM,
            age_years: limits::MIN_AGE_YEARS..=limits::MAX_AGE_YEARS,
        }
    }
}

impl GoalsConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(steps) = env_value::<u32>(env_config::DAILY_STEP_GOAL)? {
            self.daily_step_goal = steps;
        }
        if let Some(deficit) = env_value::<f64>(env_config::CUT_DEFICIT_KCAL)? {
            if !deficit.is_finite() || deficit <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "KILO_CUT_DEFICIT_KCAL must be a positive number of kcal",
                ));
            }
            self.goal_adjustments.cut_kcal = -deficit;
        }
        if let Some(surplus) = env_value::<f64>(env_config::BULK_SURPLUS_KCAL)? {
            if !surplus.is_finite() {
                return Err(ConfigError::ValueOutOfRange(
                    "KILO_BULK_SURPLUS_KCAL must be a finite number of kcal",
                ));
            }
            self.goal_adjustments.bulk_kcal = surplus;
        }
        if let Some(share) = env_value::<f64>(env_config::FAT_SHARE)? {
            self.macros.fat_share_of_calories = share;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        let coefficients = [
            bmr.weight_coef,
            bmr.height_coef,
            bmr.age_coef,
            bmr.male_constant,
            bmr.female_constant,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR coefficients must be finite",
            ));
        }

        let factors = ActivityLevel::ALL.map(|level| self.activity_factors.factor(level));
        if factors.iter().any(|f| !f.is_finite() || *f <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be positive",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must be strictly increasing from sedentary to extreme",
            ));
        }

        let adjustments = &self.goal_adjustments;
        if [adjustments.cut_kcal, adjustments.bulk_kcal, adjustments.recomp_kcal]
            .iter()
            .any(|kcal| !kcal.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "goal adjustments must be finite numbers of kcal",
            ));
        }
        if adjustments.cut_kcal >= adjustments.recomp_kcal {
            return Err(ConfigError::InvalidRange(
                "cut adjustment must be below the recomp adjustment",
            ));
        }
        if adjustments.bulk_kcal <= adjustments.recomp_kcal {
            return Err(ConfigError::InvalidRange(
                "bulk adjustment must be above the recomp adjustment",
            ));
        }

        let ratios = [
            self.protein.cut_g_per_kg,
            self.protein.bulk_g_per_kg,
            self.protein.recomp_g_per_kg,
        ];
        if ratios.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein ratios must be positive",
            ));
        }

        let fat_share = self.macros.fat_share_of_calories;
        if fat_share.is_nan() || fat_share <= 0.0 || fat_share >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fat share of calories must be between 0 and 1 (exclusive)",
            ));
        }
        let densities = [
            self.macros.protein_kcal_per_g,
            self.macros.carbs_kcal_per_g,
            self.macros.fat_kcal_per_g,
        ];
        if densities.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "macronutrient energy densities must be positive",
            ));
        }

        if self.daily_step_goal == 0 {
            return Err(ConfigError::ValueOutOfRange("daily step goal must be > 0"));
        }

        if self.limits.weight_kg.is_empty()
            || self.limits.height_cm.is_empty()
            || self.limits.age_years.is_empty()
        {
            return Err(ConfigError::InvalidRange("biometric limits must not be empty"));
        }

        Ok(())
    }
}

fn env_value<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{key}={raw}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
