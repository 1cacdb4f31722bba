// ABOUTME: Daily goal calculator turning a biometric profile into calorie and macro targets
// ABOUTME: Mifflin-St Jeor BMR, activity multiplier, goal adjustment, and macro allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculator Module
//!
//! Computes a user's daily energy and macronutrient targets:
//!
//! 1. BMR with the Mifflin-St Jeor equation
//! 2. TDEE = BMR x activity factor
//! 3. Target calories = TDEE + goal adjustment (cut -500, bulk +300, recomp 0)
//! 4. Protein = weight x goal ratio (cut 2.2, bulk 1.8, recomp 2.0 g/kg)
//! 5. Fat = 25% of target calories at 9 kcal/g
//! 6. Carbohydrates = remaining calories at 4 kcal/g
//!
//! The calculation is pure and synchronous. Inputs are validated before use: a
//! non-finite or non-positive number, or a value outside the realistic ranges
//! in [`BiometricLimits`](crate::config::BiometricLimits), is rejected rather
//! than allowed to leak `NaN` into the result.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::GoalsConfig;
use kilo_core::errors::{AppError, AppResult};
use kilo_core::models::{Biometrics, DailyGoals};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A silent correction applied to a degenerate intermediate value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalAdjustment {
    /// Goal-adjusted calories fell below zero
    CaloriesClampedToZero {
        /// Unclamped target (kcal)
        raw: f64,
    },
    /// Protein and fat already exceed the calorie target
    CarbsClampedToZero {
        /// Unclamped carbohydrate target (g)
        raw: f64,
    },
}

/// Goals together with the intermediate energy values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalBreakdown {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted calories before rounding, after clamping
    pub target_calories: f64,
    /// Rounded daily goals
    pub goals: DailyGoals,
    /// Corrections applied on the way
    pub adjustments: Vec<GoalAdjustment>,
}

impl GoalBreakdown {
    /// True when any value had to be clamped
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.adjustments.is_empty()
    }
}

/// Stateless daily goal calculator
#[derive(Debug, Clone, Default)]
pub struct GoalCalculator {
    config: GoalsConfig,
}

impl GoalCalculator {
    /// Calculator using `config`
    #[must_use]
    pub const fn new(config: GoalsConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &GoalsConfig {
        &self.config
    }

    /// Check that every numeric input is finite, positive, and realistic
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for non-finite or non-positive values
    /// - `ValueOutOfRange` for values outside the configured limits
    pub fn validate(&self, biometrics: &Biometrics) -> AppResult<()> {
        let limits = &self.config.limits;

        check_measure("weight_kg", biometrics.weight_kg)?;
        check_measure("height_cm", biometrics.height_cm)?;
        if biometrics.age_years == 0 {
            return Err(AppError::invalid_input("age_years must be positive"));
        }

        if !limits.weight_kg.contains(&biometrics.weight_kg) {
            return Err(out_of_range("weight_kg", biometrics.weight_kg, &limits.weight_kg));
        }
        if !limits.height_cm.contains(&biometrics.height_cm) {
            return Err(out_of_range("height_cm", biometrics.height_cm, &limits.height_cm));
        }
        if !limits.age_years.contains(&biometrics.age_years) {
            return Err(out_of_range("age_years", biometrics.age_years, &limits.age_years));
        }
        Ok(())
    }

    /// Basal Metabolic Rate using Mifflin-St Jeor (1990)
    ///
    /// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + sex constant
    /// - Men: +5
    /// - Women: -161
    ///
    /// Inputs are not validated here; use [`Self::calculate`] for checked results.
    #[must_use]
    pub fn bmr(&self, biometrics: &Biometrics) -> f64 {
        let config = &self.config.bmr;
        let weight_component = config.weight_coef * biometrics.weight_kg;
        let height_component = config.height_coef * biometrics.height_cm;
        let age_component = config.age_coef * f64::from(biometrics.age_years);

        weight_component + height_component + age_component + config.sex_constant(biometrics.sex)
    }

    /// Total Daily Energy Expenditure: BMR x activity factor
    #[must_use]
    pub fn tdee(&self, biometrics: &Biometrics) -> f64 {
        self.bmr(biometrics) * self.config.activity_factors.factor(biometrics.activity_level)
    }

    /// TDEE plus the goal's caloric adjustment, unclamped
    #[must_use]
    pub fn target_calories(&self, biometrics: &Biometrics) -> f64 {
        self.tdee(biometrics) + self.config.goal_adjustments.adjustment(biometrics.goal)
    }

    /// Compute daily goals
    ///
    /// # Errors
    ///
    /// Returns a validation error if the biometrics are invalid (see [`Self::validate`]),
    /// or `ConfigError` if an unvalidated configuration yields a non-finite target
    pub fn calculate(&self, biometrics: &Biometrics) -> AppResult<DailyGoals> {
        self.calculate_detailed(biometrics)
            .map(|breakdown| breakdown.goals)
    }

    /// Compute daily goals along with BMR, TDEE, and any clamping applied
    ///
    /// # Errors
    ///
    /// Returns a validation error if the biometrics are invalid (see [`Self::validate`]),
    /// or `ConfigError` if an unvalidated configuration yields a non-finite target
    pub fn calculate_detailed(&self, biometrics: &Biometrics) -> AppResult<GoalBreakdown> {
        self.validate(biometrics)?;

        let macros = &self.config.macros;
        let mut adjustments = Vec::new();

        let bmr = self.bmr(biometrics);
        let tdee = bmr * self.config.activity_factors.factor(biometrics.activity_level);
        let raw_target = tdee + self.config.goal_adjustments.adjustment(biometrics.goal);
        if !raw_target.is_finite() {
            return Err(AppError::config(format!(
                "goal calculator produced a non-finite calorie target ({raw_target}); check the goals configuration"
            )));
        }

        let target_calories = if raw_target < 0.0 {
            warn!(
                goal = %biometrics.goal,
                weight_kg = biometrics.weight_kg,
                raw_calories = raw_target,
                "Goal-adjusted calories below zero, clamping to 0"
            );
            adjustments.push(GoalAdjustment::CaloriesClampedToZero { raw: raw_target });
            0.0
        } else {
            raw_target
        };

        let protein_g = (biometrics.weight_kg * self.config.protein.g_per_kg(biometrics.goal)).round();
        if !protein_g.is_finite() {
            return Err(AppError::config(format!(
                "goal calculator produced a non-finite protein target ({protein_g}); check the goals configuration"
            )));
        }
        let fat_kcal_target = target_calories * macros.fat_share_of_calories;
        let fat_g = (fat_kcal_target / macros.fat_kcal_per_g).round();

        let protein_kcal = protein_g * macros.protein_kcal_per_g;
        let fat_kcal = fat_g * macros.fat_kcal_per_g;
        let raw_carbs_g = ((target_calories - protein_kcal - fat_kcal) / macros.carbs_kcal_per_g).round();

        let carbs_g = if raw_carbs_g < 0.0 {
            warn!(
                goal = %biometrics.goal,
                weight_kg = biometrics.weight_kg,
                target_calories,
                raw_carbs_g,
                "Protein and fat exceed calorie target, clamping carbohydrates to 0"
            );
            adjustments.push(GoalAdjustment::CarbsClampedToZero { raw: raw_carbs_g });
            0.0
        } else {
            raw_carbs_g
        };

        let goals = DailyGoals {
            calories: to_whole(target_calories),
            protein_g: to_whole(protein_g),
            carbs_g: to_whole(carbs_g),
            fat_g: to_whole(fat_g),
            step_goal: self.config.daily_step_goal,
        };

        debug!(
            bmr,
            tdee,
            calories = goals.calories,
            protein_g = goals.protein_g,
            carbs_g = goals.carbs_g,
            fat_g = goals.fat_g,
            "Daily goals calculated"
        );

        Ok(GoalBreakdown {
            bmr,
            tdee,
            target_calories,
            goals,
            adjustments,
        })
    }
}

/// Compute daily goals with the default configuration
///
/// # Errors
///
/// Returns a validation error if the biometrics are invalid
pub fn calculate_daily_goals(biometrics: &Biometrics) -> AppResult<DailyGoals> {
    GoalCalculator::default().calculate(biometrics)
}

fn check_measure(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{field} must be a finite number"
        )));
    }
    if value <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "{field} must be positive, got {value}"
        )));
    }
    Ok(())
}

fn out_of_range<T: std::fmt::Display>(
    field: &str,
    value: T,
    range: &std::ops::RangeInclusive<T>,
) -> AppError {
    AppError::out_of_range(format!(
        "{field} {value} is outside the supported range {}..={}",
        range.start(),
        range.end()
    ))
    .with_details(serde_json::json!({ "field": field }))
}

// Finite by the checks in `calculate_detailed`; rounds and saturates into `u32`
fn to_whole(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use kilo_core::errors::ErrorCode;
    use kilo_core::models::{ActivityLevel, Goal, Sex};

    fn biometrics() -> Biometrics {
        Biometrics {
            weight_kg: 75.0,
            height_cm: 180.0,
            age_years: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Recomp,
        }
    }

    #[test]
    fn test_bmr_male_typical() {
        // 10*75 + 6.25*180 - 5*30 + 5 = 750 + 1125 - 150 + 5
        let bmr = GoalCalculator::default().bmr(&biometrics());
        assert!((bmr - 1730.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female_typical() {
        let input = Biometrics {
            weight_kg: 60.0,
            height_cm: 165.0,
            age_years: 25,
            sex: Sex::Female,
            ..biometrics()
        };
        let bmr = GoalCalculator::default().bmr(&input);
        assert!((bmr - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_sedentary() {
        let tdee = GoalCalculator::default().tdee(&biometrics());
        assert!((tdee - 1730.0 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_step_goal_is_policy_constant() {
        let goals = GoalCalculator::default().calculate(&biometrics()).unwrap();
        assert_eq!(goals.step_goal, 10_000);
    }

    #[test]
    fn test_custom_step_goal() {
        let config = GoalsConfig {
            daily_step_goal: 8_000,
            ..GoalsConfig::default()
        };
        let goals = GoalCalculator::new(config).calculate(&biometrics()).unwrap();
        assert_eq!(goals.step_goal, 8_000);
    }

    #[test]
    fn test_nan_weight_rejected() {
        let input = Biometrics {
            weight_kg: f64::NAN,
            ..biometrics()
        };
        let err = GoalCalculator::default().calculate(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("weight_kg"));
    }

    #[test]
    fn test_zero_age_rejected() {
        let input = Biometrics {
            age_years: 0,
            ..biometrics()
        };
        let err = GoalCalculator::default().calculate(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_out_of_range_height() {
        let input = Biometrics {
            height_cm: 260.0,
            ..biometrics()
        };
        let err = GoalCalculator::default().calculate(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.details["field"], "height_cm");
    }

    #[test]
    fn test_non_finite_adjustment_fails_validation() {
        let mut config = GoalsConfig::default();
        config.goal_adjustments.cut_kcal = f64::NAN;
        assert!(config.validate().is_err());

        config.goal_adjustments.cut_kcal = -500.0;
        config.goal_adjustments.bulk_kcal = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_target_is_an_error() {
        let mut config = GoalsConfig::default();
        config.goal_adjustments.recomp_kcal = f64::NAN;
        let err = GoalCalculator::new(config.clone())
            .calculate_detailed(&biometrics())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);

        config.goal_adjustments.recomp_kcal = f64::INFINITY;
        let err = GoalCalculator::new(config).calculate(&biometrics()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_unrealistic_protein_ratio_is_an_error() {
        let mut config = GoalsConfig::default();
        config.protein.recomp_g_per_kg = f64::INFINITY;
        let err = GoalCalculator::new(config).calculate(&biometrics()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_breakdown_is_not_degenerate_for_typical_profile() {
        let breakdown = GoalCalculator::default()
            .calculate_detailed(&biometrics())
            .unwrap();
        assert!(!breakdown.is_degenerate());
        assert!((breakdown.target_calories - breakdown.tdee).abs() < f64::EPSILON);
    }
}
