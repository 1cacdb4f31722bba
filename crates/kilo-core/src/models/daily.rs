// ABOUTME: Daily goal targets and the day's recorded actuals
// ABOUTME: DailyGoals is derived on demand, DailyStats is persisted per date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::MealEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily energy, macronutrient, and step targets
///
/// Recomputed from the current profile whenever needed and never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyGoals {
    /// Target energy intake (kcal/day)
    pub calories: u32,
    /// Protein target (g)
    pub protein_g: u32,
    /// Carbohydrate target (g)
    pub carbs_g: u32,
    /// Fat target (g)
    pub fat_g: u32,
    /// Step target
    pub step_goal: u32,
}

/// What the user actually did on a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyStats {
    /// Calendar day these numbers belong to
    pub date: NaiveDate,
    /// Steps walked
    pub steps: u32,
    /// Energy consumed (kcal)
    pub calories: u32,
    /// Protein consumed (g)
    pub protein_g: u32,
    /// Carbohydrates consumed (g)
    pub carbs_g: u32,
    /// Fat consumed (g)
    pub fat_g: u32,
    /// Whether a workout was finished that day
    pub workout_completed: bool,
}

impl DailyStats {
    /// Zeroed record for `date`
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            calories: 0,
            protein_g: 0,
            carbs_g: 0,
            fat_g: 0,
            workout_completed: false,
        }
    }

    /// Add a meal's nutrition to the day's totals
    pub fn add_meal(&mut self, meal: &MealEntry) {
        self.calories = self.calories.saturating_add(meal.calories);
        self.protein_g = self.protein_g.saturating_add(meal.protein_g);
        self.carbs_g = self.carbs_g.saturating_add(meal.carbs_g);
        self.fat_g = self.fat_g.saturating_add(meal.fat_g);
    }

    /// Add walked steps
    pub fn add_steps(&mut self, steps: u32) {
        self.steps = self.steps.saturating_add(steps);
    }
}
