// ABOUTME: Progress of the day's actuals against daily goals
// ABOUTME: Percentages and remaining amounts for dashboard progress rings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kilo_core::models::{DailyGoals, DailyStats};
use serde::{Deserialize, Serialize};

/// One metric compared against its goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricProgress {
    /// Recorded amount
    pub actual: u32,
    /// Target amount
    pub goal: u32,
    /// `actual / goal * 100`; `None` when the goal is zero
    pub percent: Option<f64>,
    /// `goal - actual`, negative once the goal is exceeded
    pub remaining: i64,
}

impl MetricProgress {
    /// Compare `actual` with `goal`
    #[must_use]
    pub fn new(actual: u32, goal: u32) -> Self {
        let percent = (goal > 0).then(|| f64::from(actual) / f64::from(goal) * 100.0);
        Self {
            actual,
            goal,
            percent,
            remaining: i64::from(goal) - i64::from(actual),
        }
    }

    /// Fill fraction for a progress ring, clamped to `[0, 1]`
    #[must_use]
    pub fn ring_fraction(&self) -> f64 {
        self.percent
            .map_or(0.0, |percent| (percent / 100.0).clamp(0.0, 1.0))
    }

    /// Whether the goal has been reached
    #[must_use]
    pub const fn is_met(&self) -> bool {
        self.goal > 0 && self.actual >= self.goal
    }
}

/// Progress of every tracked metric for one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyProgress {
    /// Steps
    pub steps: MetricProgress,
    /// Energy (kcal)
    pub calories: MetricProgress,
    /// Protein (g)
    pub protein: MetricProgress,
    /// Carbohydrates (g)
    pub carbs: MetricProgress,
    /// Fat (g)
    pub fat: MetricProgress,
}

impl DailyProgress {
    /// Compare `stats` with `goals`
    #[must_use]
    pub fn compute(goals: &DailyGoals, stats: &DailyStats) -> Self {
        Self {
            steps: MetricProgress::new(stats.steps, goals.step_goal),
            calories: MetricProgress::new(stats.calories, goals.calories),
            protein: MetricProgress::new(stats.protein_g, goals.protein_g),
            carbs: MetricProgress::new(stats.carbs_g, goals.carbs_g),
            fat: MetricProgress::new(stats.fat_g, goals.fat_g),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goals() -> DailyGoals {
        DailyGoals {
            calories: 2259,
            protein_g: 176,
            carbs_g: 0,
            fat_g: 63,
            step_goal: 10_000,
        }
    }

    #[test]
    fn test_percent_and_remaining() {
        let progress = MetricProgress::new(2_500, 10_000);
        assert_eq!(progress.percent, Some(25.0));
        assert_eq!(progress.remaining, 7_500);
        assert!((progress.ring_fraction() - 0.25).abs() < f64::EPSILON);
        assert!(!progress.is_met());
    }

    #[test]
    fn test_zero_goal_has_no_percent() {
        let progress = MetricProgress::new(40, 0);
        assert_eq!(progress.percent, None);
        assert!((progress.ring_fraction() - 0.0).abs() < f64::EPSILON);
        assert_eq!(progress.remaining, -40);
        assert!(!progress.is_met());
    }

    #[test]
    fn test_ring_is_capped_when_over_goal() {
        let progress = MetricProgress::new(300, 200);
        assert_eq!(progress.percent, Some(150.0));
        assert!((progress.ring_fraction() - 1.0).abs() < f64::EPSILON);
        assert_eq!(progress.remaining, -100);
        assert!(progress.is_met());
    }

    #[test]
    fn test_daily_progress_maps_every_metric() {
        let mut stats = DailyStats::empty(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        stats.steps = 5_000;
        stats.calories = 1_000;
        stats.protein_g = 88;
        stats.carbs_g = 10;
        let progress = DailyProgress::compute(&goals(), &stats);

        assert_eq!(progress.steps.percent, Some(50.0));
        assert_eq!(progress.protein.percent, Some(50.0));
        assert_eq!(progress.calories.remaining, 1_259);
        assert_eq!(progress.carbs.percent, None);
        assert_eq!(progress.fat.actual, 0);
    }
}
