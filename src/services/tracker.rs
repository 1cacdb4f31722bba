// ABOUTME: Tracker service orchestrating onboarding, goals, daily logging, and workouts
// ABOUTME: Combines injected repositories with the goal calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::{
    Database, InMemoryStore, ProfileRepository, ShoppingListRepository, StatsRepository,
    WorkoutRepository,
};
use chrono::{NaiveDate, Utc};
use kilo_core::errors::{AppError, AppResult};
use kilo_core::models::{
    DailyGoals, DailyStats, MealEntry, OnboardingForm, ProfileUpdate, ShoppingItem, UserProfile,
    WorkoutSession,
};
use kilo_intelligence::{DailyProgress, GoalBreakdown, GoalCalculator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Everything the dashboard shows for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Display name from the profile
    pub name: String,
    /// Targets for the day
    pub goals: DailyGoals,
    /// Actuals recorded so far
    pub stats: DailyStats,
    /// Actuals compared with targets
    pub progress: DailyProgress,
    /// BMR, TDEE, and any clamping behind the goals
    pub goal_breakdown: GoalBreakdown,
}

/// Single-user tracker operations
#[derive(Clone)]
pub struct TrackerService {
    profiles: Arc<dyn ProfileRepository>,
    stats: Arc<dyn StatsRepository>,
    workouts: Arc<dyn WorkoutRepository>,
    shopping: Arc<dyn ShoppingListRepository>,
    calculator: GoalCalculator,
}

impl TrackerService {
    /// Create a service over explicit repositories
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        stats: Arc<dyn StatsRepository>,
        workouts: Arc<dyn WorkoutRepository>,
        shopping: Arc<dyn ShoppingListRepository>,
        calculator: GoalCalculator,
    ) -> Self {
        Self {
            profiles,
            stats,
            workouts,
            shopping,
            calculator,
        }
    }

    /// Create a service whose repositories all live in `database`
    #[must_use]
    pub fn with_database(database: Database, calculator: GoalCalculator) -> Self {
        let db = Arc::new(database);
        Self::new(db.clone(), db.clone(), db.clone(), db, calculator)
    }

    /// Create a service over a fresh in-memory store
    #[must_use]
    pub fn in_memory(calculator: GoalCalculator) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store.clone(), store.clone(), store, calculator)
    }

    /// Goal calculator in use
    #[must_use]
    pub const fn calculator(&self) -> &GoalCalculator {
        &self.calculator
    }

    // ================================================================================================
    // Profile
    // ================================================================================================

    /// Finish onboarding and store the resulting profile
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or unrealistic biometrics,
    /// or a storage error if saving fails
    pub async fn complete_onboarding(&self, form: OnboardingForm) -> AppResult<UserProfile> {
        self.calculator.validate(&form.biometrics())?;
        let profile = form.into_profile(Utc::now())?;
        self.profiles.save_profile(&profile).await?;
        info!(name = %profile.name, goal = %profile.goal, "Onboarding completed");
        Ok(profile)
    }

    /// The stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be read
    pub async fn profile(&self) -> AppResult<Option<UserProfile>> {
        self.profiles.get_profile().await
    }

    /// Whether a completed profile exists
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be read
    pub async fn is_onboarding_completed(&self) -> AppResult<bool> {
        Ok(self
            .profile()
            .await?
            .is_some_and(|profile| profile.onboarding_completed))
    }

    /// Merge `update` into the stored profile
    ///
    /// The stored profile is only replaced when the merged result is valid.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` without a profile, a validation error for
    /// invalid merged values, or a storage error
    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<UserProfile> {
        let mut profile = self
            .profile()
            .await?
            .ok_or_else(|| AppError::not_found("Profile"))?;

        update.apply(&mut profile);
        profile.name = profile.name.trim().to_owned();
        if profile.name.is_empty() {
            return Err(AppError::missing_field("name"));
        }
        self.calculator.validate(&profile.biometrics())?;

        self.profiles.save_profile(&profile).await?;
        debug!(name = %profile.name, "Profile updated");
        Ok(profile)
    }

    /// Delete all stored data
    ///
    /// # Errors
    ///
    /// Returns an error if any repository fails to clear
    pub async fn reset(&self) -> AppResult<()> {
        self.profiles.clear_profile().await?;
        self.stats.clear_stats().await?;
        self.workouts.clear_workouts().await?;
        self.shopping.clear_items().await?;
        info!("All tracker data reset");
        Ok(())
    }

    // ================================================================================================
    // Goals
    // ================================================================================================

    /// Daily goals for the stored profile
    ///
    /// `None` means there is nothing to compute from: no profile, onboarding not
    /// finished, or a stored profile the calculator rejects.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be read
    pub async fn daily_goals(&self) -> AppResult<Option<DailyGoals>> {
        Ok(self
            .goal_breakdown()
            .await?
            .map(|(_, breakdown)| breakdown.goals))
    }

    async fn goal_breakdown(&self) -> AppResult<Option<(UserProfile, GoalBreakdown)>> {
        let Some(profile) = self.profile().await? else {
            return Ok(None);
        };
        if !profile.onboarding_completed {
            return Ok(None);
        }
        match self.calculator.calculate_detailed(&profile.biometrics()) {
            Ok(breakdown) => Ok(Some((profile, breakdown))),
            Err(e) => {
                warn!(error = %e, "Goals unavailable for the stored profile");
                Ok(None)
            }
        }
    }

    // ================================================================================================
    // Daily stats
    // ================================================================================================

    /// Stats recorded for `date`, zeroed when nothing was logged yet
    ///
    /// # Errors
    ///
    /// Returns an error if the stats cannot be read
    pub async fn today_stats(&self, date: NaiveDate) -> AppResult<DailyStats> {
        Ok(self
            .stats
            .get_stats(date)
            .await?
            .unwrap_or_else(|| DailyStats::empty(date)))
    }

    /// Add a meal to the totals of `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the stats cannot be read or saved
    pub async fn log_meal(&self, date: NaiveDate, meal: MealEntry) -> AppResult<DailyStats> {
        let stats = self.stats.record_meal(date, &meal).await?;
        debug!(%date, meal = %meal.meal_type, calories = meal.calories, "Meal logged");
        Ok(stats)
    }

    /// Add walked steps to `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the stats cannot be read or saved
    pub async fn add_steps(&self, date: NaiveDate, steps: u32) -> AppResult<DailyStats> {
        let stats = self.stats.record_steps(date, steps).await?;
        debug!(%date, steps, total = stats.steps, "Steps added");
        Ok(stats)
    }

    // ================================================================================================
    // Workouts
    // ================================================================================================

    /// Store a finished session and mark its day as trained
    ///
    /// Both changes are committed together; a failure leaves neither behind.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an unnamed session, or a storage error
    pub async fn complete_workout(&self, session: WorkoutSession) -> AppResult<DailyStats> {
        if session.name.trim().is_empty() {
            return Err(AppError::missing_field("workout name"));
        }
        let stats = self.workouts.record_workout(&session).await?;

        info!(
            workout = %session.name,
            sets = session.completed_sets(),
            volume_kg = session.total_volume_kg(),
            "Workout completed"
        );
        Ok(stats)
    }

    /// Most recent sessions first
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn workout_history(&self, limit: u32) -> AppResult<Vec<WorkoutSession>> {
        self.workouts.list_workouts(limit).await
    }

    // ================================================================================================
    // Dashboard
    // ================================================================================================

    /// Goals, actuals, and progress for `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the profile or stats cannot be read
    pub async fn dashboard(&self, date: NaiveDate) -> AppResult<Option<DashboardSnapshot>> {
        let Some((profile, breakdown)) = self.goal_breakdown().await? else {
            return Ok(None);
        };
        let stats = self.today_stats(date).await?;
        let progress = DailyProgress::compute(&breakdown.goals, &stats);

        Ok(Some(DashboardSnapshot {
            name: profile.name,
            goals: breakdown.goals,
            stats,
            progress,
            goal_breakdown: breakdown,
        }))
    }

    // ================================================================================================
    // Shopping list
    // ================================================================================================

    /// Add a recipe to the shopping list
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or a storage error
    pub async fn add_shopping_item(
        &self,
        name: &str,
        ingredients: Vec<String>,
    ) -> AppResult<ShoppingItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("item name"));
        }
        let item = ShoppingItem::new(name, ingredients);
        self.shopping.add_item(&item).await?;
        Ok(item)
    }

    /// Items in the order they were added
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be read
    pub async fn shopping_list(&self) -> AppResult<Vec<ShoppingItem>> {
        self.shopping.list_items().await
    }

    /// Remove an item; `false` when it was not on the list
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be updated
    pub async fn remove_shopping_item(&self, id: Uuid) -> AppResult<bool> {
        self.shopping.remove_item(id).await
    }
}
