// ABOUTME: Repository traits for profile, daily stats, workout history, and shopping list storage
// ABOUTME: Injected into services so callers never touch ambient storage directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository pattern for persistence
//!
//! Each trait covers one storage concern. Both [`Database`](crate::database::Database)
//! and [`InMemoryStore`](crate::database::InMemoryStore) implement all of them,
//! so services and tests can swap backends freely.

use async_trait::async_trait;
use chrono::NaiveDate;
use kilo_core::errors::AppResult;
use kilo_core::models::{DailyStats, MealEntry, ShoppingItem, UserProfile, WorkoutSession};
use uuid::Uuid;

/// Single-user profile storage
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The stored profile, if onboarding has produced one
    async fn get_profile(&self) -> AppResult<Option<UserProfile>>;

    /// Insert or replace the profile
    async fn save_profile(&self, profile: &UserProfile) -> AppResult<()>;

    /// Delete the profile
    async fn clear_profile(&self) -> AppResult<()>;
}

/// Per-day actuals storage
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Stats recorded for `date`
    async fn get_stats(&self, date: NaiveDate) -> AppResult<Option<DailyStats>>;

    /// Insert or replace the stats for `stats.date`
    async fn save_stats(&self, stats: &DailyStats) -> AppResult<()>;

    /// Add a meal to the totals of `date` in one atomic read-modify-write
    async fn record_meal(&self, date: NaiveDate, meal: &MealEntry) -> AppResult<DailyStats>;

    /// Add steps to `date` in one atomic read-modify-write
    async fn record_steps(&self, date: NaiveDate, steps: u32) -> AppResult<DailyStats>;

    /// Delete every day's stats
    async fn clear_stats(&self) -> AppResult<()>;
}

/// Workout history storage
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Append a finished session
    async fn add_workout(&self, session: &WorkoutSession) -> AppResult<()>;

    /// Append a session and mark its day as trained; either both happen or neither
    async fn record_workout(&self, session: &WorkoutSession) -> AppResult<DailyStats>;

    /// Most recent sessions first, at most `limit`
    async fn list_workouts(&self, limit: u32) -> AppResult<Vec<WorkoutSession>>;

    /// Delete the history
    async fn clear_workouts(&self) -> AppResult<()>;
}

/// Shopping list storage
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Append an item
    async fn add_item(&self, item: &ShoppingItem) -> AppResult<()>;

    /// All items in insertion order
    async fn list_items(&self) -> AppResult<Vec<ShoppingItem>>;

    /// Remove an item; `false` when no item had that ID
    async fn remove_item(&self, id: Uuid) -> AppResult<bool>;

    /// Empty the list
    async fn clear_items(&self) -> AppResult<()>;
}
