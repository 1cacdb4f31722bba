// ABOUTME: In-memory implementation of every tracker repository
// ABOUTME: Used by ephemeral CLI sessions and tests that do not need SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProfileRepository, ShoppingListRepository, StatsRepository, WorkoutRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use kilo_core::errors::AppResult;
use kilo_core::models::{DailyStats, MealEntry, ShoppingItem, UserProfile, WorkoutSession};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local store; clones share the same state
#[derive(Clone, Default)]
pub struct InMemoryStore {
    profile: Arc<RwLock<Option<UserProfile>>>,
    stats: Arc<DashMap<NaiveDate, DailyStats>>,
    workouts: Arc<RwLock<Vec<WorkoutSession>>>,
    shopping: Arc<RwLock<Vec<ShoppingItem>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // The entry guard holds the shard lock for the whole read-modify-write
    fn update_stats(&self, date: NaiveDate, change: impl FnOnce(&mut DailyStats)) -> DailyStats {
        let mut entry = self
            .stats
            .entry(date)
            .or_insert_with(|| DailyStats::empty(date));
        change(entry.value_mut());
        entry.value().clone()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn get_profile(&self) -> AppResult<Option<UserProfile>> {
        Ok(self.profile.read().await.clone())
    }

    async fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }

    async fn clear_profile(&self) -> AppResult<()> {
        *self.profile.write().await = None;
        Ok(())
    }
}

#[async_trait]
impl StatsRepository for InMemoryStore {
    async fn get_stats(&self, date: NaiveDate) -> AppResult<Option<DailyStats>> {
        Ok(self.stats.get(&date).map(|entry| entry.value().clone()))
    }

    async fn save_stats(&self, stats: &DailyStats) -> AppResult<()> {
        self.stats.insert(stats.date, stats.clone());
        Ok(())
    }

    async fn record_meal(&self, date: NaiveDate, meal: &MealEntry) -> AppResult<DailyStats> {
        Ok(self.update_stats(date, |stats| stats.add_meal(meal)))
    }

    async fn record_steps(&self, date: NaiveDate, steps: u32) -> AppResult<DailyStats> {
        Ok(self.update_stats(date, |stats| stats.add_steps(steps)))
    }

    async fn clear_stats(&self) -> AppResult<()> {
        self.stats.clear();
        Ok(())
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryStore {
    async fn add_workout(&self, session: &WorkoutSession) -> AppResult<()> {
        self.workouts.write().await.push(session.clone());
        Ok(())
    }

    async fn record_workout(&self, session: &WorkoutSession) -> AppResult<DailyStats> {
        let mut workouts = self.workouts.write().await;
        let stats = self.update_stats(session.day(), |stats| stats.workout_completed = true);
        workouts.push(session.clone());
        Ok(stats)
    }

    async fn list_workouts(&self, limit: u32) -> AppResult<Vec<WorkoutSession>> {
        let workouts = self.workouts.read().await;
        // Newest first; among equal timestamps the later insert wins
        let mut ordered: Vec<(usize, &WorkoutSession)> = workouts.iter().enumerate().collect();
        ordered.sort_by(|(ia, a), (ib, b)| {
            b.performed_at
                .cmp(&a.performed_at)
                .then_with(|| ib.cmp(ia))
        });
        Ok(ordered
            .into_iter()
            .take(limit as usize)
            .map(|(_, session)| session.clone())
            .collect())
    }

    async fn clear_workouts(&self) -> AppResult<()> {
        self.workouts.write().await.clear();
        Ok(())
    }
}

#[async_trait]
impl ShoppingListRepository for InMemoryStore {
    async fn add_item(&self, item: &ShoppingItem) -> AppResult<()> {
        self.shopping.write().await.push(item.clone());
        Ok(())
    }

    async fn list_items(&self) -> AppResult<Vec<ShoppingItem>> {
        Ok(self.shopping.read().await.clone())
    }

    async fn remove_item(&self, id: Uuid) -> AppResult<bool> {
        let mut items = self.shopping.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }

    async fn clear_items(&self) -> AppResult<()> {
        self.shopping.write().await.clear();
        Ok(())
    }
}
