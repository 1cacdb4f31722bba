// ABOUTME: Integration tests for the SQLite and in-memory repositories
// ABOUTME: Same behavioral checks run against every backend, plus file persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{day, meal, onboarding_form, push_day};
use kilo::database::{
    Database, InMemoryStore, ProfileRepository, ShoppingListRepository, StatsRepository,
    WorkoutRepository,
};
use kilo::models::{DailyStats, ShoppingItem, Theme, UserProfile};
use tempfile::TempDir;
use uuid::Uuid;

trait Store: ProfileRepository + StatsRepository + WorkoutRepository + ShoppingListRepository {}
impl<T> Store for T where
    T: ProfileRepository + StatsRepository + WorkoutRepository + ShoppingListRepository
{
}

async fn sqlite_memory() -> Database {
    common::init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

fn profile() -> UserProfile {
    onboarding_form("Ola").into_profile(Utc::now()).unwrap()
}

// ============================================================================
// Backend-agnostic checks
// ============================================================================

async fn check_profile_roundtrip(store: &impl Store) {
    assert!(store.get_profile().await.unwrap().is_none());

    let mut profile = profile();
    store.save_profile(&profile).await.unwrap();
    assert_eq!(store.get_profile().await.unwrap(), Some(profile.clone()));

    // Saving again replaces the single profile
    profile.weight_kg = 78.5;
    profile.theme = Some(Theme::Dark);
    store.save_profile(&profile).await.unwrap();
    assert_eq!(store.get_profile().await.unwrap(), Some(profile));

    store.clear_profile().await.unwrap();
    assert!(store.get_profile().await.unwrap().is_none());
}

async fn check_stats_per_day(store: &impl Store) {
    let monday = day(2025, 3, 10);
    let tuesday = day(2025, 3, 11);
    assert!(store.get_stats(monday).await.unwrap().is_none());

    let mut stats = DailyStats::empty(monday);
    stats.steps = 8000;
    stats.calories = 1800;
    stats.workout_completed = true;
    store.save_stats(&stats).await.unwrap();

    stats.steps = 9500;
    store.save_stats(&stats).await.unwrap();

    assert_eq!(store.get_stats(monday).await.unwrap(), Some(stats));
    assert!(store.get_stats(tuesday).await.unwrap().is_none());

    store.clear_stats().await.unwrap();
    assert!(store.get_stats(monday).await.unwrap().is_none());
}

async fn check_workouts_newest_first(store: &impl Store) {
    let now = Utc::now();
    let mut oldest = push_day();
    oldest.performed_at = now - Duration::days(2);
    let mut newest = push_day();
    newest.performed_at = now;
    let mut middle = push_day();
    middle.performed_at = now - Duration::days(1);

    for session in [&oldest, &newest, &middle] {
        store.add_workout(session).await.unwrap();
    }

    let history = store.list_workouts(10).await.unwrap();
    let ids: Vec<Uuid> = history.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    assert_eq!(history[0], newest);

    let limited = store.list_workouts(2).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[1].id, middle.id);

    store.clear_workouts().await.unwrap();
    assert!(store.list_workouts(10).await.unwrap().is_empty());
}

async fn check_recorded_updates(store: &impl Store) {
    let today = day(2025, 3, 14);

    let first = store.record_meal(today, &meal(500, 30, 60, 10)).await.unwrap();
    assert_eq!(first.calories, 500);
    store.record_meal(today, &meal(300, 20, 25, 12)).await.unwrap();
    let stats = store.record_steps(today, 4200).await.unwrap();
    assert_eq!(stats.calories, 800);
    assert_eq!(stats.protein_g, 50);
    assert_eq!(stats.steps, 4200);
    assert!(!stats.workout_completed);

    let mut session = push_day();
    session.performed_at = Utc.with_ymd_and_hms(2025, 3, 14, 7, 0, 0).unwrap();
    let stats = store.record_workout(&session).await.unwrap();
    assert!(stats.workout_completed);
    assert_eq!(stats.steps, 4200);
    assert_eq!(store.get_stats(today).await.unwrap(), Some(stats));
    assert_eq!(store.list_workouts(10).await.unwrap(), vec![session]);
}

async fn check_shopping_list(store: &impl Store) {
    let oats = ShoppingItem::new("Overnight oats", vec!["oats".into(), "milk".into()]);
    let chili = ShoppingItem::new("Chili", vec!["beans".into()]);
    store.add_item(&oats).await.unwrap();
    store.add_item(&chili).await.unwrap();

    assert_eq!(store.list_items().await.unwrap(), vec![oats.clone(), chili.clone()]);

    assert!(store.remove_item(oats.id).await.unwrap());
    assert!(!store.remove_item(oats.id).await.unwrap());
    assert_eq!(store.list_items().await.unwrap(), vec![chili]);

    store.clear_items().await.unwrap();
    assert!(store.list_items().await.unwrap().is_empty());
}

// ============================================================================
// SQLite
// ============================================================================

#[tokio::test]
async fn test_sqlite_profile_roundtrip() {
    check_profile_roundtrip(&sqlite_memory().await).await;
}

#[tokio::test]
async fn test_sqlite_stats_per_day() {
    check_stats_per_day(&sqlite_memory().await).await;
}

#[tokio::test]
async fn test_sqlite_workouts_newest_first() {
    check_workouts_newest_first(&sqlite_memory().await).await;
}

#[tokio::test]
async fn test_sqlite_recorded_updates() {
    check_recorded_updates(&sqlite_memory().await).await;
}

#[tokio::test]
async fn test_sqlite_failed_workout_leaves_no_history() {
    let db = sqlite_memory().await;
    sqlx::query("DROP TABLE daily_stats")
        .execute(db.pool())
        .await
        .unwrap();

    assert!(db.record_workout(&push_day()).await.is_err());
    assert!(db.list_workouts(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_shopping_list() {
    check_shopping_list(&sqlite_memory().await).await;
}

#[tokio::test]
async fn test_sqlite_migrate_is_idempotent() {
    let db = sqlite_memory().await;
    db.save_profile(&profile()).await.unwrap();
    db.migrate().await.unwrap();
    assert!(db.get_profile().await.unwrap().is_some());
}

#[tokio::test]
async fn test_sqlite_file_persists_across_connections() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("kilo.db");
    let url = format!("sqlite:{}", path.display());

    let stats = {
        let db = Database::new(&url).await.unwrap();
        db.save_profile(&profile()).await.unwrap();
        let mut stats = DailyStats::empty(day(2025, 3, 14));
        stats.add_steps(4321);
        db.save_stats(&stats).await.unwrap();
        db.pool().close().await;
        stats
    };

    assert!(path.exists());
    let reopened = Database::new(&url).await.unwrap();
    assert_eq!(reopened.get_profile().await.unwrap().unwrap().name, "Ola");
    assert_eq!(reopened.get_stats(stats.date).await.unwrap(), Some(stats));
}

#[tokio::test]
async fn test_sqlite_rejects_corrupt_activity_level() {
    let db = sqlite_memory().await;
    let mut json = serde_json::to_value(profile()).unwrap();
    json["activity_level"] = serde_json::json!(9);

    sqlx::query("INSERT INTO user_profile (id, profile_data) VALUES (1, $1)")
        .bind(json.to_string())
        .execute(db.pool())
        .await
        .unwrap();

    let error = db.get_profile().await.unwrap_err();
    assert_eq!(error.code, kilo::errors::ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_unsupported_database_url() {
    let error = Database::new("postgres://localhost/kilo").await.err().unwrap();
    assert_eq!(error.code, kilo::errors::ErrorCode::ConfigError);
}

// ============================================================================
// In-memory
// ============================================================================

#[tokio::test]
async fn test_memory_profile_roundtrip() {
    check_profile_roundtrip(&InMemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_stats_per_day() {
    check_stats_per_day(&InMemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_workouts_newest_first() {
    check_workouts_newest_first(&InMemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_recorded_updates() {
    check_recorded_updates(&InMemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_shopping_list() {
    check_shopping_list(&InMemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_clones_share_state() {
    let store = InMemoryStore::new();
    let clone = store.clone();
    store.save_profile(&profile()).await.unwrap();
    assert!(clone.get_profile().await.unwrap().is_some());
}
