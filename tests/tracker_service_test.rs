// ABOUTME: Integration tests for TrackerService
// ABOUTME: Onboarding, goal availability, daily logging, workouts, dashboard, and shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::{day, meal, memory_service, onboarding_form, push_day, sqlite_service};
use kilo::errors::ErrorCode;
use kilo::intelligence::GoalCalculator;
use kilo::models::{DailyGoals, DailyStats, Goal, ProfileUpdate};
use kilo::services::TrackerService;
use std::sync::Arc;

const MALE_CUT_GOALS: DailyGoals = DailyGoals {
    calories: 2259,
    protein_g: 176,
    carbs_g: 247,
    fat_g: 63,
    step_goal: 10_000,
};

// ============================================================================
// Onboarding and profile
// ============================================================================

#[tokio::test]
async fn test_no_goals_before_onboarding() {
    let service = memory_service();

    assert!(!service.is_onboarding_completed().await.unwrap());
    assert!(service.daily_goals().await.unwrap().is_none());
    assert!(service.dashboard(day(2025, 3, 14)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_onboarding_produces_goals() {
    let service = sqlite_service().await;

    let profile = service
        .complete_onboarding(onboarding_form("  Ola  "))
        .await
        .unwrap();
    assert_eq!(profile.name, "Ola");
    assert!(profile.onboarding_completed);

    assert!(service.is_onboarding_completed().await.unwrap());
    assert_eq!(service.daily_goals().await.unwrap(), Some(MALE_CUT_GOALS));
}

#[tokio::test]
async fn test_onboarding_rejects_blank_name() {
    let service = memory_service();
    let error = service
        .complete_onboarding(onboarding_form("   "))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert!(service.profile().await.unwrap().is_none());
}

#[tokio::test]
async fn test_onboarding_rejects_unrealistic_biometrics() {
    let service = memory_service();
    let mut form = onboarding_form("Ola");
    form.weight_kg = 500.0;

    let error = service.complete_onboarding(form).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(service.profile().await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_profile_changes_goals() {
    let service = memory_service();
    service
        .complete_onboarding(onboarding_form("Ola"))
        .await
        .unwrap();

    let updated = service
        .update_profile(ProfileUpdate {
            goal: Some(Goal::Recomp),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.goal, Goal::Recomp);

    let goals = service.daily_goals().await.unwrap().unwrap();
    assert_eq!(goals.calories, 2759);
    assert_eq!(goals.protein_g, 160);
}

#[tokio::test]
async fn test_invalid_update_leaves_profile_untouched() {
    let service = sqlite_service().await;
    let original = service
        .complete_onboarding(onboarding_form("Ola"))
        .await
        .unwrap();

    let error = service
        .update_profile(ProfileUpdate {
            weight_kg: Some(-1.0),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(error.code.is_validation());

    let error = service
        .update_profile(ProfileUpdate {
            name: Some(" ".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);

    assert_eq!(service.profile().await.unwrap(), Some(original));
}

#[tokio::test]
async fn test_update_without_profile_is_not_found() {
    let service = memory_service();
    let error = service
        .update_profile(ProfileUpdate {
            age_years: Some(31),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_incomplete_onboarding_has_no_goals() {
    common::init_test_logging();
    let store = Arc::new(kilo::database::InMemoryStore::new());
    let service = TrackerService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        GoalCalculator::default(),
    );

    let mut profile = onboarding_form("Ola").into_profile(Utc::now()).unwrap();
    profile.onboarding_completed = false;
    kilo::database::ProfileRepository::save_profile(store.as_ref(), &profile)
        .await
        .unwrap();

    assert!(!service.is_onboarding_completed().await.unwrap());
    assert!(service.daily_goals().await.unwrap().is_none());
}

#[tokio::test]
async fn test_stored_invalid_profile_has_no_goals() {
    common::init_test_logging();
    let store = Arc::new(kilo::database::InMemoryStore::new());
    let service = TrackerService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        GoalCalculator::default(),
    );

    let mut profile = onboarding_form("Ola").into_profile(Utc::now()).unwrap();
    profile.height_cm = 20.0;
    kilo::database::ProfileRepository::save_profile(store.as_ref(), &profile)
        .await
        .unwrap();

    assert!(service.is_onboarding_completed().await.unwrap());
    assert!(service.daily_goals().await.unwrap().is_none());
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let service = sqlite_service().await;
    let today = day(2025, 3, 14);
    service
        .complete_onboarding(onboarding_form("Ola"))
        .await
        .unwrap();
    service.add_steps(today, 1000).await.unwrap();
    service.complete_workout(push_day()).await.unwrap();
    service
        .add_shopping_item("Chili", vec!["beans".into()])
        .await
        .unwrap();

    service.reset().await.unwrap();

    assert!(service.profile().await.unwrap().is_none());
    assert_eq!(
        service.today_stats(today).await.unwrap(),
        DailyStats::empty(today)
    );
    assert!(service.workout_history(10).await.unwrap().is_empty());
    assert!(service.shopping_list().await.unwrap().is_empty());
}

// ============================================================================
// Daily stats
// ============================================================================

#[tokio::test]
async fn test_new_day_starts_from_zero() {
    let service = memory_service();
    let monday = day(2025, 3, 10);
    let tuesday = day(2025, 3, 11);

    service.add_steps(monday, 7000).await.unwrap();
    service.log_meal(monday, meal(500, 30, 60, 10)).await.unwrap();

    assert_eq!(
        service.today_stats(tuesday).await.unwrap(),
        DailyStats::empty(tuesday)
    );
}

#[tokio::test]
async fn test_meals_and_steps_accumulate() {
    let service = sqlite_service().await;
    let today = day(2025, 3, 14);

    service.log_meal(today, meal(500, 30, 60, 10)).await.unwrap();
    service.log_meal(today, meal(700, 45, 80, 20)).await.unwrap();
    service.add_steps(today, 3000).await.unwrap();
    let stats = service.add_steps(today, 4500).await.unwrap();

    assert_eq!(stats.calories, 1200);
    assert_eq!(stats.protein_g, 75);
    assert_eq!(stats.carbs_g, 140);
    assert_eq!(stats.fat_g, 30);
    assert_eq!(stats.steps, 7500);
    assert_eq!(service.today_stats(today).await.unwrap(), stats);
}

async fn log_concurrently(service: &TrackerService) -> DailyStats {
    let today = day(2025, 3, 14);
    let mut handles = Vec::new();
    for _ in 0..25 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.add_steps(today, 100).await.unwrap();
            service.log_meal(today, meal(40, 2, 5, 1)).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    service.today_stats(today).await.unwrap()
}

#[tokio::test]
async fn test_concurrent_logging_keeps_every_update() {
    for service in [memory_service(), sqlite_service().await] {
        let stats = log_concurrently(&service).await;
        assert_eq!(stats.steps, 2500);
        assert_eq!(stats.calories, 1000);
        assert_eq!(stats.protein_g, 50);
        assert_eq!(stats.carbs_g, 125);
        assert_eq!(stats.fat_g, 25);
    }
}

// ============================================================================
// Workouts
// ============================================================================

#[tokio::test]
async fn test_complete_workout_marks_its_day() {
    let service = memory_service();
    let mut session = push_day();
    session.performed_at = Utc.with_ymd_and_hms(2025, 3, 12, 18, 30, 0).unwrap();

    let stats = service.complete_workout(session.clone()).await.unwrap();

    assert_eq!(stats.date, day(2025, 3, 12));
    assert!(stats.workout_completed);
    assert!(!service.today_stats(day(2025, 3, 13)).await.unwrap().workout_completed);
    assert_eq!(service.workout_history(5).await.unwrap(), vec![session]);
}

#[tokio::test]
async fn test_unnamed_workout_rejected() {
    let service = memory_service();
    let mut session = push_day();
    session.name = String::new();

    let error = service.complete_workout(session).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert!(service.workout_history(5).await.unwrap().is_empty());
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_dashboard_compares_actuals_with_goals() {
    let service = sqlite_service().await;
    let today = day(2025, 3, 14);
    service
        .complete_onboarding(onboarding_form("Ola"))
        .await
        .unwrap();
    service.add_steps(today, 5000).await.unwrap();
    service.log_meal(today, meal(2259, 200, 100, 50)).await.unwrap();

    let snapshot = service.dashboard(today).await.unwrap().unwrap();

    assert_eq!(snapshot.name, "Ola");
    assert_eq!(snapshot.goals, MALE_CUT_GOALS);
    assert_eq!(snapshot.stats.steps, 5000);
    assert_eq!(snapshot.progress.steps.percent, Some(50.0));
    assert!(snapshot.progress.calories.is_met());
    assert_eq!(snapshot.progress.protein.remaining, -24);
    assert!((snapshot.progress.protein.ring_fraction() - 1.0).abs() < f64::EPSILON);
    assert!((snapshot.goal_breakdown.tdee - 2759.0).abs() < 1e-9);
}

// ============================================================================
// Shopping list
// ============================================================================

#[tokio::test]
async fn test_shopping_list_flow() {
    let service = memory_service();

    let oats = service
        .add_shopping_item(" Overnight oats ", vec!["oats".into(), "milk".into()])
        .await
        .unwrap();
    assert_eq!(oats.name, "Overnight oats");
    let chili = service
        .add_shopping_item("Chili", vec![])
        .await
        .unwrap();

    let names: Vec<String> = service
        .shopping_list()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["Overnight oats", "Chili"]);

    assert!(service.remove_shopping_item(oats.id).await.unwrap());
    assert!(!service.remove_shopping_item(oats.id).await.unwrap());
    assert_eq!(service.shopping_list().await.unwrap(), vec![chili]);
}

#[tokio::test]
async fn test_blank_shopping_item_rejected() {
    let service = memory_service();
    let error = service.add_shopping_item("  ", vec![]).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}
