// ABOUTME: Output formatting helpers for kilo-cli
// ABOUTME: Human-readable tables or JSON, plus error rendering in both modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use kilo::errors::{AppError, AppResult, ErrorResponse};
use kilo::intelligence::{GoalAdjustment, GoalBreakdown, MetricProgress};
use kilo::models::{DailyGoals, DailyStats, ShoppingItem, UserProfile, WorkoutSession};
use kilo::services::DashboardSnapshot;
use serde::Serialize;

/// Where and how command results are printed
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or through `human` otherwise
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }

    /// Print a failure; JSON goes to stdout so scripts can parse it
    pub fn error(&self, error: AppError) {
        if self.json {
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error: {e}"),
            }
        } else {
            eprintln!("Error: {error}");
        }
    }
}

pub fn print_goals(goals: &DailyGoals) {
    println!("Daily goals");
    println!("{}", "=".repeat(40));
    println!("   Calories: {:>6} kcal", goals.calories);
    println!("   Protein:  {:>6} g", goals.protein_g);
    println!("   Carbs:    {:>6} g", goals.carbs_g);
    println!("   Fat:      {:>6} g", goals.fat_g);
    println!("   Steps:    {:>6}", goals.step_goal);
}

pub fn print_breakdown(breakdown: &GoalBreakdown) {
    println!("Energy");
    println!("{}", "=".repeat(40));
    println!("   BMR:    {:>9.1} kcal", breakdown.bmr);
    println!("   TDEE:   {:>9.1} kcal", breakdown.tdee);
    println!("   Target: {:>9.1} kcal", breakdown.target_calories);
    println!();
    print_goals(&breakdown.goals);
    for adjustment in &breakdown.adjustments {
        match adjustment {
            GoalAdjustment::CaloriesClampedToZero { raw } => {
                println!("\nNote: calorie target was {raw:.0} kcal and has been raised to 0");
            }
            GoalAdjustment::CarbsClampedToZero { raw } => {
                println!("\nNote: carbohydrate target was {raw:.0} g and has been raised to 0");
            }
        }
    }
}

pub fn print_profile(profile: &UserProfile) {
    println!("Profile: {}", profile.name);
    println!("{}", "=".repeat(40));
    println!("   Age:       {} years", profile.age_years);
    println!("   Weight:    {} kg", profile.weight_kg);
    println!("   Height:    {} cm", profile.height_cm);
    println!("   Sex:       {}", profile.sex);
    println!(
        "   Activity:  {} ({})",
        profile.activity_level,
        profile.activity_level.ordinal()
    );
    println!("   Goal:      {}", profile.goal);
    println!(
        "   Onboarded: {}",
        if profile.onboarding_completed {
            "yes"
        } else {
            "no"
        }
    );
    println!("   Since:     {}", profile.created_at.format("%Y-%m-%d"));
}

pub fn print_stats(stats: &DailyStats) {
    println!("Stats for {}", stats.date);
    println!("{}", "=".repeat(40));
    println!("   Steps:    {:>6}", stats.steps);
    println!("   Calories: {:>6} kcal", stats.calories);
    println!("   Protein:  {:>6} g", stats.protein_g);
    println!("   Carbs:    {:>6} g", stats.carbs_g);
    println!("   Fat:      {:>6} g", stats.fat_g);
    println!(
        "   Workout:  {}",
        if stats.workout_completed {
            "done"
        } else {
            "not yet"
        }
    );
}

fn progress_row(label: &str, unit: &str, progress: &MetricProgress) {
    let filled = (progress.ring_fraction() * 20.0).round() as usize;
    let bar = format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled));
    let percent = progress
        .percent
        .map_or_else(|| "  n/a".to_owned(), |p| format!("{p:>4.0}%"));
    println!(
        "   {label:<9}[{bar}] {percent}  {}/{} {unit}",
        progress.actual, progress.goal
    );
}

pub fn print_dashboard(snapshot: &DashboardSnapshot) {
    println!("Hi {}, here is {}", snapshot.name, snapshot.stats.date);
    println!("{}", "=".repeat(60));
    progress_row("Calories", "kcal", &snapshot.progress.calories);
    progress_row("Protein", "g", &snapshot.progress.protein);
    progress_row("Carbs", "g", &snapshot.progress.carbs);
    progress_row("Fat", "g", &snapshot.progress.fat);
    progress_row("Steps", "", &snapshot.progress.steps);
    if snapshot.stats.workout_completed {
        println!("\nWorkout done today.");
    }
}

pub fn print_workouts(sessions: &[WorkoutSession]) {
    if sessions.is_empty() {
        println!("No workouts logged yet.");
        return;
    }
    println!("Workout history");
    println!("{}", "=".repeat(60));
    for session in sessions {
        println!(
            "   {}  {:<24} {:>3} sets  {:>8.1} kg  {:>4} min",
            session.performed_at.format("%Y-%m-%d %H:%M"),
            session.name,
            session.completed_sets(),
            session.total_volume_kg(),
            session.duration_secs / 60
        );
    }
}

pub fn print_shopping_list(items: &[ShoppingItem]) {
    if items.is_empty() {
        println!("Shopping list is empty.");
        return;
    }
    println!("Shopping list");
    println!("{}", "=".repeat(60));
    for item in items {
        println!("   {}  {}", item.id, item.name);
        for ingredient in &item.ingredients {
            println!("      - {ingredient}");
        }
    }
}
