// ABOUTME: Onboarding and profile management commands
// ABOUTME: Create, show, update, and reset the single stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{self, Output};
use kilo::errors::{AppError, AppResult};
use kilo::models::{Biometrics, OnboardingForm, ProfileUpdate};
use kilo::services::TrackerService;
use serde_json::json;

/// Finish onboarding and print the first day's goals
pub async fn onboard(
    service: &TrackerService,
    name: String,
    biometrics: Biometrics,
    output: &Output,
) -> AppResult<()> {
    let form = OnboardingForm {
        name,
        age_years: biometrics.age_years,
        weight_kg: biometrics.weight_kg,
        height_cm: biometrics.height_cm,
        sex: biometrics.sex,
        activity_level: biometrics.activity_level,
        goal: biometrics.goal,
    };
    let profile = service.complete_onboarding(form).await?;
    let goals = service.calculator().calculate(&profile.biometrics())?;

    output.emit(&json!({ "profile": profile, "goals": goals }), |_| {
        println!("Welcome, {}!\n", profile.name);
        display::print_goals(&goals);
    })
}

pub async fn show(service: &TrackerService, output: &Output) -> AppResult<()> {
    let profile = service
        .profile()
        .await?
        .ok_or_else(|| AppError::not_found("Profile"))?;
    output.emit(&profile, display::print_profile)
}

pub async fn update(
    service: &TrackerService,
    update: ProfileUpdate,
    output: &Output,
) -> AppResult<()> {
    if update.is_empty() {
        return Err(AppError::invalid_input(
            "nothing to update, pass at least one field flag",
        ));
    }
    let profile = service.update_profile(update).await?;
    output.emit(&profile, display::print_profile)
}

/// Delete everything; refuses without explicit confirmation
pub async fn reset(service: &TrackerService, confirmed: bool, output: &Output) -> AppResult<()> {
    if !confirmed {
        return Err(AppError::invalid_input(
            "reset deletes the profile and all logs, pass --yes to confirm",
        ));
    }
    service.reset().await?;
    output.emit(&json!({ "reset": true }), |_| println!("All data deleted."))
}
