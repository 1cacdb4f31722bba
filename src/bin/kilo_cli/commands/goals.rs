// ABOUTME: Goal calculation and dashboard commands
// ABOUTME: Stateless goal breakdown from flags and the stored-profile dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{self, Output};
use chrono::NaiveDate;
use kilo::errors::AppResult;
use kilo::intelligence::GoalCalculator;
use kilo::models::Biometrics;
use kilo::services::TrackerService;

/// Calculate and print goals without touching storage
pub fn calculate(
    calculator: &GoalCalculator,
    biometrics: Biometrics,
    output: &Output,
) -> AppResult<()> {
    let breakdown = calculator.calculate_detailed(&biometrics)?;
    output.emit(&breakdown, display::print_breakdown)
}

/// Show goals, actuals, and progress for `date`
pub async fn dashboard(service: &TrackerService, date: NaiveDate, output: &Output) -> AppResult<()> {
    match service.dashboard(date).await? {
        Some(snapshot) => output.emit(&snapshot, display::print_dashboard),
        None => output.emit(&serde_json::Value::Null, |_| {
            println!("No goals yet. Run `kilo-cli onboard` to set up your profile.");
        }),
    }
}
