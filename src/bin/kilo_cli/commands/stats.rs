// ABOUTME: Daily stats commands
// ABOUTME: Show a day's totals and log meals or steps against it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{self, Output};
use chrono::NaiveDate;
use kilo::errors::AppResult;
use kilo::models::MealEntry;
use kilo::services::TrackerService;

pub async fn show(service: &TrackerService, date: NaiveDate, output: &Output) -> AppResult<()> {
    let stats = service.today_stats(date).await?;
    output.emit(&stats, display::print_stats)
}

pub async fn log_meal(
    service: &TrackerService,
    date: NaiveDate,
    meal: MealEntry,
    output: &Output,
) -> AppResult<()> {
    let stats = service.log_meal(date, meal).await?;
    output.emit(&stats, display::print_stats)
}

pub async fn add_steps(
    service: &TrackerService,
    date: NaiveDate,
    steps: u32,
    output: &Output,
) -> AppResult<()> {
    let stats = service.add_steps(date, steps).await?;
    output.emit(&stats, display::print_stats)
}
