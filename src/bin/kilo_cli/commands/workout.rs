// ABOUTME: Workout commands
// ABOUTME: Log a finished session from JSON and list recent history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{self, Output};
use kilo::constants::defaults;
use kilo::errors::{AppError, AppResult};
use kilo::models::WorkoutSession;
use kilo::services::TrackerService;
use serde_json::json;
use std::path::Path;

/// Read a session from `path` and store it
///
/// `id`, `performed_at`, and `duration_secs` may be omitted from the file.
pub async fn log(service: &TrackerService, path: &Path, output: &Output) -> AppResult<()> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("cannot read {}: {e}", path.display())).with_source(e)
    })?;
    let session: WorkoutSession = serde_json::from_str(&raw)?;
    let name = session.name.clone();
    let sets = session.completed_sets();
    let volume_kg = session.total_volume_kg();
    let id = session.id;
    let stats = service.complete_workout(session).await?;

    let summary = json!({
        "workout": { "id": id, "name": name, "completed_sets": sets, "total_volume_kg": volume_kg },
        "stats": stats,
    });
    output.emit(&summary, |_| {
        println!("Logged '{name}': {sets} sets, {volume_kg:.1} kg total.");
    })
}

pub async fn history(service: &TrackerService, limit: Option<u32>, output: &Output) -> AppResult<()> {
    let sessions = service
        .workout_history(limit.unwrap_or(defaults::WORKOUT_HISTORY_LIMIT))
        .await?;
    output.emit(&sessions, |s| display::print_workouts(s))
}
