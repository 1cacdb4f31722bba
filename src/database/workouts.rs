// ABOUTME: Workout history storage on SQLite
// ABOUTME: Sessions stored as JSON with a millisecond timestamp column for ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::stats::update_stats_in;
use super::{Database, WorkoutRepository};
use async_trait::async_trait;
use kilo_core::errors::AppResult;
use kilo_core::models::{DailyStats, WorkoutSession};
use sqlx::sqlite::SqliteConnection;
use sqlx::Row;

impl Database {
    /// Create the workout history table and its ordering index
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_workouts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_history (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                performed_at_ms INTEGER NOT NULL,
                session_data TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_history_performed ON workout_history(performed_at_ms DESC)",
        )
        .execute(self.pool())
        .await?;
        Ok(())
    }
}

async fn insert_workout(conn: &mut SqliteConnection, session: &WorkoutSession) -> AppResult<()> {
    let session_json = serde_json::to_string(session)?;

    sqlx::query(
        r"
        INSERT INTO workout_history (id, performed_at_ms, session_data)
        VALUES ($1, $2, $3)
        ",
    )
    .bind(session.id.to_string())
    .bind(session.performed_at.timestamp_millis())
    .bind(session_json)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[async_trait]
impl WorkoutRepository for Database {
    async fn add_workout(&self, session: &WorkoutSession) -> AppResult<()> {
        let mut conn = self.pool().acquire().await?;
        insert_workout(&mut conn, session).await
    }

    async fn record_workout(&self, session: &WorkoutSession) -> AppResult<DailyStats> {
        let mut tx = self.pool().begin().await?;
        insert_workout(&mut tx, session).await?;
        let stats = update_stats_in(&mut tx, session.day(), |stats| {
            stats.workout_completed = true;
        })
        .await?;
        tx.commit().await?;
        Ok(stats)
    }

    async fn list_workouts(&self, limit: u32) -> AppResult<Vec<WorkoutSession>> {
        let rows = sqlx::query(
            r"
            SELECT session_data FROM workout_history
            ORDER BY performed_at_ms DESC, seq DESC
            LIMIT $1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| -> AppResult<WorkoutSession> {
                let session_json: String = row.try_get("session_data")?;
                Ok(serde_json::from_str(&session_json)?)
            })
            .collect()
    }

    async fn clear_workouts(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM workout_history")
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
