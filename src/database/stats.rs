// ABOUTME: Daily stats storage on SQLite
// ABOUTME: One row per calendar day of steps, calories, macros, and workout completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{column_u32, Database, StatsRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use kilo_core::errors::AppResult;
use kilo_core::models::{DailyStats, MealEntry};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;

impl Database {
    /// Create the daily stats table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_stats(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS daily_stats (
                date TEXT PRIMARY KEY,
                steps INTEGER NOT NULL DEFAULT 0 CHECK (steps >= 0),
                calories INTEGER NOT NULL DEFAULT 0 CHECK (calories >= 0),
                protein_g INTEGER NOT NULL DEFAULT 0 CHECK (protein_g >= 0),
                carbs_g INTEGER NOT NULL DEFAULT 0 CHECK (carbs_g >= 0),
                fat_g INTEGER NOT NULL DEFAULT 0 CHECK (fat_g >= 0),
                workout_completed INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(self.pool())
        .await?;
        Ok(())
    }
}

fn row_to_stats(row: &SqliteRow, date: NaiveDate) -> AppResult<DailyStats> {
    Ok(DailyStats {
        date,
        steps: column_u32(row.try_get("steps")?, "steps")?,
        calories: column_u32(row.try_get("calories")?, "calories")?,
        protein_g: column_u32(row.try_get("protein_g")?, "protein_g")?,
        carbs_g: column_u32(row.try_get("carbs_g")?, "carbs_g")?,
        fat_g: column_u32(row.try_get("fat_g")?, "fat_g")?,
        workout_completed: row.try_get("workout_completed")?,
    })
}

async fn fetch_stats(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> AppResult<Option<DailyStats>> {
    let row = sqlx::query(
        r"
        SELECT steps, calories, protein_g, carbs_g, fat_g, workout_completed
        FROM daily_stats WHERE date = $1
        ",
    )
    .bind(date.to_string())
    .fetch_optional(&mut *conn)
    .await?;

    row.map(|r| row_to_stats(&r, date)).transpose()
}

async fn upsert_stats(conn: &mut SqliteConnection, stats: &DailyStats) -> AppResult<()> {
    sqlx::query(
        r"
        INSERT INTO daily_stats (date, steps, calories, protein_g, carbs_g, fat_g, workout_completed)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT(date) DO UPDATE SET
            steps = $2,
            calories = $3,
            protein_g = $4,
            carbs_g = $5,
            fat_g = $6,
            workout_completed = $7
        ",
    )
    .bind(stats.date.to_string())
    .bind(i64::from(stats.steps))
    .bind(i64::from(stats.calories))
    .bind(i64::from(stats.protein_g))
    .bind(i64::from(stats.carbs_g))
    .bind(i64::from(stats.fat_g))
    .bind(stats.workout_completed)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Read `date` (zeroed when absent), apply `change`, and write it back on `conn`
///
/// Callers pass a transaction so the read and the write cannot interleave with
/// another writer.
pub(super) async fn update_stats_in(
    conn: &mut SqliteConnection,
    date: NaiveDate,
    change: impl FnOnce(&mut DailyStats) + Send,
) -> AppResult<DailyStats> {
    let mut stats = fetch_stats(conn, date)
        .await?
        .unwrap_or_else(|| DailyStats::empty(date));
    change(&mut stats);
    upsert_stats(conn, &stats).await?;
    Ok(stats)
}

impl Database {
    async fn update_stats(
        &self,
        date: NaiveDate,
        change: impl FnOnce(&mut DailyStats) + Send,
    ) -> AppResult<DailyStats> {
        let mut tx = self.pool().begin().await?;
        let stats = update_stats_in(&mut tx, date, change).await?;
        tx.commit().await?;
        Ok(stats)
    }
}

#[async_trait]
impl StatsRepository for Database {
    async fn get_stats(&self, date: NaiveDate) -> AppResult<Option<DailyStats>> {
        let mut conn = self.pool().acquire().await?;
        fetch_stats(&mut conn, date).await
    }

    async fn save_stats(&self, stats: &DailyStats) -> AppResult<()> {
        let mut conn = self.pool().acquire().await?;
        upsert_stats(&mut conn, stats).await
    }

    async fn record_meal(&self, date: NaiveDate, meal: &MealEntry) -> AppResult<DailyStats> {
        self.update_stats(date, |stats| stats.add_meal(meal)).await
    }

    async fn record_steps(&self, date: NaiveDate, steps: u32) -> AppResult<DailyStats> {
        self.update_stats(date, |stats| stats.add_steps(steps)).await
    }

    async fn clear_stats(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM daily_stats")
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
