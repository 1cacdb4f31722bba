// ABOUTME: Profile storage on SQLite
// ABOUTME: A single-row table holding the onboarded user's profile as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Database, ProfileRepository};
use async_trait::async_trait;
use kilo_core::errors::AppResult;
use kilo_core::models::UserProfile;
use sqlx::Row;

impl Database {
    /// Create the profile table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_profiles(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_profile (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                profile_data TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for Database {
    async fn get_profile(&self) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query("SELECT profile_data FROM user_profile WHERE id = 1")
            .fetch_optional(self.pool())
            .await?;

        if let Some(row) = row {
            let profile_json: String = row.try_get("profile_data")?;
            Ok(Some(serde_json::from_str(&profile_json)?))
        } else {
            Ok(None)
        }
    }

    async fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        let profile_json = serde_json::to_string(profile)?;

        sqlx::query(
            r"
            INSERT INTO user_profile (id, profile_data, updated_at)
            VALUES (1, $1, CURRENT_TIMESTAMP)
            ON CONFLICT(id) DO UPDATE SET
                profile_data = $1,
                updated_at = CURRENT_TIMESTAMP
            ",
        )
        .bind(profile_json)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    async fn clear_profile(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM user_profile")
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
