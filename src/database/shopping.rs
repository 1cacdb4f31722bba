// ABOUTME: Shopping list storage on SQLite
// ABOUTME: Items kept in insertion order and removable by ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Database, ShoppingListRepository};
use async_trait::async_trait;
use kilo_core::errors::AppResult;
use kilo_core::models::ShoppingItem;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the shopping list table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_shopping(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS shopping_list (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                item_data TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;
        Ok(())
    }
}

#[async_trait]
impl ShoppingListRepository for Database {
    async fn add_item(&self, item: &ShoppingItem) -> AppResult<()> {
        sqlx::query("INSERT INTO shopping_list (id, item_data) VALUES ($1, $2)")
            .bind(item.id.to_string())
            .bind(serde_json::to_string(item)?)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn list_items(&self) -> AppResult<Vec<ShoppingItem>> {
        let rows = sqlx::query("SELECT item_data FROM shopping_list ORDER BY seq ASC")
            .fetch_all(self.pool())
            .await?;

        rows.iter()
            .map(|row| -> AppResult<ShoppingItem> {
                let item_json: String = row.try_get("item_data")?;
                Ok(serde_json::from_str(&item_json)?)
            })
            .collect()
    }

    async fn remove_item(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM shopping_list WHERE id = $1")
            .bind(id.to_string())
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear_items(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM shopping_list")
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
