// ABOUTME: SQLite-backed persistence for the tracker via sqlx
// ABOUTME: Connection setup, schema migration, and repository implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! One database holds one user's data: the profile (a single row), daily stats
//! keyed by date, workout history, and the shopping list.

mod memory;
mod profiles;
/// Repository traits
pub mod repositories;
mod shopping;
mod stats;
mod workouts;

pub use memory::InMemoryStore;
pub use repositories::{
    ProfileRepository, ShoppingListRepository, StatsRepository, WorkoutRepository,
};

use crate::config::environment::DatabaseUrl;
use kilo_core::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

/// Database manager for tracker storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        Self::connect(&DatabaseUrl::parse_url(database_url)?).await
    }

    /// Connect to a parsed database location and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn connect(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            // Each in-memory connection is its own database, so keep exactly one
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .connect("sqlite::memory:")
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "cannot create database directory {}: {e}",
                            parent.display()
                        ))
                        .with_source(e)
                    })?;
                }
                // Ensure SQLite creates the database file if it doesn't exist
                let connection = format!("{}?mode=rwc", url.to_connection_string());
                SqlitePoolOptions::new().connect(&connection).await?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %url.to_connection_string(), "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_profiles().await?;
        self.migrate_stats().await?;
        self.migrate_workouts().await?;
        self.migrate_shopping().await?;
        debug!("Database migrations complete");
        Ok(())
    }
}

/// Convert a stored integer column back into `u32`
fn column_u32(value: i64, column: &str) -> AppResult<u32> {
    u32::try_from(value).map_err(|_| {
        AppError::serialization(format!("column {column} holds out-of-range value {value}"))
    })
}
