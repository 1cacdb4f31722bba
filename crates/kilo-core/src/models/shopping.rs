// ABOUTME: Shopping list item saved from recipes
// ABOUTME: ShoppingItem definition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipe added to the shopping list together with its ingredients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingItem {
    /// Item ID
    pub id: Uuid,
    /// Recipe or item name
    pub name: String,
    /// Ingredients to buy
    pub ingredients: Vec<String>,
    /// When the item was added
    pub added_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// New item stamped now
    #[must_use]
    pub fn new(name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ingredients,
            added_at: Utc::now(),
        }
    }
}
