// ABOUTME: Shopping list commands
// ABOUTME: Add recipes with their ingredients, list them, and remove by ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{self, Output};
use kilo::errors::{AppError, AppResult};
use kilo::services::TrackerService;
use uuid::Uuid;

pub async fn add(
    service: &TrackerService,
    name: &str,
    ingredients: Vec<String>,
    output: &Output,
) -> AppResult<()> {
    let item = service.add_shopping_item(name, ingredients).await?;
    output.emit(&item, |item| println!("Added '{}' ({})", item.name, item.id))
}

pub async fn list(service: &TrackerService, output: &Output) -> AppResult<()> {
    let items = service.shopping_list().await?;
    output.emit(&items, |items| display::print_shopping_list(items))
}

pub async fn remove(service: &TrackerService, id: Uuid, output: &Output) -> AppResult<()> {
    if !service.remove_shopping_item(id).await? {
        return Err(AppError::not_found("Shopping item").with_resource_id(id.to_string()));
    }
    output.emit(&id, |id| println!("Removed {id}"))
}
