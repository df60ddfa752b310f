//! Shared test utilities for `PantryBuddy`.
//!
//! This module provides an in-memory database setup plus builders for inventory items,
//! consumption logs and waste records with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{inventory::NewInventoryItem, waste_records::NewWasteRecord},
    entities::{FoodCategory, consumption_log, inventory_item, waste_record},
    errors::Result,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Calendar date shorthand.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// UTC instant at the top of `hour`.
pub fn instant(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// An unsaved inventory item model.
///
/// # Defaults
/// * `household_id`: 1
/// * `quantity`: 1 pcs
/// * `price`, `purchased_at`, `expires_at`: None
pub fn sample_item(id: i64, name: &str, category: FoodCategory) -> inventory_item::Model {
    let created = instant(2024, 1, 1, 0);
    inventory_item::Model {
        id,
        household_id: 1,
        name: name.to_string(),
        category,
        quantity: 1.0,
        unit: "pcs".to_string(),
        price: None,
        purchased_at: None,
        expires_at: None,
        created_at: created,
        updated_at: created,
    }
}

/// `count` consumption log entries for `item_name`, one per day from 2024-01-01.
pub fn logs_for(item_name: &str, count: u32) -> Vec<consumption_log::Model> {
    (0..count)
        .map(|i| consumption_log::Model {
            id: i64::from(i) + 1,
            household_id: 1,
            item_name: item_name.to_string(),
            logged_at: instant(2024, 1, 1 + i % 28, 18),
        })
        .collect()
}

/// An unsaved waste record model for household `household_id`.
pub fn sample_waste_record(
    household_id: i64,
    unit: &str,
    quantity: f64,
    category: FoodCategory,
    value: Option<f64>,
) -> waste_record::Model {
    let created = instant(2024, 1, 1, 0);
    waste_record::Model {
        id: 0,
        household_id,
        material_name: "leftovers".to_string(),
        quantity_value: quantity,
        quantity_unit: unit.to_string(),
        source_item_name: "leftovers".to_string(),
        source_category: category,
        estimated_value: value,
        created_at: created,
        updated_at: created,
    }
}

/// Input for `create_item` with sensible defaults.
///
/// # Defaults
/// * `quantity`: 1 pcs
/// * `price`, `purchased_at`, `expires_at`: None
pub fn new_item(name: &str, category: FoodCategory) -> NewInventoryItem {
    NewInventoryItem {
        name: name.to_string(),
        category,
        quantity: 1.0,
        unit: "pcs".to_string(),
        price: None,
        purchased_at: None,
        expires_at: None,
    }
}

/// Input for `create_waste_record` with no monetary value.
pub fn new_waste(unit: &str, quantity: f64, category: FoodCategory) -> NewWasteRecord {
    NewWasteRecord {
        material_name: "scraps".to_string(),
        quantity_value: quantity,
        quantity_unit: unit.to_string(),
        source_item_name: "scraps".to_string(),
        source_category: category,
        estimated_value: None,
    }
}
