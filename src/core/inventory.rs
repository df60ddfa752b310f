//! Inventory business logic - the inventory source for the risk engine.
//!
//! This module provides functions for creating, retrieving, updating and removing a
//! household's inventory items. Validation happens here, before anything reaches the
//! database; the risk scorer itself accepts whatever it is given.

use crate::{
    entities::{FoodCategory, InventoryItem, inventory_item},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::info;

/// Fields supplied when adding or editing an inventory item
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewInventoryItem {
    /// Item name
    pub name: String,
    /// Food category
    pub category: FoodCategory,
    /// Amount on hand
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
    /// Purchase price, if known
    pub price: Option<f64>,
    /// Purchase date, if known
    pub purchased_at: Option<NaiveDate>,
    /// Expiry date, if known
    pub expires_at: Option<NaiveDate>,
}

fn validate(item: &NewInventoryItem) -> Result<()> {
    if item.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Item name cannot be empty".to_string(),
        });
    }

    if !item.quantity.is_finite() || item.quantity < 0.0 {
        return Err(Error::InvalidAmount {
            amount: item.quantity,
        });
    }

    if let Some(price) = item.price {
        if !price.is_finite() || price < 0.0 {
            return Err(Error::InvalidAmount { amount: price });
        }
    }

    Ok(())
}

/// Retrieves all inventory items of a household, ordered alphabetically by name.
pub async fn get_items_for_household(
    db: &DatabaseConnection,
    household_id: i64,
) -> Result<Vec<inventory_item::Model>> {
    InventoryItem::find()
        .filter(inventory_item::Column::HouseholdId.eq(household_id))
        .order_by_asc(inventory_item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific inventory item by its unique ID.
pub async fn get_item_by_id(
    db: &DatabaseConnection,
    item_id: i64,
) -> Result<Option<inventory_item::Model>> {
    InventoryItem::find_by_id(item_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds an item to a household's inventory.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The quantity or price is negative or not finite
/// - The database insert fails
pub async fn create_item(
    db: &DatabaseConnection,
    household_id: i64,
    item: NewInventoryItem,
) -> Result<inventory_item::Model> {
    validate(&item)?;

    let now = chrono::Utc::now();
    let model = inventory_item::ActiveModel {
        household_id: Set(household_id),
        name: Set(item.name.trim().to_string()),
        category: Set(item.category),
        quantity: Set(item.quantity),
        unit: Set(item.unit.trim().to_string()),
        price: Set(item.price),
        purchased_at: Set(item.purchased_at),
        expires_at: Set(item.expires_at),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Replaces the editable fields of an existing item.
///
/// # Errors
/// Returns an error if validation fails, the item does not exist, or the update fails.
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    item: NewInventoryItem,
) -> Result<inventory_item::Model> {
    validate(&item)?;

    let mut model: inventory_item::ActiveModel = InventoryItem::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?
        .into();

    model.name = Set(item.name.trim().to_string());
    model.category = Set(item.category);
    model.quantity = Set(item.quantity);
    model.unit = Set(item.unit.trim().to_string());
    model.price = Set(item.price);
    model.purchased_at = Set(item.purchased_at);
    model.expires_at = Set(item.expires_at);
    model.updated_at = Set(chrono::Utc::now());

    model.update(db).await.map_err(Into::into)
}

/// Removes an item from the inventory (deleted or picked up as waste) and returns it.
///
/// # Errors
/// Returns an error if the item does not exist or the delete fails.
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<inventory_item::Model> {
    let item = InventoryItem::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    InventoryItem::delete_by_id(item_id).exec(db).await?;
    info!(item_id, name = %item.name, "Removed inventory item");

    Ok(item)
}
