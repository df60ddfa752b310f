//! Inventory item entity - Represents one food item a household has on hand.
//!
//! Items are created on manual add or receipt scan, edited in place, and removed when
//! deleted or picked up as waste. `price`, `purchased_at` and `expires_at` are optional;
//! the risk scorer skips whichever signal is missing.

use super::category::FoodCategory;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household that owns the item
    pub household_id: i64,
    /// Free-text name (e.g., "Greek yoghurt")
    pub name: String,
    /// Food category used by the scoring rules
    pub category: FoodCategory,
    /// Amount on hand, in `unit`
    pub quantity: f64,
    /// Unit of `quantity` (e.g., "g", "pcs")
    pub unit: String,
    /// Purchase price, if known
    pub price: Option<f64>,
    /// Date of purchase, if known
    pub purchased_at: Option<Date>,
    /// Best-before or use-by date, if known
    pub expires_at: Option<Date>,
    /// When the item was created
    pub created_at: DateTimeUtc,
    /// When the item was last modified
    pub updated_at: DateTimeUtc,
}

/// Inventory items have no foreign keys
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
