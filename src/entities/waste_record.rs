//! Waste record entity - A predicted or reported amount of discarded food.
//!
//! Quantities are stored in whatever unit the prediction produced; the waste engine
//! normalises them to grams through the configured unit table.

use super::category::FoodCategory;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Waste record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "waste_records")]
pub struct Model {
    /// Unique identifier for the record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household the waste belongs to
    pub household_id: i64,
    /// What was thrown away (e.g., "banana peel")
    pub material_name: String,
    /// Amount wasted, in `quantity_unit`
    pub quantity_value: f64,
    /// Unit of `quantity_value`
    pub quantity_unit: String,
    /// Inventory item the waste came from
    pub source_item_name: String,
    /// Category of the source item
    pub source_category: FoodCategory,
    /// Monetary value of the waste, if known
    pub estimated_value: Option<f64>,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Waste records have no foreign keys
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
