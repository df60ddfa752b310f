//! Consumption log entity - One "I used this" event for a household.
//!
//! Entries are immutable. `item_name` is free text and is matched loosely against
//! inventory item names to derive a usage-frequency signal.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Consumption log database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "consumption_logs")]
pub struct Model {
    /// Unique identifier for the log entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household that logged the consumption
    pub household_id: i64,
    /// Name of the item as typed or recognised
    pub item_name: String,
    /// When the consumption happened
    pub logged_at: DateTimeUtc,
}

/// Consumption logs have no foreign keys
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
