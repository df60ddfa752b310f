//! Consumption log business logic - the usage-frequency source for the risk engine.
//!
//! Log entries are append-only: there is no update or delete.

use crate::{
    entities::{ConsumptionLog, consumption_log},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Records that a household consumed an item.
///
/// # Errors
/// Returns an error if the item name is empty or the insert fails.
pub async fn log_consumption(
    db: &DatabaseConnection,
    household_id: i64,
    item_name: &str,
    logged_at: DateTime<Utc>,
) -> Result<consumption_log::Model> {
    if item_name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Consumed item name cannot be empty".to_string(),
        });
    }

    let entry = consumption_log::ActiveModel {
        household_id: Set(household_id),
        item_name: Set(item_name.trim().to_string()),
        logged_at: Set(logged_at),
        ..Default::default()
    };
    entry.insert(db).await.map_err(Into::into)
}

/// Retrieves every consumption log of a household, oldest first.
pub async fn get_logs_for_household(
    db: &DatabaseConnection,
    household_id: i64,
) -> Result<Vec<consumption_log::Model>> {
    ConsumptionLog::find()
        .filter(consumption_log::Column::HouseholdId.eq(household_id))
        .order_by_asc(consumption_log::Column::LoggedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a household's consumption logs at or after `since`, oldest first.
pub async fn get_logs_since(
    db: &DatabaseConnection,
    household_id: i64,
    since: DateTime<Utc>,
) -> Result<Vec<consumption_log::Model>> {
    ConsumptionLog::find()
        .filter(consumption_log::Column::HouseholdId.eq(household_id))
        .filter(consumption_log::Column::LoggedAt.gte(since))
        .order_by_asc(consumption_log::Column::LoggedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
