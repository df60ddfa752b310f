//! Waste record business logic - the waste history and community baseline sources.
//!
//! Records are created by the consumption-prediction step and read back over an
//! observation window `[since, until]`. The community baseline is the mean of per-household gram totals
//! over that window, counting only households that recorded any waste in it.

use crate::{
    core::waste::UnitTable,
    entities::{FoodCategory, WasteRecord, waste_record},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Fields supplied when recording waste
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewWasteRecord {
    /// What was thrown away
    pub material_name: String,
    /// Amount wasted
    pub quantity_value: f64,
    /// Unit of `quantity_value`
    pub quantity_unit: String,
    /// Inventory item the waste came from
    pub source_item_name: String,
    /// Category of the source item
    pub source_category: FoodCategory,
    /// Monetary value, if known
    pub estimated_value: Option<f64>,
}

/// Stores a waste record for a household.
///
/// # Errors
/// Returns an error if:
/// - The material name is empty
/// - The quantity or value is negative or not finite
/// - The database insert fails
pub async fn create_waste_record(
    db: &DatabaseConnection,
    household_id: i64,
    record: NewWasteRecord,
    created_at: DateTime<Utc>,
) -> Result<waste_record::Model> {
    if record.material_name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Waste material name cannot be empty".to_string(),
        });
    }

    if !record.quantity_value.is_finite() || record.quantity_value < 0.0 {
        return Err(Error::InvalidAmount {
            amount: record.quantity_value,
        });
    }

    if let Some(value) = record.estimated_value {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidAmount { amount: value });
        }
    }

    let model = waste_record::ActiveModel {
        household_id: Set(household_id),
        material_name: Set(record.material_name.trim().to_string()),
        quantity_value: Set(record.quantity_value),
        quantity_unit: Set(record.quantity_unit.trim().to_string()),
        source_item_name: Set(record.source_item_name.trim().to_string()),
        source_category: Set(record.source_category),
        estimated_value: Set(record.estimated_value),
        created_at: Set(created_at),
        updated_at: Set(created_at),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Retrieves a household's waste records created between `since` and `until` inclusive,
/// oldest first.
pub async fn get_waste_records_since(
    db: &DatabaseConnection,
    household_id: i64,
    since: DateTime<Utc>,
    until: DateTime<Utc>,
) -> Result<Vec<waste_record::Model>> {
    WasteRecord::find()
        .filter(waste_record::Column::HouseholdId.eq(household_id))
        .filter(waste_record::Column::CreatedAt.between(since, until))
        .order_by_asc(waste_record::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Total grams a household wasted between `since` and `until`.
pub async fn household_total_grams(
    db: &DatabaseConnection,
    household_id: i64,
    since: DateTime<Utc>,
    until: DateTime<Utc>,
    units: &UnitTable,
) -> Result<f64> {
    let records = get_waste_records_since(db, household_id, since, until).await?;
    Ok(records
        .iter()
        .map(|r| units.to_grams(r.quantity_value, &r.quantity_unit))
        .sum())
}

/// Mean of per-household gram totals between `since` and `until`; 0 when nobody recorded
/// waste.
pub async fn community_average_grams(
    db: &DatabaseConnection,
    since: DateTime<Utc>,
    until: DateTime<Utc>,
    units: &UnitTable,
) -> Result<f64> {
    let records = WasteRecord::find()
        .filter(waste_record::Column::CreatedAt.between(since, until))
        .order_by_asc(waste_record::Column::Id)
        .all(db)
        .await?;

    // Summed in household order so the baseline is bit-for-bit repeatable
    let mut totals: BTreeMap<i64, f64> = BTreeMap::new();
    for record in &records {
        *totals.entry(record.household_id).or_insert(0.0) +=
            units.to_grams(record.quantity_value, &record.quantity_unit);
    }

    if totals.is_empty() {
        return Ok(0.0);
    }

    // Cast safety: household counts are far below f64's exact integer range.
    #[allow(clippy::cast_precision_loss)]
    let average = totals.values().sum::<f64>() / totals.len() as f64;
    debug!(
        households = totals.len(),
        average, "Computed community waste baseline"
    );
    Ok(average)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{instant, new_waste, setup_test_db};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_waste_record_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        let now = instant(2024, 6, 1, 9);

        let mut unnamed = new_waste("kg", 1.0, FoodCategory::Fruit);
        unnamed.material_name = String::new();
        let result = create_waste_record(&db, 1, unnamed, now).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        let result =
            create_waste_record(&db, 1, new_waste("kg", -2.0, FoodCategory::Fruit), now).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -2.0 }
        ));

        let mut bad_value = new_waste("kg", 1.0, FoodCategory::Fruit);
        bad_value.estimated_value = Some(f64::INFINITY);
        let result = create_waste_record(&db, 1, bad_value, now).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_records_since_window() -> Result<()> {
        let db = setup_test_db().await?;
        let units = UnitTable::default();

        create_waste_record(
            &db,
            1,
            new_waste("g", 100.0, FoodCategory::Fruit),
            instant(2024, 5, 1, 9),
        )
        .await?;
        create_waste_record(
            &db,
            1,
            new_waste("kg", 0.25, FoodCategory::Dairy),
            instant(2024, 6, 2, 9),
        )
        .await?;
        create_waste_record(
            &db,
            1,
            new_waste("g", 50.0, FoodCategory::Dairy),
            instant(2024, 6, 3, 9),
        )
        .await?;
        // Dated after the end of the window
        create_waste_record(
            &db,
            1,
            new_waste("kg", 2.0, FoodCategory::Dairy),
            instant(2024, 6, 20, 9),
        )
        .await?;

        let since = instant(2024, 6, 1, 0);
        let until = instant(2024, 6, 10, 0);
        let records = get_waste_records_since(&db, 1, since, until).await?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quantity_unit, "kg");

        assert_eq!(
            household_total_grams(&db, 1, since, until, &units).await?,
            300.0
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_community_average() -> Result<()> {
        let db = setup_test_db().await?;
        let units = UnitTable::default();
        let since = instant(2024, 6, 1, 0);
        let until = instant(2024, 6, 30, 0);

        assert_eq!(
            community_average_grams(&db, since, until, &units).await?,
            0.0
        );

        let day = instant(2024, 6, 5, 12);
        create_waste_record(&db, 1, new_waste("g", 300.0, FoodCategory::Fruit), day).await?;
        create_waste_record(&db, 1, new_waste("g", 100.0, FoodCategory::Fruit), day).await?;
        create_waste_record(&db, 2, new_waste("kg", 0.2, FoodCategory::Grain), day).await?;
        // Outside the window on either side, ignored
        create_waste_record(
            &db,
            3,
            new_waste("kg", 5.0, FoodCategory::Grain),
            instant(2024, 5, 1, 0),
        )
        .await?;
        create_waste_record(
            &db,
            4,
            new_waste("kg", 5.0, FoodCategory::Grain),
            instant(2024, 7, 1, 0),
        )
        .await?;

        // Household 1: 400 g, household 2: 200 g
        assert_eq!(
            community_average_grams(&db, since, until, &units).await?,
            300.0
        );

        Ok(())
    }
}
