//! Database configuration module for `PantryBuddy`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! The tables back the inventory, consumption log and waste record sources. Statements are
//! generated with `Schema::create_table_from_entity`, so the schema always matches the
//! entity definitions without hand-written SQL.

use crate::entities::{ConsumptionLog, InventoryItem, WasteRecord};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/pantry_buddy.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, or the default
/// local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by `get_database_url`.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    info!("Connecting to database at {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the inventory, consumption log and waste record tables if they do not exist.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut inventory_table = schema.create_table_from_entity(InventoryItem);
    let mut consumption_table = schema.create_table_from_entity(ConsumptionLog);
    let mut waste_table = schema.create_table_from_entity(WasteRecord);
    inventory_table.if_not_exists();
    consumption_table.if_not_exists();
    waste_table.if_not_exists();

    db.execute(builder.build(&inventory_table)).await?;
    db.execute(builder.build(&consumption_table)).await?;
    db.execute(builder.build(&waste_table)).await?;

    Ok(())
}
