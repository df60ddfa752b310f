//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the data supplied by the inventory, consumption and waste sources.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod consumption_log;
pub mod inventory_item;
pub mod waste_record;

// Re-export specific types to avoid conflicts
pub use category::FoodCategory;
pub use consumption_log::{
    Column as ConsumptionLogColumn, Entity as ConsumptionLog, Model as ConsumptionLogModel,
};
pub use inventory_item::{
    Column as InventoryItemColumn, Entity as InventoryItem, Model as InventoryItemModel,
};
pub use waste_record::{Column as WasteRecordColumn, Entity as WasteRecord, Model as WasteRecordModel};
