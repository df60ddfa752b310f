//! Core business logic - framework-agnostic scoring, projection and data-source operations.
//!
//! `risk`, `waste`, `community` and `sensor` are pure and synchronous. `inventory`,
//! `consumption` and `waste_records` are the database-backed sources that feed them, and
//! `dashboard` ties the two halves together.

pub mod community;
pub mod consumption;
pub mod dashboard;
pub mod inventory;
pub mod risk;
pub mod sensor;
pub mod waste;
pub mod waste_records;
