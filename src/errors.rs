//! Unified error types for `PantryBuddy`.
//!
//! The scoring engine itself never fails; these errors come from configuration loading,
//! input validation on the persistence collaborators, and the database.

use thiserror::Error;

/// Application error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Input rejected before it reached the database
    #[error("Validation error: {message}")]
    Validation {
        /// What was rejected
        message: String,
    },

    /// A quantity or price that is negative or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending value
        amount: f64,
    },

    /// Inventory item lookup failed
    #[error("Inventory item not found: {id}")]
    ItemNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
