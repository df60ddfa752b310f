//! Food category - the closed set of categories an inventory item or waste record can carry.
//!
//! Stored as its label in a string column. Rows written by other tools (receipt scans,
//! imports) may carry labels outside the closed set, so decoding is lenient: anything
//! unrecognised reads back as `Other` rather than failing the whole query.
//! The scoring rules key off category membership (perishables, heat sensitive produce,
//! long-life stock), so the grouping helpers live here too.

use sea_orm::{
    ColIdx, EnumIter, QueryResult, TryGetError, TryGetable, Value,
    sea_query::{ArrayType, ColumnType, Nullable, StringLen, ValueType, ValueTypeErr},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum FoodCategory {
    /// Fresh vegetables
    Vegetable,
    /// Fresh fruit
    Fruit,
    /// Milk, cheese, yoghurt and similar
    Dairy,
    /// Meat, fish, eggs, tofu
    Protein,
    /// Bread, rice, pasta, cereals
    Grain,
    /// Shelf-stable dry and canned goods
    Pantry,
    /// Snacks
    Snacks,
    /// Drinks
    Beverage,
    /// Frozen food
    Frozen,
    /// Anything else
    Other,
}

impl FoodCategory {
    /// Label used for storage and display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetable => "Vegetable",
            Self::Fruit => "Fruit",
            Self::Dairy => "Dairy",
            Self::Protein => "Protein",
            Self::Grain => "Grain",
            Self::Pantry => "Pantry",
            Self::Snacks => "Snacks",
            Self::Beverage => "Beverage",
            Self::Frozen => "Frozen",
            Self::Other => "Other",
        }
    }

    /// Parses a free-text label case-insensitively. Unknown labels become `Other`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "vegetable" | "vegetables" => Self::Vegetable,
            "fruit" | "fruits" => Self::Fruit,
            "dairy" => Self::Dairy,
            "protein" => Self::Protein,
            "grain" | "grains" => Self::Grain,
            "pantry" => Self::Pantry,
            "snacks" | "snack" => Self::Snacks,
            "beverage" | "beverages" => Self::Beverage,
            "frozen" => Self::Frozen,
            _ => Self::Other,
        }
    }

    /// Categories that spoil quickly enough that a missing expiry date is itself a risk.
    #[must_use]
    pub const fn is_perishable(self) -> bool {
        matches!(
            self,
            Self::Vegetable | Self::Fruit | Self::Dairy | Self::Protein
        )
    }

    /// Categories that spoil faster during the warm season.
    #[must_use]
    pub const fn is_heat_sensitive(self) -> bool {
        matches!(self, Self::Fruit | Self::Vegetable | Self::Dairy)
    }

    /// Fresh produce, which goes stale after about a week on hand.
    #[must_use]
    pub const fn is_produce(self) -> bool {
        matches!(self, Self::Vegetable | Self::Fruit)
    }

    /// Long-life stock that only ages out after about a month.
    #[must_use]
    pub const fn is_long_life(self) -> bool {
        matches!(self, Self::Pantry | Self::Frozen)
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FoodCategory> for Value {
    fn from(category: FoodCategory) -> Self {
        category.as_str().into()
    }
}

impl TryGetable for FoodCategory {
    fn try_get_by<I: ColIdx>(res: &QueryResult, idx: I) -> Result<Self, TryGetError> {
        String::try_get_by(res, idx).map(|label| Self::from_label(&label))
    }
}

impl ValueType for FoodCategory {
    fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
        <String as ValueType>::try_from(v).map(|label| Self::from_label(&label))
    }

    fn type_name() -> String {
        "FoodCategory".to_owned()
    }

    fn array_type() -> ArrayType {
        ArrayType::String
    }

    fn column_type() -> ColumnType {
        ColumnType::String(StringLen::None)
    }
}

impl Nullable for FoodCategory {
    fn null() -> Value {
        Value::String(None)
    }
}
