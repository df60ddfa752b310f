//! Waste estimation and projection.
//!
//! Turns tracked waste records into totals, linear weekly/monthly projections and a
//! per-category rollup. Record quantities are normalised to grams through a `UnitTable`
//! before aggregation. Bad numbers (negative, NaN, infinite) count as zero rather than
//! failing, and the observation window is clamped to at least one day.

use crate::{
    config::settings::WasteSettings,
    entities::{FoodCategory, waste_record},
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Number of categories reported when no limit is configured
pub const DEFAULT_TOP_CATEGORIES: usize = 5;
/// Grams assumed for one unit of an unrecognised unit
pub const DEFAULT_GRAMS_PER_UNIT: f64 = 100.0;

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Built-in conversions, overridable from config.
const BUILTIN_UNITS: &[(&str, f64)] = &[
    ("g", 1.0),
    ("gram", 1.0),
    ("grams", 1.0),
    ("kg", 1000.0),
    ("mg", 0.001),
    ("lb", 453.592),
    ("lbs", 453.592),
    ("oz", 28.3495),
    ("ml", 1.0),
    ("l", 1000.0),
    ("cup", 240.0),
    ("cups", 240.0),
    ("tbsp", 15.0),
    ("tsp", 5.0),
    ("piece", 100.0),
    ("pieces", 100.0),
    ("pcs", 100.0),
    ("item", 100.0),
    ("each", 100.0),
];

/// Maps unit names to their weight in grams.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    grams_per_unit: HashMap<String, f64>,
    default_grams_per_unit: f64,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self {
            grams_per_unit: BUILTIN_UNITS
                .iter()
                .map(|(unit, grams)| ((*unit).to_string(), *grams))
                .collect(),
            default_grams_per_unit: DEFAULT_GRAMS_PER_UNIT,
        }
    }
}

impl UnitTable {
    /// Builds the table from the built-in units plus any configured overrides.
    #[must_use]
    pub fn from_settings(settings: &WasteSettings) -> Self {
        let mut table = Self::default();
        for (unit, grams) in &settings.units {
            if grams.is_finite() && *grams >= 0.0 {
                table.grams_per_unit.insert(unit.trim().to_lowercase(), *grams);
            }
        }
        if settings.default_grams_per_unit.is_finite() && settings.default_grams_per_unit >= 0.0 {
            table.default_grams_per_unit = settings.default_grams_per_unit;
        }
        table
    }

    /// Grams in one `unit`. Unknown units use the default weight.
    #[must_use]
    pub fn grams_per_unit(&self, unit: &str) -> f64 {
        self.grams_per_unit
            .get(unit.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(self.default_grams_per_unit)
    }

    /// Converts a quantity to grams; negative or non-finite quantities become 0.
    #[must_use]
    pub fn to_grams(&self, quantity: f64, unit: &str) -> f64 {
        if !quantity.is_finite() || quantity <= 0.0 {
            return 0.0;
        }
        quantity * self.grams_per_unit(unit)
    }
}

/// One unit of waste, already normalised to grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteSample {
    /// Category the waste is attributed to
    pub category: FoodCategory,
    /// Weight in grams
    pub grams: f64,
    /// Monetary value, 0 if unknown
    pub value: f64,
}

impl WasteSample {
    /// Derives a sample from a stored waste record.
    #[must_use]
    pub fn from_record(record: &waste_record::Model, units: &UnitTable) -> Self {
        Self {
            category: record.source_category,
            grams: units.to_grams(record.quantity_value, &record.quantity_unit),
            value: sanitize(record.estimated_value.unwrap_or(0.0)),
        }
    }
}

/// Waste rolled up for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryWaste {
    /// The category
    pub category: FoodCategory,
    /// Total grams wasted
    pub grams: f64,
    /// Total value wasted
    pub value: f64,
    /// Number of records
    pub count: usize,
}

/// Totals and projections over an observation window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteEstimations {
    /// Total grams wasted in the window
    pub total_waste_grams: f64,
    /// Total value wasted in the window
    pub estimated_money_wasted: f64,
    /// Grams per 7 days at the observed rate, rounded to the nearest gram
    pub weekly_projection: f64,
    /// Grams per 30 days at the observed rate, rounded to the nearest gram
    pub monthly_projection: f64,
    /// Heaviest categories first, at most the requested number
    pub top_waste_categories: Vec<CategoryWaste>,
    /// Window length actually used (never below 1)
    pub observation_window_days: i64,
}

fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Aggregates waste samples into totals, projections and a category rollup.
///
/// # Arguments
/// * `samples` - Waste in the observation window
/// * `observation_window_days` - Window length; values below 1 are treated as 1
/// * `top_n` - Maximum number of categories to report
#[must_use]
pub fn estimate(
    samples: &[WasteSample],
    observation_window_days: i64,
    top_n: usize,
) -> WasteEstimations {
    let window_days = observation_window_days.max(1);

    let mut total_waste_grams = 0.0;
    let mut estimated_money_wasted = 0.0;
    let mut categories: Vec<CategoryWaste> = Vec::new();

    for sample in samples {
        let grams = sanitize(sample.grams);
        let value = sanitize(sample.value);
        total_waste_grams += grams;
        estimated_money_wasted += value;

        if let Some(entry) = categories
            .iter_mut()
            .find(|entry| entry.category == sample.category)
        {
            entry.grams += grams;
            entry.value += value;
            entry.count += 1;
        } else {
            categories.push(CategoryWaste {
                category: sample.category,
                grams,
                value,
                count: 1,
            });
        }
    }

    // Stable: equal weights keep first-seen order
    categories.sort_by(|a, b| b.grams.total_cmp(&a.grams));
    categories.truncate(top_n);

    // Cast safety: window lengths are small day counts.
    #[allow(clippy::cast_precision_loss)]
    let daily_rate = total_waste_grams / window_days as f64;

    debug!(
        records = samples.len(),
        window_days, total_waste_grams, "Estimated household waste"
    );

    WasteEstimations {
        total_waste_grams,
        estimated_money_wasted,
        weekly_projection: (daily_rate * DAYS_PER_WEEK).round(),
        monthly_projection: (daily_rate * DAYS_PER_MONTH).round(),
        top_waste_categories: categories,
        observation_window_days: window_days,
    }
}

/// Normalises stored waste records with `units` and estimates them.
#[must_use]
pub fn estimate_records(
    records: &[waste_record::Model],
    units: &UnitTable,
    observation_window_days: i64,
    top_n: usize,
) -> WasteEstimations {
    let samples: Vec<WasteSample> = records
        .iter()
        .map(|record| WasteSample::from_record(record, units))
        .collect();
    estimate(&samples, observation_window_days, top_n)
}
