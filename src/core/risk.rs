//! Waste-risk scoring for inventory items.
//!
//! This module scores each inventory item from 0 to 100 by how likely it is to be wasted,
//! buckets the scores into High/Medium/Low, and rolls them up into a household risk report.
//! Everything here is a pure function of the items, the consumption logs and an injected
//! "now": identical inputs always produce identical output, and nothing here can fail.
//!
//! Signals, evaluated in this order (the order of `reasons` follows it):
//!
//! | Signal | Condition | Points | Reason |
//! |---|---|---|---|
//! | Expiry | already expired | +100 | Expired |
//! | | 0..=3 days left | +90 | Expires in 3 days |
//! | | 4..=7 days left | +60 | Expires this week |
//! | | 8..=14 days left | +30 | |
//! | Missing expiry | perishable category | +40 | No expiry date |
//! | Usage | never consumed | +15 | Low usage |
//! | | consumed more than 3 times | -20 | |
//! | Season | May-September, heat sensitive category | +15 | Heat sensitive |
//! | Stock age | Pantry/Frozen older than 30 days | +5 | |
//! | | produce older than 7 days | +20 | Old stock |

use crate::entities::{FoodCategory, consumption_log, inventory_item};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const MS_PER_DAY: i64 = 86_400_000;

/// Score at or above which an item is High risk
pub const HIGH_THRESHOLD: u8 = 70;
/// Score at or above which an item is Medium risk
pub const MEDIUM_THRESHOLD: u8 = 40;
/// How many reasons a consumer should surface per item
pub const MAX_SURFACED_REASONS: usize = 3;

/// Consumption count above which frequent use lowers the score
const FREQUENT_USE_COUNT: usize = 3;
/// Warm season, as 0-indexed months (May through September)
const WARM_SEASON_MONTHS: std::ops::RangeInclusive<u32> = 4..=8;

/// Risk bucket derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score of 70 or more
    High,
    /// Score of 40 to 69
    Medium,
    /// Score below 40
    Low,
}

impl RiskLevel {
    /// Buckets a clamped score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short, user-facing explanation for part of a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskReason {
    /// Expiry date is in the past
    #[serde(rename = "Expired")]
    Expired,
    /// Expires within three days
    #[serde(rename = "Expires in 3 days")]
    ExpiresInThreeDays,
    /// Expires within a week
    #[serde(rename = "Expires this week")]
    ExpiresThisWeek,
    /// Perishable with no expiry date recorded
    #[serde(rename = "No expiry date")]
    NoExpiryDate,
    /// Never consumed
    #[serde(rename = "Low usage")]
    LowUsage,
    /// Warm season and the category spoils in heat
    #[serde(rename = "Heat sensitive")]
    HeatSensitive,
    /// Produce held for more than a week
    #[serde(rename = "Old stock")]
    OldStock,
}

impl RiskReason {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ExpiresInThreeDays => "Expires in 3 days",
            Self::ExpiresThisWeek => "Expires this week",
            Self::NoExpiryDate => "No expiry date",
            Self::LowUsage => "Low usage",
            Self::HeatSensitive => "Heat sensitive",
            Self::OldStock => "Old stock",
        }
    }
}

impl fmt::Display for RiskReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived risk view of a single inventory item. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// ID of the assessed inventory item
    pub item_id: i64,
    /// Name of the assessed inventory item
    pub item_name: String,
    /// Category of the assessed inventory item
    pub category: FoodCategory,
    /// Risk score clamped to 0..=100
    pub score: u8,
    /// Bucket for `score`
    pub level: RiskLevel,
    /// Reasons in evaluation order
    pub reasons: Vec<RiskReason>,
    /// Number of consumption logs matched to this item
    pub consumption_count: usize,
    /// Whole days until expiry (rounded up), if the item has an expiry date
    pub days_until_expiry: Option<i64>,
}

impl RiskAssessment {
    /// The reasons a consumer should display (at most three).
    #[must_use]
    pub fn top_reasons(&self) -> &[RiskReason] {
        let end = self.reasons.len().min(MAX_SURFACED_REASONS);
        &self.reasons[..end]
    }
}

/// Risk assessments for a whole inventory plus rollups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    /// Assessments sorted by descending score; ties keep inventory order
    pub assessments: Vec<RiskAssessment>,
    /// Number of High risk items
    pub high_count: usize,
    /// Number of Medium risk items
    pub medium_count: usize,
    /// Number of Low risk items
    pub low_count: usize,
    /// Sum of prices of High risk items
    pub potential_loss_value: f64,
}

/// Level selector for `filter_by_level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    /// Keep everything
    #[default]
    All,
    /// Keep only one level
    Only(RiskLevel),
}

impl LevelFilter {
    /// Parses "All", "High", "Medium" or "Low" (case-insensitive).
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "high" => Some(Self::Only(RiskLevel::High)),
            "medium" => Some(Self::Only(RiskLevel::Medium)),
            "low" => Some(Self::Only(RiskLevel::Low)),
            _ => None,
        }
    }

    fn accepts(self, level: RiskLevel) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == level,
        }
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::default()).and_utc()
}

/// Whole days from `now` until midnight UTC of `date`, rounded up.
///
/// 0 on the date itself, negative once the date is over.
#[must_use]
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let millis = (midnight_utc(date) - now).num_milliseconds();
    millis.div_euclid(MS_PER_DAY) + i64::from(millis.rem_euclid(MS_PER_DAY) != 0)
}

/// Fractional days elapsed since midnight UTC of `date`.
#[must_use]
pub fn days_since(date: NaiveDate, now: DateTime<Utc>) -> f64 {
    // Cast safety: millisecond spans between realistic dates fit well inside f64's exact range.
    #[allow(clippy::cast_precision_loss)]
    let days = (now - midnight_utc(date)).num_milliseconds() as f64 / MS_PER_DAY as f64;
    days
}

/// Loose name match: case-insensitive substring containment in either direction.
#[must_use]
pub fn names_match(log_name: &str, item_name: &str) -> bool {
    let log_name = log_name.to_lowercase();
    let item_name = item_name.to_lowercase();
    log_name.contains(&item_name) || item_name.contains(&log_name)
}

/// Counts the consumption logs whose name matches `item_name`.
#[must_use]
pub fn count_consumption(item_name: &str, logs: &[consumption_log::Model]) -> usize {
    logs.iter()
        .filter(|log| names_match(&log.item_name, item_name))
        .count()
}

/// Scores one inventory item.
///
/// # Arguments
/// * `item` - The item to score
/// * `logs` - All consumption logs for the household; matched to the item by name
/// * `now` - Current instant; also determines the season
#[must_use]
pub fn score_item(
    item: &inventory_item::Model,
    logs: &[consumption_log::Model],
    now: DateTime<Utc>,
) -> RiskAssessment {
    let mut score: i32 = 0;
    let mut reasons = Vec::new();
    let category = item.category;

    let days_until_expiry = item.expires_at.map(|date| days_until(date, now));
    match days_until_expiry {
        Some(days) if days < 0 => {
            score += 100;
            reasons.push(RiskReason::Expired);
        }
        Some(0..=3) => {
            score += 90;
            reasons.push(RiskReason::ExpiresInThreeDays);
        }
        Some(4..=7) => {
            score += 60;
            reasons.push(RiskReason::ExpiresThisWeek);
        }
        Some(8..=14) => score += 30,
        Some(_) => {}
        None if category.is_perishable() => {
            score += 40;
            reasons.push(RiskReason::NoExpiryDate);
        }
        None => {}
    }

    let consumption_count = count_consumption(&item.name, logs);
    if consumption_count == 0 {
        score += 15;
        reasons.push(RiskReason::LowUsage);
    } else if consumption_count > FREQUENT_USE_COUNT {
        score -= 20;
    }

    if WARM_SEASON_MONTHS.contains(&now.month0()) && category.is_heat_sensitive() {
        score += 15;
        reasons.push(RiskReason::HeatSensitive);
    }

    if let Some(purchased_at) = item.purchased_at {
        let age_days = days_since(purchased_at, now);
        if age_days > 30.0 && category.is_long_life() {
            score += 5;
        } else if age_days > 7.0 && category.is_produce() {
            score += 20;
            reasons.push(RiskReason::OldStock);
        }
    }

    // Cast safety: clamped to 0..=100, so it always fits in u8.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = score.clamp(0, 100) as u8;

    RiskAssessment {
        item_id: item.id,
        item_name: item.name.clone(),
        category,
        score,
        level: RiskLevel::from_score(score),
        reasons,
        consumption_count,
        days_until_expiry,
    }
}

/// Price as a loss amount: missing, NaN, infinite or negative prices count as 0.
#[must_use]
pub fn sanitize_amount(amount: Option<f64>) -> f64 {
    amount.filter(|a| a.is_finite() && *a > 0.0).unwrap_or(0.0)
}

/// Scores every item and rolls the results up into a `RiskReport`.
///
/// Assessments are sorted by descending score. The sort is stable, so items with equal
/// scores stay in inventory order.
#[must_use]
pub fn aggregate(
    items: &[inventory_item::Model],
    logs: &[consumption_log::Model],
    now: DateTime<Utc>,
) -> RiskReport {
    let mut scored: Vec<(RiskAssessment, f64)> = items
        .iter()
        .map(|item| (score_item(item, logs, now), sanitize_amount(item.price)))
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.score.cmp(&a.score));

    let mut high_count = 0;
    let mut medium_count = 0;
    let mut low_count = 0;
    let mut potential_loss_value = 0.0;

    for (assessment, price) in &scored {
        match assessment.level {
            RiskLevel::High => {
                high_count += 1;
                potential_loss_value += price;
            }
            RiskLevel::Medium => medium_count += 1,
            RiskLevel::Low => low_count += 1,
        }
    }

    debug!(
        items = items.len(),
        high_count, medium_count, low_count, potential_loss_value, "Aggregated inventory risk"
    );

    RiskReport {
        assessments: scored.into_iter().map(|(assessment, _)| assessment).collect(),
        high_count,
        medium_count,
        low_count,
        potential_loss_value,
    }
}

/// Returns the assessments matching `filter`, preserving their order.
#[must_use]
pub fn filter_by_level(assessments: &[RiskAssessment], filter: LevelFilter) -> Vec<RiskAssessment> {
    assessments
        .iter()
        .filter(|assessment| filter.accepts(assessment.level))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{date, instant, logs_for, sample_item};

    /// Mid-June, inside the warm season.
    fn june() -> DateTime<Utc> {
        instant(2024, 6, 15, 12)
    }

    /// Mid-January, outside the warm season.
    fn january() -> DateTime<Utc> {
        instant(2024, 1, 15, 12)
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = june();
        assert_eq!(days_until(date(2024, 6, 17), now), 2);
        assert_eq!(days_until(date(2024, 6, 16), now), 1);
        // Today counts as 0, yesterday as -1
        assert_eq!(days_until(date(2024, 6, 15), now), 0);
        assert_eq!(days_until(date(2024, 6, 14), now), -1);
    }

    #[test]
    fn test_days_until_exact_midnight() {
        let now = instant(2024, 6, 15, 0);
        assert_eq!(days_until(date(2024, 6, 15), now), 0);
        assert_eq!(days_until(date(2024, 6, 22), now), 7);
    }

    #[test]
    fn test_names_match_both_directions() {
        assert!(names_match("Milk", "whole milk"));
        assert!(names_match("Whole Milk 2L", "milk"));
        assert!(!names_match("bread", "milk"));
    }

    #[test]
    fn test_dairy_near_expiry_in_june() {
        let mut item = sample_item(1, "Yoghurt", FoodCategory::Dairy);
        item.expires_at = Some(date(2024, 6, 17));

        let assessment = score_item(&item, &[], june());

        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(
            assessment.reasons,
            vec![
                RiskReason::ExpiresInThreeDays,
                RiskReason::LowUsage,
                RiskReason::HeatSensitive
            ]
        );
        assert_eq!(assessment.days_until_expiry, Some(2));
    }

    #[test]
    fn test_expired_item_is_always_high() {
        let mut item = sample_item(1, "Chicken", FoodCategory::Protein);
        item.expires_at = Some(date(2024, 1, 10));
        let logs = logs_for("chicken", 5);

        let assessment = score_item(&item, &logs, january());

        // 100 - 20 for frequent use still lands in High
        assert_eq!(assessment.score, 80);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.reasons, vec![RiskReason::Expired]);
    }

    #[test]
    fn test_far_expiry_frequent_use_is_low() {
        let mut item = sample_item(1, "Rice", FoodCategory::Grain);
        item.expires_at = Some(date(2024, 12, 31));
        let logs = logs_for("rice", 4);

        let assessment = score_item(&item, &logs, june());

        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert!(assessment.reasons.is_empty());
        assert_eq!(assessment.consumption_count, 4);
    }

    #[test]
    fn test_expiry_bands() {
        let now = january();
        let cases = [
            (date(2024, 1, 20), 60, Some(RiskReason::ExpiresThisWeek)),
            (date(2024, 1, 25), 30, None),
            (date(2024, 2, 10), 0, None),
        ];

        for (expires, expected, reason) in cases {
            let mut item = sample_item(1, "Crackers", FoodCategory::Snacks);
            item.expires_at = Some(expires);
            // One matching log keeps the usage signal neutral
            let assessment = score_item(&item, &logs_for("crackers", 1), now);
            assert_eq!(assessment.score, expected, "expires {expires}");
            assert_eq!(assessment.reasons.first().copied(), reason);
        }
    }

    #[test]
    fn test_expiry_band_edges() {
        let midnight = instant(2024, 1, 15, 0);
        let noon = january();
        let cases = [
            (midnight, date(2024, 1, 18), 3, 90),
            (midnight, date(2024, 1, 19), 4, 60),
            (midnight, date(2024, 1, 22), 7, 60),
            (midnight, date(2024, 1, 23), 8, 30),
            (midnight, date(2024, 1, 29), 14, 30),
            (midnight, date(2024, 1, 30), 15, 0),
            // Partial days round up
            (noon, date(2024, 1, 18), 3, 90),
            (noon, date(2024, 1, 19), 4, 60),
            (noon, date(2024, 1, 30), 15, 0),
        ];

        for (now, expires, days, expected) in cases {
            let mut item = sample_item(1, "Crackers", FoodCategory::Snacks);
            item.expires_at = Some(expires);
            let assessment = score_item(&item, &logs_for("crackers", 1), now);
            assert_eq!(assessment.days_until_expiry, Some(days), "expires {expires}");
            assert_eq!(assessment.score, expected, "expires {expires}");
        }
    }

    #[test]
    fn test_stock_age_thresholds_are_exclusive() {
        let now = instant(2024, 1, 15, 0);
        let logs = logs_for("stock", 2);
        let cases = [
            (FoodCategory::Vegetable, date(2024, 1, 8), 0),
            (FoodCategory::Vegetable, date(2024, 1, 7), 20),
            (FoodCategory::Pantry, date(2023, 12, 16), 0),
            (FoodCategory::Pantry, date(2023, 12, 15), 5),
        ];

        for (category, purchased, expected) in cases {
            let mut item = sample_item(1, "stock", category);
            item.expires_at = Some(date(2024, 3, 1));
            item.purchased_at = Some(purchased);
            let assessment = score_item(&item, &logs, now);
            assert_eq!(assessment.score, expected, "{category} bought {purchased}");
        }
    }

    #[test]
    fn test_missing_expiry_only_penalises_perishables() {
        let logs = logs_for("thing", 2);

        let fruit = sample_item(1, "thing", FoodCategory::Fruit);
        let assessment = score_item(&fruit, &logs, january());
        assert_eq!(assessment.score, 40);
        assert_eq!(assessment.level, RiskLevel::Medium);
        assert_eq!(assessment.reasons, vec![RiskReason::NoExpiryDate]);

        let beverage = sample_item(2, "thing", FoodCategory::Beverage);
        assert_eq!(score_item(&beverage, &logs, january()).score, 0);
    }

    #[test]
    fn test_old_produce_and_long_life_stock() {
        let logs = logs_for("stock", 2);

        let mut carrots = sample_item(1, "stock", FoodCategory::Vegetable);
        carrots.expires_at = Some(date(2024, 3, 1));
        carrots.purchased_at = Some(date(2024, 1, 1));
        let assessment = score_item(&carrots, &logs, january());
        assert_eq!(assessment.score, 20);
        assert_eq!(assessment.reasons, vec![RiskReason::OldStock]);

        let mut flour = sample_item(2, "stock", FoodCategory::Pantry);
        flour.purchased_at = Some(date(2023, 11, 1));
        let assessment = score_item(&flour, &logs, january());
        assert_eq!(assessment.score, 5);
        assert!(assessment.reasons.is_empty());

        // Produce bought within the week is not old stock
        let mut fresh = sample_item(3, "stock", FoodCategory::Fruit);
        fresh.expires_at = Some(date(2024, 3, 1));
        fresh.purchased_at = Some(date(2024, 1, 12));
        assert_eq!(score_item(&fresh, &logs, january()).score, 0);
    }

    #[test]
    fn test_heat_sensitivity_follows_season() {
        let mut item = sample_item(1, "Strawberries", FoodCategory::Fruit);
        item.expires_at = Some(date(2025, 1, 1));
        let logs = logs_for("strawberries", 1);

        assert_eq!(score_item(&item, &logs, instant(2024, 5, 1, 0)).score, 15);
        assert_eq!(score_item(&item, &logs, instant(2024, 9, 30, 23)).score, 15);
        assert_eq!(score_item(&item, &logs, instant(2024, 4, 30, 23)).score, 0);
        assert_eq!(score_item(&item, &logs, instant(2024, 10, 1, 0)).score, 0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let mut item = sample_item(1, "Spinach", FoodCategory::Vegetable);
        item.expires_at = Some(date(2024, 6, 20));
        item.purchased_at = Some(date(2024, 6, 1));
        let logs = logs_for("baby spinach", 1);

        let first = score_item(&item, &logs, june());
        let second = score_item(&item, &logs, june());
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_reasons_caps_at_three() {
        let mut item = sample_item(1, "Lettuce", FoodCategory::Vegetable);
        item.expires_at = Some(date(2024, 6, 14));
        item.purchased_at = Some(date(2024, 5, 1));

        let assessment = score_item(&item, &[], june());

        assert_eq!(assessment.reasons.len(), 4);
        assert_eq!(
            assessment.top_reasons(),
            &[
                RiskReason::Expired,
                RiskReason::LowUsage,
                RiskReason::HeatSensitive
            ]
        );
    }

    #[test]
    fn test_aggregate_sorts_and_counts() {
        let now = january();
        let mut expired = sample_item(1, "Milk", FoodCategory::Dairy);
        expired.expires_at = Some(date(2024, 1, 1));
        expired.price = Some(3.5);
        let mut soon = sample_item(2, "Cheese", FoodCategory::Dairy);
        soon.expires_at = Some(date(2024, 1, 17));
        soon.price = Some(f64::NAN);
        let mut medium = sample_item(3, "Apples", FoodCategory::Fruit);
        medium.price = Some(4.0);
        let mut low = sample_item(4, "Pasta", FoodCategory::Grain);
        low.expires_at = Some(date(2025, 1, 1));
        low.price = Some(2.0);
        let items = vec![low, medium, soon, expired];
        let mut logs = logs_for("pasta", 4);
        logs.extend(logs_for("apples", 1));

        let report = aggregate(&items, &logs, now);

        let scores: Vec<u8> = report.assessments.iter().map(|a| a.score).collect();
        assert_eq!(scores, vec![100, 100, 40, 0]);
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        // Equal scores keep inventory order: Cheese was listed before Milk
        assert_eq!(report.assessments[0].item_name, "Cheese");
        assert_eq!(report.assessments[1].item_name, "Milk");
        assert_eq!(report.high_count, 2);
        assert_eq!(report.medium_count, 1);
        assert_eq!(report.low_count, 1);
        // NaN price counts as 0
        assert_eq!(report.potential_loss_value, 3.5);
    }

    #[test]
    fn test_potential_loss_matches_high_filter() {
        let now = june();
        let items: Vec<_> = (0..6)
            .map(|i| {
                let mut item = sample_item(i, &format!("item-{i}"), FoodCategory::Fruit);
                item.expires_at = Some(date(2024, 6, 14 + u32::try_from(i * 3).unwrap()));
                item.price = Some(1.25 * f64::from(u32::try_from(i + 1).unwrap()));
                item
            })
            .collect();

        let report = aggregate(&items, &[], now);
        let high = filter_by_level(&report.assessments, LevelFilter::Only(RiskLevel::High));

        let expected: f64 = high
            .iter()
            .map(|a| {
                let item = items.iter().find(|item| item.id == a.item_id).unwrap();
                sanitize_amount(item.price)
            })
            .sum();
        assert_eq!(report.potential_loss_value, expected);
        assert_eq!(high.len(), report.high_count);
    }

    #[test]
    fn test_filter_by_level_preserves_order() {
        let now = january();
        let mut items = Vec::new();
        for (id, name, category) in [
            (1, "Bananas", FoodCategory::Fruit),
            (2, "Juice", FoodCategory::Beverage),
            (3, "Pears", FoodCategory::Fruit),
        ] {
            items.push(sample_item(id, name, category));
        }

        let report = aggregate(&items, &[], now);
        let medium = filter_by_level(&report.assessments, LevelFilter::Only(RiskLevel::Medium));
        let names: Vec<&str> = medium.iter().map(|a| a.item_name.as_str()).collect();
        assert_eq!(names, vec!["Bananas", "Pears"]);

        let all = filter_by_level(&report.assessments, LevelFilter::All);
        assert_eq!(all, report.assessments);
    }

    #[test]
    fn test_level_filter_parse() {
        assert_eq!(LevelFilter::parse("All"), Some(LevelFilter::All));
        assert_eq!(
            LevelFilter::parse("high"),
            Some(LevelFilter::Only(RiskLevel::High))
        );
        assert_eq!(LevelFilter::parse("urgent"), None);
    }

    #[test]
    fn test_empty_inventory() {
        let report = aggregate(&[], &[], june());
        assert!(report.assessments.is_empty());
        assert_eq!(report.high_count, 0);
        assert_eq!(report.potential_loss_value, 0.0);
    }

    #[test]
    fn test_reasons_serialize_as_labels() {
        let json = serde_json::to_string(&vec![RiskReason::ExpiresInThreeDays, RiskReason::OldStock])
            .unwrap();
        assert_eq!(json, r#"["Expires in 3 days","Old stock"]"#);
    }
}
