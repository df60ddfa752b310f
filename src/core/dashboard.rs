//! Household dashboard generation.
//!
//! This module pulls a household's inventory, consumption logs and waste history from the
//! database, runs the risk, waste and community engines over them, and returns one
//! structured `HouseholdDashboard`. The struct serializes straight to JSON; the format
//! helpers produce a plain-text summary for logs and chat surfaces.

use crate::{
    cache::TtlCache,
    clock::Clock,
    config::settings::Settings,
    core::{
        community::{self, CommunityComparison},
        consumption, inventory,
        risk::{self, RiskAssessment, RiskReport},
        waste::{self, UnitTable, WasteEstimations},
        waste_records,
    },
    errors::Result,
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::fmt::Write;
use tracing::{debug, info};

/// Longest observation window honoured, in days (ten years)
pub const MAX_OBSERVATION_WINDOW_DAYS: i64 = 3650;

/// Everything the household overview screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseholdDashboard {
    /// Household the dashboard belongs to
    pub household_id: i64,
    /// When the dashboard was computed
    pub generated_at: DateTime<Utc>,
    /// Inventory risk
    pub risk: RiskReport,
    /// Waste totals and projections over the observation window
    pub waste: WasteEstimations,
    /// Household waste relative to the community
    pub community: CommunityComparison,
}

/// Cache of generated dashboards keyed by household id
pub type DashboardCache = TtlCache<i64, HouseholdDashboard>;

/// Creates a dashboard cache using the configured TTL.
#[must_use]
pub fn new_dashboard_cache(settings: &Settings) -> DashboardCache {
    TtlCache::new(settings.dashboard.cache_ttl_secs)
}

/// Generates the dashboard for one household.
///
/// # Arguments
/// * `db` - Database connection
/// * `household_id` - Household to report on
/// * `clock` - Source of "now" for scoring and the observation window
/// * `settings` - Window length, unit table, category limit and comparison band
pub async fn generate_household_dashboard(
    db: &DatabaseConnection,
    household_id: i64,
    clock: &dyn Clock,
    settings: &Settings,
) -> Result<HouseholdDashboard> {
    let now = clock.now();
    let window_days = settings
        .waste
        .observation_window_days
        .clamp(1, MAX_OBSERVATION_WINDOW_DAYS);
    let since = now - Duration::days(window_days);
    let units = UnitTable::from_settings(&settings.waste);

    let items = inventory::get_items_for_household(db, household_id).await?;
    let logs = consumption::get_logs_for_household(db, household_id).await?;
    let records = waste_records::get_waste_records_since(db, household_id, since, now).await?;
    let community_average =
        waste_records::community_average_grams(db, since, now, &units).await?;
    debug!(
        household_id,
        items = items.len(),
        logs = logs.len(),
        records = records.len(),
        "Loaded household data"
    );

    let risk = risk::aggregate(&items, &logs, now);
    let waste = waste::estimate_records(
        &records,
        &units,
        window_days,
        settings.waste.top_categories,
    );
    let community = community::compare(
        waste.total_waste_grams,
        community_average,
        settings.community.threshold_pct,
    );

    info!(
        household_id,
        high_risk = risk.high_count,
        total_waste_grams = waste.total_waste_grams,
        comparison = %community.comparison,
        "Generated household dashboard"
    );

    Ok(HouseholdDashboard {
        household_id,
        generated_at: now,
        risk,
        waste,
        community,
    })
}

/// Returns the cached dashboard for a household, generating and caching it when missing
/// or expired.
pub async fn get_or_generate_dashboard(
    db: &DatabaseConnection,
    household_id: i64,
    clock: &dyn Clock,
    settings: &Settings,
    cache: &DashboardCache,
) -> Result<HouseholdDashboard> {
    let now = clock.now();
    if let Some(dashboard) = cache.get(&household_id, now).await {
        debug!(household_id, "Serving dashboard from cache");
        return Ok(dashboard);
    }

    let dashboard = generate_household_dashboard(db, household_id, clock, settings).await?;
    cache.insert(household_id, dashboard.clone(), now).await;
    Ok(dashboard)
}

/// Formats an amount of money like "$12.50".
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Formats grams, switching to kilograms from 1000 g.
#[must_use]
pub fn format_grams(grams: f64) -> String {
    if grams >= 1000.0 {
        format!("{:.1} kg", grams / 1000.0)
    } else {
        format!("{grams:.0} g")
    }
}

/// One line per assessment, e.g. `Milk [High 100]: Expired, Low usage, Heat sensitive`.
///
/// Only the first three reasons are shown.
#[must_use]
pub fn format_risk_line(assessment: &RiskAssessment) -> String {
    let header = format!(
        "{} [{} {}]",
        assessment.item_name, assessment.level, assessment.score
    );
    let reasons: Vec<&str> = assessment
        .top_reasons()
        .iter()
        .map(|reason| reason.as_str())
        .collect();

    if reasons.is_empty() {
        header
    } else {
        format!("{header}: {}", reasons.join(", "))
    }
}

/// Formats a dashboard into a human-readable summary.
#[must_use]
pub fn format_dashboard_summary(dashboard: &HouseholdDashboard, max_items: usize) -> String {
    let risk = &dashboard.risk;
    let waste = &dashboard.waste;
    let community = &dashboard.community;

    let mut summary = format!(
        "Household {} - {}\n",
        dashboard.household_id,
        dashboard.generated_at.format("%Y-%m-%d")
    );

    // Writing to a String cannot fail
    let _ = writeln!(
        summary,
        "Risk: {} high | {} medium | {} low | potential loss {}",
        risk.high_count,
        risk.medium_count,
        risk.low_count,
        format_money(risk.potential_loss_value)
    );
    for assessment in risk.assessments.iter().take(max_items) {
        let _ = writeln!(summary, "  {}", format_risk_line(assessment));
    }

    let _ = writeln!(
        summary,
        "Waste ({} days): {} ({}) | weekly {} | monthly {}",
        waste.observation_window_days,
        format_grams(waste.total_waste_grams),
        format_money(waste.estimated_money_wasted),
        format_grams(waste.weekly_projection),
        format_grams(waste.monthly_projection)
    );
    for category in &waste.top_waste_categories {
        let _ = writeln!(
            summary,
            "  {}: {} in {} records",
            category.category,
            format_grams(category.grams),
            category.count
        );
    }

    let _ = write!(
        summary,
        "Community: {} ({}% difference)",
        community.comparison, community.percentage_diff
    );

    summary
}
