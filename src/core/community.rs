//! Community comparison.
//!
//! Places a household's average waste relative to the community baseline. Both averages
//! are computed by the caller; this module only classifies them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default band, in percent, inside which a household counts as average
pub const DEFAULT_THRESHOLD_PCT: f64 = 10.0;

/// Where the household sits relative to the community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Wastes less than the community by more than the threshold
    Below,
    /// Within the threshold of the community
    Average,
    /// Wastes more than the community by more than the threshold
    Above,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Below => "below",
            Self::Average => "average",
            Self::Above => "above",
        })
    }
}

/// Result of a community comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommunityComparison {
    /// Classification
    pub comparison: Comparison,
    /// Absolute difference as a whole percentage of the community average
    pub percentage_diff: f64,
    /// The household average that was compared
    pub user_average_grams: f64,
    /// The community average it was compared against
    pub community_average_grams: f64,
}

/// Compares a household's average waste with the community's.
///
/// The difference must exceed `threshold_pct` (unrounded) to count as below or above.
/// A zero or invalid community average yields `Average` with a 0% difference, and
/// non-finite inputs are treated as 0.
#[must_use]
pub fn compare(
    user_average_grams: f64,
    community_average_grams: f64,
    threshold_pct: f64,
) -> CommunityComparison {
    let user = finite_or_zero(user_average_grams);
    let community = finite_or_zero(community_average_grams);
    let threshold = finite_or_zero(threshold_pct).abs();

    let (comparison, percentage_diff) = if community == 0.0 {
        (Comparison::Average, 0.0)
    } else {
        let exact = (user - community).abs() * 100.0 / community.abs();
        let comparison = if exact > threshold && user < community {
            Comparison::Below
        } else if exact > threshold && user > community {
            Comparison::Above
        } else {
            Comparison::Average
        };
        (comparison, exact.round())
    };

    CommunityComparison {
        comparison,
        percentage_diff,
        user_average_grams: user,
        community_average_grams: community,
    }
}

const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_equal_averages() {
        let result = compare(100.0, 100.0, 10.0);
        assert_eq!(result.comparison, Comparison::Average);
        assert_eq!(result.percentage_diff, 0.0);
    }

    #[test]
    fn test_below_community() {
        let result = compare(50.0, 100.0, 10.0);
        assert_eq!(result.comparison, Comparison::Below);
        assert_eq!(result.percentage_diff, 50.0);
    }

    #[test]
    fn test_above_community() {
        let result = compare(150.0, 100.0, 10.0);
        assert_eq!(result.comparison, Comparison::Above);
        assert_eq!(result.percentage_diff, 50.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(compare(110.0, 100.0, 10.0).comparison, Comparison::Average);
        assert_eq!(compare(90.0, 100.0, 10.0).comparison, Comparison::Average);
        assert_eq!(compare(110.4, 100.0, 10.0).comparison, Comparison::Above);
        // 10.4% rounds to 10 but still exceeds the threshold
        assert_eq!(compare(110.4, 100.0, 10.0).percentage_diff, 10.0);
    }

    #[test]
    fn test_zero_community_average() {
        let result = compare(75.0, 0.0, 10.0);
        assert_eq!(result.comparison, Comparison::Average);
        assert_eq!(result.percentage_diff, 0.0);
    }

    #[test]
    fn test_non_finite_inputs() {
        let result = compare(f64::NAN, 100.0, 10.0);
        assert_eq!(result.comparison, Comparison::Below);
        assert_eq!(result.percentage_diff, 100.0);
    }

    #[test]
    fn test_comparison_serializes_lowercase() {
        let json = serde_json::to_string(&Comparison::Below).unwrap_or_default();
        assert_eq!(json, "\"below\"");
    }
}
