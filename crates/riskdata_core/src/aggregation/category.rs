//! Mean risk score per fraud category for the bar chart.

use serde::{Deserialize, Serialize};

use super::{group_scores, rounded_mean};
use crate::types::RiskRecord;

/// Labels longer than this many characters are shortened.
pub const MAX_LABEL_CHARS: usize = 15;

/// Characters kept from a shortened label before the ellipsis.
pub const TRUNCATED_LABEL_CHARS: usize = 12;

/// One bar of the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPoint {
    /// Axis label, possibly shortened
    pub category: String,
    /// Untruncated category name
    pub full_category: String,
    /// Rounded mean score of the category's records
    pub risk_score: u32,
}

/// Shorten `label` for axis display.
///
/// Labels over 15 characters keep their first 12 followed by `...`.
///
/// # Examples
///
/// ```
/// use riskdata_core::aggregation::truncate_label;
///
/// assert_eq!(truncate_label("Billing Irregularities"), "Billing Irre...");
/// assert_eq!(truncate_label("Provider Behavior"), "Provider Beh...");
/// assert_eq!(truncate_label("Fifteen chars!!"), "Fifteen chars!!");
/// ```
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let mut short: String = label.chars().take(TRUNCATED_LABEL_CHARS).collect();
        short.push_str("...");
        short
    } else {
        label.to_string()
    }
}

/// Rounded mean score per category, in order of first appearance.
pub fn category_data(data: &[RiskRecord]) -> Vec<CategoryPoint> {
    group_scores(data, |record| record.category.as_str())
        .into_iter()
        .map(|(category, scores)| CategoryPoint {
            category: truncate_label(category),
            full_category: category.to_string(),
            risk_score: rounded_mean(&scores),
        })
        .collect()
}
