//! Chart aggregations over risk records.
//!
//! Each aggregator groups scores by one key and reduces every group:
//! - [`time_series_data`]: mean score per date, ascending by date
//! - [`category_data`]: mean score per fraud category with a display label
//! - [`box_plot_data`]: five-number summary per specialty
//!
//! Groups other than dates keep first-appearance order. Empty input yields
//! empty output.

mod box_plot;
mod category;
mod time_series;

pub use box_plot::{box_plot_data, BoxPlotRow};
pub use category::{category_data, truncate_label, CategoryPoint};
pub use time_series::{time_series_data, TimeSeriesPoint};

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::RiskRecord;

/// Group scores by `key`, keeping groups in order of first appearance.
pub(crate) fn group_scores<'a, K, F>(data: &'a [RiskRecord], key: F) -> Vec<(K, Vec<u32>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a RiskRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<u32>)> = Vec::new();

    for record in data {
        let k = key(record);
        match index.get(&k) {
            Some(&slot) => groups[slot].1.push(record.risk_score),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![record.risk_score]));
            }
        }
    }

    groups
}

/// Arithmetic mean rounded to the nearest integer, halves rounding up.
///
/// Returns 0 for an empty slice.
///
/// # Examples
///
/// ```
/// use riskdata_core::aggregation::rounded_mean;
///
/// assert_eq!(rounded_mean(&[10, 20, 30]), 20);
/// assert_eq!(rounded_mean(&[1, 2]), 2);
/// assert_eq!(rounded_mean(&[1, 1, 2]), 1);
/// ```
pub fn rounded_mean(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let n = scores.len() as u64;
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    ((2 * sum + n) / (2 * n)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: &str, score: u32) -> RiskRecord {
        RiskRecord::new(
            "r",
            "AIIMS",
            "Delhi",
            "Surgery",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            score,
            category,
        )
    }

    #[test]
    fn test_group_scores_first_appearance_order() {
        let data = vec![record("B", 1), record("A", 2), record("B", 3), record("C", 4)];
        let groups = group_scores(&data, |r| r.category.as_str());
        assert_eq!(groups, vec![("B", vec![1, 3]), ("A", vec![2]), ("C", vec![4])]);
    }

    #[test]
    fn test_rounded_mean_halves_round_up() {
        assert_eq!(rounded_mean(&[2, 3]), 3);
        assert_eq!(rounded_mean(&[99, 100]), 100);
        assert_eq!(rounded_mean(&[1, 2, 2, 2]), 2);
    }

    #[test]
    fn test_rounded_mean_empty_and_single() {
        assert_eq!(rounded_mean(&[]), 0);
        assert_eq!(rounded_mean(&[42]), 42);
    }
}
