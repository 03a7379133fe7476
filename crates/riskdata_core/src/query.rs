//! Distinct-value extraction and record filtering.
//!
//! Both functions are pure: they read the dataset and return new
//! collections.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::{FilterOptions, RiskField, RiskRecord};

/// Distinct values of `field`, sorted lexically.
///
/// Ordering is by Unicode code point (equivalently UTF-8 bytes), so numeric
/// scores sort as text (`"10"` before `"9"`). This matches UTF-16 code-unit
/// ordering for every character in the Basic Multilingual Plane; it differs
/// only when comparing characters above U+FFFF against U+E000..=U+FFFF.
///
/// # Examples
///
/// ```
/// use riskdata_core::prelude::*;
///
/// let service = RiskDataService::from_config(DatasetConfig::default().with_seed(11)).unwrap();
/// let specialties = unique_values(service.data(), RiskField::Specialty);
/// assert!(specialties.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn unique_values(data: &[RiskRecord], field: RiskField) -> Vec<String> {
    let values: BTreeSet<String> = data
        .iter()
        .map(|record| record.field_value(field).into_owned())
        .collect();
    values.into_iter().collect()
}

/// Records satisfying every active constraint in `options`, in input order.
///
/// # Examples
///
/// ```
/// use riskdata_core::prelude::*;
///
/// let service = RiskDataService::from_config(DatasetConfig::default().with_seed(11)).unwrap();
/// let all = filter_data(service.data(), &FilterOptions::new());
/// assert_eq!(all.as_slice(), service.data());
/// ```
pub fn filter_data(data: &[RiskRecord], options: &FilterOptions) -> Vec<RiskRecord> {
    let filtered: Vec<RiskRecord> = data
        .iter()
        .filter(|record| options.matches(record))
        .cloned()
        .collect();
    debug!(input = data.len(), output = filtered.len(), "Filtered risk records");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, hospital: &str, location: &str, score: u32) -> RiskRecord {
        RiskRecord::new(
            id,
            hospital,
            location,
            "Cardiology",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            score,
            "Billing Irregularities",
        )
    }

    fn dataset() -> Vec<RiskRecord> {
        vec![
            record("a", "Medanta", "Pune", 9),
            record("b", "AIIMS", "Delhi", 10),
            record("c", "Medanta", "Delhi", 100),
            record("d", "AIIMS", "Pune", 9),
        ]
    }

    #[test]
    fn test_unique_values_sorted_and_distinct() {
        assert_eq!(unique_values(&dataset(), RiskField::Hospital), ["AIIMS", "Medanta"]);
        assert_eq!(unique_values(&dataset(), RiskField::Location), ["Delhi", "Pune"]);
    }

    #[test]
    fn test_unique_scores_sort_as_text() {
        assert_eq!(unique_values(&dataset(), RiskField::RiskScore), ["10", "100", "9"]);
    }

    #[test]
    fn test_unique_values_uppercase_first() {
        let data = vec![record("a", "apollo", "x", 1), record("b", "Zeta", "x", 1)];
        assert_eq!(unique_values(&data, RiskField::Hospital), ["Zeta", "apollo"]);
    }

    #[test]
    fn test_unique_values_code_point_order_beyond_bmp() {
        // U+FF61 sorts before U+1F600 by code point; UTF-16 units would invert them
        let data = vec![
            record("a", "\u{1F600} Clinic", "x", 1),
            record("b", "\u{FF61} Clinic", "x", 1),
        ];
        assert_eq!(
            unique_values(&data, RiskField::Hospital),
            ["\u{FF61} Clinic", "\u{1F600} Clinic"]
        );
    }

    #[test]
    fn test_unique_values_empty() {
        assert!(unique_values(&[], RiskField::Category).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let data = dataset();
        let filtered = filter_data(&data, &FilterOptions::new().with_hospital("Medanta"));
        let ids: Vec<_> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_filter_combines_constraints() {
        let data = dataset();
        let options = FilterOptions::new().with_hospital("AIIMS").with_location("Pune");
        let filtered = filter_data(&data, &options);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "d");
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let data = dataset();
        let before = data.clone();
        let _ = filter_data(&data, &FilterOptions::new().with_location("Delhi"));
        assert_eq!(data, before);
    }

    #[test]
    fn test_filter_absent_value_is_empty() {
        let filtered = filter_data(&dataset(), &FilterOptions::new().with_hospital("Nowhere"));
        assert!(filtered.is_empty());
    }
}
