//! Dashboard snapshots.
//!
//! A snapshot is everything the dashboard page renders for one filter
//! selection: the dropdown choices, computed over the full dataset, and the
//! three chart series, computed over the filtered subset.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregation::{
    box_plot_data, category_data, time_series_data, BoxPlotRow, CategoryPoint, TimeSeriesPoint,
};
use crate::query::{filter_data, unique_values};
use crate::types::{FilterOptions, RiskField, RiskRecord};

/// Values offered by the three filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChoices {
    /// Distinct hospitals, sorted
    pub hospitals: Vec<String>,
    /// Distinct locations, sorted
    pub locations: Vec<String>,
    /// Distinct specialties, sorted
    pub specialties: Vec<String>,
}

impl FilterChoices {
    /// Collect the choices present in `data`.
    pub fn from_data(data: &[RiskRecord]) -> Self {
        Self {
            hospitals: unique_values(data, RiskField::Hospital),
            locations: unique_values(data, RiskField::Location),
            specialties: unique_values(data, RiskField::Specialty),
        }
    }
}

/// Everything the dashboard renders for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Active filters
    pub selection: FilterOptions,
    /// Dropdown choices over the full dataset
    pub filter_choices: FilterChoices,
    /// Records remaining after filtering
    pub record_count: usize,
    /// Risk score trend
    pub trend: Vec<TimeSeriesPoint>,
    /// Risk score by category
    pub categories: Vec<CategoryPoint>,
    /// Risk score distribution by specialty
    pub distribution: Vec<BoxPlotRow>,
}

impl DashboardSnapshot {
    /// Build the snapshot for `selection` over `data`.
    pub fn build(data: &[RiskRecord], selection: &FilterOptions) -> Self {
        let filtered = filter_data(data, selection);
        let snapshot = Self {
            selection: selection.clone(),
            filter_choices: FilterChoices::from_data(data),
            record_count: filtered.len(),
            trend: time_series_data(&filtered),
            categories: category_data(&filtered),
            distribution: box_plot_data(&filtered),
        };
        debug!(
            records = snapshot.record_count,
            trend_points = snapshot.trend.len(),
            categories = snapshot.categories.len(),
            boxes = snapshot.distribution.len(),
            "Built dashboard snapshot"
        );
        snapshot
    }

    /// Whether the selection left no records.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{DatasetConfig, DatasetGenerator};

    fn data() -> Vec<RiskRecord> {
        DatasetGenerator::new(DatasetConfig::default().with_seed(21))
            .unwrap()
            .generate()
    }

    #[test]
    fn test_unfiltered_snapshot() {
        let data = data();
        let snapshot = DashboardSnapshot::build(&data, &FilterOptions::new());
        assert_eq!(snapshot.record_count, 500);
        assert_eq!(snapshot.trend.len(), 25);
        assert!(snapshot.categories.len() <= 7);
        assert!(snapshot.distribution.len() <= 8);
    }

    #[test]
    fn test_choices_ignore_the_selection() {
        let data = data();
        let hospital = data[0].hospital.clone();
        let full = DashboardSnapshot::build(&data, &FilterOptions::new());
        let filtered = DashboardSnapshot::build(&data, &FilterOptions::new().with_hospital(&hospital));
        assert_eq!(full.filter_choices, filtered.filter_choices);
        assert!(filtered.record_count < full.record_count);
        assert_eq!(filtered.selection.hospital, Some(hospital));
    }

    #[test]
    fn test_empty_selection_result() {
        let data = data();
        let snapshot =
            DashboardSnapshot::build(&data, &FilterOptions::new().with_location("Atlantis"));
        assert!(snapshot.is_empty());
        assert!(snapshot.trend.is_empty());
        assert!(snapshot.categories.is_empty());
        assert!(snapshot.distribution.is_empty());
        assert!(!snapshot.filter_choices.locations.is_empty());
    }

    #[test]
    fn test_snapshot_json_keys() {
        let data = data();
        let json = serde_json::to_value(DashboardSnapshot::build(&data, &FilterOptions::new()))
            .unwrap();
        assert!(json.get("filterChoices").is_some());
        assert!(json.get("recordCount").is_some());
        assert!(json["categories"][0].get("fullCategory").is_some());
    }
}
