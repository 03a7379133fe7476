//! Five-number risk score summaries per specialty for the box plot.
//!
//! Quartiles are positional: for `n` sorted scores, q1, median and q3 are
//! the scores at indices `floor(n * 0.25)`, `floor(n * 0.5)` and
//! `floor(n * 0.75)`. No interpolation, and no special case for small
//! groups.

use serde::{Deserialize, Serialize};

use super::group_scores;
use crate::types::RiskRecord;

/// One box of the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxPlotRow {
    /// Specialty
    pub specialty: String,
    /// Lowest score
    pub min: u32,
    /// Score at the 25% position
    pub q1: u32,
    /// Score at the 50% position
    pub median: u32,
    /// Score at the 75% position
    pub q3: u32,
    /// Highest score
    pub max: u32,
}

impl BoxPlotRow {
    /// Summarise `scores` for `specialty`. Returns `None` for no scores.
    pub fn from_scores(specialty: impl Into<String>, mut scores: Vec<u32>) -> Option<Self> {
        scores.sort_unstable();
        let n = scores.len();
        let max = *scores.last()?;
        Some(Self {
            specialty: specialty.into(),
            min: scores[0],
            q1: scores[n / 4],
            median: scores[n / 2],
            q3: scores[n * 3 / 4],
            max,
        })
    }

    /// `[min, q1, median, q3, max]`, the y-values of a box-plot point.
    pub fn values(&self) -> [u32; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// Five-number summary per specialty, in order of first appearance.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use riskdata_core::prelude::*;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let data: Vec<RiskRecord> = [40, 10, 30, 20]
///     .iter()
///     .map(|&s| RiskRecord::new("r", "AIIMS", "Delhi", "Surgery", day, s, "Provider Behavior"))
///     .collect();
///
/// let rows = box_plot_data(&data);
/// assert_eq!(rows[0].values(), [10, 20, 30, 40, 40]);
/// ```
pub fn box_plot_data(data: &[RiskRecord]) -> Vec<BoxPlotRow> {
    group_scores(data, |record| record.specialty.as_str())
        .into_iter()
        .filter_map(|(specialty, scores)| BoxPlotRow::from_scores(specialty, scores))
        .collect()
}
