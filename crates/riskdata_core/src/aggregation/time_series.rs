//! Mean risk score per day for the trend chart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{group_scores, rounded_mean};
use crate::types::RiskRecord;

/// One point of the risk trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Day
    pub date: NaiveDate,
    /// Rounded mean score of the day's records
    pub risk_score: u32,
}

/// Rounded mean score per date, ascending by date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use riskdata_core::prelude::*;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let data: Vec<RiskRecord> = [10, 20, 30]
///     .iter()
///     .map(|&s| RiskRecord::new("r", "AIIMS", "Delhi", "Surgery", day, s, "Provider Behavior"))
///     .collect();
///
/// let series = time_series_data(&data);
/// assert_eq!(series, vec![TimeSeriesPoint { date: day, risk_score: 20 }]);
/// ```
pub fn time_series_data(data: &[RiskRecord]) -> Vec<TimeSeriesPoint> {
    let mut points: Vec<TimeSeriesPoint> = group_scores(data, |record| record.date)
        .into_iter()
        .map(|(date, scores)| TimeSeriesPoint {
            date,
            risk_score: rounded_mean(&scores),
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}
