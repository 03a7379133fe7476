//! The synthetic fraud-risk observation.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::field::RiskField;

/// Lowest risk score a generated record can carry.
pub const MIN_RISK_SCORE: u32 = 1;

/// Highest risk score a generated record can carry.
pub const MAX_RISK_SCORE: u32 = 100;

/// One synthetic fraud-risk observation.
///
/// Records are created once by the generator and never mutated. Every
/// categorical field doubles as a grouping key for the aggregators.
///
/// Serialises with the dashboard's camelCase keys and an ISO `YYYY-MM-DD`
/// date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use riskdata_core::types::{RiskField, RiskRecord};
///
/// let record = RiskRecord::new(
///     "risk-0",
///     "AIIMS",
///     "Delhi",
///     "Cardiology",
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     73,
///     "Billing Irregularities",
/// );
/// assert_eq!(record.field_value(RiskField::Date), "2024-01-01");
/// assert_eq!(record.field_value(RiskField::RiskScore), "73");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    /// Unique identifier (`risk-{index}` for generated records)
    pub id: String,
    /// Hospital name
    pub hospital: String,
    /// City
    pub location: String,
    /// Medical specialty
    pub specialty: String,
    /// Observation date
    pub date: NaiveDate,
    /// Risk score, 1..=100 for generated records
    pub risk_score: u32,
    /// Fraud category
    pub category: String,
}

impl RiskRecord {
    /// Create a record from its parts.
    pub fn new(
        id: impl Into<String>,
        hospital: impl Into<String>,
        location: impl Into<String>,
        specialty: impl Into<String>,
        date: NaiveDate,
        risk_score: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            hospital: hospital.into(),
            location: location.into(),
            specialty: specialty.into(),
            date,
            risk_score,
            category: category.into(),
        }
    }

    /// String value of `field` for this record.
    ///
    /// Text fields are borrowed; the date renders as `YYYY-MM-DD` and the
    /// score as a plain decimal.
    pub fn field_value(&self, field: RiskField) -> Cow<'_, str> {
        match field {
            RiskField::Id => Cow::Borrowed(&self.id),
            RiskField::Hospital => Cow::Borrowed(&self.hospital),
            RiskField::Location => Cow::Borrowed(&self.location),
            RiskField::Specialty => Cow::Borrowed(&self.specialty),
            RiskField::Date => Cow::Owned(self.date.format("%Y-%m-%d").to_string()),
            RiskField::RiskScore => Cow::Owned(self.risk_score.to_string()),
            RiskField::Category => Cow::Borrowed(&self.category),
        }
    }

    /// Whether the score lies in the generator's range.
    pub fn has_valid_score(&self) -> bool {
        (MIN_RISK_SCORE..=MAX_RISK_SCORE).contains(&self.risk_score)
    }
}
