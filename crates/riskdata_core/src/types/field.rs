//! Groupable record fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RiskDataError;

/// A field of [`RiskRecord`](super::RiskRecord) usable as a key for
/// distinct-value extraction.
///
/// # Examples
///
/// ```
/// use riskdata_core::types::RiskField;
///
/// let field: RiskField = "Hospital".parse().unwrap();
/// assert_eq!(field, RiskField::Hospital);
///
/// // Both spellings of the score are accepted
/// assert_eq!("riskScore".parse::<RiskField>().unwrap(), RiskField::RiskScore);
/// assert_eq!("risk_score".parse::<RiskField>().unwrap(), RiskField::RiskScore);
///
/// assert!("salary".parse::<RiskField>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskField {
    /// Record identifier
    Id,
    /// Hospital name
    Hospital,
    /// City
    Location,
    /// Medical specialty
    Specialty,
    /// Observation date
    Date,
    /// Numeric risk score
    RiskScore,
    /// Fraud category
    Category,
}

impl RiskField {
    /// Every field, in record order.
    pub const ALL: [RiskField; 7] = [
        RiskField::Id,
        RiskField::Hospital,
        RiskField::Location,
        RiskField::Specialty,
        RiskField::Date,
        RiskField::RiskScore,
        RiskField::Category,
    ];

    /// Serialised (camelCase) name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            RiskField::Id => "id",
            RiskField::Hospital => "hospital",
            RiskField::Location => "location",
            RiskField::Specialty => "specialty",
            RiskField::Date => "date",
            RiskField::RiskScore => "riskScore",
            RiskField::Category => "category",
        }
    }
}

impl FromStr for RiskField {
    type Err = RiskDataError;

    /// Parses a field name case-insensitively, ignoring `_` and `-`.
    fn from_str(s: &str) -> Result<Self, RiskDataError> {
        let normalised: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalised.as_str() {
            "id" => Ok(RiskField::Id),
            "hospital" => Ok(RiskField::Hospital),
            "location" => Ok(RiskField::Location),
            "specialty" => Ok(RiskField::Specialty),
            "date" => Ok(RiskField::Date),
            "riskscore" => Ok(RiskField::RiskScore),
            "category" => Ok(RiskField::Category),
            _ => Err(RiskDataError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for RiskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for field in RiskField::ALL {
            assert_eq!(field.name().parse::<RiskField>().unwrap(), field);
        }
    }

    #[test]
    fn test_from_str_tolerates_case_and_separators() {
        assert_eq!("SPECIALTY".parse::<RiskField>().unwrap(), RiskField::Specialty);
        assert_eq!("risk-score".parse::<RiskField>().unwrap(), RiskField::RiskScore);
    }

    #[test]
    fn test_unknown_field_keeps_original_text() {
        let err = "Zip_Code".parse::<RiskField>().unwrap_err();
        assert_eq!(err, RiskDataError::UnknownField("Zip_Code".to_string()));
    }
}
