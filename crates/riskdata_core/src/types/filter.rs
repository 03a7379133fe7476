//! Dashboard filter constraints.

use serde::{Deserialize, Serialize};

use super::record::RiskRecord;

/// Dropdown value meaning "no constraint".
pub const ALL_SELECTION: &str = "all";

/// Optional hospital, location and specialty constraints.
///
/// A constraint that is `None` or empty is a wildcard. A record matches when
/// it satisfies every remaining constraint.
///
/// # Examples
///
/// ```
/// use riskdata_core::types::FilterOptions;
///
/// let options = FilterOptions::new()
///     .with_hospital("AIIMS")
///     .with_location("Delhi");
/// assert_eq!(options.hospital.as_deref(), Some("AIIMS"));
/// assert!(options.specialty.is_none());
///
/// // The dashboard dropdowns use "all" for an unset filter
/// let from_ui = FilterOptions::from_selection("all", "Delhi", "all");
/// assert_eq!(from_ui, FilterOptions::new().with_location("Delhi"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Hospital constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    /// Location constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Specialty constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl FilterOptions {
    /// Options with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from the three dropdown selections.
    ///
    /// `"all"` (any case) and empty selections become wildcards.
    pub fn from_selection(hospital: &str, location: &str, specialty: &str) -> Self {
        Self {
            hospital: selection(hospital),
            location: selection(location),
            specialty: selection(specialty),
        }
    }

    /// Constrain the hospital.
    pub fn with_hospital(mut self, hospital: impl Into<String>) -> Self {
        self.hospital = Some(hospital.into());
        self
    }

    /// Constrain the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Constrain the specialty.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// Whether no constraint is active.
    pub fn is_unconstrained(&self) -> bool {
        active(&self.hospital).is_none()
            && active(&self.location).is_none()
            && active(&self.specialty).is_none()
    }

    /// Whether `record` satisfies every active constraint.
    pub fn matches(&self, record: &RiskRecord) -> bool {
        if let Some(hospital) = active(&self.hospital) {
            if record.hospital != hospital {
                return false;
            }
        }
        if let Some(location) = active(&self.location) {
            if record.location != location {
                return false;
            }
        }
        if let Some(specialty) = active(&self.specialty) {
            if record.specialty != specialty {
                return false;
            }
        }
        true
    }
}

fn active(constraint: &Option<String>) -> Option<&str> {
    constraint.as_deref().filter(|value| !value.is_empty())
}

fn selection(value: &str) -> Option<String> {
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_SELECTION) {
        None
    } else {
        Some(value.to_string())
    }
}
