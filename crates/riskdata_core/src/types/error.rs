//! Error types for the data service.
//!
//! Queries and aggregations are total; only name parsing and dataset
//! configuration can fail.

use thiserror::Error;

/// Data service errors.
///
/// # Examples
/// ```
/// use riskdata_core::types::RiskDataError;
///
/// let err = RiskDataError::UnknownField("salary".to_string());
/// assert_eq!(format!("{}", err), "Unknown record field: salary");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskDataError {
    /// Field name does not match any `RiskRecord` field.
    #[error("Unknown record field: {0}")]
    UnknownField(String),

    /// Dataset configuration is unusable.
    #[error("Invalid dataset configuration: {0}")]
    InvalidConfig(String),
}
