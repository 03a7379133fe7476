//! Record, field and filter types.
//!
//! This module provides:
//! - `record`: the `RiskRecord` observation
//! - `field`: `RiskField`, the groupable record fields
//! - `filter`: `FilterOptions`, the dashboard's optional constraints
//! - `error`: `RiskDataError`

pub mod error;
pub mod field;
pub mod filter;
pub mod record;

pub use error::RiskDataError;
pub use field::RiskField;
pub use filter::FilterOptions;
pub use record::RiskRecord;
