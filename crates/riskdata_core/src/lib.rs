//! # riskdata_core: Fraud-Risk Dashboard Data Service
//!
//! ## Role
//!
//! riskdata_core is the data kernel behind the fraud-risk dashboard. It provides:
//! - Record and filter types: `RiskRecord`, `RiskField`, `FilterOptions` (`types`)
//! - Seeded synthetic dataset generation (`generator`)
//! - The memoizing context object handed to consumers (`service`)
//! - Distinct-value extraction and record filtering (`query`)
//! - Trend, category and box-plot aggregation (`aggregation`)
//! - One-shot dashboard snapshots combining all of the above (`dashboard`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use riskdata_core::prelude::*;
//!
//! let service = RiskDataService::from_config(DatasetConfig::default().with_seed(7)).unwrap();
//! let data = service.data();
//! assert_eq!(data.len(), 500);
//!
//! let apollo = filter_data(data, &FilterOptions::new().with_hospital("Apollo Hospitals"));
//! assert!(apollo.iter().all(|r| r.hospital == "Apollo Hospitals"));
//!
//! let trend = time_series_data(&apollo);
//! assert!(trend.windows(2).all(|w| w[0].date < w[1].date));
//!
//! let hospitals = unique_values(data, RiskField::Hospital);
//! assert!(hospitals.len() <= 8);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregation;
pub mod dashboard;
pub mod generator;
pub mod query;
pub mod service;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregation::{
        box_plot_data, category_data, time_series_data, BoxPlotRow, CategoryPoint,
        TimeSeriesPoint,
    };
    pub use crate::dashboard::{DashboardSnapshot, FilterChoices};
    pub use crate::generator::{DatasetConfig, DatasetGenerator, RiskRng};
    pub use crate::query::{filter_data, unique_values};
    pub use crate::service::RiskDataService;
    pub use crate::types::{FilterOptions, RiskDataError, RiskField, RiskRecord};
}
