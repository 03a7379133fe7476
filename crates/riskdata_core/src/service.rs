//! The dataset context handed to dashboard consumers.
//!
//! A [`RiskDataService`] is built once at startup and passed by reference.
//! The dataset is generated on first access and then shared for the
//! lifetime of the service.

use std::sync::OnceLock;

use tracing::info;

use crate::dashboard::DashboardSnapshot;
use crate::generator::{DatasetConfig, DatasetGenerator};
use crate::types::{FilterOptions, RiskDataError, RiskRecord};

/// Lazily generated, memoized fraud-risk dataset.
///
/// # Examples
///
/// ```
/// use riskdata_core::prelude::*;
///
/// let service = RiskDataService::from_config(DatasetConfig::default().with_seed(3)).unwrap();
/// assert!(!service.is_loaded());
///
/// let first = service.data();
/// let second = service.data();
/// assert!(std::ptr::eq(first, second));
/// assert!(service.is_loaded());
/// ```
#[derive(Debug)]
pub struct RiskDataService {
    generator: DatasetGenerator,
    data: OnceLock<Vec<RiskRecord>>,
}

impl RiskDataService {
    /// Create a service that generates with `generator` on first access.
    pub fn new(generator: DatasetGenerator) -> Self {
        Self {
            generator,
            data: OnceLock::new(),
        }
    }

    /// Create a service from a dataset configuration.
    pub fn from_config(config: DatasetConfig) -> Result<Self, RiskDataError> {
        Ok(Self::new(DatasetGenerator::new(config)?))
    }

    /// Create a service over a fixed dataset; no generation takes place.
    pub fn from_records(records: Vec<RiskRecord>) -> Self {
        let data = OnceLock::new();
        let _ = data.set(records);
        Self {
            generator: DatasetGenerator::default(),
            data,
        }
    }

    /// The dataset, generated on the first call.
    pub fn data(&self) -> &[RiskRecord] {
        self.data.get_or_init(|| {
            let records = self.generator.generate();
            info!(records = records.len(), "Risk dataset initialised");
            records
        })
    }

    /// Whether the dataset has been generated or injected.
    pub fn is_loaded(&self) -> bool {
        self.data.get().is_some()
    }

    /// The generator configuration.
    pub fn config(&self) -> &DatasetConfig {
        self.generator.config()
    }

    /// Dashboard snapshot for `options` over this service's dataset.
    pub fn snapshot(&self, options: &FilterOptions) -> DashboardSnapshot {
        DashboardSnapshot::build(self.data(), options)
    }
}

impl Default for RiskDataService {
    fn default() -> Self {
        Self::new(DatasetGenerator::default())
    }
}
