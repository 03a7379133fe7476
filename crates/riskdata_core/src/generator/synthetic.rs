//! Synthetic fraud-risk dataset generator.
//!
//! Categorical fields and scores are random; dates are not. Record `i` is
//! dated `epoch + i / records_per_day` days, so every run produces the same
//! day buckets regardless of seed.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rng::RiskRng;
use super::vocabulary::{CATEGORIES, HOSPITALS, LOCATIONS, SPECIALTIES};
use crate::types::record::{MAX_RISK_SCORE, MIN_RISK_SCORE};
use crate::types::{RiskDataError, RiskRecord};

/// Default number of generated records.
pub const DEFAULT_SIZE: usize = 500;

/// Default number of consecutive records sharing one date.
pub const DEFAULT_RECORDS_PER_DAY: usize = 20;

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_records_per_day() -> usize {
    DEFAULT_RECORDS_PER_DAY
}

fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Dataset generation parameters.
///
/// Deserialises from a `[dataset]` TOML table; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of records
    #[serde(default = "default_size")]
    pub size: usize,
    /// Records per day bucket
    #[serde(default = "default_records_per_day")]
    pub records_per_day: usize,
    /// Date of the first bucket
    #[serde(default = "default_epoch")]
    pub epoch: NaiveDate,
    /// Seed for reproducible output; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            records_per_day: default_records_per_day(),
            epoch: default_epoch(),
            seed: None,
        }
    }
}

impl DatasetConfig {
    /// Set the record count.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the day bucket width.
    pub fn with_records_per_day(mut self, records_per_day: usize) -> Self {
        self.records_per_day = records_per_day;
        self
    }

    /// Set the first date.
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    /// Fix the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of distinct dates a full dataset spans.
    pub fn day_count(&self) -> usize {
        if self.records_per_day == 0 {
            return 0;
        }
        self.size.div_ceil(self.records_per_day)
    }

    /// Check that every record can be dated.
    pub fn validate(&self) -> Result<(), RiskDataError> {
        if self.records_per_day == 0 {
            return Err(RiskDataError::InvalidConfig(
                "records_per_day must be greater than 0".to_string(),
            ));
        }
        let last_offset = self.size.saturating_sub(1) / self.records_per_day;
        if self.epoch.checked_add_days(Days::new(last_offset as u64)).is_none() {
            return Err(RiskDataError::InvalidConfig(format!(
                "{} records from {} overflow the calendar",
                self.size, self.epoch
            )));
        }
        Ok(())
    }
}

/// Builds [`RiskRecord`] datasets from a validated [`DatasetConfig`].
///
/// # Examples
///
/// ```
/// use riskdata_core::generator::{DatasetConfig, DatasetGenerator};
///
/// let generator = DatasetGenerator::new(DatasetConfig::default().with_seed(1)).unwrap();
/// let data = generator.generate();
/// assert_eq!(data.len(), 500);
/// assert_eq!(data[0].id, "risk-0");
/// assert_eq!(data[19].date, data[0].date);
/// assert_ne!(data[20].date, data[0].date);
/// ```
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    config: DatasetConfig,
}

impl DatasetGenerator {
    /// Create a generator, rejecting configurations that cannot be dated.
    pub fn new(config: DatasetConfig) -> Result<Self, RiskDataError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Generate a dataset.
    ///
    /// With a fixed seed every call returns the same records; without one
    /// each call draws a new seed.
    pub fn generate(&self) -> Vec<RiskRecord> {
        let mut rng = match self.config.seed {
            Some(seed) => RiskRng::from_seed(seed),
            None => RiskRng::from_entropy(),
        };
        debug!(
            size = self.config.size,
            seed = rng.seed(),
            epoch = %self.config.epoch,
            "Generating synthetic risk dataset"
        );

        (0..self.config.size)
            .map(|i| {
                let hospital = *rng.pick(&HOSPITALS);
                let location = *rng.pick(&LOCATIONS);
                let specialty = *rng.pick(&SPECIALTIES);
                let risk_score = rng.gen_score(MIN_RISK_SCORE, MAX_RISK_SCORE);
                let category = *rng.pick(&CATEGORIES);

                RiskRecord::new(
                    format!("risk-{}", i),
                    hospital,
                    location,
                    specialty,
                    self.date_for(i),
                    risk_score,
                    category,
                )
            })
            .collect()
    }

    /// Date of the record at `index`.
    pub fn date_for(&self, index: usize) -> NaiveDate {
        let offset = (index / self.config.records_per_day) as u64;
        self.config
            .epoch
            .checked_add_days(Days::new(offset))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self {
            config: DatasetConfig::default(),
        }
    }
}
