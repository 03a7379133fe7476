//! Synthetic dataset generation.
//!
//! This module provides:
//! - `rng`: [`RiskRng`], a seeded PRNG wrapper for reproducible datasets
//! - `vocabulary`: the fixed hospital, location, specialty and category lists
//! - `synthetic`: [`DatasetConfig`] and [`DatasetGenerator`]

mod rng;
mod synthetic;
pub mod vocabulary;

pub use rng::RiskRng;
pub use synthetic::{DatasetConfig, DatasetGenerator};
