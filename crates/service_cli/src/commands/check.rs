//! Check command implementation
//!
//! Validates the configuration and reports the shape of the dataset.

use std::io::Write;

use riskdata_core::query::unique_values;
use riskdata_core::service::RiskDataService;
use riskdata_core::types::RiskField;
use tracing::info;

use crate::config::RiskDashConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &RiskDashConfig, service: &RiskDataService, out: &mut W) -> Result<()> {
    config.validate()?;
    info!("Configuration valid");

    let data = service.data();
    let dataset = service.config();

    writeln!(out, "Configuration: OK")?;
    writeln!(out, "  Log level: {}", config.log_level)?;
    writeln!(
        out,
        "  Seed: {}",
        dataset.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
    )?;
    writeln!(out, "Dataset:")?;
    writeln!(out, "  Records: {}", data.len())?;
    writeln!(
        out,
        "  Days: {} from {} ({} records per day)",
        dataset.day_count(),
        dataset.epoch,
        dataset.records_per_day
    )?;
    for field in [
        RiskField::Hospital,
        RiskField::Location,
        RiskField::Specialty,
        RiskField::Category,
    ] {
        writeln!(out, "  Distinct {}: {}", field, unique_values(data, field).len())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_check_reports_shape() {
        let mut config = RiskDashConfig::default();
        config.dataset.seed = Some(1);
        let service = RiskDataService::from_config(config.dataset.clone()).unwrap();

        let mut out = Vec::new();
        run(&config, &service, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Records: 500"));
        assert!(text.contains("Days: 25 from 2024-01-01 (20 records per day)"));
        assert!(text.contains("Seed: 1"));
    }

    #[test]
    fn test_check_rejects_invalid_config() {
        let mut config = RiskDashConfig::default();
        config.log_level = "chatty".to_string();
        let service = RiskDataService::default();

        let mut out = Vec::new();
        let err = run(&config, &service, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(!service.is_loaded());
    }
}
