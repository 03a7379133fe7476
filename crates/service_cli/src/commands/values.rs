//! Values command implementation
//!
//! Lists the distinct values of one record field, one per line.

use std::io::Write;

use riskdata_core::query::unique_values;
use riskdata_core::service::RiskDataService;
use riskdata_core::types::RiskField;
use tracing::info;

use crate::Result;

/// Run the values command
pub fn run<W: Write>(service: &RiskDataService, field: &str, out: &mut W) -> Result<()> {
    let field: RiskField = field.parse()?;
    let values = unique_values(service.data(), field);
    info!(%field, count = values.len(), "Distinct values");

    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use riskdata_core::generator::DatasetConfig;

    fn service() -> RiskDataService {
        RiskDataService::from_config(DatasetConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_lists_sorted_dates() {
        let mut out = Vec::new();
        run(&service(), "date", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "2024-01-01");
        assert_eq!(lines[24], "2024-01-25");
    }

    #[test]
    fn test_unknown_field() {
        let mut out = Vec::new();
        let err = run(&service(), "salary", &mut out).unwrap_err();
        assert!(matches!(err, CliError::Data(_)));
        assert!(out.is_empty());
    }
}
