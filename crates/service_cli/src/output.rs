//! Output formats and table rendering.

use std::io::Write;

use clap::ValueEnum;
use riskdata_core::dashboard::DashboardSnapshot;
use riskdata_core::types::FilterOptions;
use serde::Deserialize;

use crate::Result;

/// Dashboard output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON snapshot
    Json,
}

/// Record export format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON array of records
    #[default]
    Json,
    /// CSV with a header row
    Csv,
}

const RULE: &str = "----------------------------------------";

fn describe(selection: &FilterOptions) -> String {
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "All".to_string());
    format!(
        "hospital={} location={} specialty={}",
        show(&selection.hospital),
        show(&selection.location),
        show(&selection.specialty)
    )
}

/// Render `snapshot` as plain-text tables
pub fn write_table<W: Write>(out: &mut W, snapshot: &DashboardSnapshot) -> Result<()> {
    writeln!(out, "Fraud Risk Dashboard")?;
    writeln!(out, "Filters: {}", describe(&snapshot.selection))?;
    writeln!(out, "Records: {}", snapshot.record_count)?;
    writeln!(out)?;

    writeln!(out, "Risk Score Trend")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:<12} {:>10}", "Date", "Risk Score")?;
    for point in &snapshot.trend {
        writeln!(out, "{:<12} {:>10}", point.date.to_string(), point.risk_score)?;
    }
    writeln!(out)?;

    writeln!(out, "Risk Score by Category")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:<16} {:<26} {:>10}", "Label", "Category", "Risk Score")?;
    for point in &snapshot.categories {
        writeln!(
            out,
            "{:<16} {:<26} {:>10}",
            point.category, point.full_category, point.risk_score
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Risk Distribution by Specialty")?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "{:<20} {:>5} {:>5} {:>6} {:>5} {:>5}",
        "Specialty", "Min", "Q1", "Median", "Q3", "Max"
    )?;
    for row in &snapshot.distribution {
        writeln!(
            out,
            "{:<20} {:>5} {:>5} {:>6} {:>5} {:>5}",
            row.specialty, row.min, row.q1, row.median, row.q3, row.max
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_wildcards() {
        let options = FilterOptions::new().with_location("Pune");
        assert_eq!(describe(&options), "hospital=All location=Pune specialty=All");
    }

    #[test]
    fn test_table_shows_display_label_and_full_category() {
        use chrono::NaiveDate;
        use riskdata_core::types::RiskRecord;

        let record = RiskRecord::new(
            "risk-0",
            "AIIMS",
            "Delhi",
            "Surgery",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            40,
            "Medication Discrepancies",
        );
        let snapshot = DashboardSnapshot::build(&[record], &FilterOptions::new());

        let mut out = Vec::new();
        write_table(&mut out, &snapshot).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text
            .lines()
            .find(|line| line.starts_with("Medication D..."))
            .expect("category row with display label");
        assert!(row.contains("Medication Discrepancies"));
        assert!(row.trim_end().ends_with("40"));
    }

    #[test]
    fn test_report_format_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: ReportFormat,
        }
        let parsed: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(parsed.format, ReportFormat::Json);
    }
}
