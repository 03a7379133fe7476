//! Dashboard command implementation
//!
//! Prints the filter choices and the three chart series for one selection.

use std::io::Write;

use riskdata_core::service::RiskDataService;
use riskdata_core::types::FilterOptions;
use tracing::{info, warn};

use crate::output::{write_table, ReportFormat};
use crate::Result;

/// Run the dashboard command
pub fn run<W: Write>(
    service: &RiskDataService,
    selection: &FilterOptions,
    format: ReportFormat,
    out: &mut W,
) -> Result<()> {
    info!("Building dashboard snapshot...");
    let snapshot = service.snapshot(selection);

    if snapshot.is_empty() {
        warn!("No records match the selected filters");
    }

    match format {
        ReportFormat::Table => write_table(out, &snapshot)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &snapshot)?;
            writeln!(out)?;
        }
    }

    info!(records = snapshot.record_count, "Dashboard complete");
    Ok(())
}
