//! Export command implementation
//!
//! Writes the (optionally filtered) dataset as JSON or CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use riskdata_core::query::filter_data;
use riskdata_core::service::RiskDataService;
use riskdata_core::types::{FilterOptions, RiskRecord};
use tracing::info;

use crate::output::ExportFormat;
use crate::{CliError, Result};

/// Run the export command, writing to `output` or stdout
pub fn run(
    service: &RiskDataService,
    selection: &FilterOptions,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    if let Some(path) = output.filter(|p| p.is_dir()) {
        return Err(CliError::InvalidArgument(format!(
            "Output path is a directory: {}",
            path.display()
        )));
    }

    let records = filter_data(service.data(), selection);
    info!(records = records.len(), ?format, "Exporting records");

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let mut writer = BufWriter::new(File::create(path)?);
            write_records(&mut writer, &records, format)?;
            writer.flush()?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_records(&mut lock, &records, format)?;
        }
    }

    Ok(())
}

/// Serialise `records` to `out` in `format`
pub fn write_records<W: Write>(out: &mut W, records: &[RiskRecord], format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
