use crate::domain::model::ValidationReport;
use crate::utils::error::{Result, VerifierError};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Writes reports to `writer` in input order.
pub fn write_reports<W: Write>(
    writer: &mut W,
    reports: &[ValidationReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(writer, "{} -> {}", report.address, report.is_valid)
                    .map_err(VerifierError::OutputError)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, reports)?;
            writeln!(writer).map_err(VerifierError::OutputError)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *writer);
            for report in reports {
                csv_writer.serialize(report)?;
            }
            csv_writer.flush().map_err(VerifierError::OutputError)?;
        }
    }
    Ok(())
}

pub fn render_reports(reports: &[ValidationReport], format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_reports(&mut buffer, reports, format)?;
    String::from_utf8(buffer).map_err(|e| VerifierError::ProcessingError {
        message: format!("report is not valid UTF-8: {}", e),
    })
}
