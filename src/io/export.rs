//! CSV export for sweep samples.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::sim::types::SweepSample;

/// Column header for CSV sweep export.
const HEADER: &str = "step,source_angle_rad,plant_power_w,reference_power_w,efficiency_pct";

/// Errors raised while exporting samples.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write CSV: {0}")]
    Io(#[from] io::Error),
    #[error("cannot encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Exports sweep samples to a CSV file at the given path.
///
/// Writes a header row followed by one data row per sample. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `ExportError` if file creation or writing fails.
pub fn export_csv(samples: &[SweepSample], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(samples, io::BufWriter::new(file))
}

/// Writes sweep samples as CSV to any writer.
///
/// The `reference_power_w` column is left empty when a sample has no
/// reference setup.
///
/// # Errors
///
/// Returns an `ExportError` if writing fails.
pub fn write_csv(samples: &[SweepSample], writer: impl Write) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for s in samples {
        wtr.write_record(&[
            s.step.to_string(),
            format!("{:.6}", s.source_angle_rad),
            format!("{:.4}", s.plant_power_w),
            s.reference_power_w
                .map(|p| format!("{p:.4}"))
                .unwrap_or_default(),
            format!("{:.4}", s.efficiency_pct),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
