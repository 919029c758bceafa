use std::path::Path;

use anyhow::{Context, Result};

use super::calibrate::calibrate;
use super::error::ReduceError;
use super::loader::load_measurements;
use super::model::{RawMeasurementTable, ReducedStarTable, ReferenceStar};
use super::reshape::reshape;

/// Reshape and calibrate an already loaded table.
pub fn reduce(
    raw: &RawMeasurementTable,
    reference: ReferenceStar,
) -> Result<ReducedStarTable, ReduceError> {
    let flux = reshape(raw)?;
    let reduced = calibrate(&flux, reference)?;
    log::info!(
        "Reduced {} exposures to {} stars",
        raw.len(),
        reduced.len()
    );
    Ok(reduced)
}

/// Load a measurement file and reduce it against `reference`.
pub fn reduce_file(path: &Path, reference: ReferenceStar) -> Result<ReducedStarTable> {
    let raw = load_measurements(path)?;
    reduce(&raw, reference).with_context(|| format!("reducing {}", path.display()))
}
