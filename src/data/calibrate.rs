use super::error::DomainError;
use super::model::{FilterKey, FluxTable, ReducedStar, ReducedStarTable, ReferenceStar, StarFlux};

/// Pogson's ratio: five magnitudes per factor of 100 in flux.
const POGSON: f64 = -2.5;

/// Magnitude of `flux` relative to a reference star of magnitude `reference_mag`.
///
/// The relative flux is already normalised to the comparison ensemble, so the
/// zero point is simply the reference star's catalogue magnitude.
fn magnitude(
    star: &str,
    filter: FilterKey,
    flux: f64,
    reference_mag: f64,
) -> Result<f64, DomainError> {
    if !(flux.is_finite() && flux > 0.0) {
        return Err(DomainError {
            star: star.to_string(),
            filter,
            flux,
        });
    }
    Ok(POGSON * flux.log10() + reference_mag)
}

/// Calibrate one star's B and V flux.
pub fn calibrate_star(flux: &StarFlux, reference: ReferenceStar) -> Result<ReducedStar, DomainError> {
    let b_mag = magnitude(&flux.star, FilterKey::B, flux.b, reference.b_mag)?;
    let v_mag = magnitude(&flux.star, FilterKey::V, flux.v, reference.v_mag)?;
    Ok(ReducedStar {
        star: flux.star.clone(),
        b: flux.b,
        v: flux.v,
        flux_ratio: flux.b / flux.v,
        b_mag,
        v_mag,
        b_v: b_mag - v_mag,
    })
}

/// Calibrate every star; the first non-positive flux aborts the whole table.
pub fn calibrate(
    table: &FluxTable,
    reference: ReferenceStar,
) -> Result<ReducedStarTable, DomainError> {
    let stars = table
        .stars
        .iter()
        .map(|s| calibrate_star(s, reference))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ReducedStarTable { stars })
}
