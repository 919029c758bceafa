use super::error::{ReduceError, ShapeError};
use super::label::parse_filter;
use super::model::{FilterKey, FluxTable, RawMeasurementTable, StarFlux};

/// Index the exposures by filter and transpose so each star becomes a row.
///
/// Every label must yield a filter key, and there must be exactly one B
/// exposure and one V exposure. The result has one [`StarFlux`] per flux
/// column, in column order.
pub fn reshape(raw: &RawMeasurementTable) -> Result<FluxTable, ReduceError> {
    let expected = raw.star_columns.len();
    let mut b_row: Option<usize> = None;
    let mut v_row: Option<usize> = None;

    for (idx, row) in raw.rows.iter().enumerate() {
        if row.fluxes.len() != expected {
            return Err(ShapeError::RaggedRow {
                row: idx,
                expected,
                found: row.fluxes.len(),
            }
            .into());
        }

        let key = parse_filter(idx, &row.label)?;
        let slot = match key {
            FilterKey::B => &mut b_row,
            FilterKey::V => &mut v_row,
        };
        if let Some(first) = *slot {
            return Err(ShapeError::DuplicateFilter {
                filter: key,
                first,
                second: idx,
            }
            .into());
        }
        *slot = Some(idx);
    }

    let b_row = b_row.ok_or(ShapeError::MissingFilter(FilterKey::B))?;
    let v_row = v_row.ok_or(ShapeError::MissingFilter(FilterKey::V))?;
    let b = &raw.rows[b_row].fluxes;
    let v = &raw.rows[v_row].fluxes;

    let stars = raw
        .star_columns
        .iter()
        .zip(b.iter().zip(v.iter()))
        .map(|(star, (&b, &v))| StarFlux {
            star: star.clone(),
            b,
            v,
        })
        .collect();

    Ok(FluxTable { stars })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::LabelParseError;
    use crate::data::model::MeasurementRow;

    fn table(rows: &[(&str, &[f64])], columns: usize) -> RawMeasurementTable {
        RawMeasurementTable {
            star_columns: (1..=columns).map(|i| format!("rel_flux_T{i}")).collect(),
            rows: rows
                .iter()
                .map(|(label, fluxes)| MeasurementRow {
                    label: label.to_string(),
                    fluxes: fluxes.to_vec(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_reshape_transposes_to_one_row_per_star() {
        let raw = table(
            &[("img_B_1", &[50.0, 80.0, 3.0]), ("img_V_1", &[60.0, 90.0, 4.0])],
            3,
        );
        let flux = reshape(&raw).unwrap();
        assert_eq!(flux.stars.len(), 3);
        assert_eq!(
            flux.stars[0],
            StarFlux {
                star: "rel_flux_T1".to_string(),
                b: 50.0,
                v: 60.0
            }
        );
        assert_eq!(flux.stars[1].b, 80.0);
        assert_eq!(flux.stars[1].v, 90.0);
        assert_eq!(flux.stars[2].star, "rel_flux_T3");
    }

    #[test]
    fn test_reshape_ignores_row_order() {
        let raw = table(&[("img_V_1", &[60.0]), ("img_B_1", &[50.0])], 1);
        let flux = reshape(&raw).unwrap();
        assert_eq!(flux.stars[0].b, 50.0);
        assert_eq!(flux.stars[0].v, 60.0);
    }

    #[test]
    fn test_reshape_missing_filter() {
        let raw = table(&[("img_B_1", &[1.0])], 1);
        assert_eq!(
            reshape(&raw),
            Err(ShapeError::MissingFilter(FilterKey::V).into())
        );

        let empty = table(&[], 1);
        assert_eq!(
            reshape(&empty),
            Err(ShapeError::MissingFilter(FilterKey::B).into())
        );
    }

    #[test]
    fn test_reshape_duplicate_filter() {
        let raw = table(
            &[("a_B_1", &[1.0]), ("a_V_1", &[1.0]), ("a_B_2", &[2.0])],
            1,
        );
        assert_eq!(
            reshape(&raw),
            Err(ShapeError::DuplicateFilter {
                filter: FilterKey::B,
                first: 0,
                second: 2
            }
            .into())
        );
    }

    #[test]
    fn test_reshape_unparseable_label() {
        let raw = table(&[("img_B_1", &[1.0]), ("flat_0001", &[1.0])], 1);
        assert_eq!(
            reshape(&raw),
            Err(LabelParseError {
                row: 1,
                label: "flat_0001".to_string()
            }
            .into())
        );
    }

    #[test]
    fn test_reshape_ragged_row() {
        let raw = table(&[("img_B_1", &[1.0, 2.0]), ("img_V_1", &[1.0])], 2);
        assert!(matches!(
            reshape(&raw),
            Err(ReduceError::Shape(ShapeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }))
        ));
    }
}
