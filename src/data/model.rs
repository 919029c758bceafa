use std::fmt;

// ---------------------------------------------------------------------------
// FilterKey – which photometric band an exposure was taken through
// ---------------------------------------------------------------------------

/// Johnson B or V band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    B,
    V,
}

impl FilterKey {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(FilterKey::B),
            'V' => Some(FilterKey::V),
            _ => None,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKey::B => write!(f, "B"),
            FilterKey::V => write!(f, "V"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawMeasurementTable – one row per exposure, as read from disk
// ---------------------------------------------------------------------------

/// A single exposure (one row of the measurement file).
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    /// Image identifier, e.g. `M52_Filter_B_001.fits`.
    pub label: String,
    /// Relative flux per star, aligned with [`RawMeasurementTable::star_columns`].
    pub fluxes: Vec<f64>,
}

/// The filtered measurement file: `Label` plus every `rel_flux_T<n>` column.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMeasurementTable {
    /// Flux column names in file order (`rel_flux_T1`, `rel_flux_T2`, …).
    pub star_columns: Vec<String>,
    pub rows: Vec<MeasurementRow>,
}

impl RawMeasurementTable {
    /// Number of exposures.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// ---------------------------------------------------------------------------
// FluxTable – transposed: one row per star, B and V columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StarFlux {
    /// Source column name, used as the star id.
    pub star: String,
    pub b: f64,
    pub v: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FluxTable {
    pub stars: Vec<StarFlux>,
}

// ---------------------------------------------------------------------------
// ReducedStarTable – calibrated magnitudes and colour index
// ---------------------------------------------------------------------------

/// Catalogue magnitudes of the calibration star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceStar {
    pub b_mag: f64,
    pub v_mag: f64,
}

/// One calibrated star.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedStar {
    pub star: String,
    pub b: f64,
    pub v: f64,
    pub flux_ratio: f64,
    pub b_mag: f64,
    pub v_mag: f64,
    /// Colour index B−V.
    pub b_v: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReducedStarTable {
    pub stars: Vec<ReducedStar>,
}

impl ReducedStarTable {
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Smallest and largest colour index, `None` for an empty table.
    pub fn b_v_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.stars.iter().map(|s| s.b_v);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }
}

impl fmt::Display for ReducedStarTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .stars
            .iter()
            .map(|s| s.star.len())
            .max()
            .unwrap_or(0)
            .max(4);
        writeln!(
            f,
            "{:<width$} {:>12} {:>12} {:>10} {:>9} {:>9} {:>8}",
            "Star", "B", "V", "FluxRatio", "Bmag", "Vmag", "B_V"
        )?;
        for s in &self.stars {
            writeln!(
                f,
                "{:<width$} {:>12.6} {:>12.6} {:>10.6} {:>9.4} {:>9.4} {:>8.4}",
                s.star, s.b, s.v, s.flux_ratio, s.b_mag, s.v_mag, s.b_v
            )?;
        }
        write!(f, "[{} rows x 6 columns]", self.stars.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(name: &str, b_v: f64) -> ReducedStar {
        ReducedStar {
            star: name.to_string(),
            b: 1.0,
            v: 1.0,
            flux_ratio: 1.0,
            b_mag: 10.0 + b_v,
            v_mag: 10.0,
            b_v,
        }
    }

    #[test]
    fn test_filter_key_from_char() {
        assert_eq!(FilterKey::from_char('B'), Some(FilterKey::B));
        assert_eq!(FilterKey::from_char('V'), Some(FilterKey::V));
        assert_eq!(FilterKey::from_char('b'), None);
        assert_eq!(FilterKey::from_char('R'), None);
    }

    #[test]
    fn test_b_v_range() {
        let table = ReducedStarTable {
            stars: vec![star("T1", 0.4), star("T2", -0.2), star("T3", 1.3)],
        };
        assert_eq!(table.b_v_range(), Some((-0.2, 1.3)));
        assert_eq!(ReducedStarTable::default().b_v_range(), None);
    }

    #[test]
    fn test_display_lists_every_star() {
        let table = ReducedStarTable {
            stars: vec![star("rel_flux_T1", 0.5), star("rel_flux_T2", 0.7)],
        };
        let text = table.to_string();
        assert!(text.starts_with("Star"));
        assert!(text.contains("rel_flux_T1"));
        assert!(text.contains("rel_flux_T2"));
        assert!(text.ends_with("[2 rows x 6 columns]"));
    }
}
