// ---------------------------------------------------------------------------
// Column predicate: which header columns the loader keeps
// ---------------------------------------------------------------------------

/// Name of the image identifier column.
pub const LABEL_COLUMN: &str = "Label";

/// Prefix shared by every per-star relative flux column.
pub const FLUX_PREFIX: &str = "rel_flux_T";

/// Whether a measurement file column is needed for the reduction.
///
/// Keeps `Label` and anything starting with `rel_flux_T`. The match is a plain
/// prefix test, so a column named `rel_flux_T1_err` is kept as well;
/// AstroImageJ writes its uncertainties as `rel_flux_err_T<n>`, which is not.
pub fn is_valid_col(name: &str) -> bool {
    name == LABEL_COLUMN || is_flux_col(name)
}

/// Whether a column holds relative flux for a star.
pub fn is_flux_col(name: &str) -> bool {
    name.starts_with(FLUX_PREFIX)
}

/// Header positions of the kept columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    pub label: Option<usize>,
    /// `(position, name)` for each flux column, in header order.
    pub flux: Vec<(usize, String)>,
}

/// Apply [`is_valid_col`] to a header row.
pub fn select_columns<'a>(headers: impl IntoIterator<Item = &'a str>) -> ColumnSelection {
    let mut selection = ColumnSelection {
        label: None,
        flux: Vec::new(),
    };
    for (idx, name) in headers.into_iter().enumerate() {
        if !is_valid_col(name) {
            continue;
        }
        if name == LABEL_COLUMN {
            selection.label = Some(idx);
        } else {
            selection.flux.push((idx, name.to_string()));
        }
    }
    selection
}
