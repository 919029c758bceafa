use super::model::FilterKey;

/// A `Label` with no `_B` / `_V` token in it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("row {row}: cannot find a B or V filter in label '{label}'")]
pub struct LabelParseError {
    pub row: usize,
    pub label: String,
}

/// The measurement rows do not reduce to exactly one B and one V exposure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("no exposure with filter {0}")]
    MissingFilter(FilterKey),
    #[error("filter {filter} appears in rows {first} and {second}; expected exactly one")]
    DuplicateFilter {
        filter: FilterKey,
        first: usize,
        second: usize,
    },
    #[error("row {row} has {found} flux values but the header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A flux value the logarithm is undefined for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{star}: {filter} flux {flux} is not a positive finite number")]
pub struct DomainError {
    pub star: String,
    pub filter: FilterKey,
    pub flux: f64,
}

/// Everything that can go wrong turning a raw table into magnitudes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReduceError {
    #[error(transparent)]
    Label(#[from] LabelParseError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
