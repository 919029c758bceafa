/// Data layer: loading, reshaping, and calibrating photometry.
///
/// Architecture:
/// ```text
///  Measurements.xls (tab separated)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, keep Label + rel_flux_T* (filter)
///   └──────────┘
///        │  RawMeasurementTable
///        ▼
///   ┌──────────┐
///   │ reshape   │  Label → B/V (label), transpose to one row per star
///   └──────────┘
///        │  FluxTable
///        ▼
///   ┌──────────┐
///   │ calibrate │  flux → Bmag, Vmag, B−V against the reference star
///   └──────────┘
///        │  ReducedStarTable
/// ```

pub mod calibrate;
pub mod error;
pub mod filter;
pub mod label;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod reshape;
