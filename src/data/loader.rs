use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::filter::{LABEL_COLUMN, select_columns};
use super::model::{MeasurementRow, RawMeasurementTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tab-separated measurement table, keeping only `Label` and the
/// `rel_flux_T<n>` columns.
///
/// AstroImageJ saves these as `.xls` although the content is plain text:
///
/// ```text
///  	Label	JD_UTC	rel_flux_T1	rel_flux_err_T1	rel_flux_T2	…
/// 1	M52_Filter_B_001.fits	2460123.4	1.000	0.002	0.347	…
/// 2	M52_Filter_V_001.fits	2460123.4	1.000	0.002	0.412	…
/// ```
pub fn load_measurements(path: &Path) -> Result<RawMeasurementTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening measurement file {}", path.display()))?;
    read_measurements(file).with_context(|| format!("reading {}", path.display()))
}

/// [`load_measurements`] over any reader.
pub fn read_measurements<R: Read>(input: R) -> Result<RawMeasurementTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().context("reading TSV headers")?.clone();
    let selection = select_columns(headers.iter().map(str::trim));

    let label_idx = selection
        .label
        .with_context(|| format!("TSV missing '{LABEL_COLUMN}' column"))?;
    if selection.flux.is_empty() {
        bail!("TSV has no rel_flux_T columns");
    }
    log::debug!(
        "Keeping columns {:?}",
        selection.flux.iter().map(|(_, n)| n.as_str()).collect::<Vec<_>>()
    );

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("TSV row {row_no}"))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let label = record.get(label_idx).unwrap_or("").trim().to_string();

        let fluxes = selection
            .flux
            .iter()
            .map(|(idx, name)| {
                let cell = record.get(*idx).unwrap_or("").trim();
                cell.parse::<f64>().with_context(|| {
                    format!("Row {row_no}, {name}: '{cell}' is not a number")
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        rows.push(MeasurementRow { label, fluxes });
    }

    Ok(RawMeasurementTable {
        star_columns: selection.flux.into_iter().map(|(_, name)| name).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const AIJ_SAMPLE: &str = " \tLabel\tJD_UTC\trel_flux_T1\trel_flux_err_T1\trel_flux_T2\n\
        1\tM52_Filter_B_001.fits\t2460123.41\t1.000\t0.002\t0.347\n\
        2\tM52_Filter_V_001.fits\t2460123.42\t1.000\t0.002\t0.412\n";

    #[test]
    fn test_read_keeps_label_and_flux_columns() {
        let table = read_measurements(AIJ_SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.star_columns, vec!["rel_flux_T1", "rel_flux_T2"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].label, "M52_Filter_B_001.fits");
        assert_eq!(table.rows[0].fluxes, vec![1.0, 0.347]);
        assert_eq!(table.rows[1].fluxes, vec![1.0, 0.412]);
    }

    #[test]
    fn test_read_missing_label_column() {
        let err = read_measurements("rel_flux_T1\n1.0\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing 'Label'"));
    }

    #[test]
    fn test_read_without_flux_columns() {
        let err = read_measurements("Label\tJD_UTC\nimg_B\t1.0\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no rel_flux_T columns"));
    }

    #[test]
    fn test_read_rejects_non_numeric_flux() {
        let data = "Label\trel_flux_T1\nimg_B_1\tabc\n";
        let err = read_measurements(data.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("'abc' is not a number"));
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let data = "Label\trel_flux_T1\nimg_B_1\t2.5\n\t\nimg_V_1\t3.5\n";
        let table = read_measurements(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].fluxes, vec![3.5]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(AIJ_SAMPLE.as_bytes()).unwrap();
        let table = load_measurements(file.path()).unwrap();
        assert_eq!(table.star_columns.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_measurements(Path::new("does/not/exist.xls")).unwrap_err();
        assert!(err.to_string().contains("opening measurement file"));
    }
}
