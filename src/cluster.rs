use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::model::ReferenceStar;

// ---------------------------------------------------------------------------
// ClusterDescriptor – one selectable cluster
// ---------------------------------------------------------------------------

/// A cluster, its measurement file and the catalogue magnitudes of the
/// reference star used for calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDescriptor {
    pub name: String,
    /// Measurement file, relative to the data directory.
    pub file_name: String,
    pub ref_star_b_mag: f64,
    pub ref_star_v_mag: f64,
}

impl ClusterDescriptor {
    pub fn new(name: &str, file_name: &str, ref_star_b_mag: f64, ref_star_v_mag: f64) -> Self {
        Self {
            name: name.to_string(),
            file_name: file_name.to_string(),
            ref_star_b_mag,
            ref_star_v_mag,
        }
    }

    pub fn reference_star(&self) -> ReferenceStar {
        ReferenceStar {
            b_mag: self.ref_star_b_mag,
            v_mag: self.ref_star_v_mag,
        }
    }

    /// Locate the measurement file under `data_dir`.
    ///
    /// A missing file is an error here rather than at load time.
    pub fn resolve_data_file(&self, data_dir: &Path) -> Result<PathBuf, CatalogError> {
        let path = data_dir.join(&self.file_name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(CatalogError::MissingDataFile {
                cluster: self.name.clone(),
                path,
            })
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cluster catalogue is empty")]
    Empty,
    #[error("the data file '{}' for {} does not exist", .path.display(), .cluster)]
    MissingDataFile { cluster: String, path: PathBuf },
}

// ---------------------------------------------------------------------------
// ClusterCatalog – the list offered to the user
// ---------------------------------------------------------------------------

/// Ordered, non-empty list of clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterCatalog {
    clusters: Vec<ClusterDescriptor>,
}

impl Default for ClusterCatalog {
    /// Reference magnitudes from PIRATE Week 3, Table 3.2.
    fn default() -> Self {
        Self {
            clusters: vec![
                ClusterDescriptor::new("M52/NGC 7654", "M52_Measurements.xls", 9.411, 9.006),
                ClusterDescriptor::new("M39/NGC 7092", "M39_Measurements.xls", 10.309, 10.067),
                ClusterDescriptor::new("M15/NGC 7078", "M15_Measurements.xls", 10.928, 10.378),
            ],
        }
    }
}

impl ClusterCatalog {
    pub fn new(clusters: Vec<ClusterDescriptor>) -> Result<Self, CatalogError> {
        if clusters.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { clusters })
    }

    /// Parse a JSON array of `{ name, fileName, refStarBMag, refStarVMag }`.
    pub fn from_json(text: &str) -> Result<Self> {
        let clusters: Vec<ClusterDescriptor> =
            serde_json::from_str(text).context("parsing cluster catalogue JSON")?;
        Ok(Self::new(clusters)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading cluster catalogue {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading {}", path.display()))
    }

    pub fn clusters(&self) -> &[ClusterDescriptor] {
        &self.clusters
    }

    pub fn get(&self, index: usize) -> Option<&ClusterDescriptor> {
        self.clusters.get(index)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_catalog() {
        let catalog = ClusterCatalog::default();
        assert_eq!(catalog.len(), 3);
        let m39 = catalog.get(1).unwrap();
        assert_eq!(m39.name, "M39/NGC 7092");
        assert_eq!(m39.file_name, "M39_Measurements.xls");
        assert_eq!(
            m39.reference_star(),
            ReferenceStar {
                b_mag: 10.309,
                v_mag: 10.067
            }
        );
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_from_json_uses_camel_case_keys() {
        let json = r#"[
            { "name": "Test", "fileName": "test.xls", "refStarBMag": 9.0, "refStarVMag": 8.5 }
        ]"#;
        let catalog = ClusterCatalog::from_json(json).unwrap();
        assert_eq!(
            catalog.clusters(),
            &[ClusterDescriptor::new("Test", "test.xls", 9.0, 8.5)]
        );
    }

    #[test]
    fn test_from_json_rejects_empty_list() {
        let err = ClusterCatalog::from_json("[]").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let json = r#"[{ "name": "Test", "fileName": "test.xls", "refStarBMag": 9.0 }]"#;
        assert!(ClusterCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let catalog = ClusterCatalog::default();
        let json = serde_json::to_string(catalog.clusters()).unwrap();
        assert!(json.contains("\"refStarBMag\":9.411"));
        file.write_all(json.as_bytes()).unwrap();
        assert_eq!(ClusterCatalog::load(file.path()).unwrap(), catalog);
    }

    #[test]
    fn test_resolve_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let cluster = ClusterDescriptor::new("M52/NGC 7654", "M52.xls", 9.411, 9.006);

        let err = cluster.resolve_data_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains("M52.xls"));
        assert!(err.to_string().contains("does not exist"));

        std::fs::write(dir.path().join("M52.xls"), "Label\n").unwrap();
        let path = cluster.resolve_data_file(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("M52.xls"));
    }
}
