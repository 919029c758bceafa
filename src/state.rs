use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cluster::{ClusterCatalog, ClusterDescriptor};
use crate::color::ColorMap;
use crate::data::model::ReducedStarTable;
use crate::data::pipeline::reduce_file;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Clusters offered in the Cluster menu.
    pub catalog: ClusterCatalog,

    /// Directory the catalogue's file names are relative to.
    pub data_dir: PathBuf,

    /// Cluster whose reference star calibrates the current table.
    pub cluster: ClusterDescriptor,

    /// Measurement file the table was reduced from.
    pub source: Option<PathBuf>,

    /// Reduced stars (None until a file reduces cleanly).
    pub table: Option<ReducedStarTable>,

    /// Colour scale over the table's B−V range.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(catalog: ClusterCatalog, data_dir: PathBuf, cluster: ClusterDescriptor) -> Self {
        Self {
            catalog,
            data_dir,
            cluster,
            source: None,
            table: None,
            color_map: None,
            status_message: None,
        }
    }

    /// Ingest a freshly reduced table and rebuild the colour scale.
    pub fn set_table(&mut self, source: PathBuf, table: ReducedStarTable) {
        self.color_map = table
            .b_v_range()
            .map(|(min, max)| ColorMap::new(min, max));
        self.source = Some(source);
        self.table = Some(table);
        self.status_message = None;
    }

    /// Plot heading for the current cluster.
    pub fn title(&self) -> String {
        format!("Colour-Magnitude Diagram of {}", self.cluster.name)
    }

    /// Switch to catalogue entry `index` and reduce its measurement file.
    pub fn select_cluster(&mut self, index: usize) {
        let Some(cluster) = self.catalog.get(index).cloned() else {
            return;
        };
        let result = cluster
            .resolve_data_file(&self.data_dir)
            .map_err(anyhow::Error::from)
            .and_then(|path| reduce_file(&path, cluster.reference_star()).map(|t| (path, t)));
        self.cluster = cluster;
        self.apply(result);
    }

    /// Reduce an arbitrary measurement file against the current cluster's
    /// reference star.
    pub fn open_file(&mut self, path: &Path) {
        let result = reduce_file(path, self.cluster.reference_star())
            .map(|table| (path.to_path_buf(), table));
        self.apply(result);
    }

    fn apply(&mut self, result: Result<(PathBuf, ReducedStarTable)>) {
        match result {
            Ok((path, table)) => {
                log::info!(
                    "Loaded {} stars for {} from {}",
                    table.len(),
                    self.cluster.name,
                    path.display()
                );
                self.set_table(path, table);
            }
            Err(e) => {
                log::error!("Failed to reduce measurements: {e:#}");
                self.table = None;
                self.color_map = None;
                self.source = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
