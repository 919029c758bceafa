use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cluster::ClusterCatalog;

/// Build a colour-magnitude diagram from B/V relative photometry.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// JSON cluster catalogue; the built-in three clusters when omitted
    #[arg(long)]
    pub clusters: Option<PathBuf>,

    /// Directory holding the measurement files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Cluster number from the menu (1-based); skips the prompt
    #[arg(long)]
    pub select: Option<String>,

    /// Print the reduced table and exit without opening the plot window
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}

impl Args {
    pub fn catalog(&self) -> Result<ClusterCatalog> {
        match &self.clusters {
            Some(path) => ClusterCatalog::load(path),
            None => Ok(ClusterCatalog::default()),
        }
    }
}
