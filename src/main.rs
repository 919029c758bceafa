mod app;
mod cli;
mod cluster;
mod color;
mod data;
mod selection;
mod state;
mod ui;

use anyhow::{Result, anyhow};
use app::ClusterCmdApp;
use clap::Parser;
use eframe::egui;

use crate::data::pipeline::reduce_file;
use crate::selection::{parse_selection, prompt_cluster};
use crate::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let catalog = args.catalog()?;

    let cluster = match &args.select {
        Some(choice) => {
            let index = parse_selection(choice, catalog.len())?;
            &catalog.clusters()[index]
        }
        None => prompt_cluster(&catalog, std::io::stdin().lock(), std::io::stdout())?,
    }
    .clone();

    let path = cluster.resolve_data_file(&args.data_dir)?;
    let table = reduce_file(&path, cluster.reference_star())?;
    println!("{table}");

    if args.no_plot {
        return Ok(());
    }

    let mut state = AppState::new(catalog, args.data_dir, cluster);
    let title = state.title();
    state.set_table(path, table);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ClusterCmdApp::new(state)))),
    )
    .map_err(|e| anyhow!("plot window failed: {e}"))
}
