use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – reduced star table
// ---------------------------------------------------------------------------

/// Render the reduced table with a B−V colour legend.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading(&state.cluster.name);
    ui.label(format!(
        "Reference star  B = {:.3}  V = {:.3}",
        state.cluster.ref_star_b_mag, state.cluster.ref_star_v_mag
    ));
    if let Some(source) = &state.source {
        ui.small(source.display().to_string());
    }
    ui.separator();

    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.label("No stars reduced.");
            return;
        }
    };

    if let Some(cm) = &state.color_map {
        ui.strong("B-V colour");
        ui.horizontal_wrapped(|ui: &mut Ui| {
            for (label, color) in cm.legend_entries(5) {
                ui.label(RichText::new(label).color(color).strong());
            }
        });
        ui.separator();
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(90.0))
        .columns(Column::auto().at_least(55.0), 4)
        .header(20.0, |mut header| {
            for title in ["Star", "Bmag", "Vmag", "B-V", "B/V"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for star in &table.stars {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(star.b_v))
                    .unwrap_or(Color32::GRAY);
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(RichText::new(&star.star).color(color));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(format!("{:.3}", star.b_mag));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(format!("{:.3}", star.v_mag));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(format!("{:+.3}", star.b_v));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(format!("{:.3}", star.flux_ratio));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.menu_button("Cluster", |ui: &mut Ui| {
            let names: Vec<String> = state
                .catalog
                .clusters()
                .iter()
                .map(|c| c.name.clone())
                .collect();
            for (idx, name) in names.iter().enumerate() {
                let current = *name == state.cluster.name;
                if ui.selectable_label(current, name).clicked() {
                    state.select_cluster(idx);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!("{} stars", table.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open measurement table")
        .set_directory(&state.data_dir)
        .add_filter("Measurement tables", &["xls", "tsv", "txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.open_file(&path);
    }
}
