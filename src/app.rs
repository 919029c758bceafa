use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ClusterCmdApp {
    pub state: AppState,
}

impl ClusterCmdApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ClusterCmdApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: reduced table ----
        egui::SidePanel::left("star_table")
            .default_width(340.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: CMD ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::cmd_plot(ui, &self.state);
        });
    }
}
