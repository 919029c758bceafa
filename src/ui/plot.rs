use eframe::egui::{Color32, Ui};
use egui_plot::{GridMark, MarkerShape, Plot, Points};

use crate::state::AppState;

/// Colour index shown by default, blue to red.
const B_V_RANGE: (f64, f64) = (-0.5, 2.0);
/// V magnitudes shown by default, bright (top) to faint (bottom).
const V_MAG_RANGE: (f64, f64) = (6.0, 16.0);

// ---------------------------------------------------------------------------
// Colour-magnitude diagram (central panel)
// ---------------------------------------------------------------------------

/// Render the CMD in the central panel.
///
/// Magnitudes grow downward, so points are plotted at `-Vmag` and the axis
/// labels undo the sign.
pub fn cmd_plot(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.title());
    });

    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No stars to plot  (Cluster → … or File → Open…)");
            });
            return;
        }
    };

    let color_map = &state.color_map;

    Plot::new("cmd_plot")
        .x_axis_label("Colour Index (B-V)")
        .y_axis_label("Apparent V magnitude")
        .include_x(B_V_RANGE.0)
        .include_x(B_V_RANGE.1)
        .include_y(-V_MAG_RANGE.0)
        .include_y(-V_MAG_RANGE.1)
        .y_axis_formatter(|mark: GridMark, _range| format!("{:.1}", -mark.value))
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\nB-V = {:.3}\nV = {:.3}", value.x, -value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for star in &table.stars {
                let color = color_map
                    .as_ref()
                    .map(|cm| cm.color_for(star.b_v))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let point = Points::new(vec![[star.b_v, -star.v_mag]])
                    .name(&star.star)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(3.0);

                plot_ui.points(point);
            }
        });
}
