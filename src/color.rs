use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Diverging palette (red-blue, reversed: blue for low values, red for high)
// ---------------------------------------------------------------------------

/// Anchor colours of the diverging scale, from low to high.
const RD_BU_R: [(u8, u8, u8); 5] = [
    (5, 48, 97),
    (67, 147, 195),
    (247, 247, 247),
    (214, 96, 77),
    (103, 0, 31),
];

fn to_linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(r, g, b).into_linear()
}

fn to_color32(lin: LinSrgb) -> Color32 {
    let rgb: Srgb<u8> = Srgb::from_linear(lin);
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Colour at position `t` in `[0, 1]` along the diverging scale.
pub fn diverging(t: f32) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let segments = (RD_BU_R.len() - 1) as f32;
    let pos = t * segments;
    let lo = (pos.floor() as usize).min(RD_BU_R.len() - 2);
    let frac = pos - lo as f32;
    to_color32(to_linear(RD_BU_R[lo]).mix(to_linear(RD_BU_R[lo + 1]), frac))
}

// ---------------------------------------------------------------------------
// Color mapping: colour index → Color32
// ---------------------------------------------------------------------------

/// Maps B−V values onto the diverging scale, normalised to the data range.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    min: f64,
    max: f64,
}

impl ColorMap {
    /// Build a colour map spanning `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        ColorMap { min, max }
    }

    /// Look up the colour for a colour index.
    pub fn color_for(&self, value: f64) -> Color32 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return diverging(0.5);
        }
        diverging(((value - self.min) / range) as f32)
    }

    /// Range labels and colours for a legend strip.
    pub fn legend_entries(&self, steps: usize) -> Vec<(String, Color32)> {
        if steps < 2 {
            return Vec::new();
        }
        (0..steps)
            .map(|i| {
                let value = self.min + (self.max - self.min) * i as f64 / (steps - 1) as f64;
                (format!("{value:.2}"), self.color_for(value))
            })
            .collect()
    }
}
