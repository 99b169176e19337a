use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct pastel colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.70);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: airport type → Color32
// ---------------------------------------------------------------------------

/// Maps every airport type in the dataset to a distinct colour, so a type
/// keeps its colour in the pie chart and on the map whatever the filters.
#[derive(Debug, Clone, Default)]
pub struct TypeColors {
    mapping: BTreeMap<String, Color32>,
}

impl TypeColors {
    pub fn new(types: &[String]) -> Self {
        let mut sorted: Vec<&String> = types.iter().collect();
        sorted.sort();
        sorted.dedup();
        let palette = generate_palette(sorted.len());
        let mapping = sorted
            .into_iter()
            .zip(palette)
            .map(|(t, c)| (t.clone(), c))
            .collect();
        TypeColors { mapping }
    }

    /// Look up the colour for a type; unknown types are grey.
    pub fn color_for(&self, kind: &str) -> Color32 {
        self.mapping.get(kind).copied().unwrap_or(Color32::GRAY)
    }
}
