use eframe::egui::Ui;
use egui_plot::{Legend, Plot, Points};

use crate::data::model::{Airport, AirportTable};
use crate::state::AppState;

/// Hover labels only appear within this many degrees of an airport.
const HOVER_RADIUS_DEG: f64 = 0.05;

/// Latitude used for the aspect ratio when nothing is shown.
const DEFAULT_LATITUDE: f64 = 43.5;

// ---------------------------------------------------------------------------
// Airport locations (scatter map)
// ---------------------------------------------------------------------------

/// Longitude/latitude scatter of the filtered airports, coloured by type.
pub fn airport_map(ui: &mut Ui, state: &AppState) {
    let filtered = &state.filtered;
    let aspect = map_aspect(mean_latitude(filtered));

    let hover: Vec<([f64; 2], String)> = filtered
        .iter()
        .map(|a| ([a.longitude_deg, a.latitude_deg], hover_text(a)))
        .collect();

    Plot::new("airport_map")
        .height(420.0)
        .data_aspect(aspect)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .legend(Legend::default())
        .label_formatter(move |_name, value| {
            nearest_label(&hover, [value.x, value.y], HOVER_RADIUS_DEG)
                .map(str::to_string)
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for kind in &state.type_options {
                let points: Vec<[f64; 2]> = filtered
                    .iter()
                    .filter(|a| &a.kind == kind)
                    .map(|a| [a.longitude_deg, a.latitude_deg])
                    .collect();
                if points.is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(points)
                        .radius(3.5)
                        .color(state.colors.color_for(kind))
                        .name(kind),
                );
            }
        });
}

/// x/y data-units-per-pixel ratio that keeps distances true at `latitude`:
/// a degree of longitude spans `cos(latitude)` of a degree of latitude.
fn map_aspect(latitude: f64) -> f32 {
    (1.0 / latitude.to_radians().cos()) as f32
}

fn mean_latitude(table: &AirportTable) -> f64 {
    if table.is_empty() {
        return DEFAULT_LATITUDE;
    }
    table.iter().map(|a| a.latitude_deg).sum::<f64>() / table.len() as f64
}

fn hover_text(a: &Airport) -> String {
    let elevation = a
        .elevation_ft
        .map(|e| format!("{e} ft"))
        .unwrap_or_else(|| "unknown elevation".to_string());
    format!("{}\n{}\n{}", a.display_name(), a.kind, elevation)
}

/// Label of the point closest to `at`, if one lies within `radius`.
fn nearest_label<'a>(points: &'a [([f64; 2], String)], at: [f64; 2], radius: f64) -> Option<&'a str> {
    points
        .iter()
        .map(|(p, label)| {
            let dx = p[0] - at[0];
            let dy = p[1] - at[1];
            (dx * dx + dy * dy, label)
        })
        .filter(|(d2, _)| *d2 <= radius * radius)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, label)| label.as_str())
}
