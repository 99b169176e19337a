use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Polygon};

use crate::color::TypeColors;
use crate::data::stats::{TypeElevationStats, TypeShare};

const BAR_COLOR: Color32 = Color32::from_rgb(70, 130, 180);

// ---------------------------------------------------------------------------
// Airports by state (bar chart)
// ---------------------------------------------------------------------------

pub fn state_bar_chart(ui: &mut Ui, counts: &[(String, usize)]) {
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (state, n))| Bar::new(i as f64, *n as f64).name(state).width(0.6))
        .collect();
    let labels: Vec<String> = counts.iter().map(|(s, _)| s.clone()).collect();

    Plot::new("state_counts")
        .height(280.0)
        .x_axis_label("State")
        .y_axis_label("Number of Airports")
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR));
        });
}

/// Axis label for a bar position; blank between bars.
fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Airport types (pie chart)
// ---------------------------------------------------------------------------

pub fn type_pie_chart(ui: &mut Ui, shares: &[TypeShare], colors: &TypeColors) {
    let slices = pie_slices(shares);

    Plot::new("type_pie")
        .height(280.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (share, (start, sweep)) in shares.iter().zip(slices) {
                if share.count == 0 {
                    continue;
                }
                let label = share.label();
                // Every piece carries the same name so the legend shows one entry.
                for piece in wedge_polygons(start, sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(piece))
                            .fill_color(colors.color_for(&share.kind))
                            .stroke(Stroke::new(1.0, Color32::WHITE))
                            .name(&label),
                    );
                }
            }
        });
}

/// `(start angle, sweep)` in radians per share, starting at 12 o'clock and
/// going counter-clockwise.
pub fn pie_slices(shares: &[TypeShare]) -> Vec<(f64, f64)> {
    let mut start = FRAC_PI_2;
    shares
        .iter()
        .map(|s| {
            let sweep = s.percent / 100.0 * TAU;
            let slice = (start, sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Outline of a unit-circle wedge, split into convex pieces of at most 90°.
pub fn wedge_polygons(start: f64, sweep: f64) -> Vec<Vec<[f64; 2]>> {
    const ARC_STEPS: usize = 16;
    if sweep <= 0.0 {
        return Vec::new();
    }
    let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let piece_sweep = sweep / pieces as f64;

    (0..pieces)
        .map(|p| {
            let piece_start = start + piece_sweep * p as f64;
            let mut points = Vec::with_capacity(ARC_STEPS + 2);
            points.push([0.0, 0.0]);
            for i in 0..=ARC_STEPS {
                let angle = piece_start + piece_sweep * i as f64 / ARC_STEPS as f64;
                points.push([angle.cos(), angle.sin()]);
            }
            points
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Elevation statistics (table)
// ---------------------------------------------------------------------------

pub fn elevation_table(ui: &mut Ui, stats: &[TypeElevationStats]) {
    // The dashboard already scrolls.
    TableBuilder::new(ui)
        .vscroll(false)
        .striped(true)
        .column(Column::auto().at_least(160.0))
        .columns(Column::auto().at_least(140.0), 2)
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Type");
            });
            header.col(|ui| {
                ui.strong("Average Elevation");
            });
            header.col(|ui| {
                ui.strong("Max Elevation");
            });
        })
        .body(|mut body| {
            for s in stats {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(s.kind.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format_feet(s.mean_ft));
                    });
                    row.col(|ui| {
                        ui.label(format_feet(s.max_ft));
                    });
                });
            }
        });
}

fn format_feet(v: Option<f64>) -> String {
    match v {
        Some(ft) => format!("{ft:.2}"),
        None => "n/a".to_string(),
    }
}
