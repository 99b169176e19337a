use eframe::egui::{self, Ui};

use crate::config::Config;
use crate::data::loader::LoadOutcome;
use crate::data::stats::{count_by_state, elevation_by_type, summary_line, type_shares};
use crate::state::AppState;
use crate::ui::{charts, map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AirportExplorerApp {
    pub state: AppState,
}

impl AirportExplorerApp {
    pub fn new(config: &Config, outcome: LoadOutcome) -> Self {
        Self {
            state: AppState::new(
                config.data_path.clone(),
                outcome,
                config.max_elevation_slider_ft,
            ),
        }
    }
}

impl eframe::App for AirportExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts, table, map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let filtered = &state.filtered;

    ui.heading("✈ New England Airports Analysis");
    ui.separator();

    let state_counts = count_by_state(filtered);
    let shares = type_shares(filtered);
    ui.columns(2, |cols| {
        cols[0].strong("Airports by State");
        charts::state_bar_chart(&mut cols[0], &state_counts);
        cols[1].strong("Airport Types");
        charts::type_pie_chart(&mut cols[1], &shares, &state.colors);
    });
    ui.add_space(8.0);

    ui.strong("Elevation Statistics");
    charts::elevation_table(ui, &elevation_by_type(filtered));
    ui.add_space(8.0);

    ui.strong("Airport Locations");
    map::airport_map(ui, state);

    ui.separator();
    ui.label(summary_line(filtered));
}
