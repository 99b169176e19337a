use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{ALL, FilterCriteria, Selection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if let Some(picked) = selector(
                ui,
                "state_selector",
                "State",
                &state.criteria.state,
                &state.state_options,
            ) {
                state.select_state(picked);
            }
            ui.add_space(6.0);

            if let Some(picked) = selector(
                ui,
                "type_selector",
                "Type",
                &state.criteria.kind,
                &state.type_options,
            ) {
                state.select_type(picked);
            }
            ui.add_space(6.0);

            ui.strong("Min Elevation (ft)");
            let mut min_elevation = state.criteria.min_elevation_ft;
            let slider = egui::Slider::new(&mut min_elevation, 0..=state.max_elevation_slider_ft)
                .suffix(" ft");
            if ui.add(slider).changed() {
                state.set_min_elevation(min_elevation);
            }
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.set_criteria(FilterCriteria::default());
            }

            if state.dataset.is_empty() {
                ui.add_space(6.0);
                ui.label("No airports loaded.");
            }
        });
}

/// A combo box offering "All" plus `options`. Returns the new choice, if any.
fn selector(
    ui: &mut Ui,
    id: &str,
    label: &str,
    current: &Selection,
    options: &[String],
) -> Option<Selection> {
    let mut picked = None;
    ui.strong(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(*current == Selection::All, ALL)
                .clicked()
            {
                picked = Some(Selection::All);
            }
            for opt in options {
                let is_selected = matches!(current, Selection::Only(v) if v == opt);
                if ui.selectable_label(is_selected, opt.as_str()).clicked() {
                    picked = Some(Selection::Only(opt.clone()));
                }
            }
        });
    picked
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
            if ui.button("Export filtered…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} airports loaded from {}, {} visible",
            state.dataset.len(),
            state.source.display(),
            state.filtered.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open airport data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered airports")
        .set_file_name("filtered_airports.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        state.export(&path);
    }
}
