use std::path::{Path, PathBuf};

use crate::color::TypeColors;
use crate::data::export::export_file;
use crate::data::filter::{FilterCriteria, Selection, filter};
use crate::data::loader::{LoadOutcome, load_or_empty};
use crate::data::model::AirportTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table; empty when the source could not be read.
    pub dataset: AirportTable,

    /// Where `dataset` came from.
    pub source: PathBuf,

    /// Current selector values.
    pub criteria: FilterCriteria,

    /// `filter(dataset, criteria)`, recomputed only when criteria change.
    pub filtered: AirportTable,

    /// Selector choices, in first-appearance order.
    pub state_options: Vec<String>,
    pub type_options: Vec<String>,

    /// Colour per airport type.
    pub colors: TypeColors,

    /// Upper bound of the elevation slider.
    pub max_elevation_slider_ft: i32,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(source: PathBuf, outcome: LoadOutcome, max_elevation_slider_ft: i32) -> Self {
        let mut state = Self {
            dataset: AirportTable::empty(),
            source: PathBuf::new(),
            criteria: FilterCriteria::default(),
            filtered: AirportTable::empty(),
            state_options: Vec::new(),
            type_options: Vec::new(),
            colors: TypeColors::default(),
            max_elevation_slider_ft,
            status_message: None,
        };
        state.set_dataset(source, outcome);
        state
    }

    /// Ingest a newly loaded table and reset the filters.
    pub fn set_dataset(&mut self, source: PathBuf, outcome: LoadOutcome) {
        let LoadOutcome { table, error } = outcome;
        self.state_options = table.unique_states();
        self.type_options = table.unique_types();
        self.colors = TypeColors::new(&self.type_options);
        self.criteria = FilterCriteria::default();
        self.dataset = table;
        self.source = source;
        self.status_message = error.map(|e| format!("Error: {e}"));
        self.refilter();
    }

    /// Replace the dataset with the contents of `path`.
    pub fn open(&mut self, path: &Path) {
        let outcome = load_or_empty(path);
        self.set_dataset(path.to_path_buf(), outcome);
    }

    /// Recompute `filtered` after a criteria change.
    pub fn refilter(&mut self) {
        self.filtered = filter(&self.dataset, &self.criteria);
        log::debug!(
            "Filter {:?} matched {} of {} airports",
            self.criteria,
            self.filtered.len(),
            self.dataset.len()
        );
    }

    /// Apply new criteria; refilters only when something changed.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.refilter();
        }
    }

    pub fn select_state(&mut self, state: Selection) {
        let criteria = FilterCriteria {
            state,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria);
    }

    pub fn select_type(&mut self, kind: Selection) {
        let criteria = FilterCriteria {
            kind,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria);
    }

    pub fn set_min_elevation(&mut self, min_elevation_ft: i32) {
        let criteria = FilterCriteria {
            min_elevation_ft,
            ..self.criteria.clone()
        };
        self.set_criteria(criteria);
    }

    /// Write the filtered rows to `path`, reporting the result in the status line.
    pub fn export(&mut self, path: &Path) {
        match export_file(&self.filtered, path) {
            Ok(()) => {
                log::info!(
                    "Exported {} airports to {}",
                    self.filtered.len(),
                    path.display()
                );
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export to {}: {e}", path.display());
                self.status_message = Some(format!("Export failed: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::airport;

    fn loaded() -> AppState {
        let table = AirportTable::new(vec![
            airport("Boston Logan", "large_airport", "MA", Some(20.0)),
            airport("Bedford", "small_airport", "MA", Some(133.0)),
            airport("Lebanon", "small_airport", "NH", Some(603.0)),
        ]);
        AppState::new(
            PathBuf::from("airports.csv"),
            LoadOutcome { table, error: None },
            2000,
        )
    }

    #[test]
    fn starts_with_identity_filter() {
        let state = loaded();
        assert_eq!(state.filtered.len(), 3);
        assert_eq!(state.state_options, vec!["MA", "NH"]);
        assert_eq!(state.type_options, vec!["large_airport", "small_airport"]);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn selectors_refilter() {
        let mut state = loaded();
        state.select_state(Selection::from("MA"));
        assert_eq!(state.filtered.len(), 2);
        state.set_min_elevation(50);
        assert_eq!(state.filtered.len(), 1);
        state.select_type(Selection::from("large_airport"));
        assert!(state.filtered.is_empty());
        state.select_state(Selection::All);
        state.select_type(Selection::All);
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn missing_file_leaves_empty_state_with_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = loaded();
        state.set_min_elevation(100);
        state.open(&dir.path().join("missing.csv"));

        assert!(state.dataset.is_empty());
        assert!(state.filtered.is_empty());
        assert!(state.state_options.is_empty());
        assert_eq!(state.criteria, FilterCriteria::default());
        assert!(state.status_message.unwrap().contains("missing.csv"));
    }

    #[test]
    fn export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = loaded();
        state.export(&dir.path().join("out.txt"));
        assert!(state.status_message.unwrap().starts_with("Export failed"));

        let mut state = loaded();
        state.export(&dir.path().join("out.json"));
        assert!(state.status_message.is_none());
        assert!(dir.path().join("out.json").exists());
    }
}
