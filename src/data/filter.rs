use std::fmt;

use super::model::{Airport, AirportTable};

/// Sentinel shown in selectors for "no constraint".
pub const ALL: &str = "All";

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// A categorical selector value: either no constraint or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        if s == ALL {
            Selection::All
        } else {
            Selection::Only(s.to_string())
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(v) => f.write_str(v),
        }
    }
}

/// The user's current filter choices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub state: Selection,
    pub kind: Selection,
    /// Inclusive lower bound; rows without an elevation never pass.
    pub min_elevation_ft: i32,
}

impl FilterCriteria {
    /// Whether a single airport passes all active constraints.
    pub fn matches(&self, airport: &Airport) -> bool {
        self.state.accepts(&airport.state)
            && self.kind.accepts(&airport.kind)
            && airport
                .elevation_ft
                .is_some_and(|e| e >= f64::from(self.min_elevation_ft))
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the airports passing `criteria`, highest elevation first.
///
/// The input is left untouched. Equal elevations keep their input order.
pub fn filter(table: &AirportTable, criteria: &FilterCriteria) -> AirportTable {
    let mut rows: Vec<Airport> = table
        .iter()
        .filter(|a| criteria.matches(a))
        .cloned()
        .collect();

    // Every surviving row has an elevation.
    rows.sort_by(|a, b| {
        let ea = a.elevation_ft.unwrap_or(f64::NEG_INFINITY);
        let eb = b.elevation_ft.unwrap_or(f64::NEG_INFINITY);
        eb.total_cmp(&ea)
    });

    AirportTable::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::airport;

    fn sample() -> AirportTable {
        AirportTable::new(vec![
            airport("Boston Logan", "large_airport", "MA", Some(20.0)),
            airport("Bedford", "small_airport", "MA", Some(133.0)),
            airport("Lebanon", "small_airport", "NH", Some(603.0)),
            airport("Rooftop", "heliport", "NH", None),
            airport("Dock", "seaplane_base", "ME", Some(0.0)),
            airport("Twin", "small_airport", "ME", Some(133.0)),
        ])
    }

    fn names(table: &AirportTable) -> Vec<&str> {
        table.iter().map(|a| a.display_name()).collect()
    }

    fn is_sorted_desc(table: &AirportTable) -> bool {
        table
            .rows()
            .windows(2)
            .all(|w| w[0].elevation_ft >= w[1].elevation_ft)
    }

    #[test]
    fn min_elevation_keeps_only_higher_airports() {
        let table = AirportTable::new(vec![
            airport("Boston Logan", "large_airport", "MA", Some(20.0)),
            airport("Bedford", "small_airport", "MA", Some(133.0)),
        ]);
        let criteria = FilterCriteria {
            min_elevation_ft: 50,
            ..Default::default()
        };
        assert_eq!(names(&filter(&table, &criteria)), vec!["Bedford"]);
    }

    #[test]
    fn identity_filter_returns_all_elevated_rows_sorted() {
        let table = sample();
        let out = filter(&table, &FilterCriteria::default());
        assert_eq!(
            names(&out),
            vec!["Lebanon", "Bedford", "Twin", "Boston Logan", "Dock"]
        );
        assert!(is_sorted_desc(&out));
    }

    #[test]
    fn ties_keep_input_order() {
        let out = filter(&sample(), &FilterCriteria::default());
        let bedford = names(&out).iter().position(|n| *n == "Bedford").unwrap();
        let twin = names(&out).iter().position(|n| *n == "Twin").unwrap();
        assert!(bedford < twin);
    }

    #[test]
    fn state_and_type_constraints_combine() {
        let criteria = FilterCriteria {
            state: Selection::from("MA"),
            kind: Selection::from("small_airport"),
            min_elevation_ft: 0,
        };
        assert_eq!(names(&filter(&sample(), &criteria)), vec!["Bedford"]);
    }

    #[test]
    fn result_is_subset_of_input() {
        let table = sample();
        for criteria in [
            FilterCriteria::default(),
            FilterCriteria {
                state: Selection::from("NH"),
                ..Default::default()
            },
            FilterCriteria {
                kind: Selection::from("heliport"),
                ..Default::default()
            },
            FilterCriteria {
                min_elevation_ft: 500,
                ..Default::default()
            },
        ] {
            let out = filter(&table, &criteria);
            assert!(out.iter().all(|a| table.rows().contains(a)));
            assert!(out.iter().all(|a| criteria.matches(a)));
            assert!(is_sorted_desc(&out));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let criteria = FilterCriteria {
            kind: Selection::from("small_airport"),
            min_elevation_ft: 100,
            ..Default::default()
        };
        let once = filter(&sample(), &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_values_and_empty_table_yield_empty_results() {
        let criteria = FilterCriteria {
            state: Selection::from("ZZ"),
            ..Default::default()
        };
        assert!(filter(&sample(), &criteria).is_empty());
        assert!(filter(&AirportTable::empty(), &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn input_is_not_modified() {
        let table = sample();
        let before = table.clone();
        let _ = filter(&table, &FilterCriteria::default());
        assert_eq!(table, before);
    }

    #[test]
    fn all_string_maps_to_no_constraint() {
        assert_eq!(Selection::from("All"), Selection::All);
        assert_eq!(Selection::from("VT").to_string(), "VT");
        assert_eq!(Selection::All.to_string(), "All");
    }
}
