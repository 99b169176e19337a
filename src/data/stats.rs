//! Grouped summaries over a (usually already filtered) airport table.
//!
//! Every function here is total: an empty table produces empty output.

use std::collections::BTreeMap;

use super::model::AirportTable;

/// Mean and maximum elevation for one airport type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeElevationStats {
    pub kind: String,
    /// Rounded to 2 decimals. `None` if no row in the group has an elevation.
    pub mean_ft: Option<f64>,
    pub max_ft: Option<f64>,
}

/// Share of one airport type in a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeShare {
    pub kind: String,
    pub count: usize,
    /// 0–100.
    pub percent: f64,
}

impl TypeShare {
    /// Legend label, e.g. `small_airport (66.7%)`.
    pub fn label(&self) -> String {
        format!("{} ({:.1}%)", self.kind, self.percent)
    }
}

/// Group by type (sorted by type name) and compute mean/max elevation.
pub fn elevation_by_type(table: &AirportTable) -> Vec<TypeElevationStats> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for a in table {
        let group = groups.entry(a.kind.as_str()).or_default();
        if let Some(e) = a.elevation_ft {
            group.push(e);
        }
    }

    groups
        .into_iter()
        .map(|(kind, elevations)| {
            let (mean_ft, max_ft) = if elevations.is_empty() {
                (None, None)
            } else {
                let sum: f64 = elevations.iter().sum();
                let mean = sum / elevations.len() as f64;
                let max = elevations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                (Some(round2(mean)), Some(round2(max)))
            };
            TypeElevationStats {
                kind: kind.to_string(),
                mean_ft,
                max_ft,
            }
        })
        .collect()
}

/// Number of airports per state, most first. Ties keep first-appearance order.
pub fn count_by_state(table: &AirportTable) -> Vec<(String, usize)> {
    value_counts(table.iter().map(|a| a.state.as_str()))
}

/// Count and percentage per airport type, most first.
pub fn type_shares(table: &AirportTable) -> Vec<TypeShare> {
    let total = table.len();
    value_counts(table.iter().map(|a| a.kind.as_str()))
        .into_iter()
        .map(|(kind, count)| TypeShare {
            kind,
            count,
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Status line shown under the charts.
pub fn summary_line(filtered: &AirportTable) -> String {
    format!("Showing {} airports matching filters", filtered.len())
}

fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|(k, _)| k == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v.to_string(), 1)),
        }
    }
    // Stable, so equal counts stay in first-appearance order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::airport;

    #[test]
    fn mean_and_max_per_type() {
        let table = AirportTable::new(vec![
            airport("A", "small_airport", "MA", Some(100.0)),
            airport("B", "large_airport", "MA", Some(20.0)),
            airport("C", "small_airport", "NH", Some(200.0)),
        ]);
        let stats = elevation_by_type(&table);
        assert_eq!(
            stats,
            vec![
                TypeElevationStats {
                    kind: "large_airport".to_string(),
                    mean_ft: Some(20.0),
                    max_ft: Some(20.0),
                },
                TypeElevationStats {
                    kind: "small_airport".to_string(),
                    mean_ft: Some(150.0),
                    max_ft: Some(200.0),
                },
            ]
        );
    }

    #[test]
    fn mean_is_rounded_to_two_decimals() {
        let table = AirportTable::new(vec![
            airport("A", "heliport", "VT", Some(1.0)),
            airport("B", "heliport", "VT", Some(1.0)),
            airport("C", "heliport", "VT", Some(2.0)),
        ]);
        assert_eq!(elevation_by_type(&table)[0].mean_ft, Some(1.33));
    }

    #[test]
    fn group_without_elevations_has_no_values() {
        let table = AirportTable::new(vec![airport("A", "heliport", "VT", None)]);
        let stats = elevation_by_type(&table);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].mean_ft, None);
        assert_eq!(stats[0].max_ft, None);
    }

    #[test]
    fn counts_sorted_by_frequency() {
        let table = AirportTable::new(vec![
            airport("A", "small_airport", "ME", Some(1.0)),
            airport("B", "heliport", "MA", Some(1.0)),
            airport("C", "small_airport", "MA", Some(1.0)),
            airport("D", "small_airport", "NH", Some(1.0)),
        ]);
        assert_eq!(
            count_by_state(&table),
            vec![
                ("MA".to_string(), 2),
                ("ME".to_string(), 1),
                ("NH".to_string(), 1)
            ]
        );

        let shares = type_shares(&table);
        assert_eq!(shares[0].kind, "small_airport");
        assert_eq!(shares[0].count, 3);
        assert!((shares[0].percent - 75.0).abs() < 1e-9);
        assert_eq!(shares[1].label(), "heliport (25.0%)");
    }

    #[test]
    fn empty_table_gives_empty_summaries() {
        let table = AirportTable::empty();
        assert!(elevation_by_type(&table).is_empty());
        assert!(count_by_state(&table).is_empty());
        assert!(type_shares(&table).is_empty());
        assert_eq!(summary_line(&table), "Showing 0 airports matching filters");
    }
}
