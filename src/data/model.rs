use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawAirportRow – one CSV row as it appears in the source
// ---------------------------------------------------------------------------

/// A source row before normalisation. Empty CSV cells deserialize to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAirportRow {
    #[serde(default)]
    pub ident: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub elevation_ft: Option<f64>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub iso_region: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    pub scheduled_service: Option<String>,
}

// ---------------------------------------------------------------------------
// Airport – one normalised row of the table
// ---------------------------------------------------------------------------

/// A single airport record, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub ident: Option<String>,
    /// Trimmed and title-cased; `None` when the source cell was empty.
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    /// Subdivision segment of `iso_region`, e.g. `MA` for `US-MA`.
    pub state: String,
    pub elevation_ft: Option<f64>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub iso_region: String,
    pub municipality: Option<String>,
    /// `"yes"` / `"no"`; `"no"` when the source cell was empty.
    pub scheduled_service: String,
}

impl Airport {
    /// Label used in hover text and legends.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.display_name(), self.kind, self.state)?;
        if let Some(elev) = self.elevation_ft {
            write!(f, " {elev} ft")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// AirportTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// An ordered, read-only collection of airports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirportTable {
    rows: Vec<Airport>,
}

impl AirportTable {
    pub fn new(rows: Vec<Airport>) -> Self {
        AirportTable { rows }
    }

    /// The table substituted when the source cannot be read.
    pub fn empty() -> Self {
        AirportTable::default()
    }

    pub fn rows(&self) -> &[Airport] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Airport> {
        self.rows.iter()
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct states in order of first appearance.
    pub fn unique_states(&self) -> Vec<String> {
        unique_in_order(self.rows.iter().map(|a| a.state.as_str()))
    }

    /// Distinct airport types in order of first appearance.
    pub fn unique_types(&self) -> Vec<String> {
        unique_in_order(self.rows.iter().map(|a| a.kind.as_str()))
    }
}

impl<'a> IntoIterator for &'a AirportTable {
    type Item = &'a Airport;
    type IntoIter = std::slice::Iter<'a, Airport>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for v in values {
        if !seen.iter().any(|s| s == v) {
            seen.push(v.to_string());
        }
    }
    seen
}
