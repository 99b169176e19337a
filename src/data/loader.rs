use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::error::{LoadError, Result};
use super::model::{Airport, AirportTable, RawAirportRow};

/// Columns the source must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "iso_region",
    "scheduled_service",
    "name",
    "type",
    "elevation_ft",
    "latitude_deg",
    "longitude_deg",
];

/// Value substituted for an empty `scheduled_service` cell.
pub const DEFAULT_SCHEDULED_SERVICE: &str = "no";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Result of a load that never fails: the table (possibly empty) plus the
/// message to show when the source could not be read.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub table: AirportTable,
    pub error: Option<String>,
}

/// Load an airport table from a CSV file.
///
/// Required columns: `iso_region`, `scheduled_service`, `name`, `type`,
/// `elevation_ft`, `latitude_deg`, `longitude_deg`. Other columns are ignored
/// except `ident` and `municipality`, which are kept when present.
pub fn load_file(path: &Path) -> Result<AirportTable> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    load_reader(file)
}

/// Load an airport table from any CSV byte stream.
pub fn load_reader<R: Read>(reader: R) -> Result<AirportTable> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?;
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|c| !headers.iter().any(|h| h == *c))
    {
        return Err(LoadError::MissingColumn { column });
    }

    let mut rows = Vec::new();

    for (idx, result) in reader.deserialize::<RawAirportRow>().enumerate() {
        let raw = result?;
        rows.push(normalize(raw, idx + 1)?);
    }

    Ok(AirportTable::new(rows))
}

/// Load `path`, substituting an empty table when it cannot be read.
pub fn load_or_empty(path: &Path) -> LoadOutcome {
    match load_file(path) {
        Ok(table) => {
            log::info!(
                "Loaded {} airports from {} ({} states, {} types)",
                table.len(),
                path.display(),
                table.unique_states().len(),
                table.unique_types().len()
            );
            LoadOutcome { table, error: None }
        }
        Err(e) => {
            log::warn!("Failed to load {}: {e}", path.display());
            LoadOutcome {
                table: AirportTable::empty(),
                error: Some(e.to_string()),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Normalisation
// ---------------------------------------------------------------------------

/// Turn a raw source row into an [`Airport`]. `row` is 1-based, for errors.
pub fn normalize(raw: RawAirportRow, row: usize) -> Result<Airport> {
    let iso_region = raw
        .iso_region
        .filter(|r| !r.trim().is_empty())
        .ok_or(LoadError::MissingRegion { row })?;
    let state = derive_state(&iso_region).ok_or(LoadError::MissingRegion { row })?;

    Ok(Airport {
        ident: raw.ident,
        name: raw.name.map(|n| title_case(n.trim())),
        kind: raw.kind,
        state,
        elevation_ft: raw.elevation_ft,
        latitude_deg: raw.latitude_deg,
        longitude_deg: raw.longitude_deg,
        iso_region,
        municipality: raw.municipality,
        scheduled_service: raw
            .scheduled_service
            .unwrap_or_else(|| DEFAULT_SCHEDULED_SERVICE.to_string()),
    })
}

/// Last `-`-separated segment of a region code: `US-MA` → `MA`.
///
/// `None` for a blank segment (`"US-"`), which the loader reports as
/// [`LoadError::MissingRegion`].
pub fn derive_state(iso_region: &str) -> Option<String> {
    iso_region
        .trim()
        .rsplit('-')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// `"LOGAN intl"` → `"Logan Intl"`, `"o'hare"` → `"O'Hare"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
