/// Data layer: core types, loading, filtering and summaries.
///
/// Architecture:
/// ```text
///   new_england_airports.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalise rows → AirportTable (once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ AirportTable  │  immutable Vec<Airport>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  state / type / min elevation → sorted AirportTable
///   └──────────┘
///        │
///        ├──────────────► stats   (counts, shares, elevation by type)
///        └──────────────► export  (csv / json)
/// ```

pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
