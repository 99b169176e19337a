//! Writes a deterministic sample airport CSV in the source column layout.
//!
//! Usage: `cargo run --bin generate_sample -- [output.csv] [--seed N]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Write a deterministic sample airport CSV
#[derive(Parser)]
#[command(name = "generate_sample")]
#[command(about, long_about = None)]
struct Cli {
    /// Output CSV file
    #[arg(default_value = "sample_airports.csv")]
    output: PathBuf,

    /// PRNG seed; the same seed always writes the same file
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Airports generated per state
    #[arg(long, default_value_t = 40)]
    per_state: usize,
}

#[derive(Serialize)]
struct SampleRow {
    ident: String,
    #[serde(rename = "type")]
    kind: &'static str,
    name: Option<String>,
    elevation_ft: Option<i64>,
    iso_region: String,
    municipality: &'static str,
    scheduled_service: Option<&'static str>,
    latitude_deg: f64,
    longitude_deg: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (state code, town, lat range, lon range, typical elevation range ft)
const STATES: &[(&str, &str, (f64, f64), (f64, f64), (f64, f64))] = &[
    ("MA", "Worcester", (41.3, 42.8), (-73.4, -70.0), (0.0, 1100.0)),
    ("CT", "Hartford", (41.0, 42.0), (-73.7, -71.8), (0.0, 900.0)),
    ("RI", "Providence", (41.2, 42.0), (-71.8, -71.1), (0.0, 500.0)),
    ("NH", "Concord", (42.7, 45.3), (-72.5, -70.7), (50.0, 1900.0)),
    ("VT", "Montpelier", (42.7, 45.0), (-73.4, -71.5), (100.0, 2200.0)),
    ("ME", "Bangor", (43.1, 47.4), (-71.0, -67.0), (0.0, 1500.0)),
];

const TYPES: &[&str] = &[
    "small_airport",
    "small_airport",
    "small_airport",
    "heliport",
    "heliport",
    "seaplane_base",
    "medium_airport",
    "closed",
];

const WORDS: &[&str] = &[
    "pine", "ridge", "lake", "valley", "harbor", "meadow", "north", "river", "hill", "field",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = SimpleRng::new(cli.seed);
    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    let mut count = 0;
    for (code, town, lat, lon, elev) in STATES {
        for i in 0..cli.per_state {
            let kind = *rng.pick(TYPES);
            let name = if i % 17 == 16 {
                None
            } else {
                // Mixed case and stray whitespace, as in the real source.
                let raw = format!(
                    " {} {} {}",
                    rng.pick(WORDS),
                    rng.pick(WORDS),
                    kind.replace('_', " ").to_uppercase()
                );
                Some(raw)
            };
            let elevation_ft = if kind == "seaplane_base" {
                Some(rng.range(0.0, 30.0) as i64)
            } else if i % 23 == 22 {
                None
            } else {
                Some(rng.range(elev.0, elev.1) as i64)
            };

            writer.serialize(SampleRow {
                ident: format!("{code}{i:02}"),
                kind,
                name,
                elevation_ft,
                iso_region: format!("US-{code}"),
                municipality: *town,
                scheduled_service: match kind {
                    "medium_airport" => Some("yes"),
                    _ if i % 3 == 0 => None,
                    _ => Some("no"),
                },
                latitude_deg: rng.range(lat.0, lat.1),
                longitude_deg: rng.range(lon.0, lon.1),
            })?;
            count += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {count} airports to {}", cli.output.display());
    Ok(())
}
