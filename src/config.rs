//! Startup configuration.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable overriding the data file location.
pub const DATA_PATH_ENV: &str = "AIRPORT_EXPLORER_DATA";

/// Default location of the airport CSV, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/new_england_airports.csv";

/// Default upper bound of the minimum-elevation slider.
pub const DEFAULT_MAX_ELEVATION_FT: i32 = 2000;

/// Interactive dashboard for regional airport data
#[derive(Parser, Debug)]
#[command(name = "airport-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file loaded at startup
    #[arg(short, long, env = DATA_PATH_ENV, default_value = DEFAULT_DATA_PATH)]
    pub data_path: PathBuf,

    /// Upper bound of the minimum-elevation slider, in feet
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_ELEVATION_FT,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub max_elevation: i32,
}

/// Configuration for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV loaded at startup
    pub data_path: PathBuf,
    /// Upper bound of the minimum-elevation slider, in feet
    pub max_elevation_slider_ft: i32,
    /// Initial window size in points
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            max_elevation_slider_ft: DEFAULT_MAX_ELEVATION_FT,
            window_size: [1280.0, 900.0],
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            data_path: args.data_path,
            max_elevation_slider_ft: args.max_elevation,
            ..Self::default()
        }
    }
}

impl Config {
    /// Parse the command line (and [`DATA_PATH_ENV`]); exits on bad arguments.
    pub fn from_args() -> Self {
        Args::parse().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_dataset() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.max_elevation_slider_ft, 2000);
    }

    #[test]
    fn no_arguments_give_defaults() {
        // Only meaningful when the override variable is unset.
        if std::env::var_os(DATA_PATH_ENV).is_some() {
            return;
        }
        let config = Config::from(Args::try_parse_from(["airport-explorer"]).unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn override_replaces_data_path() {
        let args =
            Args::try_parse_from(["airport-explorer", "--data-path", "/tmp/airports.csv"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.data_path, PathBuf::from("/tmp/airports.csv"));

        let args = Args::try_parse_from(["airport-explorer", "-d", "other.csv"]).unwrap();
        assert_eq!(args.data_path, PathBuf::from("other.csv"));
    }

    #[test]
    fn max_elevation_is_validated() {
        let args = Args::try_parse_from(["airport-explorer", "--max-elevation", "6500"]).unwrap();
        assert_eq!(Config::from(args).max_elevation_slider_ft, 6500);

        assert!(Args::try_parse_from(["airport-explorer", "--max-elevation", "0"]).is_err());
        assert!(Args::try_parse_from(["airport-explorer", "--max-elevation", "high"]).is_err());
    }
}
