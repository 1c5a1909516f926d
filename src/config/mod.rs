use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

// Fixed file names under the storage directories. Each render overwrites
// the previous artifact, so only the latest chart is ever retrievable.
pub const CSV_FILE: &str = "movie_bookings.csv";
pub const SHOWTIME_CHART_FILE: &str = "showtime_popularity.png";
pub const CITY_CHART_FILE: &str = "city_top_movies.png";

// Top-level configuration container for all settings
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Where the uploaded CSV snapshot and the rendered charts live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub outputs_dir: PathBuf,
}

impl StorageConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(CSV_FILE)
    }

    pub fn charts_dir(&self) -> PathBuf {
        self.outputs_dir.join("charts")
    }

    pub fn showtime_chart_path(&self) -> PathBuf {
        self.charts_dir().join(SHOWTIME_CHART_FILE)
    }

    pub fn city_chart_path(&self) -> PathBuf {
        self.charts_dir().join(CITY_CHART_FILE)
    }

    /// URL under which a chart file is served, given the `/outputs` mount.
    pub fn chart_url(file_name: &str) -> String {
        format!("/outputs/charts/{}", file_name)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinestats=debug,tower_http=debug".to_string()),
            },
            storage: StorageConfig {
                data_dir: env::var("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| Path::new("data").to_path_buf()),
                outputs_dir: env::var("OUTPUTS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| Path::new("outputs").to_path_buf()),
            },
        }
    }
}
