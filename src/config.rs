use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::TrackerError;
use crate::report::{HistogramStyle, DEFAULT_HISTOGRAM_MARKER, DEFAULT_HISTOGRAM_WIDTH};

pub const CONFIG_FILE: &str = "grocer.json";
pub const DEFAULT_INPUT_FILE: &str = "CS210_Project_Three_Input_File.txt";
pub const DEFAULT_BACKUP_FILE: &str = "frequency.dat";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input_path: PathBuf,
    pub backup_path: PathBuf,
    pub histogram_width: usize,
    pub histogram_marker: char,
    pub log_level: String,
    /// Abort startup when the backup cannot be written instead of only reporting it.
    pub backup_failure_fatal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            backup_path: PathBuf::from(DEFAULT_BACKUP_FILE),
            histogram_width: DEFAULT_HISTOGRAM_WIDTH,
            histogram_marker: DEFAULT_HISTOGRAM_MARKER,
            log_level: "warn".to_string(),
            backup_failure_fatal: false,
        }
    }
}

impl Config {
    pub fn histogram_style(&self) -> HistogramStyle {
        HistogramStyle {
            width: self.histogram_width,
            marker: self.histogram_marker,
        }
    }

    pub fn log_level_filter(&self) -> Option<LevelFilter> {
        self.log_level.parse().ok()
    }
}

/// Reads the optional JSON config. A missing file yields the defaults.
pub fn read_config(file_path: &Path) -> Result<Config, TrackerError> {
    let invalid = |message: String| TrackerError::Config {
        path: file_path.to_path_buf(),
        message,
    };

    let config_data = match fs::read_to_string(file_path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(invalid(err.to_string())),
    };

    let config: Config = serde_json::from_str(&config_data).map_err(|e| invalid(e.to_string()))?;
    if config.log_level_filter().is_none() {
        return Err(invalid(format!("unknown log level '{}'", config.log_level)));
    }
    Ok(config)
}
