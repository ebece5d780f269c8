//! Configuration loading and merging.
//!
//! Settings come from four places, highest priority first: explicit
//! builder values (CLI flags), environment variables (`TAVOLO_DATA_DIR`,
//! `TAVOLO_CURRENT_DATE`, `TAVOLO_CURRENT_TIME`), an optional YAML
//! configuration file, and built-in defaults.
//!
//! The reference-clock overrides exist so that scripted runs and tests can
//! pin "now" to a known instant; without them the clock is sampled from
//! the system.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validate::{self, Clock};

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "TAVOLO_DATA_DIR";

/// Environment variable pinning the reference date (`YYYY-MM-DD`).
pub const ENV_CURRENT_DATE: &str = "TAVOLO_CURRENT_DATE";

/// Environment variable pinning the reference time (`HH:MM`).
pub const ENV_CURRENT_TIME: &str = "TAVOLO_CURRENT_TIME";

/// Name of the optional configuration file within the default data
/// directory.
const CONFIG_FILE: &str = "config.yaml";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the reservation, counter, account, and log files.
    pub data_dir: PathBuf,
    /// Pinned reference date, if any.
    pub current_date: Option<String>,
    /// Pinned reference time, if any.
    pub current_time: Option<String>,
}

impl Config {
    /// Builds the reference clock: the system clock with any pinned date
    /// or time applied on top.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a pinned date or time is malformed.
    pub fn clock(&self) -> Result<Clock> {
        let system = Clock::system_now();
        let date = match &self.current_date {
            Some(date) => date.as_str(),
            None => system.date(),
        };
        let (hour, minute) = match &self.current_time {
            Some(time) => validate::time_format(time)?,
            None => validate::time_format(&system.time_display())?,
        };
        Ok(Clock::fixed(date, hour, minute)?)
    }
}

/// On-disk configuration file schema. Every field is optional; absent
/// fields fall through to the next source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    current_date: Option<String>,
    current_time: Option<String>,
}

/// Builder merging configuration sources.
///
/// # Examples
///
/// ```no_run
/// use tavolo::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_data_dir(Some("/tmp/tavolo-data".into()))
///     .build()
///     .unwrap();
/// assert!(config.data_dir.ends_with("tavolo-data"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    current_date: Option<String>,
    current_time: Option<String>,
}

impl ConfigBuilder {
    /// Creates a builder with no explicit overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory explicitly (highest priority).
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Points the builder at a specific configuration file instead of the
    /// default location.
    #[must_use]
    pub fn with_config_file(mut self, config_file: Option<PathBuf>) -> Self {
        self.config_file = config_file;
        self
    }

    /// Pins the reference date explicitly.
    #[must_use]
    pub fn with_current_date(mut self, date: Option<String>) -> Self {
        self.current_date = date;
        self
    }

    /// Pins the reference time explicitly.
    #[must_use]
    pub fn with_current_time(mut self, time: Option<String>) -> Self {
        self.current_time = time;
        self
    }

    /// Resolves the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be
    /// read or parsed, or if no home directory can be determined while the
    /// default data directory is needed.
    pub fn build(self) -> Result<Config> {
        let file = self.load_file()?;

        let data_dir = self
            .data_dir
            .or_else(|| env::var_os(ENV_DATA_DIR).map(PathBuf::from))
            .or(file.data_dir)
            .map_or_else(default_data_dir, Ok)?;

        let current_date = self
            .current_date
            .or_else(|| env::var(ENV_CURRENT_DATE).ok())
            .or(file.current_date);

        let current_time = self
            .current_time
            .or_else(|| env::var(ENV_CURRENT_TIME).ok())
            .or(file.current_time);

        Ok(Config {
            data_dir,
            current_date,
            current_time,
        })
    }

    /// Loads the configuration file: the explicit one if given, otherwise
    /// the default location when it exists.
    fn load_file(&self) -> Result<FileConfig> {
        let path = match &self.config_file {
            Some(path) => path.clone(),
            None => {
                let Ok(dir) = default_data_dir() else {
                    return Ok(FileConfig::default());
                };
                let path = dir.join(CONFIG_FILE);
                if !path.exists() {
                    return Ok(FileConfig::default());
                }
                path
            }
        };
        let contents = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}

/// The default data directory, `~/.tavolo`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".tavolo"))
        .ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "cannot determine home directory",
            ))
        })
}
