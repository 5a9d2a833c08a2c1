//! Dashboard Settings

use config::{Config, Environment, File};
use dataset::Gender;
use feature_engine::{Field, Level, PredicateSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when no path is given
pub const DEFAULT_SETTINGS_FILE: &str = "aerofit";

/// Prefix of environment overrides, e.g. `AEROFIT_DATA_PATH` or `AEROFIT_LOG__LEVEL`
pub const ENV_PREFIX: &str = "AEROFIT";

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CSV source of customer records
    pub data_path: PathBuf,
    pub log: LogSettings,
    pub explorer: ExplorerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("aerofit_treadmill.csv"),
            log: LogSettings::default(),
            explorer: ExplorerSettings::default(),
        }
    }
}

impl Settings {
    /// Layer defaults, the settings file and environment overrides.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

/// Environment override layer; list keys take comma-separated values
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("explorer.products")
        .with_list_parse_key("explorer.genders")
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `summary_engine=debug`
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
    /// Append to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

/// Record filter applied to the explorer view. Unset constraints allow
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    pub products: Option<Vec<String>>,
    pub genders: Option<Vec<Gender>>,
    /// Inclusive lower age bound
    pub age_min: Option<u32>,
    /// Inclusive upper age bound
    pub age_max: Option<u32>,
}

impl ExplorerSettings {
    pub fn predicates(&self) -> PredicateSet {
        let mut predicates = PredicateSet::all();

        if let Some(products) = &self.products {
            predicates = predicates.one_of(Field::Product, products.iter().map(Level::product));
        }
        if let Some(genders) = &self.genders {
            predicates = predicates.one_of(Field::Gender, genders.iter().copied());
        }
        if self.age_min.is_some() || self.age_max.is_some() {
            let min = self.age_min.map_or(f64::NEG_INFINITY, f64::from);
            let max = self.age_max.map_or(f64::INFINITY, f64::from);
            predicates = predicates.between(Field::Age, min, max);
        }

        predicates
    }
}
