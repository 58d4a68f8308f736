use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::colombia::ColombiaCatalog;
use crate::catalog::holidaycatalog::{
    HolidayRuleProvider,
    JsonFileCatalog,
    StaticCatalog
};
use crate::time::recurringholiday::holidayrule::HolidayRule;

pub const CONFIG_PATH_ENV: &str = "FESTIVOS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error)
}

/// Where the holiday rules come from.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CatalogSource {
    #[default]
    Builtin,
    File { path: PathBuf },
    Inline { rules: Vec<HolidayRule> }
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    catalog: CatalogSource,
    #[serde(default = "default_log_level")]
    log_level: String
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            catalog: CatalogSource::default(),
            log_level: default_log_level()
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn catalog(&self) -> &CatalogSource {
        &self.catalog
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source
        })?;
        let reader = BufReader::new(file);
        let configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    /// Reads the file named by `FESTIVOS_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Configuration, ConfigurationError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Configuration::from_reader(path),
            None => Ok(Configuration::default())
        }
    }

    pub fn rule_provider(&self) -> Box<dyn HolidayRuleProvider> {
        match &self.catalog {
            CatalogSource::Builtin => Box::new(ColombiaCatalog),
            CatalogSource::File { path } => Box::new(JsonFileCatalog::new(path)),
            CatalogSource::Inline { rules } => Box::new(StaticCatalog::new(rules.clone()))
        }
    }
}
