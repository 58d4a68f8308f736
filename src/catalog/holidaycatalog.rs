use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::time::recurringholiday::holidayrule::HolidayRule;

use super::catalogerror::CatalogError;

/// Supplies the holiday rules in force at query time.
///
/// Implementations own freshness; the engine asks again on every query.
pub trait HolidayRuleProvider: Send + Sync {
    fn rules(&self) -> Result<Vec<HolidayRule>, CatalogError>;
}

/// Reads either a JSON array of rule records or a single record.
pub fn rules_from_reader<R: Read>(reader: R) -> Result<Vec<HolidayRule>, CatalogError> {
    let json_value: serde_json::Value = serde_json::from_reader(reader)?;
    let rules = if json_value.is_array() {
        serde_json::from_value(json_value)?
    } else {
        vec![serde_json::from_value(json_value)?]
    };
    Ok(rules)
}

pub struct StaticCatalog {
    rules: Vec<HolidayRule>
}

impl StaticCatalog {
    pub fn new(rules: Vec<HolidayRule>) -> StaticCatalog {
        StaticCatalog { rules }
    }
}

impl HolidayRuleProvider for StaticCatalog {
    fn rules(&self) -> Result<Vec<HolidayRule>, CatalogError> {
        Ok(self.rules.clone())
    }
}

/// A JSON file of rule records, re-read on every call.
pub struct JsonFileCatalog {
    path: PathBuf
}

impl JsonFileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> JsonFileCatalog {
        JsonFileCatalog { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HolidayRuleProvider for JsonFileCatalog {
    fn rules(&self) -> Result<Vec<HolidayRule>, CatalogError> {
        debug!(path = %self.path.display(), "loading holiday catalog");
        let file = File::open(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source
        })?;
        let rules = rules_from_reader(BufReader::new(file))?;
        info!(path = %self.path.display(), count = rules.len(), "holiday catalog loaded");
        Ok(rules)
    }
}
