use std::path::Path;

use config::{Config, ConfigError, File};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use venuetrip_core::model::SelectionDefaults;

use crate::model::recommendation::{
    EngineConfig, RecommendationEngine, RecommendationError, RuleTable,
};

/// settings for the command line tool. every section may be left out of the
/// settings file, in which case its defaults are used.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct VenueTripConfig {
    pub engine: EngineConfig,
    pub defaults: SelectionDefaults,
    /// rule table file (TOML or JSON). the embedded rules are used when unset.
    pub rules_file: Option<String>,
}

impl VenueTripConfig {
    pub fn from_file(configuration_file: &str) -> Result<VenueTripConfig, RecommendationError> {
        let filepath = Path::new(configuration_file);
        let config = Config::builder()
            .add_source(File::from(filepath))
            .build()
            .map_err(|e| {
                let msg = format!("file '{configuration_file}' produced error: {e}");
                RecommendationError::InvalidUserInput(msg)
            })?;
        let engine = read_key::<EngineConfig>(&config, "engine", configuration_file)?;
        let defaults = read_key::<SelectionDefaults>(&config, "defaults", configuration_file)?;
        let rules_file = read_key::<Option<String>>(&config, "rules_file", configuration_file)?;
        log::info!("loaded settings from '{configuration_file}'");
        Ok(VenueTripConfig {
            engine,
            defaults,
            rules_file,
        })
    }

    /// settings from a file when one is given, otherwise the defaults.
    pub fn from_optional_file(
        configuration_file: Option<&String>,
    ) -> Result<VenueTripConfig, RecommendationError> {
        match configuration_file {
            Some(f) => VenueTripConfig::from_file(f),
            None => Ok(VenueTripConfig::default()),
        }
    }

    /// the configured rule table, or the embedded rules if the rule file cannot
    /// be read.
    pub fn rule_table(&self) -> Result<RuleTable, RecommendationError> {
        let path = self.rules_file.as_ref().map(Path::new);
        let table = RuleTable::from_file_or_embedded(path)?;
        Ok(table)
    }

    pub fn build_engine(&self) -> Result<RecommendationEngine, RecommendationError> {
        let rules = self.rule_table()?;
        RecommendationEngine::new(rules, self.engine.clone())
    }
}

/// read one section of the settings file, using its default when the section
/// is absent.
fn read_key<T>(config: &Config, key: &str, configuration_file: &str) -> Result<T, RecommendationError>
where
    T: DeserializeOwned + Default,
{
    match config.get::<T>(key) {
        Ok(value) => Ok(value),
        Err(ConfigError::NotFound(_)) => Ok(T::default()),
        Err(e) => {
            let msg = format!("error reading '{key}' key in '{configuration_file}': {e}");
            Err(RecommendationError::InvalidUserInput(msg))
        }
    }
}
