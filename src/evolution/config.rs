//! Configuration file loading with environment overrides
//!
//! Settings are read from a TOML file, then environment variables override
//! individual keys. Required keys are the generation size and the maximum run
//! duration; anything missing or malformed is a fatal configuration error and
//! the run never starts.
//!
//! ```toml
//! individuals_per_generation = 100   # alias: nbIndividusParGeneration
//! max_duration_minutes = 5           # alias: dureeExecution
//! stagnation_rule = "consecutive_decline"
//! parallel_threshold = 1000
//! retain_history = false
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::options::EvolutionOptions;
use crate::{
    error::{GeneticError, Result, ResultExt},
    population::StagnationRule,
};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "GENETIC_CONFIG_PATH";
/// Overrides `individuals_per_generation`.
pub const INDIVIDUALS_VAR: &str = "GENETIC_INDIVIDUALS_PER_GENERATION";
/// Overrides `max_duration_minutes`.
pub const DURATION_VAR: &str = "GENETIC_MAX_DURATION_MINUTES";
/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "genetic.toml";

/// Raw settings as found in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneticConfig {
    #[serde(alias = "nbIndividusParGeneration")]
    pub individuals_per_generation: Option<i64>,
    #[serde(alias = "dureeExecution")]
    pub max_duration_minutes: Option<i64>,
    pub stagnation_rule: Option<StagnationRule>,
    pub parallel_threshold: Option<usize>,
    pub retain_history: Option<bool>,
}

impl GeneticConfig {
    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads the configuration file, applies environment overrides and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be found or read, is not valid TOML,
    /// an override is not numeric, or a required setting is missing or not
    /// positive.
    pub fn load(path: Option<&Path>) -> Result<EvolutionOptions> {
        let path = find_config_file(path)?;
        debug!(path = %path.display(), "Loading configuration");

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_overrides(env::vars())?;
        config.into_options()
    }

    /// Applies `GENETIC_*` overrides from `vars`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if an override is not an integer.
    pub fn apply_overrides<V>(&mut self, vars: V) -> Result<()>
    where
        V: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                INDIVIDUALS_VAR => {
                    self.individuals_per_generation = Some(parse_integer(&key, &value)?)
                }
                DURATION_VAR => self.max_duration_minutes = Some(parse_integer(&key, &value)?),
                _ => {}
            }
        }
        Ok(())
    }

    /// Validates the settings and turns them into run options.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if a required setting is missing
    /// or not positive.
    pub fn into_options(self) -> Result<EvolutionOptions> {
        let individuals = required_positive(
            self.individuals_per_generation,
            "individuals_per_generation",
        )?;
        let minutes = required_positive(self.max_duration_minutes, "max_duration_minutes")?;

        let mut builder = EvolutionOptions::builder()
            .individuals_per_generation(individuals as usize)
            .max_duration(Duration::from_secs((minutes as u64).saturating_mul(60)));
        if let Some(rule) = self.stagnation_rule {
            builder = builder.stagnation_rule(rule);
        }
        if let Some(threshold) = self.parallel_threshold {
            builder = builder.parallel_threshold(threshold);
        }
        if let Some(retain) = self.retain_history {
            builder = builder.retain_history(retain);
        }
        builder.build()
    }
}

/// Resolves the configuration file location.
///
/// Search order: the explicit `path`, then `GENETIC_CONFIG_PATH`, then
/// `./genetic.toml`.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` if the resolved file does not exist.
pub fn find_config_file(path: Option<&Path>) -> Result<PathBuf> {
    let candidate = match path {
        Some(path) => path.to_path_buf(),
        None => env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE)),
    };

    if candidate.exists() {
        Ok(candidate)
    } else {
        Err(GeneticError::Configuration(format!(
            "Configuration file not found: {} (set {} to choose another location)",
            candidate.display(),
            CONFIG_PATH_VAR
        )))
    }
}

fn parse_integer(key: &str, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        GeneticError::Configuration(format!("{} must be an integer, got '{}'", key, value))
    })
}

fn required_positive(value: Option<i64>, key: &str) -> Result<i64> {
    match value {
        None => Err(GeneticError::Configuration(format!("Missing setting: {}", key))),
        Some(v) if v <= 0 => Err(GeneticError::Configuration(format!(
            "{} must be positive, got {}",
            key, v
        ))),
        Some(v) => Ok(v),
    }
}
