use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Configurable scoring weights
///
/// Defaults are the contract values; changing them breaks score
/// compatibility with stored pick history, so overrides are for
/// experimentation only.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_cuisine_weight")]
    pub cuisine: f64,
    #[serde(default = "default_taste_weight")]
    pub taste: f64,
    #[serde(default = "default_ambience_weight")]
    pub ambience: f64,
    #[serde(default = "default_meal_type_weight")]
    pub meal_type: f64,
    #[serde(default = "default_diet_weight")]
    pub diet: f64,
    #[serde(default = "default_scenario_weight")]
    pub scenario: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            cuisine: default_cuisine_weight(),
            taste: default_taste_weight(),
            ambience: default_ambience_weight(),
            meal_type: default_meal_type_weight(),
            diet: default_diet_weight(),
            scenario: default_scenario_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            cuisine: config.cuisine,
            taste: config.taste,
            ambience: config.ambience,
            meal_type: config.meal_type,
            diet: config.diet,
            scenario: config.scenario,
        }
    }
}

fn default_cuisine_weight() -> f64 { 2.0 }
fn default_taste_weight() -> f64 { 1.5 }
fn default_ambience_weight() -> f64 { 1.0 }
fn default_meal_type_weight() -> f64 { 1.0 }
fn default_diet_weight() -> f64 { 1.5 }
fn default_scenario_weight() -> f64 { 2.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with EATWHAT_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with EATWHAT_)
            // e.g., EATWHAT_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("EATWHAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("EATWHAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
