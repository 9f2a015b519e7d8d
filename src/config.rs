use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::FactorWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default)]
    pub min_score: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_score: 0,
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Ranked-result TTL; the product default is a 15 minute window
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl_secs() -> u64 { 900 }
fn default_max_entries() -> u64 { 1000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Per-factor weight overrides. Defaults mirror `FactorWeights::default()`
/// and sum to 100; the matcher rejects any table that does not.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_budget_weight")]
    pub budget: u32,
    #[serde(default = "default_recovery_core_weight")]
    pub recovery_core: u32,
    #[serde(default = "default_lifestyle_core_weight")]
    pub lifestyle_core: u32,
    #[serde(default = "default_recovery_environment_weight")]
    pub recovery_environment: u32,
    #[serde(default = "default_gender_preferences_weight")]
    pub gender_preferences: u32,
    #[serde(default = "default_schedule_weight")]
    pub schedule: u32,
    #[serde(default = "default_communication_weight")]
    pub communication: u32,
    #[serde(default = "default_housing_safety_weight")]
    pub housing_safety: u32,
    #[serde(default = "default_shared_interests_weight")]
    pub shared_interests: u32,
    #[serde(default = "default_timing_weight")]
    pub timing: u32,
    #[serde(default = "default_goals_weight")]
    pub goals: u32,
    #[serde(default = "default_extended_weight")]
    pub extended: u32,
}

impl WeightsConfig {
    pub fn to_factor_weights(&self) -> FactorWeights {
        FactorWeights {
            location: self.location,
            budget: self.budget,
            recovery_core: self.recovery_core,
            lifestyle_core: self.lifestyle_core,
            recovery_environment: self.recovery_environment,
            gender_preferences: self.gender_preferences,
            schedule: self.schedule,
            communication: self.communication,
            housing_safety: self.housing_safety,
            shared_interests: self.shared_interests,
            timing: self.timing,
            goals: self.goals,
            extended: self.extended,
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            budget: default_budget_weight(),
            recovery_core: default_recovery_core_weight(),
            lifestyle_core: default_lifestyle_core_weight(),
            recovery_environment: default_recovery_environment_weight(),
            gender_preferences: default_gender_preferences_weight(),
            schedule: default_schedule_weight(),
            communication: default_communication_weight(),
            housing_safety: default_housing_safety_weight(),
            shared_interests: default_shared_interests_weight(),
            timing: default_timing_weight(),
            goals: default_goals_weight(),
            extended: default_extended_weight(),
        }
    }
}

fn default_location_weight() -> u32 { 20 }
fn default_budget_weight() -> u32 { 18 }
fn default_recovery_core_weight() -> u32 { 18 }
fn default_lifestyle_core_weight() -> u32 { 14 }
fn default_recovery_environment_weight() -> u32 { 6 }
fn default_gender_preferences_weight() -> u32 { 6 }
fn default_schedule_weight() -> u32 { 5 }
fn default_communication_weight() -> u32 { 4 }
fn default_housing_safety_weight() -> u32 { 4 }
fn default_shared_interests_weight() -> u32 { 2 }
fn default_timing_weight() -> u32 { 1 }
fn default_goals_weight() -> u32 { 1 }
fn default_extended_weight() -> u32 { 1 }

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
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with HAVEN__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., HAVEN__MATCHING__DEFAULT_LIMIT -> matching.default_limit
            .add_source(
                Environment::with_prefix("HAVEN")
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
                Environment::with_prefix("HAVEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_factor_table() {
        let weights = WeightsConfig::default().to_factor_weights();
        assert_eq!(weights, FactorWeights::default());
        assert_eq!(weights.total(), 100);
    }

    #[test]
    fn test_default_sections() {
        let settings = Settings::default();
        assert_eq!(settings.matching.default_limit, 20);
        assert_eq!(settings.cache.ttl_secs, 900);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [matching]
            default_limit = 50

            [scoring.weights]
            location = 30
            budget = 8
            "#,
        )
        .unwrap();

        assert_eq!(settings.matching.default_limit, 50);
        assert_eq!(settings.scoring.weights.location, 30);
        // Unspecified weights keep their defaults
        assert_eq!(settings.scoring.weights.recovery_core, 18);
        assert_eq!(settings.cache.max_entries, 1000);
    }
}
