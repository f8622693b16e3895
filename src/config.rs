use crate::models::{DuplicateConfig, MatchingConfig, ScoreWeights};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub duplicate: DuplicateSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_distance_meters")]
    pub max_distance_meters: f64,
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: i64,
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_distance_meters: default_max_distance_meters(),
            recency_window_days: default_recency_window_days(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

fn default_max_distance_meters() -> f64 { 50.0 }
fn default_recency_window_days() -> i64 { 7 }
fn default_similarity_threshold() -> f64 { 0.3 }

#[derive(Debug, Clone, Deserialize)]
pub struct DuplicateSettings {
    #[serde(default = "default_evidence_threshold")]
    pub evidence_threshold: f64,
    #[serde(default = "default_duplicate_threshold")]
    pub duplicate_threshold: f64,
    #[serde(default = "default_max_evidence")]
    pub max_evidence: usize,
}

impl Default for DuplicateSettings {
    fn default() -> Self {
        Self {
            evidence_threshold: default_evidence_threshold(),
            duplicate_threshold: default_duplicate_threshold(),
            max_evidence: default_max_evidence(),
        }
    }
}

fn default_evidence_threshold() -> f64 { 0.5 }
fn default_duplicate_threshold() -> f64 { 0.8 }
fn default_max_evidence() -> usize { 5 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_text_weight")]
    pub text: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            text: default_text_weight(),
        }
    }
}

fn default_location_weight() -> f64 { 0.6 }
fn default_text_weight() -> f64 { 0.4 }

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
    /// 3. Environment variables (prefixed with CIVIC_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CIVIC_)
            // e.g., CIVIC_MATCHING__MAX_DISTANCE_METERS -> matching.max_distance_meters
            .add_source(
                Environment::with_prefix("CIVIC")
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
                Environment::with_prefix("CIVIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            max_distance_meters: self.matching.max_distance_meters,
            recency_window_days: self.matching.recency_window_days,
            similarity_threshold: self.matching.similarity_threshold,
        }
    }

    pub fn duplicate_config(&self) -> DuplicateConfig {
        DuplicateConfig {
            evidence_threshold: self.duplicate.evidence_threshold,
            duplicate_threshold: self.duplicate.duplicate_threshold,
            max_evidence: self.duplicate.max_evidence,
        }
    }

    pub fn score_weights(&self) -> ScoreWeights {
        ScoreWeights {
            location: self.scoring.weights.location,
            text: self.scoring.weights.text,
        }
    }
}
