use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{CompatibilityWeights, MatchingConfig, PreferenceWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub data: DataSettings,
    #[serde(default)]
    pub feed: FeedSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// JSON array of profiles served by this instance
    pub profiles_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_feed_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_limit: default_feed_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_feed_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

/// Engine tunables; every default matches `MatchingConfig::default()`
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_visibility_base")]
    pub visibility_base: f64,
    #[serde(default = "default_fringe_multiplier")]
    pub fringe_multiplier: f64,
    #[serde(default = "default_min_visibility")]
    pub min_visibility: f64,
    #[serde(default = "default_max_visibility")]
    pub max_visibility: f64,
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    #[serde(default = "default_great_match_threshold")]
    pub great_match_threshold: f64,
    #[serde(default = "default_perfect_match_threshold")]
    pub perfect_match_threshold: f64,
    #[serde(default = "default_shuffle_window")]
    pub shuffle_window: usize,
    #[serde(default)]
    pub preference_weights: PreferenceWeightsConfig,
    #[serde(default)]
    pub compatibility_weights: CompatibilityWeightsConfig,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            visibility_base: default_visibility_base(),
            fringe_multiplier: default_fringe_multiplier(),
            min_visibility: default_min_visibility(),
            max_visibility: default_max_visibility(),
            match_threshold: default_match_threshold(),
            great_match_threshold: default_great_match_threshold(),
            perfect_match_threshold: default_perfect_match_threshold(),
            shuffle_window: default_shuffle_window(),
            preference_weights: PreferenceWeightsConfig::default(),
            compatibility_weights: CompatibilityWeightsConfig::default(),
        }
    }
}

fn default_visibility_base() -> f64 { 1.0 }
fn default_fringe_multiplier() -> f64 { 1.5 }
fn default_min_visibility() -> f64 { 0.1 }
fn default_max_visibility() -> f64 { 3.0 }
fn default_match_threshold() -> f64 { 60.0 }
fn default_great_match_threshold() -> f64 { 80.0 }
fn default_perfect_match_threshold() -> f64 { 95.0 }
fn default_shuffle_window() -> usize { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceWeightsConfig {
    #[serde(default = "default_must_have_weight")]
    pub must_have: f64,
    #[serde(default = "default_preferred_weight")]
    pub preferred: f64,
    #[serde(default = "default_acceptable_weight")]
    pub acceptable: f64,
    #[serde(default = "default_outside_weight")]
    pub outside: f64,
}

impl Default for PreferenceWeightsConfig {
    fn default() -> Self {
        Self {
            must_have: default_must_have_weight(),
            preferred: default_preferred_weight(),
            acceptable: default_acceptable_weight(),
            outside: default_outside_weight(),
        }
    }
}

fn default_must_have_weight() -> f64 { 100.0 }
fn default_preferred_weight() -> f64 { 50.0 }
fn default_acceptable_weight() -> f64 { 25.0 }
fn default_outside_weight() -> f64 { -10.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct CompatibilityWeightsConfig {
    #[serde(default = "default_preferences_weight")]
    pub preferences: f64,
    #[serde(default = "default_personality_weight")]
    pub personality: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_communication_weight")]
    pub communication: f64,
}

impl Default for CompatibilityWeightsConfig {
    fn default() -> Self {
        Self {
            preferences: default_preferences_weight(),
            personality: default_personality_weight(),
            interests: default_interests_weight(),
            communication: default_communication_weight(),
        }
    }
}

fn default_preferences_weight() -> f64 { 0.4 }
fn default_personality_weight() -> f64 { 0.3 }
fn default_interests_weight() -> f64 { 0.2 }
fn default_communication_weight() -> f64 { 0.1 }

impl MatchingSettings {
    /// Freeze the loaded tunables into the engine's configuration
    pub fn to_matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            visibility_base: self.visibility_base,
            fringe_multiplier: self.fringe_multiplier,
            min_visibility: self.min_visibility,
            max_visibility: self.max_visibility,
            preference_weights: PreferenceWeights {
                must_have: self.preference_weights.must_have,
                preferred: self.preference_weights.preferred,
                acceptable: self.preference_weights.acceptable,
                outside: self.preference_weights.outside,
            },
            compatibility_weights: CompatibilityWeights {
                preferences: self.compatibility_weights.preferences,
                personality: self.compatibility_weights.personality,
                interests: self.compatibility_weights.interests,
                communication: self.compatibility_weights.communication,
            },
            match_threshold: self.match_threshold,
            great_match_threshold: self.great_match_threshold,
            perfect_match_threshold: self.perfect_match_threshold,
            shuffle_window: self.shuffle_window,
        }
    }
}

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

impl LoggingSettings {
    /// `LOG_LEVEL` and `LOG_FORMAT` win over the loaded section
    pub fn with_env_overrides(self) -> Self {
        self.overridden(std::env::var("LOG_LEVEL").ok(), std::env::var("LOG_FORMAT").ok())
    }

    fn overridden(self, level: Option<String>, format: Option<String>) -> Self {
        Self {
            level: level.unwrap_or(self.level),
            format: format.unwrap_or(self.format),
        }
    }

    pub fn is_pretty(&self) -> bool {
        self.format.eq_ignore_ascii_case("pretty")
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
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CRYSTAL_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3500)?
            .set_default("data.profiles_path", "data/profiles.json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CRYSTAL__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CRYSTAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CRYSTAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the short-form environment variables used by deployment scripts.
///
/// `PORT` and `PROFILES_PATH` win over every other source.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }
    if let Ok(path) = env::var("PROFILES_PATH") {
        builder = builder.set_override("data.profiles_path", path)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching_settings_match_engine_defaults() {
        let settings = MatchingSettings::default();
        assert_eq!(settings.to_matching_config(), MatchingConfig::default());
    }

    #[test]
    fn test_default_feed_settings() {
        let feed = FeedSettings::default();
        assert_eq!(feed.default_limit, 20);
        assert_eq!(feed.max_limit, 100);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_logging_env_overrides() {
        let loaded = LoggingSettings {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        };
        assert!(loaded.is_pretty());

        let kept = loaded.clone().overridden(None, None);
        assert_eq!(kept.level, "warn");
        assert!(kept.is_pretty());

        let overridden = loaded.overridden(Some("debug".to_string()), Some("json".to_string()));
        assert_eq!(overridden.level, "debug");
        assert!(!overridden.is_pretty());
    }

    #[test]
    fn test_logging_section_from_file_values() {
        let settings: Settings = Config::builder()
            .set_override("server.host", "127.0.0.1")
            .unwrap()
            .set_override("server.port", 8080)
            .unwrap()
            .set_override("data.profiles_path", "p.json")
            .unwrap()
            .set_override("logging.level", "trace")
            .unwrap()
            .set_override("logging.format", "Pretty")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.logging.level, "trace");
        assert!(settings.logging.is_pretty());
        assert_eq!(settings.feed.default_limit, 20);
    }

    #[test]
    fn test_partial_matching_section() {
        let settings: MatchingSettings = Config::builder()
            .set_override("fringe_multiplier", 2.0)
            .unwrap()
            .set_override("preference_weights.outside", -20.0)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let config = settings.to_matching_config();
        assert_eq!(config.fringe_multiplier, 2.0);
        assert_eq!(config.preference_weights.outside, -20.0);
        assert_eq!(config.preference_weights.must_have, 100.0);
        assert_eq!(config.max_visibility, 3.0);
    }
}
