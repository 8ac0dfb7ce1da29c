//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Fixed comparison values used when a weight class has no data for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAverages {
    /// League takedown success rate, as a fraction.
    #[serde(default = "default_takedown_success_rate")]
    pub takedown_success_rate: f64,

    /// Share of positional events spent in a dominant position (percent).
    #[serde(default = "default_positional_dominance")]
    pub positional_dominance: f64,

    #[serde(default = "default_cage_center_pct")]
    pub cage_center_pct: f64,

    #[serde(default = "default_cage_pushing_pct")]
    pub cage_pushing_pct: f64,

    #[serde(default = "default_cage_pushed_back_pct")]
    pub cage_pushed_back_pct: f64,

    #[serde(default = "default_clinch_striking_accuracy")]
    pub clinch_striking_accuracy: f64,

    #[serde(default = "default_ground_striking_accuracy")]
    pub ground_striking_accuracy: f64,

    #[serde(default = "default_ground_strikes_per_round")]
    pub ground_strikes_per_round: f64,

    /// Below this many tracked fights aggression is not scored.
    #[serde(default = "default_aggression_min_fights")]
    pub aggression_min_fights: u32,
}

fn default_takedown_success_rate() -> f64 {
    0.38
}

fn default_positional_dominance() -> f64 {
    50.0
}

fn default_cage_center_pct() -> f64 {
    50.0
}

fn default_cage_pushing_pct() -> f64 {
    33.0
}

fn default_cage_pushed_back_pct() -> f64 {
    17.0
}

fn default_clinch_striking_accuracy() -> f64 {
    40.0
}

fn default_ground_striking_accuracy() -> f64 {
    40.0
}

fn default_ground_strikes_per_round() -> f64 {
    2.0
}

fn default_aggression_min_fights() -> u32 {
    5
}

impl Default for ReferenceAverages {
    fn default() -> Self {
        Self {
            takedown_success_rate: default_takedown_success_rate(),
            positional_dominance: default_positional_dominance(),
            cage_center_pct: default_cage_center_pct(),
            cage_pushing_pct: default_cage_pushing_pct(),
            cage_pushed_back_pct: default_cage_pushed_back_pct(),
            clinch_striking_accuracy: default_clinch_striking_accuracy(),
            ground_striking_accuracy: default_ground_striking_accuracy(),
            ground_strikes_per_round: default_ground_strikes_per_round(),
            aggression_min_fights: default_aggression_min_fights(),
        }
    }
}

impl ReferenceAverages {
    /// Reject values that would make a comparison divide by zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("takedown_success_rate", self.takedown_success_rate),
            ("positional_dominance", self.positional_dominance),
            ("cage_center_pct", self.cage_center_pct),
            ("cage_pushing_pct", self.cage_pushing_pct),
            ("cage_pushed_back_pct", self.cage_pushed_back_pct),
            ("clinch_striking_accuracy", self.clinch_striking_accuracy),
            ("ground_striking_accuracy", self.ground_striking_accuracy),
            ("ground_strikes_per_round", self.ground_strikes_per_round),
        ];

        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "reference.{} must be greater than 0",
                    name
                )));
            }
        }

        if self.takedown_success_rate > 1.0 {
            return Err(ConfigError::ValidationError(
                "reference.takedown_success_rate is a fraction and must be at most 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub reference: ReferenceAverages,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            server: ServerConfig::default(),
            reference: ReferenceAverages::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        self.reference.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.reference.aggression_min_fights, 5);
    }

    #[test]
    fn test_reference_defaults() {
        let reference = ReferenceAverages::default();

        assert!((reference.takedown_success_rate - 0.38).abs() < 1e-9);
        assert_eq!(reference.positional_dominance, 50.0);
        assert_eq!(reference.cage_center_pct, 50.0);
        assert_eq!(reference.cage_pushing_pct, 33.0);
        assert_eq!(reference.cage_pushed_back_pct, 17.0);
        assert_eq!(reference.clinch_striking_accuracy, 40.0);
        assert_eq!(reference.ground_striking_accuracy, 40.0);
        assert_eq!(reference.ground_strikes_per_round, 2.0);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_reference() {
        let mut config = AppConfig::default();
        config.reference.ground_strikes_per_round = 0.0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ground_strikes_per_round"));
    }

    #[test]
    fn test_config_validation_nan_reference() {
        let mut config = AppConfig::default();
        config.reference.clinch_striking_accuracy = f64::NAN;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_takedown_rate_fraction() {
        let mut config = AppConfig::default();
        config.reference.takedown_success_rate = 38.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            data_dir = "/srv/fightstats"

            [reference]
            takedown_success_rate = 0.41
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/fightstats"));
        assert!((config.reference.takedown_success_rate - 0.41).abs() < 1e-9);
        assert_eq!(config.reference.cage_pushing_pct, 33.0);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n[server]\nport = 9090").unwrap();

        let config = AppConfig::from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 0").unwrap();

        let result = AppConfig::from_file(&file.path().to_path_buf());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.reference, parsed.reference);
    }
}
