use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use koikoi_core::scoring::context::Weather;
use koikoi_core::scoring::rules::RuleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RulePreset {
    Standard,
    Hachi,
}

/// Game configuration loaded from YAML. Either a named preset or a full
/// custom rule block, never both.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    #[serde(default)]
    pub preset: Option<RulePreset>,
    #[serde(default)]
    pub rules: Option<RuleConfig>,
    #[serde(default)]
    pub rounds: Option<u32>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub weather: Option<Weather>,
}

impl GameConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let config: GameConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        config.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.preset.is_some() && self.rules.is_some() {
            return Err(ValidationError::InvalidField {
                field: "rules".to_string(),
                message: "preset and rules are mutually exclusive".to_string(),
            });
        }
        if let Some(rounds) = self.rounds {
            if rounds == 0 {
                return Err(ValidationError::InvalidField {
                    field: "rounds".to_string(),
                    message: "number of rounds must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The effective rule configuration: custom rules win, then the preset,
    /// then standard koi-koi.
    pub fn rule_config(&self) -> RuleConfig {
        if let Some(rules) = self.rules {
            return rules;
        }
        match self.preset {
            Some(RulePreset::Hachi) => RuleConfig::hachi(),
            Some(RulePreset::Standard) | None => RuleConfig::koikoi(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid config at {path}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::{GameConfig, RulePreset, ValidationError};
    use std::io::Write;

    #[test]
    fn minimal_config_defaults_to_standard_rules() {
        let config: GameConfig = serde_yaml::from_str("{}").unwrap();
        config.validate().unwrap();
        assert_eq!(
            config.rule_config(),
            koikoi_core::scoring::rules::RuleConfig::koikoi()
        );
    }

    #[test]
    fn hachi_preset_is_selected_by_name() {
        let config: GameConfig = serde_yaml::from_str("preset: hachi\nrounds: 3\n").unwrap();
        config.validate().unwrap();
        assert_eq!(config.preset, Some(RulePreset::Hachi));
        assert_eq!(
            config.rule_config(),
            koikoi_core::scoring::rules::RuleConfig::hachi()
        );
    }

    #[test]
    fn custom_rule_block_overrides_everything() {
        let yaml = "rules:\n  bright:\n    allowMultiple: true\n";
        let config: GameConfig = serde_yaml::from_str(yaml).unwrap();
        config.validate().unwrap();
        assert!(config.rule_config().bright.allow_multiple);
    }

    #[test]
    fn preset_plus_rules_is_rejected() {
        let yaml = "preset: standard\nrules:\n  bright:\n    allowMultiple: true\n";
        let config: GameConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidField { .. })
        ));
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let config: GameConfig = serde_yaml::from_str("rounds: 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "preset: hachi\nseed: 7").unwrap();
        let config = GameConfig::from_path(file.path()).unwrap();
        assert_eq!(config.preset, Some(RulePreset::Hachi));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn unknown_fields_fail_parsing() {
        let result: Result<GameConfig, _> = serde_yaml::from_str("presett: hachi\n");
        assert!(result.is_err());
    }
}
