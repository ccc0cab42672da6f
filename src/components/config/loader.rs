use std::path::Path;

use thiserror::Error;

use super::VehicleConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid vehicle configuration: {0}")]
    ValidationError(String),
}

impl VehicleConfig {
    /// Loads and validates a vehicle configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    /// Parses and validates a vehicle configuration from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: VehicleConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::super::RotorLayout;
    use super::*;

    #[test]
    fn yaml_round_trip() {
        let config = VehicleConfig::phantom();
        let raw = serde_yaml::to_string(&config).unwrap();
        let parsed = VehicleConfig::from_yaml_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn invalid_yaml_config_is_rejected() {
        let mut config = VehicleConfig::phantom();
        config.layout = RotorLayout::Offsets { rotors: Vec::new() };
        let raw = serde_yaml::to_string(&config).unwrap();
        assert!(matches!(
            VehicleConfig::from_yaml_str(&raw),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
