use crate::device::BMP390_I2C_ADDRESS;
use crate::errors::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::fs;

/// Root configuration struct expecting a `[sensor]` TOML table
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub sensor: SensorEntry,
}

/// The one sensor attachment this process drives
#[derive(Debug, Deserialize)]
pub struct SensorEntry {
    /// I2C device path, e.g. "/dev/i2c-1"
    pub bus: String,
    /// 7-bit device address
    #[serde(default = "default_address")]
    pub address: u8,
    /// Acquisition loop polling frequency in Hz
    pub frequency: Option<u32>,
}

fn default_address() -> u8 {
    BMP390_I2C_ADDRESS
}

/// Loads config from TOML file
pub fn load_config(path: &str) -> ConfigResult<AppConfig> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::LoadError {
        path: path.to_string(),
        source,
    })?;
    let parsed: AppConfig = toml::from_str(&content)?;
    validate(&parsed)?;
    Ok(parsed)
}

fn validate(config: &AppConfig) -> ConfigResult<()> {
    if config.sensor.address > 0x7F {
        return Err(ConfigError::InvalidValue {
            field: "sensor.address".to_string(),
            reason: "must be a 7-bit address".to_string(),
        });
    }
    if config.sensor.frequency == Some(0) {
        return Err(ConfigError::InvalidValue {
            field: "sensor.frequency".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_defaults_the_address() {
        let config: AppConfig = toml::from_str(
            r#"
            [sensor]
            bus = "/dev/i2c-1"
            "#,
        )
        .unwrap();
        validate(&config).unwrap();
        assert_eq!(config.sensor.address, 0x77);
        assert_eq!(config.sensor.frequency, None);
    }

    #[test]
    fn wide_address_is_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [sensor]
            bus = "/dev/i2c-1"
            address = 200
            "#,
        )
        .unwrap();
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "sensor.address"));
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [sensor]
            bus = "/dev/i2c-1"
            frequency = 0
            "#,
        )
        .unwrap();
        let err = validate(&config).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { field, .. } if field == "sensor.frequency")
        );
    }
}
