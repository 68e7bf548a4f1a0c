use crate::bus::i2c::I2CError;
use thiserror::Error;

/// Error taxonomy for the acquisition driver
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("I2C communication failed: {0}")]
    Bus(#[from] I2CError),

    #[error("short register write: expected {expected} bytes on the wire, transport reported {written}")]
    ShortWrite { expected: usize, written: usize },

    #[error("unexpected chip ID: expected {expected:#04x}, got {observed:#04x}")]
    ChipIdMismatch { expected: u8, observed: u8 },

    #[error("configuration readback mismatch at '{step}' (reg {register:#04x}): wrote {written:#04x}, read back {observed:#04x}")]
    ConfigMismatch {
        step: &'static str,
        register: u8,
        written: u8,
        observed: u8,
    },

    #[error("measurement data not ready (status {status:#04x})")]
    DataNotReady { status: u8 },
}

impl DriverError {
    /// True for conditions a polling loop should retry on its next tick
    /// rather than treat as a failure.
    pub fn is_transient(&self) -> bool {
        matches!(self, DriverError::DataNotReady { .. })
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration format: {0}")]
    FormatError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type aliases for convenience
pub type DriverResult<T> = Result<T, DriverError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
