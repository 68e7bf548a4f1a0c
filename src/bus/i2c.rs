#[cfg(target_os = "linux")]
use i2cdev::core::I2CDevice;
#[cfg(target_os = "linux")]
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};

use crate::bus::BusTransport;
use async_trait::async_trait;

/// I2C bus error type - platform specific
#[cfg(target_os = "linux")]
pub type I2CError = LinuxI2CError;

#[cfg(not(target_os = "linux"))]
#[derive(Debug)]
pub struct I2CError(String);

#[cfg(not(target_os = "linux"))]
impl std::fmt::Display for I2CError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "I2C not supported on this platform: {}", self.0)
    }
}

#[cfg(not(target_os = "linux"))]
impl std::error::Error for I2CError {}

/// I2C bus handle bound to one device address
#[cfg(target_os = "linux")]
pub struct I2CBus {
    device: LinuxI2CDevice,
}

#[cfg(not(target_os = "linux"))]
pub struct I2CBus {
    _phantom: std::marker::PhantomData<()>,
}

#[cfg(target_os = "linux")]
impl I2CBus {
    /// Open the bus at `path` with the slave address already selected.
    pub fn open(path: &str, address: u8) -> Result<Self, I2CError> {
        let device = LinuxI2CDevice::new(path, address as u16)?;
        Ok(Self { device })
    }
}

#[cfg(target_os = "linux")]
#[async_trait]
impl BusTransport for I2CBus {
    async fn write(&mut self, bytes: &[u8]) -> Result<usize, I2CError> {
        // The kernel transfers the whole buffer or fails the ioctl.
        self.device.write(bytes)?;
        Ok(bytes.len())
    }

    async fn transact(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), I2CError> {
        self.device.write(write)?;
        self.device.read(read)?;
        Ok(())
    }
}

#[cfg(not(target_os = "linux"))]
impl I2CBus {
    pub fn open(_path: &str, _address: u8) -> Result<Self, I2CError> {
        Err(I2CError(
            "I2C is only supported on Linux".to_string(),
        ))
    }
}

#[cfg(not(target_os = "linux"))]
#[async_trait]
impl BusTransport for I2CBus {
    async fn write(&mut self, _bytes: &[u8]) -> Result<usize, I2CError> {
        Err(I2CError("I2C is only supported on Linux".to_string()))
    }

    async fn transact(&mut self, _write: &[u8], _read: &mut [u8]) -> Result<(), I2CError> {
        Err(I2CError("I2C is only supported on Linux".to_string()))
    }
}
