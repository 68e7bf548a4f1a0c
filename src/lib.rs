// Public modules
pub mod acquisition;
pub mod bus;
pub mod config;
pub mod device;
pub mod driver;
pub mod errors;
pub mod init;

mod protocol;

// Re-export commonly used types
pub use acquisition::{RawReading, StatusFlags};
pub use config::{load_config, AppConfig};
pub use device::{DeviceProfile, RegisterStep, BMP390_I2C_ADDRESS};
pub use driver::Bmp390;
pub use errors::{ConfigError, DriverError, DriverResult};
pub use init::InitState;
