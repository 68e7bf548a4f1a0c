pub mod i2c;
#[cfg(test)]
pub(crate) mod mock;

use crate::bus::i2c::I2CError;
use async_trait::async_trait;

/// Raw register-bus transport the driver runs over.
///
/// Implementations bind the bus path and the 7-bit device address when the
/// handle is opened; the driver then owns the handle exclusively for the
/// session. Calls are blocking request/response with no timeout layer of
/// their own.
#[async_trait]
pub trait BusTransport: Send {
    /// Write raw bytes, returning the count the transport reports written.
    async fn write(&mut self, bytes: &[u8]) -> Result<usize, I2CError>;

    /// Combined transaction: write a register pointer, then read `read.len()`
    /// contiguous bytes starting at that register.
    async fn transact(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), I2CError>;
}
