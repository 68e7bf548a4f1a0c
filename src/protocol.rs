use crate::bus::BusTransport;
use crate::errors::{DriverError, DriverResult};

/// Byte-level framing for single-register writes and burst reads.
pub(crate) struct RegisterLink<'b, B: BusTransport> {
    bus: &'b mut B,
}

impl<'b, B: BusTransport> RegisterLink<'b, B> {
    pub fn new(bus: &'b mut B) -> Self {
        Self { bus }
    }

    /// Write one register as the exact 2-byte frame `[register, value]`.
    ///
    /// Succeeds only if the transport reports both bytes on the wire; a
    /// partial write is a bus failure and is not retried.
    pub async fn write_register(&mut self, register: u8, value: u8) -> DriverResult<()> {
        let frame = [register, value];
        let written = self.bus.write(&frame).await?;
        if written != frame.len() {
            return Err(DriverError::ShortWrite {
                expected: frame.len(),
                written,
            });
        }
        Ok(())
    }

    /// Burst read: write the register pointer, then read `buf.len()`
    /// contiguous bytes (the device auto-increments internally).
    pub async fn read_bytes(&mut self, start_register: u8, buf: &mut [u8]) -> DriverResult<()> {
        self.bus.transact(&[start_register], buf).await?;
        Ok(())
    }

    pub async fn read_register(&mut self, register: u8) -> DriverResult<u8> {
        let mut buf = [0u8; 1];
        self.read_bytes(register, &mut buf).await?;
        Ok(buf[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::mock::MockBus;

    #[tokio::test]
    async fn write_register_sends_exactly_two_bytes() {
        let mut bus = MockBus::new();
        RegisterLink::new(&mut bus)
            .write_register(0x1B, 0x33)
            .await
            .unwrap();
        assert_eq!(bus.writes, vec![vec![0x1B, 0x33]]);
    }

    #[tokio::test]
    async fn short_write_is_a_bus_failure() {
        let mut bus = MockBus::new();
        bus.short_write_once(1);
        let err = RegisterLink::new(&mut bus)
            .write_register(0x1B, 0x33)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DriverError::ShortWrite {
                expected: 2,
                written: 1
            }
        ));
    }

    #[tokio::test]
    async fn burst_read_issues_one_pointer_transaction() {
        let mut bus = MockBus::new();
        bus.queue_read(&[0xAA, 0xBB, 0xCC]);
        let mut buf = [0u8; 3];
        RegisterLink::new(&mut bus)
            .read_bytes(0x04, &mut buf)
            .await
            .unwrap();
        assert_eq!(buf, [0xAA, 0xBB, 0xCC]);
        assert_eq!(bus.transactions, vec![(0x04, 3)]);
        assert!(bus.writes.is_empty());
    }
}
