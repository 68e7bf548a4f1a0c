use crate::bus::i2c::I2CError;
use crate::bus::BusTransport;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Scripted in-memory transport used as a spy in driver tests.
///
/// Every write frame and every transaction is recorded in order; transact
/// responses are served from a queue of fixtures. Running out of fixtures is
/// a test-authoring bug and panics.
pub(crate) struct MockBus {
    /// Every frame passed to `write`, in call order.
    pub writes: Vec<Vec<u8>>,
    /// (register pointer, read length) per `transact`, in call order.
    pub transactions: Vec<(u8, usize)>,
    reads: VecDeque<Vec<u8>>,
    short_write: Option<usize>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            transactions: Vec::new(),
            reads: VecDeque::new(),
            short_write: None,
        }
    }

    /// Queue the response for the next transaction.
    pub fn queue_read(&mut self, bytes: &[u8]) {
        self.reads.push_back(bytes.to_vec());
    }

    /// Make the next write report `count` bytes written instead of the full
    /// frame length.
    pub fn short_write_once(&mut self, count: usize) {
        self.short_write = Some(count);
    }
}

#[async_trait]
impl BusTransport for MockBus {
    async fn write(&mut self, bytes: &[u8]) -> Result<usize, I2CError> {
        self.writes.push(bytes.to_vec());
        Ok(self.short_write.take().unwrap_or(bytes.len()))
    }

    async fn transact(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), I2CError> {
        assert_eq!(write.len(), 1, "register pointer writes are one byte");
        self.transactions.push((write[0], read.len()));
        let fixture = self
            .reads
            .pop_front()
            .unwrap_or_else(|| panic!("no fixture queued for read at reg {:#04x}", write[0]));
        assert_eq!(
            fixture.len(),
            read.len(),
            "fixture length mismatch at reg {:#04x}",
            write[0]
        );
        read.copy_from_slice(&fixture);
        Ok(())
    }
}
