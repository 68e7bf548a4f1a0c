use crate::acquisition::{self, RawReading, StatusFlags};
use crate::bus::BusTransport;
use crate::device::DeviceProfile;
use crate::errors::DriverResult;
use crate::init::{self, InitState};

/// Facade over one BMP390-class device on an exclusively owned bus handle.
///
/// The handle must not be shared with other logical drivers while in use;
/// callers running from several tasks have to serialize access themselves.
pub struct Bmp390<B: BusTransport> {
    bus: B,
    profile: DeviceProfile,
    state: InitState,
}

impl<B: BusTransport> Bmp390<B> {
    /// Driver for the stock BMP390 register map.
    pub fn new(bus: B) -> Self {
        Self::with_profile(bus, DeviceProfile::bmp390())
    }

    /// Driver for a device-family variant described by `profile`.
    pub fn with_profile(bus: B, profile: DeviceProfile) -> Self {
        Self {
            bus,
            profile,
            state: InitState::Uninitialized,
        }
    }

    /// Bring the device from power-on to a verified, configured state.
    ///
    /// Runs the identity check, soft reset and the write-then-verify
    /// configuration sequence. A failure is terminal for this attempt; call
    /// again to start a fresh sequence.
    pub async fn initialize(&mut self) -> DriverResult<()> {
        init::run(&mut self.bus, &self.profile, &mut self.state).await
    }

    /// Snapshot of the data-readiness flags; never blocks or waits.
    pub async fn data_ready(&mut self) -> DriverResult<StatusFlags> {
        let (_, flags) = acquisition::read_status(&mut self.bus, &self.profile).await?;
        Ok(flags)
    }

    /// Read one raw pressure/temperature sample.
    ///
    /// Safe to call repeatedly; `DataNotReady` is transient and should be
    /// retried on the caller's cadence rather than treated as a failure.
    pub async fn read_raw(&mut self) -> DriverResult<RawReading> {
        acquisition::read_raw(&mut self.bus, &self.profile).await
    }

    pub fn state(&self) -> &InitState {
        &self.state
    }

    /// Release the underlying bus handle.
    pub fn into_bus(self) -> B {
        self.bus
    }
}
