use crate::bus::BusTransport;
use crate::device::DeviceProfile;
use crate::errors::{DriverError, DriverResult};
use crate::protocol::RegisterLink;

/// Data-readiness flags decoded from one status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags {
    pub pressure_data_ready: bool,
    pub temperature_data_ready: bool,
}

impl StatusFlags {
    pub(crate) fn decode(status: u8, profile: &DeviceProfile) -> Self {
        Self {
            pressure_data_ready: status & profile.pressure_ready_mask != 0,
            temperature_data_ready: status & profile.temperature_ready_mask != 0,
        }
    }

    pub fn all_ready(&self) -> bool {
        self.pressure_data_ready && self.temperature_data_ready
    }
}

/// One uncalibrated sample, fresh per read and never stored by the driver.
///
/// Both channels are 24-bit unsigned magnitudes held zero-extended in `i32`,
/// so values are always in `0..=0xFF_FFFF` and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReading {
    pub pressure_raw: i32,
    pub temperature_raw: i32,
}

/// Reconstruct a 24-bit little-endian magnitude from `[b0, b1, b2]`.
///
/// Raw counts are unsigned, so the decode zero-extends into the container;
/// bit 23 must never be sign-extended, and any future widening has to keep
/// the top bits zero-filled.
pub(crate) fn decode_raw(bytes: [u8; 3]) -> i32 {
    (u32::from(bytes[2]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[0])) as i32
}

/// Non-blocking snapshot of the readiness flags; the caller's loop provides
/// the polling cadence. Returns the raw status byte alongside the decoded
/// flags so failures can report it.
pub(crate) async fn read_status<B: BusTransport>(
    bus: &mut B,
    profile: &DeviceProfile,
) -> DriverResult<(u8, StatusFlags)> {
    let mut link = RegisterLink::new(bus);
    let status = link.read_register(profile.status_register).await?;
    Ok((status, StatusFlags::decode(status, profile)))
}

/// Read one raw pressure/temperature sample.
///
/// Unless both readiness flags are set this fails with `DataNotReady` and
/// issues no data reads at all; the condition is transient and the caller
/// should simply try again later.
pub(crate) async fn read_raw<B: BusTransport>(
    bus: &mut B,
    profile: &DeviceProfile,
) -> DriverResult<RawReading> {
    let (status, flags) = read_status(bus, profile).await?;
    if !flags.all_ready() {
        return Err(DriverError::DataNotReady { status });
    }

    let mut link = RegisterLink::new(bus);
    let mut press = [0u8; 3];
    link.read_bytes(profile.pressure_data_register, &mut press)
        .await?;
    let mut temp = [0u8; 3];
    link.read_bytes(profile.temperature_data_register, &mut temp)
        .await?;

    Ok(RawReading {
        pressure_raw: decode_raw(press),
        temperature_raw: decode_raw(temp),
    })
}
