use crate::bus::BusTransport;
use crate::device::DeviceProfile;
use crate::errors::{DriverError, DriverResult};
use crate::protocol::RegisterLink;
use tracing::{debug, info};

/// Progress of the power-on initialization sequence.
///
/// Transitions are forward-only and `Ready`/`Failed` are terminal: there is
/// no retry or rollback, a failure at any step leaves the session unusable
/// until a fresh `initialize` call starts the sequence over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    IdentityChecked,
    Reset,
    Configuring(usize),
    Ready,
    Failed(String),
}

impl InitState {
    pub fn is_ready(&self) -> bool {
        matches!(self, InitState::Ready)
    }
}

/// Drive the device through identification, soft reset and the verified
/// configuration sequence. `state` tracks progress and ends in `Ready` or
/// `Failed`; after any error the remaining steps are never attempted.
pub(crate) async fn run<B: BusTransport>(
    bus: &mut B,
    profile: &DeviceProfile,
    state: &mut InitState,
) -> DriverResult<()> {
    *state = InitState::Uninitialized;
    match sequence(bus, profile, state).await {
        Ok(()) => {
            *state = InitState::Ready;
            info!("sensor configured and ready");
            Ok(())
        }
        Err(err) => {
            *state = InitState::Failed(err.to_string());
            Err(err)
        }
    }
}

async fn sequence<B: BusTransport>(
    bus: &mut B,
    profile: &DeviceProfile,
    state: &mut InitState,
) -> DriverResult<()> {
    let mut link = RegisterLink::new(bus);

    // Identity check before anything is written to the device.
    let observed = link.read_register(profile.chip_id_register).await?;
    if observed != profile.expected_chip_id {
        return Err(DriverError::ChipIdMismatch {
            expected: profile.expected_chip_id,
            observed,
        });
    }
    *state = InitState::IdentityChecked;
    info!("chip ID verified: {:#04x}", observed);

    // Soft reset, then wait out the device's internal power-up sequence.
    // The reset itself has no readback.
    link.write_register(profile.command_register, profile.soft_reset_command)
        .await?;
    tokio::time::sleep(profile.reset_settle).await;
    *state = InitState::Reset;

    for (index, step) in profile.config_sequence.iter().enumerate() {
        *state = InitState::Configuring(index);
        link.write_register(step.register, step.value).await?;
        // The device needs a moment to latch the setting before readback.
        tokio::time::sleep(profile.step_settle).await;
        let observed = link.read_register(step.register).await?;
        if observed != step.value {
            return Err(DriverError::ConfigMismatch {
                step: step.label,
                register: step.register,
                written: step.value,
                observed,
            });
        }
        debug!(
            "{} configured ({:#04x} = {:#04x})",
            step.label, step.register, step.value
        );
    }

    Ok(())
}
