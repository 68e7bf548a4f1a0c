use std::time::Duration;

// Register addresses for the BMP390
const CHIP_ID: u8 = 0x00;
const STATUS: u8 = 0x03;
const PRESS_DATA: u8 = 0x04;
const TEMP_DATA: u8 = 0x07;
const PWR_CTRL: u8 = 0x1B;
const OSR: u8 = 0x1C;
const ODR: u8 = 0x1D;
const CONFIG: u8 = 0x1F;
const CMD: u8 = 0x7E;

const BMP390_CHIP_ID: u8 = 0x60;
const SOFT_RESET: u8 = 0xB6;

/// Fixed 7-bit I2C address of the BMP390.
pub const BMP390_I2C_ADDRESS: u8 = 0x77;

/// One step of the datasheet-defined configuration sequence.
#[derive(Debug, Clone, Copy)]
pub struct RegisterStep {
    pub register: u8,
    pub value: u8,
    pub label: &'static str,
}

/// Register map and configuration table for one device family.
///
/// Every device-specific constant lives here so a family variant can be
/// swapped in without touching the initialization state machine. Settle
/// durations are part of the table so tests can zero them.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    pub chip_id_register: u8,
    pub expected_chip_id: u8,
    pub command_register: u8,
    pub soft_reset_command: u8,
    /// Pause after soft reset while the device runs its power-up sequence.
    pub reset_settle: Duration,
    /// Pause after each configuration write before the value is read back.
    pub step_settle: Duration,
    pub status_register: u8,
    pub pressure_ready_mask: u8,
    pub temperature_ready_mask: u8,
    pub pressure_data_register: u8,
    pub temperature_data_register: u8,
    pub config_sequence: &'static [RegisterStep],
}

// Power control must come first: the measurement enables have to be live
// before the oversampling/rate/filter settings take effect.
const BMP390_CONFIG_SEQUENCE: &[RegisterStep] = &[
    RegisterStep {
        register: PWR_CTRL,
        value: 0x33, // pressure + temperature enabled, normal mode
        label: "power control",
    },
    RegisterStep {
        register: OSR,
        value: 0x27, // x8 pressure, x2 temperature oversampling
        label: "oversampling",
    },
    RegisterStep {
        register: ODR,
        value: 0x02, // 50 Hz output data rate
        label: "output data rate",
    },
    RegisterStep {
        register: CONFIG,
        value: 0x04, // IIR filter coefficient 3
        label: "IIR filter",
    },
];

impl DeviceProfile {
    /// Table for the BMP390 barometer.
    pub fn bmp390() -> Self {
        Self {
            chip_id_register: CHIP_ID,
            expected_chip_id: BMP390_CHIP_ID,
            command_register: CMD,
            soft_reset_command: SOFT_RESET,
            reset_settle: Duration::from_millis(20),
            step_settle: Duration::from_millis(10),
            status_register: STATUS,
            pressure_ready_mask: 0x08,
            temperature_ready_mask: 0x04,
            pressure_data_register: PRESS_DATA,
            temperature_data_register: TEMP_DATA,
            config_sequence: BMP390_CONFIG_SEQUENCE,
        }
    }
}

#[cfg(test)]
impl DeviceProfile {
    /// Same table with the settle pauses removed so tests run instantly.
    pub(crate) fn bmp390_for_test() -> Self {
        let mut profile = Self::bmp390();
        profile.reset_settle = Duration::ZERO;
        profile.step_settle = Duration::ZERO;
        profile
    }
}
