//! Bus-level protocol constants for the AHT10.

/// Factory I2C address of the AHT10 (0x38).
pub const DEFAULT_ADDRESS: u8 = 0b0011_1000;

/// Length of a measurement reply: one status byte followed by five data bytes.
pub const FRAME_LEN: usize = 6;

/// Full scale of a 20-bit raw field, `2^20`.
pub const RAW_FULL_SCALE: u32 = 1 << 20;

/// Mask keeping the low 20 bits of a decoded field.
pub const RAW_MASK: u32 = RAW_FULL_SCALE - 1;

/// Commands understood by the sensor.
///
/// Initialize and trigger each take two fixed parameter bytes; see
/// [`Command::bytes`] for the full sequence written to the bus.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Restart the sensor into its power-on state. Takes up to 20 ms.
    SoftReset = 0xBA,
    /// Load calibration coefficients and enter normal mode.
    Initialize = 0xE1,
    /// Start a humidity and temperature conversion.
    TriggerMeasurement = 0xAC,
}

impl Command {
    /// Bytes written to the bus for this command, parameters included.
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Command::SoftReset => &[0xBA],
            Command::Initialize => &[0xE1, 0x08, 0x00],
            Command::TriggerMeasurement => &[0xAC, 0x33, 0x00],
        }
    }
}

/// Bits of the status byte (reply byte 0).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    /// Set while a conversion is still running.
    Busy = 0b1000_0000,
    /// Set once calibration coefficients have been loaded.
    Calibrated = 0b0000_1000,
}

impl Status {
    /// Returns `true` if this bit is set in `status`.
    pub const fn is_set(self, status: u8) -> bool {
        status & self as u8 != 0
    }
}
