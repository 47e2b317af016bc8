//! Raw field to physical unit conversion.
//!
//! These follow section 6 of the AHT10 datasheet:
//!
//! ```text
//! RH[%] = raw / 2^20 * 100
//! T[°C] = raw / 2^20 * 200 - 50
//! ```

use crate::command::RAW_FULL_SCALE;
use crate::frame::RawReading;

/// Lowest temperature the sensor is specified for, in °C.
pub const MIN_PLAUSIBLE_CELSIUS: f64 = -40.0;

/// Highest temperature the sensor is specified for, in °C.
pub const MAX_PLAUSIBLE_CELSIUS: f64 = 85.0;

const FULL_SCALE: f64 = RAW_FULL_SCALE as f64;

/// Calibrated reading in physical units.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent, clamped to `0.0..=100.0`.
    pub relative_humidity: f64,
}

impl From<RawReading> for Reading {
    fn from(raw: RawReading) -> Self {
        Reading {
            temperature: celsius_from_raw(raw.temperature),
            relative_humidity: humidity_from_raw(raw.humidity),
        }
    }
}

/// Relative humidity in percent. Noise can push the scaled value fractionally
/// outside `0..=100`, so the result is clamped.
pub fn humidity_from_raw(raw: u32) -> f64 {
    (f64::from(raw) * 100.0 / FULL_SCALE).clamp(0.0, 100.0)
}

/// Temperature in degrees Celsius. Not clamped.
pub fn celsius_from_raw(raw: u32) -> f64 {
    f64::from(raw) * 200.0 / FULL_SCALE - 50.0
}

pub fn fahrenheit_from_celsius(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn celsius_from_fahrenheit(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// A humidity of exactly zero is what a blank frame decodes to, so it counts
/// as implausible alongside anything above 100 %.
pub fn is_plausible_humidity(humidity: f64) -> bool {
    humidity > 0.0 && humidity <= 100.0
}

pub fn is_plausible_celsius(celsius: f64) -> bool {
    (MIN_PLAUSIBLE_CELSIUS..=MAX_PLAUSIBLE_CELSIUS).contains(&celsius)
}
