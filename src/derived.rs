//! Secondary quantities derived from a calibrated reading.
//!
//! Pure functions, no bus access.

use crate::convert::{Reading, celsius_from_fahrenheit, fahrenheit_from_celsius};

/// Coefficients `a` and `b` (°C) of the Magnus approximation.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnusCoefficients {
    pub a: f64,
    pub b: f64,
}

impl MagnusCoefficients {
    /// Sonntag (1990), valid -45..60 °C. Used by [`dew_point_celsius`].
    pub const SONNTAG: Self = Self { a: 17.62, b: 243.12 };
    /// The classic Magnus-Tetens pair, valid 0..60 °C.
    pub const TETENS: Self = Self { a: 17.27, b: 237.7 };
}

/// Dew point in °C from temperature (°C) and relative humidity (%).
///
/// Returns `None` when `relative_humidity <= 0`, where the logarithm is
/// undefined.
pub fn dew_point_celsius(temperature: f64, relative_humidity: f64) -> Option<f64> {
    dew_point_with(temperature, relative_humidity, MagnusCoefficients::SONNTAG)
}

/// [`dew_point_celsius`] with an explicit coefficient set.
pub fn dew_point_with(
    temperature: f64,
    relative_humidity: f64,
    coeffs: MagnusCoefficients,
) -> Option<f64> {
    if relative_humidity <= 0.0 {
        return None;
    }
    let MagnusCoefficients { a, b } = coeffs;
    let gamma = (a * temperature) / (b + temperature) + libm::log(relative_humidity / 100.0);
    Some((b * gamma) / (a - gamma))
}

/// NOAA (Rothfusz/Steadman) heat index in °C.
///
/// Below 80 °F the simple Steadman average is used. At and above 80 °F the
/// full regression applies, with one of the two humidity adjustments where
/// their ranges match.
pub fn heat_index_celsius(temperature: f64, relative_humidity: f64) -> f64 {
    let t = fahrenheit_from_celsius(temperature);
    let h = relative_humidity;

    if t < 80.0 {
        let hi = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + h * 0.094);
        return celsius_from_fahrenheit(hi);
    }

    let mut hi = -42.379 + 2.04901523 * t + 10.14333127 * h
        - 0.22475541 * t * h
        - 0.00683783 * t * t
        - 0.05481717 * h * h
        + 0.00122874 * t * t * h
        + 0.00085282 * t * h * h
        - 0.00000199 * t * t * h * h;

    if h < 13.0 && t <= 112.0 {
        hi -= ((13.0 - h) / 4.0) * libm::sqrt((17.0 - libm::fabs(t - 95.0)) / 17.0);
    } else if h > 85.0 && t <= 87.0 {
        hi += ((h - 85.0) / 10.0) * ((87.0 - t) / 5.0);
    }

    celsius_from_fahrenheit(hi)
}

impl Reading {
    pub fn dew_point(&self) -> Option<f64> {
        dew_point_celsius(self.temperature, self.relative_humidity)
    }

    pub fn heat_index(&self) -> f64 {
        heat_index_celsius(self.temperature, self.relative_humidity)
    }
}
