//! AHT10 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the AHT10 I2C temperature
//! and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Bounded busy-polling and a single re-measurement of implausible values
//! - Dew point and heat index from the calibrated reading
//! - Optional logging support via `defmt` or `log`
//!
//! # Example
//!
//! ```no_run
//! # use embedded_hal_mock::eh1::{delay::NoopDelay, i2c::Mock};
//! # let i2c = Mock::new(&[]);
//! # let delay = NoopDelay;
//! use aht10_sensor::{Aht10, DEFAULT_ADDRESS};
//!
//! let mut aht = Aht10::new(i2c, delay);
//! let reading = aht.read_both(DEFAULT_ADDRESS).unwrap();
//! let dew = reading.dew_point();
//! ```
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for bus access
//! - [`DelayNs`] for timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs through `defmt`
//! - `log`: Logs through the `log` facade (mutually exclusive with `defmt`)
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod logging;

pub mod aht10;
pub mod command;
pub mod config;
pub mod convert;
pub mod derived;
pub mod error;
pub mod frame;

pub use aht10::{Aht10, DeviceHandle};
pub use command::DEFAULT_ADDRESS;
pub use config::Config;
pub use convert::Reading;
pub use derived::MagnusCoefficients;
pub use error::Aht10Error;
pub use frame::{RawFrame, RawReading};
