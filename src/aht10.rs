use core::fmt::Write;

use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::command::{Command, DEFAULT_ADDRESS, FRAME_LEN};
use crate::config::Config;
use crate::convert::{
    Reading, celsius_from_raw, fahrenheit_from_celsius, humidity_from_raw, is_plausible_celsius,
    is_plausible_humidity,
};
use crate::derived;
use crate::error::Aht10Error;
use crate::frame::{RawFrame, RawReading};

/// Initialization state of the sensor the driver last talked to.
///
/// The driver keeps one handle, keyed by address. Addressing a different
/// sensor replaces it and runs the init sequence again.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceHandle {
    address: u8,
    initialized: bool,
}

impl DeviceHandle {
    fn new(address: u8) -> Self {
        DeviceHandle {
            address,
            initialized: false,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn is_ready_for(&self, address: u8) -> bool {
        self.initialized && self.address == address
    }
}

/// Driver for the AHT10 temperature and humidity sensor.
pub struct Aht10<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
    device: DeviceHandle,
}

impl<I2C, D, E> Aht10<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Creates a new instance of the AHT10 driver with [`Config::default`].
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C bus the sensor is attached to.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::default())
    }

    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        Aht10 {
            i2c,
            delay,
            config,
            device: DeviceHandle::new(DEFAULT_ADDRESS),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn device(&self) -> &DeviceHandle {
        &self.device
    }

    /// Destroys the driver and returns the bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Initializes the sensor at `address` unless it already is.
    ///
    /// Every measuring method calls this first, so calling it explicitly is
    /// only needed to pay the startup delay up front.
    pub fn initialize(&mut self, address: u8) -> Result<(), Aht10Error<E>> {
        self.ensure_initialized(address)
    }

    /// Resets the sensor and runs the full init sequence, whatever its state.
    pub fn soft_reset(&mut self, address: u8) -> Result<(), Aht10Error<E>> {
        debug!("soft reset of sensor at {}", address);
        self.send(address, Command::SoftReset)?;
        self.delay.delay_ms(self.config.reset_delay_ms);
        self.device = DeviceHandle::new(address);
        self.ensure_initialized(address)
    }

    /// Relative humidity in percent.
    ///
    /// Re-measures once if the first value is implausible (see
    /// [`Config::retry_implausible`]).
    pub fn humidity_percent(&mut self, address: u8) -> Result<f64, Aht10Error<E>> {
        self.measure_value(
            address,
            |raw| humidity_from_raw(raw.humidity),
            is_plausible_humidity,
        )
    }

    /// Temperature in degrees Celsius, with the same one-retry rule as
    /// [`Aht10::humidity_percent`].
    pub fn temperature_celsius(&mut self, address: u8) -> Result<f64, Aht10Error<E>> {
        self.measure_value(
            address,
            |raw| celsius_from_raw(raw.temperature),
            is_plausible_celsius,
        )
    }

    pub fn temperature_fahrenheit(&mut self, address: u8) -> Result<f64, Aht10Error<E>> {
        self.temperature_celsius(address).map(fahrenheit_from_celsius)
    }

    /// Dew point in degrees Celsius.
    ///
    /// Takes a temperature and then a humidity measurement. Returns
    /// `Ok(None)` if the humidity is still zero after its retry.
    pub fn dew_point_celsius(&mut self, address: u8) -> Result<Option<f64>, Aht10Error<E>> {
        let temperature = self.temperature_celsius(address)?;
        let humidity = self.humidity_percent(address)?;
        Ok(derived::dew_point_celsius(temperature, humidity))
    }

    /// Heat index in degrees Celsius, from a temperature and then a humidity
    /// measurement.
    pub fn heat_index_celsius(&mut self, address: u8) -> Result<f64, Aht10Error<E>> {
        let temperature = self.temperature_celsius(address)?;
        let humidity = self.humidity_percent(address)?;
        Ok(derived::heat_index_celsius(temperature, humidity))
    }

    /// Reads humidity and temperature from a single measurement.
    ///
    /// Cheaper than calling both single-value methods, but never retries.
    pub fn read_both(&mut self, address: u8) -> Result<Reading, Aht10Error<E>> {
        self.ensure_initialized(address)?;
        let frame = self.measure(address)?;
        Ok(Reading::from(frame.decode()))
    }

    /// Takes one measurement and writes the raw reply and its decoding to `out`.
    ///
    /// Does not initialize the sensor, so the dump shows exactly what the
    /// device returns in its current state.
    ///
    /// ```text
    /// RAW(6): 24 101 180 37 205 38
    /// rawHum=416578 rawTemp=380198 -> H=39.72...% T=22.51...C
    /// ```
    pub fn dump_raw<W: Write>(
        &mut self,
        address: u8,
        out: &mut W,
    ) -> Result<RawReading, Aht10Error<E>> {
        let frame = self.measure(address)?;
        write_dump(&frame, out).map_err(|_| Aht10Error::Diagnostic)?;
        Ok(frame.decode())
    }

    /// Triggers a measurement and busy-polls for the reply.
    ///
    /// Reads at most [`Config::poll_attempts`] frames. If the sensor still
    /// reports busy after the last one, that frame is returned anyway.
    /// Does not initialize the sensor.
    pub fn measure(&mut self, address: u8) -> Result<RawFrame, Aht10Error<E>> {
        self.send(address, Command::TriggerMeasurement)?;
        self.delay.delay_ms(self.config.measurement_delay_ms);

        let bound = self.config.read_bound();
        let mut frame = self.read_frame(address)?;
        let mut reads = 1;

        while frame.is_busy() && reads < bound {
            trace!("sensor busy after {} reads", reads);
            self.delay.delay_ms(self.config.poll_interval_ms);
            frame = self.read_frame(address)?;
            reads += 1;
        }

        if frame.is_busy() {
            warn!("sensor still busy after {} reads, using last frame", reads);
        }
        if frame.is_blank() {
            warn!("blank measurement frame from sensor at {}", address);
        }
        Ok(frame)
    }

    fn ensure_initialized(&mut self, address: u8) -> Result<(), Aht10Error<E>> {
        if self.device.is_ready_for(address) {
            return Ok(());
        }
        if self.device.address != address {
            self.device = DeviceHandle::new(address);
        }

        debug!("initializing sensor at {}", address);
        if self.config.reset_on_init {
            self.send(address, Command::SoftReset)?;
            self.delay.delay_ms(self.config.reset_delay_ms);
        }
        self.send(address, Command::Initialize)?;
        self.delay.delay_ms(self.config.init_delay_ms);

        self.device.initialized = true;
        Ok(())
    }

    /// Measures, converts, and re-measures once after a settle delay when
    /// the value falls outside the plausible envelope.
    fn measure_value<C, P>(
        &mut self,
        address: u8,
        convert: C,
        plausible: P,
    ) -> Result<f64, Aht10Error<E>>
    where
        C: Fn(RawReading) -> f64,
        P: Fn(f64) -> bool,
    {
        self.ensure_initialized(address)?;

        let value = convert(self.measure(address)?.decode());
        if plausible(value) || !self.config.retry_implausible {
            return Ok(value);
        }

        debug!("implausible reading {}, measuring again", value);
        self.delay.delay_ms(self.config.retry_delay_ms);
        Ok(convert(self.measure(address)?.decode()))
    }

    fn send(&mut self, address: u8, command: Command) -> Result<(), Aht10Error<E>> {
        self.i2c.write(address, command.bytes())?;
        Ok(())
    }

    fn read_frame(&mut self, address: u8) -> Result<RawFrame, Aht10Error<E>> {
        let mut data = [0; FRAME_LEN];
        self.i2c.read(address, &mut data)?;
        Ok(RawFrame(data))
    }
}

fn write_dump<W: Write>(frame: &RawFrame, out: &mut W) -> core::fmt::Result {
    write!(out, "RAW({}):", FRAME_LEN)?;
    for byte in frame.0 {
        write!(out, " {}", byte)?;
    }
    writeln!(out)?;

    let raw = frame.decode();
    let reading = Reading::from(raw);
    writeln!(
        out,
        "rawHum={} rawTemp={} -> H={}% T={}C",
        raw.humidity, raw.temperature, reading.relative_humidity, reading.temperature
    )
}
