/// Possible errors from the AHT10 driver.
///
/// Only bus-level problems are errors. Busy-poll exhaustion and implausible
/// readings are handled inside the driver and never surface here.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Aht10Error<E> {
    /// Error from the I2C bus (write or read).
    I2c(E),
    /// A reply of the wrong length was offered as a measurement frame.
    InvalidFrameLength(usize),
    /// The diagnostic output sink refused a write.
    Diagnostic,
}

impl<E> From<E> for Aht10Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}
