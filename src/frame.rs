//! Measurement reply layout and raw field extraction.

use crate::command::{FRAME_LEN, RAW_MASK, Status};
use crate::error::Aht10Error;

/// The 6-byte reply to a measurement read.
///
/// Byte 0 is the status byte; bytes 1..6 hold two packed 20-bit fields:
///
/// ```text
/// byte:   1         2         3         4         5
///         HHHH HHHH HHHH HHHH HHHH TTTT TTTT TTTT TTTT TTTT
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawFrame(pub [u8; FRAME_LEN]);

impl RawFrame {
    /// Builds a frame from a reply slice.
    ///
    /// # Errors
    ///
    /// Returns `Aht10Error::InvalidFrameLength` unless `bytes` is exactly six
    /// bytes long. Short replies are never padded.
    pub fn from_slice<E>(bytes: &[u8]) -> Result<Self, Aht10Error<E>> {
        let data: [u8; FRAME_LEN] = bytes
            .try_into()
            .map_err(|_| Aht10Error::InvalidFrameLength(bytes.len()))?;
        Ok(RawFrame(data))
    }

    pub fn status(&self) -> u8 {
        self.0[0]
    }

    pub fn data(&self) -> &[u8] {
        &self.0[1..]
    }

    /// The sensor is still converting; the data bytes may be stale.
    pub fn is_busy(&self) -> bool {
        Status::Busy.is_set(self.status())
    }

    pub fn is_calibrated(&self) -> bool {
        Status::Calibrated.is_set(self.status())
    }

    /// All five data bytes are zero, which the sensor returns when the
    /// trigger did not land or calibration has not been loaded.
    pub fn is_blank(&self) -> bool {
        self.data().iter().all(|b| *b == 0)
    }

    pub fn decode(&self) -> RawReading {
        decode(self)
    }
}

/// Unscaled humidity and temperature fields, each 20 bits wide.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawReading {
    pub humidity: u32,
    pub temperature: u32,
}

/// Extracts both raw fields from a frame.
pub fn decode(frame: &RawFrame) -> RawReading {
    let [_, b1, b2, b3, b4, b5] = frame.0.map(u32::from);

    let humidity = ((b1 << 12) | (b2 << 4) | (b3 >> 4)) & RAW_MASK;
    let temperature = (((b3 & 0x0F) << 16) | (b4 << 8) | b5) & RAW_MASK;

    RawReading {
        humidity,
        temperature,
    }
}
