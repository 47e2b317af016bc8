//! Timing and retry configuration.

/// Delays and retry bounds used by the driver.
///
/// All delays are in milliseconds. [`Config::THOROUGH`] (the default) uses
/// conservative timings that suit slow or freshly powered modules;
/// [`Config::FAST`] trades settling margin for latency.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Send a soft reset before the initialize command.
    pub reset_on_init: bool,
    /// Wait after a soft reset.
    pub reset_delay_ms: u32,
    /// Wait after the initialize command.
    pub init_delay_ms: u32,
    /// Wait between the trigger command and the first status read.
    pub measurement_delay_ms: u32,
    /// Wait between two busy reads.
    pub poll_interval_ms: u32,
    /// Maximum number of frame reads per measurement. Never less than one.
    pub poll_attempts: u8,
    /// Re-measure once when a converted value is implausible.
    pub retry_implausible: bool,
    /// Wait before the re-measurement.
    pub retry_delay_ms: u32,
}

impl Config {
    pub const THOROUGH: Self = Self {
        reset_on_init: true,
        reset_delay_ms: 40,
        init_delay_ms: 300,
        measurement_delay_ms: 120,
        poll_interval_ms: 12,
        poll_attempts: 40,
        retry_implausible: true,
        retry_delay_ms: 100,
    };

    pub const FAST: Self = Self {
        reset_on_init: false,
        reset_delay_ms: 20,
        init_delay_ms: 40,
        measurement_delay_ms: 80,
        poll_interval_ms: 10,
        poll_attempts: 20,
        retry_implausible: true,
        retry_delay_ms: 100,
    };

    pub const fn with_reset_on_init(mut self, reset: bool) -> Self {
        self.reset_on_init = reset;
        self
    }

    pub const fn with_poll(mut self, attempts: u8, interval_ms: u32) -> Self {
        self.poll_attempts = attempts;
        self.poll_interval_ms = interval_ms;
        self
    }

    pub const fn with_measurement_delay(mut self, delay_ms: u32) -> Self {
        self.measurement_delay_ms = delay_ms;
        self
    }

    pub const fn with_retry(mut self, enabled: bool) -> Self {
        self.retry_implausible = enabled;
        self
    }

    /// Effective read bound, clamped so a measurement always reads at least once.
    pub(crate) fn read_bound(&self) -> u8 {
        self.poll_attempts.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::THOROUGH
    }
}
