/// Default number of attempts made by [`crate::Dht11::read`].
pub const DEFAULT_MAX_TRIES: u8 = 10;

/// Default delay between attempts, in milliseconds.
///
/// The sensor needs about two seconds between conversions.
pub const DEFAULT_MIN_INTERVAL_MS: u32 = 2_000;

/// Default time the line is held high before the start signal, in milliseconds.
pub const DEFAULT_POWER_UP_MS: u32 = 500;

/// Default number of consecutive identical samples that mark end-of-frame.
pub const DEFAULT_IDLE_THRESHOLD: u16 = 200;

/// Driver configuration.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Attempts made before giving up.
    pub max_tries: u8,
    /// Delay after every failed attempt, in milliseconds.
    pub min_interval_ms: u32,
    /// Return [`crate::DhtError::Timeout`] instead of a sentinel reading once
    /// all attempts failed.
    pub raise_on_error: bool,
    /// High hold before the start signal, in milliseconds.
    pub power_up_ms: u32,
    /// Unchanged polls after which the capture stops.
    pub idle_threshold: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            raise_on_error: false,
            power_up_ms: DEFAULT_POWER_UP_MS,
            idle_threshold: DEFAULT_IDLE_THRESHOLD,
        }
    }

    /// Sets the number of attempts.
    pub const fn max_tries(mut self, max_tries: u8) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// Sets the delay between attempts.
    pub const fn min_interval_ms(mut self, min_interval_ms: u32) -> Self {
        self.min_interval_ms = min_interval_ms;
        self
    }

    /// Chooses between an error and a sentinel reading on timeout.
    pub const fn raise_on_error(mut self, raise_on_error: bool) -> Self {
        self.raise_on_error = raise_on_error;
        self
    }

    /// Sets the high hold before the start signal.
    pub const fn power_up_ms(mut self, power_up_ms: u32) -> Self {
        self.power_up_ms = power_up_ms;
        self
    }

    /// Sets the end-of-frame idle threshold.
    pub const fn idle_threshold(mut self, idle_threshold: u16) -> Self {
        self.idle_threshold = idle_threshold;
        self
    }
}
