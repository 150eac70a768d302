use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::{
    config::Config,
    decode::decode,
    error::DhtError,
    pulse::extract,
    reading::{Reading, Status},
    waveform::{DEFAULT_TRACE_CAPACITY, RawTrace, acquire},
};

/// Driver for the DHT11 temperature and humidity sensor.
///
/// `N` is the capacity of the sample buffer used for one capture. It has to
/// hold the whole response plus the idle tail at the host's polling speed.
pub struct Dht11<PIN, DELAY, const N: usize = DEFAULT_TRACE_CAPACITY> {
    pin: PIN,
    delay: DELAY,
    config: Config,
}

impl<PIN, DELAY, E> Dht11<PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a new instance of the DHT11 driver with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the DHT11 data line. Must support both input and output.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    pub fn new(pin: PIN, delay: DELAY) -> Self {
        Self::with_config(pin, delay, Config::default())
    }

    /// Creates a new instance of the DHT11 driver with the given configuration.
    pub fn with_config(pin: PIN, delay: DELAY, config: Config) -> Self {
        Self::with_trace_capacity(pin, delay, config)
    }
}

impl<PIN, DELAY, E, const N: usize> Dht11<PIN, DELAY, N>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a driver whose sample buffer holds `N` polls.
    pub fn with_trace_capacity(pin: PIN, delay: DELAY, config: Config) -> Self {
        Dht11 { pin, delay, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Releases the pin and the delay provider.
    pub fn release(self) -> (PIN, DELAY) {
        (self.pin, self.delay)
    }

    /// Reads a temperature and humidity measurement, retrying on failure.
    ///
    /// Each attempt sends the start signal, captures the response and decodes
    /// it. A capture that never goes idle, a wrong pulse count and a checksum
    /// mismatch all count as a failed attempt and are followed by a delay of
    /// `min_interval_ms`.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` with [`Status::Ok`] once an attempt succeeds.
    /// * `Ok(Reading)` with [`Status::TimeoutError`] once `max_tries` attempts
    ///   failed, unless `raise_on_error` is set.
    /// * `Err(DhtError::Timeout)` once `max_tries` attempts failed and
    ///   `raise_on_error` is set.
    /// * `Err(DhtError::Pin)` as soon as the pin reports an error.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        let mut attempts: u8 = 0;

        while attempts < self.config.max_tries {
            match self.attempt() {
                Ok(reading) => {
                    debug!("reading after {} failed attempts", attempts);
                    return Ok(reading);
                }
                Err(failure) if failure.is_retryable() => {
                    attempts += 1;
                    warn!("attempt {} of {} failed", attempts, self.config.max_tries);
                    self.delay.delay_ms(self.config.min_interval_ms);
                }
                Err(e) => return Err(e),
            }
        }

        warn!("no reading after {} attempts", attempts);
        if self.config.raise_on_error {
            Err(DhtError::Timeout { attempts })
        } else {
            Ok(Reading::failed(Status::TimeoutError))
        }
    }

    /// Performs a single attempt without retrying or delaying afterwards.
    ///
    /// # Errors
    ///
    /// Returns the failure of the attempt as is.
    pub fn read_once(&mut self) -> Result<Reading, DhtError<E>> {
        self.attempt()
    }

    /// One full capture and decode.
    fn attempt(&mut self) -> Result<Reading, DhtError<E>> {
        let trace: RawTrace<N> = acquire(&mut self.pin, &mut self.delay, &self.config)?;

        let widths = extract(trace.as_slice());
        let Some(frame_widths) = widths.frame() else {
            return Err(DhtError::InvalidFrameLength(widths.len()));
        };

        let frame = decode(frame_widths);
        let [b0, b1, b2, b3, b4] = frame.bytes();
        trace!("frame {} {} {} {} {}", b0, b1, b2, b3, b4);

        frame.validate()
    }
}
