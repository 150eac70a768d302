//! Start signal and raw waveform capture.
//!
//! The capture loop does not read a clock. Each iteration samples the line
//! once, so pulse widths are measured in polls and the time base is whatever
//! the host's polling speed happens to be.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
};

use crate::{config::Config, error::DhtError};

/// Binary line level.
pub type Level = PinState;

/// Default capacity of a [`RawTrace`], in samples.
pub const DEFAULT_TRACE_CAPACITY: usize = 8192;

/// High time after power-up that precedes the start signal, in milliseconds.
const START_SIGNAL_HIGH_MS: u32 = 50;
/// Host start signal (low), in milliseconds.
const START_SIGNAL_LOW_MS: u32 = 20;

/// Sampled line levels, one per poll.
#[derive(Clone, Debug, Default)]
pub struct RawTrace<const N: usize> {
    samples: heapless::Vec<Level, N>,
}

impl<const N: usize> RawTrace<N> {
    /// Creates an empty trace.
    pub const fn new() -> Self {
        Self {
            samples: heapless::Vec::new(),
        }
    }

    /// Appends a sample, handing it back when the trace is full.
    pub fn push(&mut self, level: Level) -> Result<(), Level> {
        self.samples.push(level)
    }

    /// The captured samples in order.
    pub fn as_slice(&self) -> &[Level] {
        &self.samples
    }

    /// Number of captured samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Powers the line up and sends the start signal, then releases the line.
///
/// On an open-drain pin, driving high releases the line to the pull-up, which
/// hands control to the sensor.
pub fn request<PIN, DELAY, E>(
    pin: &mut PIN,
    delay: &mut DELAY,
    config: &Config,
) -> Result<(), DhtError<E>>
where
    PIN: OutputPin<Error = E>,
    DELAY: DelayNs,
{
    pin.set_high()?;
    delay.delay_ms(config.power_up_ms);

    pin.set_high()?;
    delay.delay_ms(START_SIGNAL_HIGH_MS);
    pin.set_low()?;
    delay.delay_ms(START_SIGNAL_LOW_MS);

    pin.set_high()?;
    Ok(())
}

/// Busy-polls the line until it has not changed for `idle_threshold` polls.
///
/// # Errors
///
/// Returns [`DhtError::AcquisitionTimeout`] if the trace fills up before the
/// line goes idle.
pub fn sample<PIN, E, const N: usize>(
    pin: &mut PIN,
    idle_threshold: u16,
) -> Result<RawTrace<N>, DhtError<E>>
where
    PIN: InputPin<Error = E>,
{
    let mut trace = RawTrace::new();
    let mut last = None;
    let mut unchanged: u16 = 0;

    while unchanged < idle_threshold {
        let level = Level::from(pin.is_high()?);
        trace
            .push(level)
            .map_err(|_| DhtError::AcquisitionTimeout)?;

        if last != Some(level) {
            unchanged = 0;
            last = Some(level);
        }
        unchanged += 1;
    }

    trace!("captured {} samples", trace.len());
    Ok(trace)
}

/// Runs the start signal and captures the response.
pub fn acquire<PIN, DELAY, E, const N: usize>(
    pin: &mut PIN,
    delay: &mut DELAY,
    config: &Config,
) -> Result<RawTrace<N>, DhtError<E>>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    request(pin, delay, config)?;
    sample(pin, config.idle_threshold)
}
