//! DHT11 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 temperature
//! and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! Instead of timing each bit against a fixed microsecond table, the driver
//! busy-polls the data line into a raw trace, measures every high pulse in
//! polls and splits the 40 pulses at the midpoint between the shortest and
//! the longest one. The decoder therefore does not depend on how fast the
//! host polls.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Retries with a configurable delay, returning either a sentinel reading
//!   or an error once all attempts failed
//! - Designed for `no_std` environments
//! - Optional logging support via `defmt` or `log`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access (open-drain data line)
//! - [`DelayNs`] for the start signal and the delay between attempts
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs through `defmt`
//! - `log`: Logs through the `log` facade
//!
//! # Example
//!
//! ```ignore
//! let mut dht = Dht11::with_config(pin, delay, Config::new().max_tries(5));
//! let reading = dht.read()?;
//! if reading.is_valid() {
//!     // reading.temperature(), reading.humidity()
//! }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[macro_use]
mod fmt;

pub mod config;
pub mod decode;
pub mod dht11;
pub mod error;
pub mod frame;
pub mod pulse;
pub mod reading;
pub mod waveform;

pub use config::Config;
pub use dht11::Dht11;
pub use error::DhtError;
pub use frame::Frame;
pub use pulse::PulseWidths;
pub use reading::{Reading, Status};
pub use waveform::{Level, RawTrace};
