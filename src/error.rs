use core::fmt;

/// Possible errors from the DHT11 driver.
///
/// Every variant except [`DhtError::Pin`] and [`DhtError::Timeout`] describes
/// a single failed attempt. The retry loop in [`crate::Dht11::read`] treats
/// those as recoverable.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The line never went idle before the sample buffer filled up.
    AcquisitionTimeout,
    /// The capture did not contain exactly 40 data pulses.
    InvalidFrameLength(usize),
    /// Checksum did not match the received data.
    ChecksumMismatch {
        /// Checksum computed from the four data bytes.
        expected: u8,
        /// Checksum byte transmitted by the sensor.
        actual: u8,
    },
    /// Every attempt failed.
    Timeout {
        /// Number of attempts made.
        attempts: u8,
    },
    /// Error from the GPIO pin (input/output).
    Pin(E),
}

impl<E> DhtError<E> {
    /// Returns `true` if another attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::AcquisitionTimeout | Self::InvalidFrameLength(_) | Self::ChecksumMismatch { .. }
        )
    }
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AcquisitionTimeout => write!(f, "data line never went idle"),
            Self::InvalidFrameLength(count) => {
                write!(f, "expected 40 data pulses, captured {count}")
            }
            Self::ChecksumMismatch { expected, actual } => write!(
                f,
                "checksum validation failed: expected {expected:#04x}, received {actual:#04x}"
            ),
            Self::Timeout { attempts } => write!(f, "no valid reading after {attempts} attempts"),
            Self::Pin(err) => write!(f, "pin error: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for DhtError<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classes() {
        assert!(DhtError::<()>::AcquisitionTimeout.is_retryable());
        assert!(DhtError::<()>::InvalidFrameLength(12).is_retryable());
        assert!(
            DhtError::<()>::ChecksumMismatch {
                expected: 1,
                actual: 2
            }
            .is_retryable()
        );
        assert!(!DhtError::<()>::Timeout { attempts: 10 }.is_retryable());
        assert!(!DhtError::Pin(()).is_retryable());
    }

    #[test]
    fn test_display() {
        let err = DhtError::<()>::ChecksumMismatch {
            expected: 0x46,
            actual: 0x47,
        };
        assert_eq!(
            err.to_string(),
            "checksum validation failed: expected 0x46, received 0x47"
        );
        assert_eq!(
            DhtError::<()>::InvalidFrameLength(39).to_string(),
            "expected 40 data pulses, captured 39"
        );
    }
}
