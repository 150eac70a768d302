use crate::{error::DhtError, reading::Reading};

/// The 5-byte payload sent by the sensor.
///
/// Byte order is humidity integral, humidity decimal, temperature integral,
/// temperature decimal, checksum.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame([u8; 5]);

impl Frame {
    /// Wraps raw frame bytes.
    pub const fn new(bytes: [u8; 5]) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub const fn bytes(&self) -> [u8; 5] {
        self.0
    }

    /// The transmitted checksum byte.
    pub const fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// The low 8 bits of the sum of the four data bytes.
    pub fn expected_checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// Checks the checksum and converts the frame into a reading.
    ///
    /// The top bit of the temperature decimal byte is the sign; the
    /// remaining bits hold tenths of a degree.
    ///
    /// # Errors
    ///
    /// Returns [`DhtError::ChecksumMismatch`] if the transmitted checksum is wrong.
    pub fn validate<E>(&self) -> Result<Reading, DhtError<E>> {
        let expected = self.expected_checksum();
        if expected != self.checksum() {
            return Err(DhtError::ChecksumMismatch {
                expected,
                actual: self.checksum(),
            });
        }

        let [hum_int, hum_dec, temp_int, temp_dec, _] = self.0;

        let humidity = f32::from(hum_int) + f32::from(hum_dec) / 10.0;

        let mut temperature = f32::from(temp_int) + f32::from(temp_dec & 0x7F) / 10.0;
        if temp_dec & 0x80 != 0 {
            temperature = -temperature;
        }

        Ok(Reading::ok(temperature, humidity))
    }
}
