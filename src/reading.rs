use core::fmt;

/// Value stored in temperature and humidity when no reading was taken.
pub const SENTINEL: f32 = -1.0;

/// Outcome of a read.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    /// Temperature and humidity are valid.
    Ok = 0,
    /// The frame failed its checksum.
    ChecksumError = 1,
    /// No attempt produced a valid frame.
    TimeoutError = 2,
}

impl Status {
    /// Numeric status code.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for Status {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Ok),
            1 => Ok(Self::ChecksumError),
            2 => Ok(Self::TimeoutError),
            other => Err(other),
        }
    }
}

/// Reading returned by the DHT11 sensor.
///
/// Temperature and humidity only carry meaning when [`Reading::is_valid`]
/// returns `true`; otherwise both hold [`SENTINEL`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    status: Status,
    temperature: f32,
    humidity: f32,
}

impl Reading {
    /// A successful reading.
    pub const fn ok(temperature: f32, humidity: f32) -> Self {
        Self {
            status: Status::Ok,
            temperature,
            humidity,
        }
    }

    /// A failed reading carrying sentinel values.
    pub const fn failed(status: Status) -> Self {
        Self {
            status,
            temperature: SENTINEL,
            humidity: SENTINEL,
        }
    }

    /// The status of this reading.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Temperature in degrees Celsius.
    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Relative humidity in percent.
    pub const fn humidity(&self) -> f32 {
        self.humidity
    }

    /// Returns `true` if the status is [`Status::Ok`].
    pub fn is_valid(&self) -> bool {
        self.status == Status::Ok
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reading(status={}, temperature={}, humidity={})",
            self.status.code(),
            self.temperature,
            self.humidity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(u8::from(Status::ChecksumError), 1);
        assert_eq!(Status::try_from(2), Ok(Status::TimeoutError));
        assert_eq!(Status::try_from(7), Err(7));
    }

    #[test]
    fn test_failed_reading_uses_sentinels() {
        let reading = Reading::failed(Status::TimeoutError);
        assert!(!reading.is_valid());
        assert_eq!(reading.temperature(), SENTINEL);
        assert_eq!(reading.humidity(), SENTINEL);
        assert_eq!(
            reading.to_string(),
            "Reading(status=2, temperature=-1, humidity=-1)"
        );
    }

    #[test]
    fn test_ok_reading() {
        let reading = Reading::ok(23.5, 40.0);
        assert!(reading.is_valid());
        assert_eq!(reading.status(), Status::Ok);
        assert_eq!(reading.temperature(), 23.5);
        assert_eq!(reading.humidity(), 40.0);
    }
}
