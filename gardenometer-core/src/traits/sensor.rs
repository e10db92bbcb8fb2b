//! Sensor traits

use core::fmt;

/// Errors that can occur while reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor not connected (reading pinned at a rail)
    Disconnected,
    /// Reading out of expected range
    OutOfRange,
    /// ADC or bus conversion failed
    ConversionError,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SensorError::Disconnected => "disconnected",
            SensorError::OutOfRange => "out_of_range",
            SensorError::ConversionError => "conversion",
        };
        f.write_str(text)
    }
}

/// All sensor channels of the monitor
///
/// Values are raw: no unit conversion happens in the core. Reads take
/// `&mut self` because ADC conversions need mutable access.
pub trait SensorBank {
    /// Raw soil moisture reading
    fn read_moisture(&mut self) -> Result<u16, SensorError>;

    /// Raw light level reading
    fn read_lux(&mut self) -> Result<u16, SensorError>;

    /// Temperature in 0.1°C units (455 = 45.5°C)
    fn read_temperature_x10(&mut self) -> Result<i16, SensorError>;
}

impl<T: SensorBank + ?Sized> SensorBank for &mut T {
    fn read_moisture(&mut self) -> Result<u16, SensorError> {
        (**self).read_moisture()
    }

    fn read_lux(&mut self) -> Result<u16, SensorError> {
        (**self).read_lux()
    }

    fn read_temperature_x10(&mut self) -> Result<i16, SensorError> {
        (**self).read_temperature_x10()
    }
}
