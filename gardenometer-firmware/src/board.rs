//! Board sensor wiring
//!
//! Moisture probe on GP26 (ADC0), light sensor on GP27 (ADC1) and the
//! RP2040's on-chip temperature sensor, all read with blocking one-shot
//! conversions.

use embassy_rp::adc::{Adc, Blocking, Channel};

use gardenometer_core::traits::{SensorBank, SensorError};
use gardenometer_drivers::sensor::{check_rails, internal_temp_x10};

/// ADC channels of the board
pub struct BoardSensors {
    adc: Adc<'static, Blocking>,
    moisture: Channel<'static>,
    lux: Channel<'static>,
    temperature: Channel<'static>,
}

impl BoardSensors {
    pub fn new(
        adc: Adc<'static, Blocking>,
        moisture: Channel<'static>,
        lux: Channel<'static>,
        temperature: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            moisture,
            lux,
            temperature,
        }
    }
}

impl SensorBank for BoardSensors {
    fn read_moisture(&mut self) -> Result<u16, SensorError> {
        let raw = self
            .adc
            .blocking_read(&mut self.moisture)
            .map_err(|_| SensorError::ConversionError)?;
        check_rails(raw)
    }

    fn read_lux(&mut self) -> Result<u16, SensorError> {
        let raw = self
            .adc
            .blocking_read(&mut self.lux)
            .map_err(|_| SensorError::ConversionError)?;
        check_rails(raw)
    }

    fn read_temperature_x10(&mut self) -> Result<i16, SensorError> {
        let raw = self
            .adc
            .blocking_read(&mut self.temperature)
            .map_err(|_| SensorError::ConversionError)?;
        internal_temp_x10(raw)
    }
}
