//! 12-bit ADC conversions

use gardenometer_core::traits::SensorError;

/// Full-scale count of a 12-bit conversion
pub const ADC_MAX: u16 = 4096;

/// Counts from either rail treated as a floating or shorted input
pub const RAIL_MARGIN: u16 = 10;

/// ADC reference voltage in microvolts
const VREF_UV: i64 = 3_300_000;

/// Internal sensor output at 27°C, microvolts
const TEMP_SENSOR_27C_UV: i64 = 706_000;

/// Internal sensor slope, microvolts per °C (output falls as it warms)
const TEMP_SENSOR_SLOPE_UV: i64 = 1_721;

/// Reject readings pinned at a rail
///
/// A probe that is unplugged or shorted reads within [`RAIL_MARGIN`]
/// counts of 0 or full scale.
pub fn check_rails(raw: u16) -> Result<u16, SensorError> {
    if raw >= ADC_MAX {
        return Err(SensorError::OutOfRange);
    }
    if raw < RAIL_MARGIN || raw >= ADC_MAX - RAIL_MARGIN {
        return Err(SensorError::Disconnected);
    }
    Ok(raw)
}

/// Convert a raw on-chip temperature sensor count to 0.1°C units
pub fn internal_temp_x10(raw: u16) -> Result<i16, SensorError> {
    if raw >= ADC_MAX {
        return Err(SensorError::OutOfRange);
    }

    let uv = raw as i64 * VREF_UV / ADC_MAX as i64;
    let temp_x10 = 270 - (uv - TEMP_SENSOR_27C_UV) * 10 / TEMP_SENSOR_SLOPE_UV;

    i16::try_from(temp_x10).map_err(|_| SensorError::OutOfRange)
}
