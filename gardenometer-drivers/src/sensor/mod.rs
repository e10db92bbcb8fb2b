//! Sensor conversion helpers
//!
//! Board code owns the ADC; these functions turn its raw counts into the
//! values a [`SensorBank`](gardenometer_core::traits::SensorBank) reports.

pub mod adc;

pub use adc::{check_rails, internal_temp_x10, ADC_MAX, RAIL_MARGIN};
