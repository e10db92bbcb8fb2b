//! Configuration types
//!
//! The serial [`Config`] record is defined by the protocol crate and
//! re-exported here alongside the calibration baselines.

pub mod calibration;

pub use calibration::{Calibration, CalibrationStep};
pub use gardenometer_protocol::{Config, ConfigField};
