//! Role handlers and hardware drivers
//!
//! This crate provides concrete implementations of the traits defined
//! in gardenometer-core:
//!
//! - Status, calibration, error and config handlers
//! - The shared handler context
//! - GPIO indicator LEDs
//! - ADC conversion helpers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod context;
pub mod handlers;
pub mod indicator;
pub mod sensor;

pub use context::{GardenContext, Report, REPORT_CAPACITY};
pub use handlers::{ConfigApplier, ErrorSignal, MoistureCalibrator, StatusReporter};
pub use indicator::GpioIndicator;
