//! Role handlers
//!
//! One handler per dispatcher role. Each writes a single report line
//! into the context and, except for status, returns the machine to
//! `StatusCall` when done.

pub mod calibration;
pub mod config;
pub mod error;
pub mod status;

pub use calibration::MoistureCalibrator;
pub use config::ConfigApplier;
pub use error::ErrorSignal;
pub use status::StatusReporter;
