//! Hardware abstraction traits
//!
//! These traits define the interface between the state machine and the
//! board-specific code that owns the sensors, LEDs and serial port.

pub mod indicator;
pub mod sensor;
pub mod serial;

pub use indicator::IndicatorOutput;
pub use sensor::{SensorBank, SensorError};
pub use serial::LineSource;
