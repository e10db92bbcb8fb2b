//! Moisture calibration
//!
//! Each `cal:` captures the next moisture baseline (air, then water) from
//! a fresh reading and reports it. The machine then returns to status
//! reporting.

use core::fmt::{self, Write};

use gardenometer_core::config::{Calibration, CalibrationStep};
use gardenometer_core::state::{GardenState, StateHandler, StateMachine};
use gardenometer_core::traits::{SensorBank, SensorError};

use crate::context::{GardenContext, Report};

/// Two-step air/water calibrator
#[derive(Debug, Default)]
pub struct MoistureCalibrator;

impl MoistureCalibrator {
    /// Create a new calibrator
    pub const fn new() -> Self {
        Self
    }
}

impl<S: SensorBank> StateHandler<GardenContext<S>> for MoistureCalibrator {
    fn handle(&mut self, machine: &mut StateMachine, ctx: &mut GardenContext<S>) {
        let reading = ctx.sensors.read_moisture();
        // Truncated if the report is already full
        let _ = write_capture(&mut ctx.report, &mut ctx.calibration, reading);

        machine.set_state(GardenState::StatusCall);
    }
}

fn write_capture(
    report: &mut Report,
    calibration: &mut Calibration,
    reading: Result<u16, SensorError>,
) -> fmt::Result {
    match reading {
        Ok(raw) => match calibration.capture(raw) {
            CalibrationStep::Water => write!(report, "cal:water={}", raw),
            _ => write!(report, "cal:air={}", raw),
        },
        Err(e) => write!(report, "cal:err:{}", e),
    }
}
