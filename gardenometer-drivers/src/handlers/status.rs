//! Status reporting
//!
//! Reads every sensor channel and reports the raw values, at most once
//! per configured wait time. The machine stays in `StatusCall` so
//! reports keep coming on every due tick.

use core::fmt::{self, Display, Write};

use gardenometer_core::state::{StateHandler, StateMachine};
use gardenometer_core::traits::SensorBank;

use crate::context::{GardenContext, Report};

/// Periodic status reporter
#[derive(Debug, Default)]
pub struct StatusReporter {
    sent: u32,
}

impl StatusReporter {
    /// Create a new reporter
    pub const fn new() -> Self {
        Self { sent: 0 }
    }

    /// Number of reports produced since boot
    pub fn reports_sent(&self) -> u32 {
        self.sent
    }
}

impl<S: SensorBank> StateHandler<GardenContext<S>> for StatusReporter {
    fn handle(&mut self, _machine: &mut StateMachine, ctx: &mut GardenContext<S>) {
        if !ctx.status_due() {
            return;
        }

        let moisture = ctx.sensors.read_moisture();
        let lux = ctx.sensors.read_lux();
        let temperature = ctx.sensors.read_temperature_x10();

        // Truncated if the report is already full
        let _ = write_status(&mut ctx.report, moisture, lux, temperature);

        ctx.mark_status();
        self.sent = self.sent.wrapping_add(1);
    }
}

fn write_status<A, B, C, E>(
    report: &mut Report,
    moisture: Result<A, E>,
    lux: Result<B, E>,
    temperature: Result<C, E>,
) -> fmt::Result
where
    A: Display,
    B: Display,
    C: Display,
    E: Display,
{
    report.write_str("status:")?;
    write_reading(report, "moisture", moisture)?;
    write_reading(report, "lux", lux)?;
    write_reading(report, "temperature", temperature)
}

fn write_reading<T: Display, E: Display>(
    report: &mut Report,
    name: &str,
    reading: Result<T, E>,
) -> fmt::Result {
    match reading {
        Ok(value) => write!(report, "{}={};", name, value),
        Err(e) => write!(report, "{}=err:{};", name, e),
    }
}
