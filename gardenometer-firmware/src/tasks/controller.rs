//! Controller task
//!
//! Owns the dispatcher and the handler context. On every tick, and
//! whenever a line is queued, it takes at most one line, runs the
//! handler for the current state and forwards any report to the TX task.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Instant, Ticker};

use gardenometer_core::state::{Dispatcher, GardenState, Role};
use gardenometer_core::traits::LineSource;
use gardenometer_drivers::{
    ConfigApplier, ErrorSignal, GardenContext, GpioIndicator, MoistureCalibrator, StatusReporter,
};
use gardenometer_protocol::Line;

use crate::board::BoardSensors;
use crate::channels::{LINE_CHANNEL, REPORT_CHANNEL};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 50;

type Led = GpioIndicator<Output<'static>>;

/// Lines queued by the RX task
struct QueuedLines;

impl LineSource for QueuedLines {
    fn next_line(&mut self) -> Option<Line> {
        LINE_CHANNEL.try_receive().ok()
    }
}

/// Controller task - main dispatch loop
#[embassy_executor::task]
pub async fn controller_task(
    sensors: BoardSensors,
    error_led: Output<'static>,
    good_led: Output<'static>,
) {
    info!("Controller task started");

    let mut dispatcher = Dispatcher::new(
        StatusReporter::new(),
        MoistureCalibrator::new(),
        ErrorSignal::new(Led::new_active_high(error_led), Led::new_active_high(good_led)),
        ConfigApplier::new(),
    );
    let mut ctx = GardenContext::new(sensors);
    let mut lines = QueuedLines;

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut last_state = GardenState::None;

    loop {
        // Run on every tick, and right away when a line arrives
        match select(LINE_CHANNEL.ready_to_receive(), ticker.next()).await {
            Either::First(()) => trace!("Line ready"),
            Either::Second(()) => {}
        }
        ctx.advance_to(Instant::now().as_millis());

        let role = dispatcher.step(&mut lines, &mut ctx);

        if role == Some(Role::Config) {
            let errors = dispatcher.config_handler().last_errors();
            if !errors.is_empty() {
                warn!("Config payload had {} bad fields", errors.len() + errors.dropped() as usize);
            }
        }

        let state = dispatcher.state();
        if state != last_state {
            debug!("State: {:?} -> {:?}", last_state, state);
            last_state = state;
        }

        if !ctx.report.is_empty() {
            REPORT_CHANNEL.send(ctx.take_report()).await;
        }
    }
}
