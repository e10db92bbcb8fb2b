//! Gardenometer - Soil Monitor Firmware
//!
//! Main firmware binary for RP2040-based soil monitors. A host drives the
//! device over a line-oriented serial protocol; the device answers with
//! status, calibration, error and config reports.
//!
//! Pin fields of the serial config are advisory: they are stored and
//! echoed back, but the GPIO and ADC wiring below is fixed at build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use gardenometer_protocol::Config;

mod board;
mod channels;
mod tasks;

use board::BoardSensors;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Host link baud rate
const BAUD_RATE: u32 = 115_200;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Gardenometer firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Host link on UART0 (GP0 TX, GP1 RX)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", BAUD_RATE);

    // Default config pin fields describe this wiring; changing them over
    // serial does not re-route anything
    let defaults = Config::default();
    info!(
        "Pins: moisture={} lux={} error={} good={}",
        defaults.moisture, defaults.lux, defaults.error_indicator, defaults.good_indicator
    );

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let moisture = Channel::new_pin(p.PIN_26, Pull::None);
    let lux = Channel::new_pin(p.PIN_27, Pull::None);
    let temperature = Channel::new_temp_sensor(p.ADC_TEMP_SENSOR);
    let sensors = BoardSensors::new(adc, moisture, lux, temperature);

    let error_led = Output::new(p.PIN_16, Level::Low);
    let good_led = Output::new(p.PIN_17, Level::Low);

    info!("ADC and indicators initialized");

    spawner.spawn(unwrap!(tasks::serial_rx_task(rx)));
    spawner.spawn(unwrap!(tasks::serial_tx_task(tx)));
    spawner.spawn(unwrap!(tasks::controller_task(sensors, error_led, good_led)));

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
