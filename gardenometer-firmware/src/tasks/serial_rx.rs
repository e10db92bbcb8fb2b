//! Serial receive task
//!
//! Assembles UART bytes into lines and queues them for the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use gardenometer_protocol::LineAssembler;

use crate::channels::LINE_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Serial RX task
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut assembler = LineAssembler::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match assembler.feed(byte) {
                        Ok(Some(line)) => {
                            debug!("Line: {}", line.as_str());
                            // Drop rather than stall the UART
                            if LINE_CHANNEL.try_send(line).is_err() {
                                warn!("Line channel full, dropping line");
                            }
                        }
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Line error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
