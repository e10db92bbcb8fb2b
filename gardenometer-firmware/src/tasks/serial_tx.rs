//! Serial transmit task
//!
//! Writes each report from the controller as one CRLF-terminated line.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::REPORT_CHANNEL;

const LINE_END: &[u8] = b"\r\n";

/// Serial TX task
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    loop {
        let report = REPORT_CHANNEL.receive().await;

        let result = match tx.write_all(report.as_bytes()).await {
            Ok(()) => tx.write_all(LINE_END).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => trace!("Report sent ({} bytes)", report.len()),
            Err(e) => warn!("Failed to send report: {:?}", e),
        }
    }
}
