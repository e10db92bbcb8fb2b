//! Inter-task communication channels
//!
//! Lines flow from the serial RX task to the controller; reports flow
//! from the controller to the serial TX task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use gardenometer_drivers::Report;
use gardenometer_protocol::Line;

/// Channel capacity for received lines
const LINE_CHANNEL_SIZE: usize = 4;

/// Channel capacity for outgoing reports
const REPORT_CHANNEL_SIZE: usize = 4;

/// Complete lines from the serial port
pub static LINE_CHANNEL: Channel<CriticalSectionRawMutex, Line, LINE_CHANNEL_SIZE> =
    Channel::new();

/// Reports to send back over serial
pub static REPORT_CHANNEL: Channel<CriticalSectionRawMutex, Report, REPORT_CHANNEL_SIZE> =
    Channel::new();
