//! Handler context
//!
//! Everything the role handlers share: the sensors, the active config,
//! the calibration baselines, the current time and the outgoing report.

use gardenometer_core::config::{Calibration, Config};
use heapless::String;

/// Maximum report length in bytes
///
/// Fits the longest config reply: a full error log with its overflow
/// marker followed by every field at `i32::MIN`.
pub const REPORT_CAPACITY: usize = 512;

/// Text sent back over serial after a dispatch
pub type Report = String<REPORT_CAPACITY>;

/// Context passed to every handler
pub struct GardenContext<S> {
    /// Sensor channels
    pub sensors: S,
    /// Active configuration
    pub config: Config,
    /// Moisture calibration baselines
    pub calibration: Calibration,
    /// Report produced by the last dispatch
    pub report: Report,
    /// Milliseconds since boot, advanced by the host loop
    now_ms: u64,
    /// Time of the last status report
    last_status_ms: Option<u64>,
}

impl<S> GardenContext<S> {
    /// Create a context with default config and empty calibration
    pub fn new(sensors: S) -> Self {
        Self {
            sensors,
            config: Config::default(),
            calibration: Calibration::new(),
            report: String::new(),
            now_ms: 0,
            last_status_ms: None,
        }
    }

    /// Current time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advance the clock; time never runs backwards
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Interval between status reports
    ///
    /// Negative wait times from the config count as zero.
    pub fn status_interval_ms(&self) -> u64 {
        self.config.wait_time.max(0) as u64
    }

    /// Check if a status report is due
    pub fn status_due(&self) -> bool {
        match self.last_status_ms {
            None => true,
            Some(last) => self.now_ms.saturating_sub(last) >= self.status_interval_ms(),
        }
    }

    /// Record that a status report was produced now
    pub fn mark_status(&mut self) {
        self.last_status_ms = Some(self.now_ms);
    }

    /// Take the pending report, leaving it empty
    pub fn take_report(&mut self) -> Report {
        core::mem::take(&mut self.report)
    }
}
