//! GPIO indicator output
//!
//! Drives a status LED from any `embedded-hal` output pin.

use embedded_hal::digital::OutputPin;
use gardenometer_core::traits::IndicatorOutput;

/// GPIO indicator
///
/// The pin can be wired active-high (default) or active-low.
pub struct GpioIndicator<P> {
    pin: P,
    /// If true, indicator ON = pin LOW
    inverted: bool,
    /// Logical state as last written successfully
    on: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create a new indicator, initially off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut indicator = Self {
            pin,
            inverted,
            on: false,
        };
        indicator.set_on(false);
        indicator
    }

    /// Create an active-high indicator
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an active-low indicator
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Give back the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> IndicatorOutput for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };

        // A failed write leaves the previous logical state in place
        if result.is_ok() {
            self.on = on;
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
