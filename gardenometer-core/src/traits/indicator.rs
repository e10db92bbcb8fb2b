//! Indicator outputs (status LEDs)

/// A two-state indicator, such as the error or good LED
pub trait IndicatorOutput {
    /// Turn the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;
}
