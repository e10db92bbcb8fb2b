//! Error signalling
//!
//! Serves both `Error` and `ClearError`: the error LED mirrors the fault
//! and the good LED its inverse.

use core::fmt::Write;

use gardenometer_core::state::{GardenState, StateHandler, StateMachine};
use gardenometer_core::traits::IndicatorOutput;

use crate::context::GardenContext;

/// Error/good indicator pair
pub struct ErrorSignal<E, G> {
    error: E,
    good: G,
}

impl<E: IndicatorOutput, G: IndicatorOutput> ErrorSignal<E, G> {
    /// Create the pair in the no-fault state
    pub fn new(error: E, good: G) -> Self {
        let mut signal = Self { error, good };
        signal.show(false);
        signal
    }

    /// Check if a fault is currently shown
    pub fn is_faulted(&self) -> bool {
        self.error.is_on()
    }

    fn show(&mut self, fault: bool) {
        self.error.set_on(fault);
        self.good.set_on(!fault);
    }
}

impl<S, E: IndicatorOutput, G: IndicatorOutput> StateHandler<GardenContext<S>>
    for ErrorSignal<E, G>
{
    fn handle(&mut self, machine: &mut StateMachine, ctx: &mut GardenContext<S>) {
        let fault = match machine.state() {
            GardenState::Error => true,
            GardenState::ClearError => false,
            _ => return,
        };

        self.show(fault);
        let text = if fault { "error:set" } else { "error:clear" };
        // Truncated if the report is already full
        let _ = ctx.report.write_str(text);

        machine.set_state(GardenState::StatusCall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::mock::MockIndicator;

    fn signal() -> ErrorSignal<MockIndicator, MockIndicator> {
        ErrorSignal::new(MockIndicator::default(), MockIndicator::default())
    }

    #[test]
    fn test_starts_good() {
        let signal = signal();
        assert!(!signal.is_faulted());
        assert!(signal.good.is_on());
    }

    #[test]
    fn test_error_then_clear() {
        let mut signal = signal();
        let mut ctx = GardenContext::new(());
        let mut machine = StateMachine::new();

        machine.accept_line("code:0");
        signal.handle(&mut machine, &mut ctx);
        assert!(signal.is_faulted());
        assert!(!signal.good.is_on());
        assert_eq!(ctx.take_report().as_str(), "error:set");
        assert_eq!(machine.state(), GardenState::StatusCall);

        machine.accept_line("code:1");
        signal.handle(&mut machine, &mut ctx);
        assert!(!signal.is_faulted());
        assert!(signal.good.is_on());
        assert_eq!(ctx.take_report().as_str(), "error:clear");
    }

    #[test]
    fn test_other_states_ignored() {
        let mut signal = signal();
        let mut ctx = GardenContext::new(());
        let mut machine = StateMachine::new();
        machine.set_state(GardenState::StatusCall);

        let writes = signal.error.writes;
        signal.handle(&mut machine, &mut ctx);

        assert_eq!(signal.error.writes, writes);
        assert!(ctx.report.is_empty());
        assert_eq!(machine.state(), GardenState::StatusCall);
    }
}
