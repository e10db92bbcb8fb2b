//! Config application
//!
//! Decodes the payload stashed by the last `config:` line on top of the
//! active config and reports the outcome followed by the resulting
//! config. A `code:4` with nothing pending just echoes the config.

use core::fmt::{self, Write};

use gardenometer_core::state::{GardenState, StateHandler, StateMachine};
use gardenometer_protocol::{decode_config_into, encode_config, Config, ErrorLog};

use crate::context::{GardenContext, Report};

/// Applies pending config payloads
#[derive(Debug, Default)]
pub struct ConfigApplier {
    last_errors: ErrorLog,
}

impl ConfigApplier {
    /// Create a new applier
    pub const fn new() -> Self {
        Self {
            last_errors: ErrorLog::new(),
        }
    }

    /// Field errors from the most recent payload
    pub fn last_errors(&self) -> &ErrorLog {
        &self.last_errors
    }
}

impl<S> StateHandler<GardenContext<S>> for ConfigApplier {
    fn handle(&mut self, machine: &mut StateMachine, ctx: &mut GardenContext<S>) {
        let payload = machine.take_pending_config();
        self.last_errors = decode_config_into(&payload, &mut ctx.config);

        // Truncated if the report is already full
        let _ = write_outcome(&mut ctx.report, &self.last_errors, &ctx.config);

        machine.set_state(GardenState::StatusCall);
    }
}

fn write_outcome(report: &mut Report, errors: &ErrorLog, config: &Config) -> fmt::Result {
    if errors.is_empty() {
        report.write_str("config:ok ")?;
    } else {
        write!(report, "config:{}", errors)?;
    }
    encode_config(config, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gardenometer_protocol::FieldError;

    #[test]
    fn test_applies_payload() {
        let mut applier = ConfigApplier::new();
        let mut ctx = GardenContext::new(());
        let mut machine = StateMachine::new();

        machine.accept_line("config:0=30;1=512;");
        applier.handle(&mut machine, &mut ctx);

        assert_eq!(ctx.config.wait_time, 30);
        assert_eq!(ctx.config.moisture, 512);
        assert!(applier.last_errors().is_empty());
        assert_eq!(
            ctx.report.as_str(),
            "config:ok 0=30;1=512;2=27;3=28;4=15;5=16;6=17;"
        );
        assert_eq!(machine.state(), GardenState::StatusCall);
        assert_eq!(machine.pending_config(), "");
    }

    #[test]
    fn test_reports_field_errors_and_keeps_good_fields() {
        let mut applier = ConfigApplier::new();
        let mut ctx = GardenContext::new(());
        let mut machine = StateMachine::new();

        machine.accept_line("config:9=5;2=100;");
        applier.handle(&mut machine, &mut ctx);

        assert_eq!(ctx.config.lux, 100);
        assert_eq!(
            applier.last_errors().entries(),
            &[FieldError::UnknownIndex { byte: b'9' }]
        );
        assert!(ctx
            .report
            .as_str()
            .starts_with("config:error for code:9; 0=1000;"));
    }

    #[test]
    fn test_full_error_log_still_echoes_config() {
        let mut applier = ConfigApplier::new();
        let mut ctx = GardenContext::new(());
        let mut machine = StateMachine::new();

        let mut line = std::string::String::from("config:");
        for _ in 0..20 {
            line.push_str("9;");
        }
        line.push_str("0=42;");
        machine.accept_line(&line);
        applier.handle(&mut machine, &mut ctx);

        assert_eq!(ctx.config.wait_time, 42);
        assert_eq!(applier.last_errors().dropped(), 4);

        let report = ctx.report.as_str();
        assert!(report.starts_with("config:error for code:9; "));
        assert!(report.contains("+4 more; 0=42;"));
        assert!(report.ends_with("0=42;1=26;2=27;3=28;4=15;5=16;6=17;"));
    }

    #[test]
    fn test_longest_reply_fits() {
        let mut applier = ConfigApplier::new();
        let mut ctx = GardenContext::new(());
        for field in gardenometer_protocol::ConfigField::ALL {
            ctx.config.set(field, i32::MIN);
        }
        let mut machine = StateMachine::new();

        let mut line = std::string::String::from("config:");
        while line.len() + 2 <= gardenometer_protocol::MAX_LINE_LEN {
            line.push_str("x;");
        }
        machine.accept_line(&line);
        applier.handle(&mut machine, &mut ctx);

        assert!(applier.last_errors().dropped() > 0);
        assert!(ctx.report.as_str().ends_with("6=-2147483648;"));
    }

    #[test]
    fn test_payload_merges_into_active_config() {
        let mut applier = ConfigApplier::new();
        let mut ctx = GardenContext::new(());
        let mut machine = StateMachine::new();

        machine.accept_line("config:2=100;");
        applier.handle(&mut machine, &mut ctx);
        machine.accept_line("config:0=50;");
        applier.handle(&mut machine, &mut ctx);

        assert_eq!(ctx.config.lux, 100);
        assert_eq!(ctx.config.wait_time, 50);
    }

    #[test]
    fn test_code_without_payload_echoes_config() {
        let mut applier = ConfigApplier::new();
        let mut ctx = GardenContext::new(());
        let mut machine = StateMachine::new();

        machine.accept_line("code:4");
        applier.handle(&mut machine, &mut ctx);

        assert_eq!(ctx.config, Config::default());
        assert!(ctx.report.as_str().starts_with("config:ok "));
    }
}
