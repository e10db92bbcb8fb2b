//! Per-role handler dispatch
//!
//! The dispatcher owns the state machine and one handler per role. Each
//! tick it runs the handler matching the current state:
//!
//! | State                  | Handler       |
//! |------------------------|---------------|
//! | `StatusCall`           | status        |
//! | `Calibration`          | calibration   |
//! | `Error`, `ClearError`  | error         |
//! | `Config`               | config        |
//! | `None`                 | (nothing)     |

use super::machine::{GardenState, Role, StateMachine};
use crate::traits::LineSource;

/// Behavior for one handler role
///
/// `C` is the application context passed through unchanged from the
/// caller of [`Dispatcher::dispatch`]. Handlers may change the machine's
/// state, e.g. to return to status reporting once they are done.
pub trait StateHandler<C: ?Sized> {
    /// Run the handler for the machine's current state
    fn handle(&mut self, machine: &mut StateMachine, ctx: &mut C);
}

/// State machine plus its four role handlers
pub struct Dispatcher<S, K, E, F> {
    machine: StateMachine,
    status: S,
    calibration: K,
    error: E,
    config: F,
}

impl<S, K, E, F> Dispatcher<S, K, E, F> {
    /// Create a dispatcher starting in `None`
    pub fn new(status: S, calibration: K, error: E, config: F) -> Self {
        Self {
            machine: StateMachine::new(),
            status,
            calibration,
            error,
            config,
        }
    }

    /// Current state
    pub fn state(&self) -> GardenState {
        self.machine.state()
    }

    /// The owned state machine
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    /// Mutable access to the state machine
    pub fn machine_mut(&mut self) -> &mut StateMachine {
        &mut self.machine
    }

    /// Status handler
    pub fn status_handler(&self) -> &S {
        &self.status
    }

    /// Calibration handler
    pub fn calibration_handler(&self) -> &K {
        &self.calibration
    }

    /// Error handler
    pub fn error_handler(&self) -> &E {
        &self.error
    }

    /// Config handler
    pub fn config_handler(&self) -> &F {
        &self.config
    }

    /// Classify a line and move the machine accordingly
    pub fn accept_line(&mut self, line: &str) -> GardenState {
        self.machine.accept_line(line)
    }

    /// Run the handler for the current state
    ///
    /// Returns the role that ran, or `None` if the state has no handler.
    pub fn dispatch<C: ?Sized>(&mut self, ctx: &mut C) -> Option<Role>
    where
        S: StateHandler<C>,
        K: StateHandler<C>,
        E: StateHandler<C>,
        F: StateHandler<C>,
    {
        let role = self.machine.state().role()?;
        match role {
            Role::Status => self.status.handle(&mut self.machine, ctx),
            Role::Calibration => self.calibration.handle(&mut self.machine, ctx),
            Role::Error => self.error.handle(&mut self.machine, ctx),
            Role::Config => self.config.handle(&mut self.machine, ctx),
        }
        Some(role)
    }

    /// Accept at most one line from `source`, then dispatch once
    pub fn step<C: ?Sized, L: LineSource + ?Sized>(
        &mut self,
        source: &mut L,
        ctx: &mut C,
    ) -> Option<Role>
    where
        S: StateHandler<C>,
        K: StateHandler<C>,
        E: StateHandler<C>,
        F: StateHandler<C>,
    {
        if let Some(line) = source.next_line() {
            self.machine.accept_line(&line);
        }
        self.dispatch(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gardenometer_protocol::Line;
    use std::collections::VecDeque;

    /// Records every call as (role, state at call time)
    #[derive(Default)]
    struct CallLog {
        calls: Vec<(Role, GardenState)>,
    }

    struct Recorder {
        role: Role,
        next_state: Option<GardenState>,
    }

    impl Recorder {
        fn new(role: Role) -> Self {
            Self {
                role,
                next_state: None,
            }
        }

        fn returning_to(role: Role, state: GardenState) -> Self {
            Self {
                role,
                next_state: Some(state),
            }
        }
    }

    impl StateHandler<CallLog> for Recorder {
        fn handle(&mut self, machine: &mut StateMachine, ctx: &mut CallLog) {
            ctx.calls.push((self.role, machine.state()));
            if let Some(state) = self.next_state {
                machine.set_state(state);
            }
        }
    }

    type TestDispatcher = Dispatcher<Recorder, Recorder, Recorder, Recorder>;

    fn dispatcher() -> TestDispatcher {
        Dispatcher::new(
            Recorder::new(Role::Status),
            Recorder::new(Role::Calibration),
            Recorder::new(Role::Error),
            Recorder::new(Role::Config),
        )
    }

    struct Lines(VecDeque<&'static str>);

    impl LineSource for Lines {
        fn next_line(&mut self) -> Option<Line> {
            let text = self.0.pop_front()?;
            let mut line = Line::new();
            line.push_str(text).ok()?;
            Some(line)
        }
    }

    #[test]
    fn test_none_invokes_nothing() {
        let mut d = dispatcher();
        let mut log = CallLog::default();

        assert_eq!(d.dispatch(&mut log), None);
        assert!(log.calls.is_empty());

        d.accept_line("code:999");
        assert_eq!(d.dispatch(&mut log), None);
        assert!(log.calls.is_empty());
    }

    #[test]
    fn test_each_state_routes_to_its_handler() {
        let cases = [
            ("status:", Role::Status, GardenState::StatusCall),
            ("cal:", Role::Calibration, GardenState::Calibration),
            ("code:0", Role::Error, GardenState::Error),
            ("code:1", Role::Error, GardenState::ClearError),
            ("config:0=1", Role::Config, GardenState::Config),
        ];

        for (line, role, state) in cases {
            let mut d = dispatcher();
            let mut log = CallLog::default();
            d.accept_line(line);
            assert_eq!(d.dispatch(&mut log), Some(role));
            assert_eq!(log.calls, [(role, state)]);
        }
    }

    #[test]
    fn test_error_handler_sees_which_error_state() {
        let mut d = dispatcher();
        let mut log = CallLog::default();

        d.accept_line("code:0");
        d.dispatch(&mut log);
        d.accept_line("code:1");
        d.dispatch(&mut log);

        assert_eq!(
            log.calls,
            [
                (Role::Error, GardenState::Error),
                (Role::Error, GardenState::ClearError)
            ]
        );
    }

    #[test]
    fn test_state_persists_between_ticks() {
        let mut d = dispatcher();
        let mut log = CallLog::default();

        d.accept_line("status:");
        d.dispatch(&mut log);
        d.dispatch(&mut log);
        d.dispatch(&mut log);

        assert_eq!(log.calls.len(), 3);
        assert!(log.calls.iter().all(|&(r, _)| r == Role::Status));
    }

    #[test]
    fn test_handler_can_move_state() {
        let mut d = Dispatcher::new(
            Recorder::new(Role::Status),
            Recorder::returning_to(Role::Calibration, GardenState::StatusCall),
            Recorder::new(Role::Error),
            Recorder::new(Role::Config),
        );
        let mut log = CallLog::default();

        d.accept_line("cal:");
        d.dispatch(&mut log);
        assert_eq!(d.state(), GardenState::StatusCall);
        d.dispatch(&mut log);

        assert_eq!(
            log.calls,
            [
                (Role::Calibration, GardenState::Calibration),
                (Role::Status, GardenState::StatusCall)
            ]
        );
    }

    #[test]
    fn test_step_takes_one_line_per_tick() {
        let mut d = dispatcher();
        let mut log = CallLog::default();
        let mut source = Lines(VecDeque::from(["cal:", "code:999", "status:"]));

        assert_eq!(d.step(&mut source, &mut log), Some(Role::Calibration));
        assert_eq!(d.step(&mut source, &mut log), None);
        assert_eq!(d.step(&mut source, &mut log), Some(Role::Status));
        // Source drained: state is kept
        assert_eq!(d.step(&mut source, &mut log), Some(Role::Status));

        assert_eq!(log.calls.len(), 3);
    }

    #[test]
    fn test_config_handler_sees_payload() {
        struct PayloadCheck;
        impl StateHandler<Vec<std::string::String>> for PayloadCheck {
            fn handle(&mut self, machine: &mut StateMachine, ctx: &mut Vec<std::string::String>) {
                ctx.push(machine.take_pending_config().as_str().into());
            }
        }

        let mut d = Dispatcher::new(PayloadCheck, PayloadCheck, PayloadCheck, PayloadCheck);
        let mut seen = Vec::new();
        d.accept_line("config:0=30;1=512;");
        d.dispatch(&mut seen);
        assert_eq!(seen, ["0=30;1=512;"]);
    }
}
