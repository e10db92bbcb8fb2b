//! State machine definition
//!
//! The machine holds the current state and the raw payload of the last
//! `config:` line. Lines move it between states; handlers may move it
//! again once they are done.

use gardenometer_protocol::{classify_line, Command, MAX_LINE_LEN};
use heapless::String;

/// Device states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GardenState {
    /// Idle; also the result of an unknown `code:`
    #[default]
    None,
    /// Fault signalled to the user
    Error,
    /// Fault cleared by the user
    ClearError,
    /// Periodic status reporting
    StatusCall,
    /// Moisture calibration step
    Calibration,
    /// Apply a pending config payload
    Config,
}

/// Handler roles. `Error` and `ClearError` share one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    Status,
    Calibration,
    Error,
    Config,
}

// Wire codes used by `code:<n>`
const CODE_ERROR: i32 = 0;
const CODE_CLEAR_ERROR: i32 = 1;
const CODE_STATUS_CALL: i32 = 2;
const CODE_CALIBRATION: i32 = 3;
const CODE_CONFIG: i32 = 4;

impl GardenState {
    /// Map a numeric command code to a state
    ///
    /// Total: every code outside the known set is `None`.
    pub fn from_code(code: i32) -> Self {
        match code {
            CODE_ERROR => GardenState::Error,
            CODE_CLEAR_ERROR => GardenState::ClearError,
            CODE_STATUS_CALL => GardenState::StatusCall,
            CODE_CALIBRATION => GardenState::Calibration,
            CODE_CONFIG => GardenState::Config,
            _ => GardenState::None,
        }
    }

    /// Numeric command code for this state, if it has one
    pub fn code(self) -> Option<i32> {
        match self {
            GardenState::None => None,
            GardenState::Error => Some(CODE_ERROR),
            GardenState::ClearError => Some(CODE_CLEAR_ERROR),
            GardenState::StatusCall => Some(CODE_STATUS_CALL),
            GardenState::Calibration => Some(CODE_CALIBRATION),
            GardenState::Config => Some(CODE_CONFIG),
        }
    }

    /// Handler role for this state; `None` has none
    pub fn role(self) -> Option<Role> {
        match self {
            GardenState::None => None,
            GardenState::StatusCall => Some(Role::Status),
            GardenState::Calibration => Some(Role::Calibration),
            GardenState::Error | GardenState::ClearError => Some(Role::Error),
            GardenState::Config => Some(Role::Config),
        }
    }

    /// Check if this is one of the two error-signalling states
    pub fn is_error(&self) -> bool {
        matches!(self, GardenState::Error | GardenState::ClearError)
    }
}

/// Current state plus the pending config payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMachine {
    state: GardenState,
    pending_config: String<MAX_LINE_LEN>,
}

impl StateMachine {
    /// Create a machine in the `None` state
    pub const fn new() -> Self {
        Self {
            state: GardenState::None,
            pending_config: String::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> GardenState {
        self.state
    }

    /// Force a state
    pub fn set_state(&mut self, state: GardenState) {
        self.state = state;
    }

    /// Raw payload of the last `config:` line
    pub fn pending_config(&self) -> &str {
        &self.pending_config
    }

    /// Take the pending payload, leaving it empty
    pub fn take_pending_config(&mut self) -> String<MAX_LINE_LEN> {
        core::mem::take(&mut self.pending_config)
    }

    /// Apply a classified command and return the new state
    pub fn apply(&mut self, command: Command<'_>) -> GardenState {
        self.state = match command {
            Command::Code(code) => GardenState::from_code(code),
            Command::ConfigPayload(payload) => {
                self.stash_config(payload);
                GardenState::Config
            }
            Command::Calibrate => GardenState::Calibration,
            Command::StatusRequest => GardenState::StatusCall,
        };
        self.state
    }

    /// Classify a raw line and apply it
    pub fn accept_line(&mut self, line: &str) -> GardenState {
        self.apply(classify_line(line))
    }

    fn stash_config(&mut self, payload: &str) {
        self.pending_config.clear();
        for ch in payload.chars() {
            // Truncate rather than reject
            if self.pending_config.push(ch).is_err() {
                break;
            }
        }
    }
}
