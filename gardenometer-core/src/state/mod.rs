//! Device state machine
//!
//! Every serial line moves the machine to a new state; every tick runs
//! the handler for the current state. There is no terminal state.

pub mod dispatcher;
pub mod machine;

pub use dispatcher::{Dispatcher, StateHandler};
pub use machine::{GardenState, Role, StateMachine};
