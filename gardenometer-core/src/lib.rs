//! Board-agnostic core logic for the Gardenometer soil monitor
//!
//! This crate contains the parts of the firmware that do not depend on
//! a specific board:
//!
//! - Device states and the line-driven state machine
//! - Per-role handler dispatch
//! - Hardware abstraction traits (sensors, indicators, line source)
//! - Configuration and calibration records

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod state;
pub mod traits;
