//! Gardenometer Serial Protocol
//!
//! This crate defines the line-oriented ASCII protocol spoken over the
//! monitor's serial port. One command per line:
//!
//! ```text
//! code:<n>              switch state by numeric code
//! config:<D=V;D=V;...>  update configuration fields
//! cal:                  start/continue moisture calibration
//! <anything else>       status request
//! ```
//!
//! The decoder never fails hard. Unknown codes, malformed config fields and
//! non-numeric values all degrade to a no-op, a logged field error, or zero.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod line;
pub mod number;

pub use command::{classify_line, Command, CommandKind, PREFIXES};
pub use config::{
    decode_config, decode_config_into, decode_field, encode_config, Config, ConfigField,
    ParseInfo,
};
pub use error::{ErrorLog, FieldError, MAX_FIELD_ERRORS};
pub use line::{Line, LineAssembler, LineError, MAX_LINE_LEN};
pub use number::parse_int_lenient;
