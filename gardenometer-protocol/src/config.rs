//! Configuration payload grammar
//!
//! A `config:` payload is a run of fields `D=V[;]` where `D` is a single
//! digit naming a [`ConfigField`] and `V` a decimal integer. Fields may
//! come in any order; fields not present keep their previous value.
//!
//! ```text
//! 0=30;1=512;5=16
//! │ │  │ │   └── error indicator pin = 16 (terminator optional at end)
//! │ │  │ └────── moisture = 512
//! │ │  └──────── field 1
//! │ └─────────── wait time = 30
//! └───────────── field 0
//! ```

use core::fmt;

use crate::error::{ErrorLog, FieldError};
use crate::number::parse_int_lenient;

/// Separator between field index and value
pub const FIELD_SEPARATOR: u8 = b'=';

/// Terminator after each field value
pub const FIELD_TERMINATOR: char = ';';

/// Byte offset of the value inside a field (`D=` is two bytes)
const VALUE_OFFSET: usize = 2;

/// Default interval between status reports (ms)
pub const DEFAULT_WAIT_TIME_MS: i32 = 1000;

/// Configuration fields, numbered by protocol index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ConfigField {
    /// Interval between status reports (ms)
    WaitTime = 0,
    /// Soil moisture channel
    Moisture = 1,
    /// Light level channel
    Lux = 2,
    /// Temperature probe channel
    Temperature = 3,
    /// Calibration input
    Calibration = 4,
    /// Error indicator output
    ErrorIndicator = 5,
    /// Good indicator output
    GoodIndicator = 6,
}

impl ConfigField {
    /// All fields in index order
    pub const ALL: [ConfigField; 7] = [
        ConfigField::WaitTime,
        ConfigField::Moisture,
        ConfigField::Lux,
        ConfigField::Temperature,
        ConfigField::Calibration,
        ConfigField::ErrorIndicator,
        ConfigField::GoodIndicator,
    ];

    /// Look up a field by numeric index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Look up a field by its ASCII digit
    pub fn from_digit(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Self::from_index(byte - b'0')
        } else {
            None
        }
    }

    /// Protocol index of this field
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Short human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ConfigField::WaitTime => "wait_time",
            ConfigField::Moisture => "moisture",
            ConfigField::Lux => "lux",
            ConfigField::Temperature => "temperature",
            ConfigField::Calibration => "calibration",
            ConfigField::ErrorIndicator => "error_indicator",
            ConfigField::GoodIndicator => "good_indicator",
        }
    }
}

/// Device configuration set over serial
///
/// Values are stored as received. Pin numbers are not checked against
/// the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Interval between status reports (ms)
    pub wait_time: i32,
    /// Moisture channel pin or threshold
    pub moisture: i32,
    /// Lux channel pin or threshold
    pub lux: i32,
    /// Temperature channel pin or threshold
    pub temperature: i32,
    /// Calibration input pin
    pub calibration: i32,
    /// Error indicator pin
    pub error_indicator: i32,
    /// Good indicator pin
    pub good_indicator: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wait_time: DEFAULT_WAIT_TIME_MS,
            moisture: 26,
            lux: 27,
            temperature: 28,
            calibration: 15,
            error_indicator: 16,
            good_indicator: 17,
        }
    }
}

impl Config {
    /// Read a field by tag
    pub fn get(&self, field: ConfigField) -> i32 {
        match field {
            ConfigField::WaitTime => self.wait_time,
            ConfigField::Moisture => self.moisture,
            ConfigField::Lux => self.lux,
            ConfigField::Temperature => self.temperature,
            ConfigField::Calibration => self.calibration,
            ConfigField::ErrorIndicator => self.error_indicator,
            ConfigField::GoodIndicator => self.good_indicator,
        }
    }

    /// Write a field by tag
    pub fn set(&mut self, field: ConfigField, value: i32) {
        let slot = match field {
            ConfigField::WaitTime => &mut self.wait_time,
            ConfigField::Moisture => &mut self.moisture,
            ConfigField::Lux => &mut self.lux,
            ConfigField::Temperature => &mut self.temperature,
            ConfigField::Calibration => &mut self.calibration,
            ConfigField::ErrorIndicator => &mut self.error_indicator,
            ConfigField::GoodIndicator => &mut self.good_indicator,
        };
        *slot = value;
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        encode_config(self, f)
    }
}

/// Result of decoding one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseInfo {
    /// Parsed value (0 if not numeric)
    pub value: i32,
    /// Byte index where the next field starts (payload length if none)
    pub next_index: usize,
}

/// Decode the value of the field at the start of `payload`
///
/// Expects `D=V` optionally followed by `;`. The index digit and `=` are
/// not checked here.
pub fn decode_field(payload: &str) -> ParseInfo {
    let end = payload.find(FIELD_TERMINATOR).unwrap_or(payload.len());

    let value = payload
        .get(VALUE_OFFSET..end)
        .map(parse_int_lenient)
        .unwrap_or(0);

    let next_index = if end < payload.len() { end + 1 } else { end };

    ParseInfo { value, next_index }
}

/// Decode a payload into a fresh default config
pub fn decode_config(payload: &str) -> (Config, ErrorLog) {
    let mut config = Config::default();
    let errors = decode_config_into(payload, &mut config);
    (config, errors)
}

/// Decode a payload on top of an existing config
///
/// Every well-formed field is applied, every malformed one is logged and
/// skipped up to its terminator. Each iteration consumes at least one
/// byte.
pub fn decode_config_into(payload: &str, config: &mut Config) -> ErrorLog {
    let mut errors = ErrorLog::new();
    let mut rest = payload;

    while let Some(&lead) = rest.as_bytes().first() {
        let consumed = match ConfigField::from_digit(lead) {
            Some(field) if rest.as_bytes().get(1) == Some(&FIELD_SEPARATOR) => {
                let info = decode_field(rest);
                config.set(field, info.value);
                info.next_index
            }
            Some(field) => {
                errors.push(FieldError::MissingSeparator { field });
                skip_field(rest)
            }
            None => {
                errors.push(FieldError::UnknownIndex { byte: lead });
                skip_field(rest)
            }
        };

        rest = rest.get(consumed..).unwrap_or("");
    }

    errors
}

/// Length of the field at the start of `rest`, terminator included
fn skip_field(rest: &str) -> usize {
    rest.find(FIELD_TERMINATOR)
        .map(|idx| idx + 1)
        .unwrap_or(rest.len())
}

/// Write every field as `D=V;` in index order
pub fn encode_config<W: fmt::Write + ?Sized>(config: &Config, out: &mut W) -> fmt::Result {
    for field in ConfigField::ALL {
        write!(out, "{}={};", field.index(), config.get(field))?;
    }
    Ok(())
}
