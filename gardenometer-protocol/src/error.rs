//! Config decode errors
//!
//! Malformed fields are collected rather than returned early: one bad
//! field never stops the rest of the payload from being applied.

use core::fmt;

use heapless::Vec;

use crate::config::ConfigField;

/// Maximum number of field errors kept in one log
pub const MAX_FIELD_ERRORS: usize = 16;

/// A single malformed config field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// Known field index not followed by `=`
    MissingSeparator { field: ConfigField },
    /// Leading byte is not a known field index
    UnknownIndex { byte: u8 },
}

impl FieldError {
    /// Raw index byte the error refers to
    pub fn index_byte(&self) -> u8 {
        match self {
            FieldError::MissingSeparator { field } => b'0' + field.index(),
            FieldError::UnknownIndex { byte } => *byte,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = self.index_byte();
        if byte.is_ascii_graphic() {
            write!(f, "error for code:{}; ", byte as char)
        } else {
            write!(f, "error for code:0x{:02X}; ", byte)
        }
    }
}

/// Accumulated field errors from one decode pass, in encounter order
///
/// Entries beyond [`MAX_FIELD_ERRORS`] are counted but not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorLog {
    entries: Vec<FieldError, MAX_FIELD_ERRORS>,
    dropped: u16,
}

impl ErrorLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            dropped: 0,
        }
    }

    /// Record an error
    pub fn push(&mut self, error: FieldError) {
        if self.entries.push(error).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    /// True if the payload was fully well-formed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.dropped == 0
    }

    /// Total number of errors seen, stored or not
    pub fn len(&self) -> usize {
        self.entries.len() + self.dropped as usize
    }

    /// Stored entries
    pub fn entries(&self) -> &[FieldError] {
        &self.entries
    }

    /// Number of errors that did not fit
    pub fn dropped(&self) -> u16 {
        self.dropped
    }

    /// Iterate stored entries
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{}", entry)?;
        }
        if self.dropped > 0 {
            write!(f, "+{} more; ", self.dropped)?;
        }
        Ok(())
    }
}
