//! Byte-to-line assembly for the serial port
//!
//! Bytes are collected until `\n`. A `\r` anywhere is ignored, so both
//! LF and CRLF terminals work. Lines longer than [`MAX_LINE_LEN`] are
//! dropped in full: the assembler discards input until the next `\n` and
//! then resumes.

use heapless::{String, Vec};

/// Maximum line length in bytes, terminator excluded
pub const MAX_LINE_LEN: usize = 128;

/// One complete received line
pub type Line = String<MAX_LINE_LEN>;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded the buffer; the rest of it will be discarded
    Overflow,
    /// Line was not valid UTF-8
    InvalidUtf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssembleState {
    /// Collecting bytes of the current line
    Collecting,
    /// Skipping the tail of an overlong line
    Discarding,
}

/// Incremental line assembler
#[derive(Debug, Clone)]
pub struct LineAssembler {
    state: AssembleState,
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    /// Create a new assembler
    pub const fn new() -> Self {
        Self {
            state: AssembleState::Collecting,
            buffer: Vec::new(),
        }
    }

    /// Reset the assembler, dropping any partial line
    pub fn reset(&mut self) {
        self.state = AssembleState::Collecting;
        self.buffer.clear();
    }

    /// Number of bytes buffered for the current line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a non-empty line is complete,
    /// `Ok(None)` when more bytes are needed, or `Err` when the current
    /// line had to be dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match self.state {
            AssembleState::Discarding => {
                if byte == b'\n' {
                    self.state = AssembleState::Collecting;
                }
                Ok(None)
            }
            AssembleState::Collecting => match byte {
                b'\n' => self.finish(),
                b'\r' => Ok(None),
                _ => {
                    if self.buffer.push(byte).is_err() {
                        self.buffer.clear();
                        self.state = AssembleState::Discarding;
                        return Err(LineError::Overflow);
                    }
                    Ok(None)
                }
            },
        }
    }

    fn finish(&mut self) -> Result<Option<Line>, LineError> {
        // Blank lines carry no command
        if self.buffer.is_empty() {
            return Ok(None);
        }

        let bytes = core::mem::take(&mut self.buffer);
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| LineError::InvalidUtf8)
    }
}
