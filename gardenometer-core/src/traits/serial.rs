//! Serial line supply

use gardenometer_protocol::Line;

/// Source of complete command lines
///
/// Owned by the host loop. Implementations may block or poll; returning
/// `None` means no line is available right now.
pub trait LineSource {
    /// Next complete line, if any
    fn next_line(&mut self) -> Option<Line>;
}
