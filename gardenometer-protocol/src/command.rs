//! Line classification
//!
//! Each received line is matched against a fixed prefix table. The first
//! matching prefix decides the command; lines matching none of them are
//! status requests.

use crate::number::parse_int_lenient;

/// Prefix selecting a state by numeric code
pub const CODE_PREFIX: &str = "code:";
/// Prefix carrying a configuration payload
pub const CONFIG_PREFIX: &str = "config:";
/// Prefix requesting a calibration step
pub const CAL_PREFIX: &str = "cal:";
/// Prefix explicitly requesting status (same as no prefix at all)
pub const STATUS_PREFIX: &str = "status:";

/// Command kinds, without their payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandKind {
    Code,
    ConfigPayload,
    Calibrate,
    StatusRequest,
}

/// Prefix table, checked in order
pub static PREFIXES: [(&str, CommandKind); 4] = [
    (CODE_PREFIX, CommandKind::Code),
    (CONFIG_PREFIX, CommandKind::ConfigPayload),
    (CAL_PREFIX, CommandKind::Calibrate),
    (STATUS_PREFIX, CommandKind::StatusRequest),
];

/// A classified serial line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// `code:<n>` with the code coerced leniently
    Code(i32),
    /// `config:<payload>`, payload left undecoded
    ConfigPayload(&'a str),
    /// `cal:`
    Calibrate,
    /// `status:` or any unrecognized line
    StatusRequest,
}

impl<'a> Command<'a> {
    fn from_parts(kind: CommandKind, rest: &'a str) -> Self {
        match kind {
            CommandKind::Code => Command::Code(parse_int_lenient(rest)),
            CommandKind::ConfigPayload => Command::ConfigPayload(rest),
            CommandKind::Calibrate => Command::Calibrate,
            CommandKind::StatusRequest => Command::StatusRequest,
        }
    }

    /// The kind of this command
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Code(_) => CommandKind::Code,
            Command::ConfigPayload(_) => CommandKind::ConfigPayload,
            Command::Calibrate => CommandKind::Calibrate,
            Command::StatusRequest => CommandKind::StatusRequest,
        }
    }
}

/// Classify one line of serial input
///
/// A trailing CR/LF is ignored. Never fails: unrecognized input is a
/// status request.
pub fn classify_line(line: &str) -> Command<'_> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);

    PREFIXES
        .iter()
        .find_map(|&(prefix, kind)| {
            line.strip_prefix(prefix)
                .map(|rest| Command::from_parts(kind, rest))
        })
        .unwrap_or(Command::StatusRequest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_line() {
        assert_eq!(classify_line("code:4"), Command::Code(4));
        assert_eq!(classify_line("code:999"), Command::Code(999));
        assert_eq!(classify_line("code:-1"), Command::Code(-1));
    }

    #[test]
    fn test_code_garbage_is_zero() {
        assert_eq!(classify_line("code:"), Command::Code(0));
        assert_eq!(classify_line("code:abc"), Command::Code(0));
    }

    #[test]
    fn test_config_line_keeps_raw_payload() {
        assert_eq!(
            classify_line("config:0=30;1=512;"),
            Command::ConfigPayload("0=30;1=512;")
        );
        assert_eq!(classify_line("config:"), Command::ConfigPayload(""));
    }

    #[test]
    fn test_cal_line() {
        assert_eq!(classify_line("cal:"), Command::Calibrate);
        assert_eq!(classify_line("cal:anything"), Command::Calibrate);
    }

    #[test]
    fn test_status_fallback() {
        assert_eq!(classify_line("status:"), Command::StatusRequest);
        assert_eq!(classify_line("anything"), Command::StatusRequest);
        assert_eq!(classify_line(""), Command::StatusRequest);
        // Prefixes are case sensitive
        assert_eq!(classify_line("CODE:1"), Command::StatusRequest);
    }

    #[test]
    fn test_line_terminators_ignored() {
        assert_eq!(classify_line("code:2\r\n"), Command::Code(2));
        assert_eq!(
            classify_line("config:0=5\r"),
            Command::ConfigPayload("0=5")
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Command::Code(1).kind(), CommandKind::Code);
        assert_eq!(
            Command::ConfigPayload("").kind(),
            CommandKind::ConfigPayload
        );
        assert_eq!(Command::Calibrate.kind(), CommandKind::Calibrate);
        assert_eq!(Command::StatusRequest.kind(), CommandKind::StatusRequest);
    }

    #[test]
    fn test_prefix_table_covers_every_kind() {
        for kind in [
            CommandKind::Code,
            CommandKind::ConfigPayload,
            CommandKind::Calibrate,
            CommandKind::StatusRequest,
        ] {
            assert!(PREFIXES.iter().any(|&(_, k)| k == kind));
        }
    }
}
