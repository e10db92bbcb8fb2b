//! Lenient integer coercion
//!
//! Serial input is noisy, so numeric fields are read the way a C `atoi`
//! reads them: leading whitespace is skipped, an optional sign is
//! accepted, digits are consumed until the first non-digit, and anything
//! without digits is `0`. Out-of-range values saturate.

/// Parse the leading integer of `text`, coercing garbage to zero
pub fn parse_int_lenient(text: &str) -> i32 {
    const LIMIT: i64 = i32::MAX as i64 + 1;

    let bytes = text.trim_start().as_bytes();

    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };

    let mut magnitude: i64 = 0;
    for &byte in digits.iter().take_while(|b| b.is_ascii_digit()) {
        magnitude = magnitude * 10 + i64::from(byte - b'0');
        if magnitude > LIMIT {
            magnitude = LIMIT;
            break;
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
