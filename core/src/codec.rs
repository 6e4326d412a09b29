// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The stored bytes are not the decimal text form of a non-negative
/// integer. A corrupted entry is an invariant violation, not a runtime
/// condition: callers terminate instead of repairing or reinterpreting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedValue {
    stored: String,
}

impl MalformedValue {
    fn new(bytes: &[u8]) -> Self {
        Self {
            stored: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

impl std::fmt::Display for MalformedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Malformed stored value '{}'", self.stored)
    }
}

impl std::error::Error for MalformedValue {}

/// Encodes a counter value as its decimal text bytes.
pub fn encode(value: u64) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Decodes decimal text bytes back into a counter value.
///
/// Strict by design: no sign, no surrounding whitespace, no empty input.
pub fn decode(bytes: &[u8]) -> Result<u64, MalformedValue> {
    let text = std::str::from_utf8(bytes).map_err(|_| MalformedValue::new(bytes))?;
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedValue::new(bytes));
    }
    text.parse::<u64>().map_err(|_| MalformedValue::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};

    #[test]
    fn encode_produces_decimal_text() {
        assert_eq!(encode(0), b"0");
        assert_eq!(encode(12), b"12");
        assert_eq!(encode(u64::MAX), u64::MAX.to_string().into_bytes());
    }

    #[test]
    fn decode_round_trips_encode() {
        for n in [0u64, 1, 7, 12, 999_999, u64::MAX] {
            assert_eq!(decode(&encode(n)), Ok(n));
        }
    }

    #[test]
    fn decode_rejects_empty_input() {
        assert!(decode(b"").is_err());
    }

    #[test]
    fn decode_rejects_non_numeric_text() {
        assert!(decode(b"abc").is_err());
        assert!(decode(b"12x").is_err());
        assert!(decode(b"1.5").is_err());
    }

    #[test]
    fn decode_rejects_signed_and_padded_text() {
        assert!(decode(b"-1").is_err());
        assert!(decode(b"+1").is_err());
        assert!(decode(b" 1").is_err());
        assert!(decode(b"1\n").is_err());
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(decode(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn decode_rejects_overflow() {
        assert!(decode(b"18446744073709551616").is_err());
    }
}
