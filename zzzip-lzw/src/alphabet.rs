//! The fixed seed alphabet.
//!
//! Codes 32..=126 are the printable ASCII bytes of the same value, followed
//! by tab, carriage return and line feed at codes 127, 128 and 129.

use crate::Code;

/// Code of the first seed entry (the space character).
pub const FIRST_SEED_CODE: Code = 0x20;

/// Code of the last printable seed entry (`~`).
const LAST_PRINTABLE: Code = 0x7E;

/// Control bytes appended after the printable range, in code order.
const CONTROL_BYTES: [u8; 3] = [b'\t', b'\r', b'\n'];

/// Number of seed entries.
pub const SEED_ALPHABET_LEN: usize = (LAST_PRINTABLE - FIRST_SEED_CODE + 1) as usize + 3;

/// First code available to learned entries.
pub const FIRST_DYNAMIC_CODE: Code = FIRST_SEED_CODE + SEED_ALPHABET_LEN as Code;

/// Seed code for a single byte, or `None` if the byte is not in the alphabet.
#[inline]
pub fn seed_code(byte: u8) -> Option<Code> {
    match byte {
        0x20..=0x7E => Some(byte as Code),
        b'\t' => Some(LAST_PRINTABLE + 1),
        b'\r' => Some(LAST_PRINTABLE + 2),
        b'\n' => Some(LAST_PRINTABLE + 3),
        _ => None,
    }
}

/// Whether `byte` may appear in encoder input.
#[inline]
pub fn is_seed_byte(byte: u8) -> bool {
    seed_code(byte).is_some()
}

/// Seed entries as `(code, byte)` pairs in assignment order.
pub fn seed_entries() -> impl Iterator<Item = (Code, u8)> {
    (FIRST_SEED_CODE as u8..=LAST_PRINTABLE as u8)
        .chain(CONTROL_BYTES)
        .zip(FIRST_SEED_CODE..)
        .map(|(byte, code)| (code, byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_layout() {
        assert_eq!(SEED_ALPHABET_LEN, 98);
        assert_eq!(FIRST_DYNAMIC_CODE, 130);
        assert_eq!(seed_code(b' '), Some(32));
        assert_eq!(seed_code(b'a'), Some(97));
        assert_eq!(seed_code(b'~'), Some(126));
        assert_eq!(seed_code(b'\t'), Some(127));
        assert_eq!(seed_code(b'\r'), Some(128));
        assert_eq!(seed_code(b'\n'), Some(129));
    }

    #[test]
    fn test_rejected_bytes() {
        for byte in [0x00, 0x0B, 0x1F, 0x7F, 0x80, 0xFF] {
            assert!(!is_seed_byte(byte), "{byte:#04x} should be rejected");
        }
    }

    #[test]
    fn test_seed_entries_agree_with_seed_code() {
        let entries: Vec<_> = seed_entries().collect();
        assert_eq!(entries.len(), SEED_ALPHABET_LEN);
        for (code, byte) in entries {
            assert_eq!(seed_code(byte), Some(code));
        }
    }
}
