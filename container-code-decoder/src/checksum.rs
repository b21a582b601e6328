//! ISO 6346 check digit computation
//!
//! Implements the positional-weighted modulo-11 algorithm from the standard:
//! each character of the 10-character prefix (owner + category + serial) maps
//! to a numeric value, is weighted by 2^position, and the weighted sum modulo
//! 11 gives the check digit.

use crate::types::{DecodeError, Result};

/// Numeric values for letters 'A'..='Z'
///
/// The letter sequence starts at 10 and skips 11 and its multiples (11, 22,
/// 33), so the values are not contiguous. Digits map to themselves.
const LETTER_VALUES: [u32; 26] = [
    10, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 34, 35,
    36, 37, 38,
];

/// Map a single character to its ISO 6346 numeric value
///
/// Only ASCII digits and upper-case letters are in the table; anything else
/// has no defined value.
fn char_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => ch.to_digit(10),
        'A'..='Z' => Some(LETTER_VALUES[(ch as usize) - ('A' as usize)]),
        _ => None,
    }
}

/// Compute the ISO 6346 check digit for a 10-character prefix
///
/// # Arguments
/// * `prefix` - The owner + category + serial characters (10 chars; the
///   caller extracts them from a length-checked canonical code)
///
/// # Returns
/// * `Ok(digit)` - The check digit, 0-9. A raw modulo-11 result of 10 maps
///   to 0 per the standard's documented exception.
/// * `Err(DecodeError::MalformedCharacter)` - A character outside the
///   digit/letter mapping table was encountered.
pub fn compute_check_digit(prefix: &str) -> Result<u8> {
    let mut sum: u32 = 0;

    for (pos, ch) in prefix.chars().enumerate() {
        let value = char_value(ch).ok_or(DecodeError::MalformedCharacter { ch, pos })?;
        // Weight is 2^position, position counted left to right from 0
        sum += value << pos;
    }

    log::trace!("check digit sum for \"{}\" is {}", prefix, sum);

    let digit = sum % 11;
    Ok(if digit == 10 { 0 } else { digit as u8 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values_match_standard() {
        assert_eq!(char_value('A'), Some(10));
        assert_eq!(char_value('B'), Some(12)); // 11 skipped
        assert_eq!(char_value('K'), Some(21));
        assert_eq!(char_value('L'), Some(23)); // 22 skipped
        assert_eq!(char_value('U'), Some(32));
        assert_eq!(char_value('V'), Some(34)); // 33 skipped
        assert_eq!(char_value('Z'), Some(38));
        assert_eq!(char_value('7'), Some(7));
    }

    #[test]
    fn test_no_letter_value_is_multiple_of_11() {
        for v in LETTER_VALUES {
            assert_ne!(v % 11, 0, "value {} is a multiple of 11", v);
        }
    }

    #[test]
    fn test_known_vector_csqu() {
        // Reference example from the standard: CSQU3054383
        assert_eq!(compute_check_digit("CSQU305438").unwrap(), 3);
    }

    #[test]
    fn test_known_vector_raiu() {
        assert_eq!(compute_check_digit("RAIU690011").unwrap(), 4);
    }

    #[test]
    fn test_deterministic() {
        let first = compute_check_digit("CSQU305438").unwrap();
        for _ in 0..10 {
            assert_eq!(compute_check_digit("CSQU305438").unwrap(), first);
        }
    }

    #[test]
    fn test_modulo_ten_maps_to_zero() {
        // 'A' at position 0 contributes exactly 10; all other characters
        // contribute 0, so the raw modulo-11 result is 10.
        assert_eq!(compute_check_digit("A000000000").unwrap(), 0);
    }

    #[test]
    fn test_all_zero_prefix() {
        assert_eq!(compute_check_digit("0000000000").unwrap(), 0);
    }

    #[test]
    fn test_malformed_character() {
        match compute_check_digit("CSQ*305438") {
            Err(DecodeError::MalformedCharacter { ch, pos }) => {
                assert_eq!(ch, '*');
                assert_eq!(pos, 3);
            }
            other => panic!("expected MalformedCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_lowercase_is_malformed() {
        // Lower-case letters never reach the checksum from a conforming
        // normalizer; if one does it must be rejected, not guessed at.
        assert!(compute_check_digit("csqu305438").is_err());
    }
}
