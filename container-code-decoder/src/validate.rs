//! Check digit validation
//!
//! Compares the check digit carried in a canonical code against the digit
//! computed from its 10-character prefix. A mismatch is a normal outcome
//! carrying the corrected digit for display; the only failure mode is a
//! malformed character in the prefix.

use crate::checksum::compute_check_digit;
use crate::types::{CanonicalCode, CheckDigitResult, Result};

/// Validate the check digit of a canonical code
///
/// # Returns
/// * `Ok(CheckDigitResult)` - `matches` is true when the supplied digit
///   equals the computed one; `expected` always carries the computed digit.
/// * `Err(DecodeError::MalformedCharacter)` - The prefix contains a
///   character outside the ISO 6346 value table.
pub fn validate(code: &CanonicalCode) -> Result<CheckDigitResult> {
    let chars: Vec<char> = code.as_str().chars().collect();
    let prefix: String = chars[0..10].iter().collect();

    let expected = compute_check_digit(&prefix)?;

    // A non-digit in the check position (structurally possible in an
    // 11-char code) simply never matches.
    let supplied = chars[10].to_digit(10);
    let matches = supplied == Some(expected as u32);

    log::debug!(
        "code {}: supplied check digit '{}', expected {}",
        code.as_str(),
        chars[10],
        expected
    );

    Ok(CheckDigitResult { expected, matches })
}
