//! Core types for the container code decoder library
//!
//! This module defines all the fundamental types the decoder produces when
//! processing ISO 6346 container marking codes. The decoder is stateless and
//! only outputs decoded records - presentation is the application's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding a container code
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("normalized code \"{code}\" has length {len}, expected 11 or 15")]
    InvalidLength { code: String, len: usize },

    #[error("character '{ch}' at position {pos} has no ISO 6346 numeric value")]
    MalformedCharacter { ch: char, pos: usize },

    #[error("failed to parse {table} table: {reason}")]
    TableParse { table: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The two code forms defined by ISO 6346
///
/// The form is decided once, when a normalized string is parsed into a
/// `CanonicalCode`, and carried alongside the text so downstream consumers
/// never re-derive it from the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeForm {
    /// 11 characters: owner + category + serial + check digit
    Short,
    /// 15 characters: short form + length + height/width + type
    Long,
}

impl fmt::Display for CodeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeForm::Short => write!(f, "short"),
            CodeForm::Long => write!(f, "long"),
        }
    }
}

/// A normalized, length-checked container code
///
/// Only constructed through [`CanonicalCode::parse`] from an already
/// normalized string (see [`crate::normalize::normalize`]), and immutable
/// afterwards. Any length other than 11 or 15 characters is rejected with
/// [`DecodeError::InvalidLength`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCode {
    text: String,
    form: CodeForm,
}

impl CanonicalCode {
    /// Parse a normalized string into a canonical code
    ///
    /// # Arguments
    /// * `normalized` - Output of the normalizer (no separators, upper-case)
    ///
    /// # Returns
    /// * `Ok(CanonicalCode)` tagged `Short` (11 chars) or `Long` (15 chars)
    /// * `Err(DecodeError::InvalidLength)` for any other length
    pub fn parse(normalized: &str) -> Result<Self> {
        // Count characters, not bytes - normalization does not guarantee ASCII
        let len = normalized.chars().count();
        let form = match len {
            11 => CodeForm::Short,
            15 => CodeForm::Long,
            _ => {
                return Err(DecodeError::InvalidLength {
                    code: normalized.to_string(),
                    len,
                })
            }
        };

        Ok(Self {
            text: normalized.to_string(),
            form,
        })
    }

    /// The canonical code text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Short or long form, decided at parse time
    pub fn form(&self) -> CodeForm {
        self.form
    }
}

impl fmt::Display for CanonicalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The size/type block of a long-form code (characters 11-14)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeTypeCode {
    /// Length code (character 11)
    pub length_code: char,
    /// Height/width code (character 12)
    pub height_width_code: char,
    /// Equipment type code (characters 13-14)
    pub type_code: String,
}

/// The typed fields of a container code, split at fixed offsets
///
/// Created once per decode call from a [`CanonicalCode`] and never mutated;
/// consumed by the validator and the field explainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFields {
    /// Owner code (3 letters, e.g. "CSQ")
    pub owner_code: String,
    /// Equipment category identifier (1 letter, 'U'/'J'/'Z' in valid data)
    pub category_identifier: char,
    /// Serial number (6 digits)
    pub serial_number: String,
    /// Supplied check digit character (position 10)
    pub check_digit: char,
    /// Size/type block, present only for long-form codes
    pub size_type: Option<SizeTypeCode>,
}

/// Outcome of comparing the supplied check digit against the computed one
///
/// A mismatch is a normal result value carrying the corrected digit for
/// diagnostics - it is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckDigitResult {
    /// The check digit computed from the 10-character prefix
    pub expected: u8,
    /// True if the supplied digit equals the expected one
    pub matches: bool,
}

/// Outcome of a single reference table lookup
///
/// Tagged so callers cannot mistake an unknown-code marker for real data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Resolved<T> {
    /// The code was found in its reference table
    Known(T),
    /// The code is not present in its reference table
    Unknown,
}

impl<T> Resolved<T> {
    /// True if the lookup found an entry
    pub fn is_known(&self) -> bool {
        matches!(self, Resolved::Known(_))
    }

    /// The resolved value, if any
    pub fn known(&self) -> Option<&T> {
        match self {
            Resolved::Known(v) => Some(v),
            Resolved::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_form() {
        let code = CanonicalCode::parse("CSQU3054383").unwrap();
        assert_eq!(code.form(), CodeForm::Short);
        assert_eq!(code.as_str(), "CSQU3054383");
    }

    #[test]
    fn test_parse_long_form() {
        let code = CanonicalCode::parse("RAIU690011425U1").unwrap();
        assert_eq!(code.form(), CodeForm::Long);
    }

    #[test]
    fn test_parse_rejects_other_lengths() {
        for bad in ["", "CSQU305438", "CSQU30543833", "CSQU305438325U1X"] {
            match CanonicalCode::parse(bad) {
                Err(DecodeError::InvalidLength { len, .. }) => {
                    assert_eq!(len, bad.chars().count());
                }
                other => panic!("expected InvalidLength, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_resolved_accessors() {
        let known: Resolved<u32> = Resolved::Known(7);
        assert!(known.is_known());
        assert_eq!(known.known(), Some(&7));

        let unknown: Resolved<u32> = Resolved::Unknown;
        assert!(!unknown.is_known());
        assert_eq!(unknown.known(), None);
    }
}
