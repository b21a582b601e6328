//! Fixed-offset field splitting
//!
//! An ISO 6346 code has fields at fixed character positions:
//!
//! ```text
//! C S Q U 3 0 5 4 3 8 3   2 0 1 G
//! └own.┘ ↑ └─serial──┘ ↑  ↑ ↑ └type┘
//!     category      check │ height/width
//!                         length
//! ```
//!
//! Splitting is a pure slicing operation over a length-checked
//! [`CanonicalCode`]; it has no error path.

use crate::types::{CanonicalCode, CodeForm, DecodedFields, SizeTypeCode};

/// Split a canonical code into its typed fields
///
/// The size/type block is populated only for long-form codes. Operates on
/// characters rather than bytes so a code that normalized to non-ASCII
/// cannot panic here; such characters are rejected later by the checksum
/// engine.
pub fn split_code(code: &CanonicalCode) -> DecodedFields {
    let chars: Vec<char> = code.as_str().chars().collect();

    let size_type = match code.form() {
        CodeForm::Short => None,
        CodeForm::Long => Some(SizeTypeCode {
            length_code: chars[11],
            height_width_code: chars[12],
            type_code: chars[13..15].iter().collect(),
        }),
    };

    DecodedFields {
        owner_code: chars[0..3].iter().collect(),
        category_identifier: chars[3],
        serial_number: chars[4..10].iter().collect(),
        check_digit: chars[10],
        size_type,
    }
}
