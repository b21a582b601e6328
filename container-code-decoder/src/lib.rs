//! Container Code Decoder Library
//!
//! A stateless, reusable library for validating and decoding ISO 6346
//! intermodal container identification codes.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Normalizes raw markings (separators stripped, upper-cased)
//! - Splits 11- and 15-character codes into typed fields at fixed offsets
//! - Computes and verifies the ISO 6346 check digit (positional-weighted
//!   modulo 11, letters valued with multiples of 11 skipped)
//! - Cross-references fields against the owner, equipment category, size
//!   and type reference tables
//!
//! The library does NOT:
//! - Format or pretty-print anything
//! - Decide process exit codes
//! - Check that a code belongs to a real, registered container
//!
//! All presentation lives in the application layer (container-code-cli).
//!
//! # Example Usage
//!
//! ```
//! use container_code_decoder::Inspector;
//!
//! let inspector = Inspector::builtin().unwrap();
//!
//! let report = inspector.inspect("CSQ U 305438 3").unwrap();
//! assert_eq!(report.code, "CSQU3054383");
//! assert!(report.check.matches);
//!
//! let report = inspector.inspect("RAIU 6900114 25U1").unwrap();
//! assert!(report.fields.size_type.is_some());
//! ```

// Public modules
pub mod checksum;
pub mod explain;
pub mod inspector;
pub mod normalize;
pub mod split;
pub mod tables;
pub mod types;
pub mod validate;

// Re-export main types for convenience
pub use explain::{CodeExplanation, SizeTypeExplanation};
pub use inspector::{CodeReport, Inspector};
pub use tables::{HeightWidth, OwnerRecord, ReferenceTables, TableStats};
pub use types::{
    CanonicalCode, CheckDigitResult, CodeForm, DecodeError, DecodedFields, Resolved, Result,
    SizeTypeCode,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: ensure the embedded tables are usable
        let inspector = Inspector::builtin().unwrap();
        let stats = inspector.table_stats();
        assert!(stats.num_owners > 0);
    }
}
