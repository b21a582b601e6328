//! Main inspection API
//!
//! This module provides the primary interface for the decoder library. The
//! Inspector struct owns the reference tables and runs the whole pipeline
//! for a raw marking string: normalize, parse, split, validate, explain.

use serde::Serialize;

use crate::explain::{explain, CodeExplanation};
use crate::normalize::normalize;
use crate::split::split_code;
use crate::tables::{ReferenceTables, TableStats};
use crate::types::{CanonicalCode, CheckDigitResult, CodeForm, DecodedFields, Result};
use crate::validate::validate;

/// The structured result of inspecting one container code
///
/// Carries everything a presentation layer needs: the normalized code and
/// its form, the decoded fields, the check digit verdict and the per-field
/// reference table explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeReport {
    /// The normalized canonical code text
    pub code: String,
    /// Short (11 characters) or long (15 characters) form
    pub form: CodeForm,
    /// Fields split at the fixed ISO 6346 offsets
    pub fields: DecodedFields,
    /// Check digit comparison result
    pub check: CheckDigitResult,
    /// Per-field reference table lookups
    pub explanation: CodeExplanation,
}

/// The main inspector struct - entry point for all decoding operations
pub struct Inspector {
    /// Reference tables injected at construction, read-only afterwards
    tables: ReferenceTables,
}

impl Inspector {
    /// Create an inspector over an explicit table set
    pub fn new(tables: ReferenceTables) -> Self {
        Self { tables }
    }

    /// Create an inspector over the crate's embedded tables
    ///
    /// # Example
    /// ```
    /// use container_code_decoder::Inspector;
    ///
    /// let inspector = Inspector::builtin().unwrap();
    /// let report = inspector.inspect("CSQ U 305438 3").unwrap();
    /// assert!(report.check.matches);
    /// ```
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(ReferenceTables::builtin()?))
    }

    /// Mutable access to the reference tables, for loading override files
    pub fn tables_mut(&mut self) -> &mut ReferenceTables {
        &mut self.tables
    }

    /// Get statistics about the loaded reference tables
    pub fn table_stats(&self) -> TableStats {
        self.tables.stats()
    }

    /// Inspect a raw marking string
    ///
    /// Runs the full pipeline: normalization, length check, fixed-offset
    /// splitting, check digit validation and reference table explanation.
    ///
    /// # Arguments
    /// * `raw` - The marking as typed by a caller, separators and casing
    ///   included (e.g. `"CSQ U 305438 3"`)
    ///
    /// # Returns
    /// * `Ok(CodeReport)` - The structured result; a failed check digit is
    ///   a normal report with `check.matches == false`
    /// * `Err(DecodeError::InvalidLength)` - Normalized length is not 11 or 15
    /// * `Err(DecodeError::MalformedCharacter)` - The checksum prefix holds
    ///   a character outside the ISO 6346 value table
    pub fn inspect(&self, raw: &str) -> Result<CodeReport> {
        let normalized = normalize(raw);
        log::debug!("normalized \"{}\" to \"{}\"", raw, normalized);

        let code = CanonicalCode::parse(&normalized)?;
        let fields = split_code(&code);
        let check = validate(&code)?;
        let explanation = explain(&fields, &self.tables);

        log::debug!(
            "inspected {} ({} form): check digit {}",
            code.as_str(),
            code.form(),
            if check.matches { "ok" } else { "mismatch" }
        );

        Ok(CodeReport {
            code: normalized,
            form: code.form(),
            fields,
            check,
            explanation,
        })
    }
}
