//! Input normalization
//!
//! Container markings arrive in many shapes: `CSQU3054383`,
//! `CSQ U 305438 3`, `csqu-305438-3`. Normalization reduces them all to a
//! single canonical spelling before any validation happens.

/// Normalize a raw marking string
///
/// Removes all whitespace, underscore and hyphen characters, then
/// upper-cases the remainder. Length and character-set validation happen
/// downstream ([`crate::types::CanonicalCode::parse`] and the checksum
/// engine); this function is pure and idempotent.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}
