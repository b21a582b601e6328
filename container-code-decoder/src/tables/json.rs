//! JSON reference table parsing
//!
//! Reference tables ship as JSON objects keyed by code string: owners map
//! to a company/city/country record, sizes bundle the length and
//! height/width maps into one document, and the remaining tables are plain
//! code-to-description maps.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{HeightWidth, OwnerRecord};
use crate::types::{DecodeError, Result};

/// The two size maps bundled in one sizes document
#[derive(Debug, Clone, Deserialize)]
pub struct SizeTables {
    pub length: HashMap<String, String>,
    #[serde(rename = "heightWidth")]
    pub height_width: HashMap<String, HeightWidth>,
}

fn parse_error(table: &str, reason: impl ToString) -> DecodeError {
    DecodeError::TableParse {
        table: table.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse an owners document: `{"CSQ": {"company": ..., "city": ..., "country": ...}, ...}`
pub fn parse_owners(content: &str) -> Result<HashMap<String, OwnerRecord>> {
    serde_json::from_str(content).map_err(|e| parse_error("owner", e))
}

/// Parse an equipment category document: `{"U": "freight container", ...}`
pub fn parse_equipment(content: &str) -> Result<HashMap<String, String>> {
    serde_json::from_str(content).map_err(|e| parse_error("equipment", e))
}

/// Parse a sizes document carrying both the length and height/width maps
pub fn parse_sizes(content: &str) -> Result<SizeTables> {
    serde_json::from_str(content).map_err(|e| parse_error("size", e))
}

/// Parse a type document: `{"G1": "general purpose container", ...}`
pub fn parse_types(content: &str) -> Result<HashMap<String, String>> {
    serde_json::from_str(content).map_err(|e| parse_error("type", e))
}

/// Read and parse an owners file
pub fn load_owners_file(path: &Path) -> Result<HashMap<String, OwnerRecord>> {
    parse_owners(&fs::read_to_string(path)?)
}

/// Read and parse an equipment category file
pub fn load_equipment_file(path: &Path) -> Result<HashMap<String, String>> {
    parse_equipment(&fs::read_to_string(path)?)
}

/// Read and parse a sizes file
pub fn load_sizes_file(path: &Path) -> Result<SizeTables> {
    parse_sizes(&fs::read_to_string(path)?)
}

/// Read and parse a type file
pub fn load_types_file(path: &Path) -> Result<HashMap<String, String>> {
    parse_types(&fs::read_to_string(path)?)
}
