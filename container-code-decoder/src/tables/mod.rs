//! Reference tables
//!
//! Four read-only mappings cross-referenced by the field explainer: owners,
//! equipment categories, sizes (length and height/width) and equipment
//! types. Tables are built once - from the embedded data or from external
//! JSON files - and passed by reference into the core functions; nothing in
//! the library mutates them afterwards.

pub mod json;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::types::Result;

/// A registered owner entry (BIC code → organization)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRecord {
    pub company: String,
    pub city: String,
    pub country: String,
}

/// External height and width for a height/width code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightWidth {
    pub height: String,
    pub width: String,
}

/// The unified reference table set
///
/// Keys are the fixed-width code strings exactly as they appear in a
/// canonical code: 3 letters for owners, 1 character for equipment
/// categories, length and height/width codes, 2 characters for types.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    owners: HashMap<String, OwnerRecord>,
    equipment: HashMap<String, String>,
    lengths: HashMap<String, String>,
    height_widths: HashMap<String, HeightWidth>,
    types: HashMap<String, String>,
}

impl ReferenceTables {
    /// Create an empty table set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table set embedded in the crate
    ///
    /// The embedded tables carry the standard equipment categories, size
    /// codes and common type codes, plus a set of registered owner
    /// prefixes. Any table can be replaced from an external JSON file with
    /// the `load_*` methods.
    pub fn builtin() -> Result<Self> {
        let mut tables = Self::new();

        tables.owners = json::parse_owners(include_str!("../../data/owners.json"))?;
        tables.equipment = json::parse_equipment(include_str!("../../data/equipment.json"))?;
        let sizes = json::parse_sizes(include_str!("../../data/sizes.json"))?;
        tables.lengths = sizes.length;
        tables.height_widths = sizes.height_width;
        tables.types = json::parse_types(include_str!("../../data/types.json"))?;

        log::debug!("built-in reference tables loaded: {:?}", tables.stats());
        Ok(tables)
    }

    /// Replace the owner table from a JSON file
    pub fn load_owners(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading owner table: {:?}", path);
        self.owners = json::load_owners_file(path)?;
        log::info!("Owner table loaded: {} entries", self.owners.len());
        Ok(())
    }

    /// Replace the equipment category table from a JSON file
    pub fn load_equipment(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading equipment table: {:?}", path);
        self.equipment = json::load_equipment_file(path)?;
        log::info!("Equipment table loaded: {} entries", self.equipment.len());
        Ok(())
    }

    /// Replace both size tables (length and height/width) from a JSON file
    pub fn load_sizes(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading size tables: {:?}", path);
        let sizes = json::load_sizes_file(path)?;
        self.lengths = sizes.length;
        self.height_widths = sizes.height_width;
        log::info!(
            "Size tables loaded: {} length, {} height/width entries",
            self.lengths.len(),
            self.height_widths.len()
        );
        Ok(())
    }

    /// Replace the type table from a JSON file
    pub fn load_types(&mut self, path: &Path) -> Result<()> {
        log::info!("Loading type table: {:?}", path);
        self.types = json::load_types_file(path)?;
        log::info!("Type table loaded: {} entries", self.types.len());
        Ok(())
    }

    /// Look up an owner code (3 letters)
    pub fn owner(&self, code: &str) -> Option<&OwnerRecord> {
        self.owners.get(code)
    }

    /// Look up an equipment category identifier (1 letter)
    pub fn equipment(&self, code: &str) -> Option<&str> {
        self.equipment.get(code).map(String::as_str)
    }

    /// Look up a length code (1 character)
    pub fn length(&self, code: &str) -> Option<&str> {
        self.lengths.get(code).map(String::as_str)
    }

    /// Look up a height/width code (1 character)
    pub fn height_width(&self, code: &str) -> Option<&HeightWidth> {
        self.height_widths.get(code)
    }

    /// Look up a type code (2 characters)
    pub fn equipment_type(&self, code: &str) -> Option<&str> {
        self.types.get(code).map(String::as_str)
    }

    /// Entry counts for each table
    pub fn stats(&self) -> TableStats {
        TableStats {
            num_owners: self.owners.len(),
            num_equipment: self.equipment.len(),
            num_lengths: self.lengths.len(),
            num_height_widths: self.height_widths.len(),
            num_types: self.types.len(),
        }
    }
}

/// Reference table statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub num_owners: usize,
    pub num_equipment: usize,
    pub num_lengths: usize,
    pub num_height_widths: usize,
    pub num_types: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tables() {
        let tables = ReferenceTables::new();
        let stats = tables.stats();
        assert_eq!(stats.num_owners, 0);
        assert_eq!(stats.num_types, 0);
        assert!(tables.owner("CSQ").is_none());
    }

    #[test]
    fn test_builtin_tables_load() {
        let tables = ReferenceTables::builtin().unwrap();
        let stats = tables.stats();
        assert!(stats.num_owners > 0);
        assert!(stats.num_equipment >= 3); // at least U, J, Z
        assert!(stats.num_lengths > 0);
        assert!(stats.num_height_widths > 0);
        assert!(stats.num_types > 0);
    }

    #[test]
    fn test_builtin_lookups() {
        let tables = ReferenceTables::builtin().unwrap();

        let owner = tables.owner("CSQ").unwrap();
        assert!(!owner.company.is_empty());

        assert!(tables.equipment("U").is_some());
        assert!(tables.equipment("Q").is_none());

        assert!(tables.length("2").is_some());
        let hw = tables.height_width("0").unwrap();
        assert!(hw.height.ends_with("mm"));

        assert!(tables.equipment_type("U1").is_some());
        assert!(tables.equipment_type("ZZ").is_none());
    }
}
