//! Field explanation
//!
//! Resolves each decoded field against the reference tables. Every lookup is
//! independent: a code missing from one table marks only that field as
//! unknown and never blocks the others. This stage has no failure modes -
//! every path yields either a resolved value or an explicit unknown marker.

use serde::Serialize;

use crate::tables::{HeightWidth, OwnerRecord, ReferenceTables};
use crate::types::{DecodedFields, Resolved};

/// Explanation of the size/type block of a long-form code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeTypeExplanation {
    /// External length for the length code
    pub length: Resolved<String>,
    /// External height and width for the height/width code
    pub height_width: Resolved<HeightWidth>,
    /// Description of the equipment type code
    pub equipment_type: Resolved<String>,
}

/// Per-field explanation of a decoded code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeExplanation {
    /// The registered owner behind the owner code
    pub owner: Resolved<OwnerRecord>,
    /// Description of the equipment category identifier
    pub category: Resolved<String>,
    /// Size/type explanations, present only for long-form codes
    pub size_type: Option<SizeTypeExplanation>,
}

fn resolve<T: Clone>(found: Option<&T>) -> Resolved<T> {
    match found {
        Some(value) => Resolved::Known(value.clone()),
        None => Resolved::Unknown,
    }
}

fn resolve_str(found: Option<&str>) -> Resolved<String> {
    match found {
        Some(value) => Resolved::Known(value.to_string()),
        None => Resolved::Unknown,
    }
}

/// Resolve every decoded field against the reference tables
pub fn explain(fields: &DecodedFields, tables: &ReferenceTables) -> CodeExplanation {
    let owner = resolve(tables.owner(&fields.owner_code));
    let category = resolve_str(tables.equipment(&fields.category_identifier.to_string()));

    let size_type = fields.size_type.as_ref().map(|st| SizeTypeExplanation {
        length: resolve_str(tables.length(&st.length_code.to_string())),
        height_width: resolve(tables.height_width(&st.height_width_code.to_string())),
        equipment_type: resolve_str(tables.equipment_type(&st.type_code)),
    });

    CodeExplanation {
        owner,
        category,
        size_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::split_code;
    use crate::types::CanonicalCode;

    fn builtin() -> ReferenceTables {
        ReferenceTables::builtin().unwrap()
    }

    #[test]
    fn test_explains_known_short_code() {
        let code = CanonicalCode::parse("CSQU3054383").unwrap();
        let explanation = explain(&split_code(&code), &builtin());

        let owner = explanation.owner.known().unwrap();
        assert_eq!(owner.company, "COSCO Container Lines");
        assert!(explanation.category.is_known());
        assert!(explanation.size_type.is_none());
    }

    #[test]
    fn test_explains_known_long_code() {
        let code = CanonicalCode::parse("RAIU690011425U1").unwrap();
        let explanation = explain(&split_code(&code), &builtin());

        let st = explanation.size_type.unwrap();
        assert_eq!(st.length.known().unwrap(), "20 ft (6058 mm)");
        assert_eq!(st.height_width.known().unwrap().height, "2895 mm");
        assert!(st.equipment_type.is_known());
    }

    #[test]
    fn test_unknown_category_does_not_block_owner() {
        // 'Q' is not an equipment category; the owner must still resolve
        let code = CanonicalCode::parse("CSQQ3054383").unwrap();
        let explanation = explain(&split_code(&code), &builtin());

        assert!(explanation.owner.is_known());
        assert_eq!(explanation.category, Resolved::Unknown);
    }

    #[test]
    fn test_unknown_fields_stay_independent_in_long_form() {
        // Unknown owner and type, known category and sizes
        let code = CanonicalCode::parse("XXXU000000020G1").unwrap();
        let explanation = explain(&split_code(&code), &builtin());

        assert_eq!(explanation.owner, Resolved::Unknown);
        assert!(explanation.category.is_known());

        let st = explanation.size_type.unwrap();
        assert!(st.length.is_known());
        assert!(st.height_width.is_known());
        assert!(st.equipment_type.is_known());
    }

    #[test]
    fn test_empty_tables_mark_everything_unknown() {
        let code = CanonicalCode::parse("CSQU3054383").unwrap();
        let explanation = explain(&split_code(&code), &ReferenceTables::new());

        assert_eq!(explanation.owner, Resolved::Unknown);
        assert_eq!(explanation.category, Resolved::Unknown);
    }
}
