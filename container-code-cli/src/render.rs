//! Report rendering
//!
//! Turns a structured [`CodeReport`] into the annotated ASCII diagram shown
//! on the terminal. All formatting decisions live here; the decoder library
//! only returns data.

use container_code_decoder::{
    CodeReport, HeightWidth, OwnerRecord, Resolved, SizeTypeCode, SizeTypeExplanation, TableStats,
};

/// Indentation that aligns follow-up owner lines under the owner column
const OWNER_INDENT: &str = "                                 ";

fn validity_marker(matches: bool) -> &'static str {
    if matches {
        "\u{2714}" // ✔
    } else {
        "\u{2718}" // ✘
    }
}

fn check_digit_report(report: &CodeReport) -> String {
    if report.check.matches {
        String::new()
    } else {
        format!(
            "\u{2718} CHECK DIGIT ERROR. Correct check digit is: {}",
            report.check.expected
        )
    }
}

fn owner_text(owner: &Resolved<OwnerRecord>) -> String {
    match owner {
        Resolved::Known(rec) => format!(
            "{}\n{indent}{}\n{indent}{}",
            rec.company,
            rec.city,
            rec.country,
            indent = OWNER_INDENT
        ),
        Resolved::Unknown => "\u{2718} unknown owner".to_string(),
    }
}

fn category_text(category: &Resolved<String>) -> String {
    match category {
        Resolved::Known(desc) => desc.clone(),
        Resolved::Unknown => "\u{2718} unknown equipment category".to_string(),
    }
}

fn length_text(length: &Resolved<String>) -> String {
    match length {
        Resolved::Known(desc) => desc.clone(),
        Resolved::Unknown => "\u{2718} unknown length code".to_string(),
    }
}

fn height_width_text(hw: &Resolved<HeightWidth>) -> (String, String) {
    match hw {
        Resolved::Known(pair) => (pair.height.clone(), pair.width.clone()),
        Resolved::Unknown => (
            "\u{2718} unknown height".to_string(),
            "\u{2718} unknown width".to_string(),
        ),
    }
}

fn type_text(ty: &Resolved<String>) -> String {
    match ty {
        Resolved::Known(desc) => desc.clone(),
        Resolved::Unknown => "\u{2718} unknown type".to_string(),
    }
}

/// Render the annotated field diagram for a report
pub fn render_report(report: &CodeReport) -> String {
    // Long-form reports carry both the size/type fields and their
    // explanations; anything else renders as the short diagram.
    match (&report.fields.size_type, &report.explanation.size_type) {
        (Some(st), Some(explained)) => render_long(report, st, explained),
        _ => render_short(report),
    }
}

fn render_short(report: &CodeReport) -> String {
    let f = &report.fields;
    format!(
        "
  {owner} {cat} {serial} {check} {validation}
    \u{2191} \u{2191}      \u{2191} \u{2191}
    \u{2502} \u{2502}      \u{2502} \u{2502}
    \u{2502} \u{2502}      \u{2502} \u{2514}\u{2500}\u{2500}\u{2500} check digit: {check} {check_report}
    \u{2502} \u{2502}      \u{2514}\u{2500}\u{2500}\u{2500} serial number: {serial}
    \u{2502} \u{2502}
    \u{2502} \u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500} category: {category}
    \u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500} owner: {owner_desc}
",
        owner = f.owner_code,
        cat = f.category_identifier,
        serial = f.serial_number,
        check = f.check_digit,
        validation = validity_marker(report.check.matches),
        check_report = check_digit_report(report),
        category = category_text(&report.explanation.category),
        owner_desc = owner_text(&report.explanation.owner),
    )
}

fn render_long(report: &CodeReport, st: &SizeTypeCode, explained: &SizeTypeExplanation) -> String {
    let f = &report.fields;
    let (height, width) = height_width_text(&explained.height_width);

    format!(
        "
  {owner} {cat} {serial} {check}  {len} {hw} {ty} {validation}
    \u{2191} \u{2191}      \u{2191} \u{2191}  \u{2191} \u{2191} \u{2191}
    \u{2502} \u{2502}      \u{2502} \u{2502}  \u{2502} \u{2502} \u{2502}
    \u{2502} \u{2502}      \u{2502} \u{2502}  \u{2502} \u{2502} \u{2514}\u{2500}\u{2500}\u{2500} type: {type_desc}
    \u{2502} \u{2502}      \u{2502} \u{2502}  \u{2502} \u{2514}\u{2500}\u{2500}\u{2500} height: {height}
    \u{2502} \u{2502}      \u{2502} \u{2502}  \u{2502}       width: {width}
    \u{2502} \u{2502}      \u{2502} \u{2502}  \u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500} length: {length}
    \u{2502} \u{2502}      \u{2502} \u{2502}
    \u{2502} \u{2502}      \u{2502} \u{2514}\u{2500}\u{2500}\u{2500} check digit: {check} {check_report}
    \u{2502} \u{2502}      \u{2514}\u{2500}\u{2500}\u{2500} serial number: {serial}
    \u{2502} \u{2502}
    \u{2502} \u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500} category: {category}
    \u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500} owner: {owner_desc}
",
        owner = f.owner_code,
        cat = f.category_identifier,
        serial = f.serial_number,
        check = f.check_digit,
        len = st.length_code,
        hw = st.height_width_code,
        ty = st.type_code,
        validation = validity_marker(report.check.matches),
        type_desc = type_text(&explained.equipment_type),
        height = height,
        width = width,
        length = length_text(&explained.length),
        check_report = check_digit_report(report),
        category = category_text(&report.explanation.category),
        owner_desc = owner_text(&report.explanation.owner),
    )
}

/// One-line-per-table entry count summary
pub fn render_table_summary(stats: &TableStats) -> String {
    format!(
        "  reference tables:\n    owners      : {}\n    equipment   : {}\n    lengths     : {}\n    height/width: {}\n    types       : {}",
        stats.num_owners,
        stats.num_equipment,
        stats.num_lengths,
        stats.num_height_widths,
        stats.num_types
    )
}
