//! Identifier normalization.
//!
//! GO and CHEBI identifiers gain a `NS:` prefix, CHEMBL identifiers gain a
//! bare `CHEMBL` prefix. Only the first pair of each of these namespaces in a
//! row is rewritten. The prefix is added unconditionally, so normalizing
//! already-normalized rows double-prefixes (`GO:GO:0004707`).

use crate::builder::split_row;
use crate::db_refs::Row;
use crate::error::Result;
use crate::rows::load_rows;
use std::path::Path;

/// (namespace, prefix prepended to its identifiers)
pub const ID_PREFIXES: [(&str, &str); 3] = [
    ("GO", "GO:"),
    ("CHEBI", "CHEBI:"),
    ("CHEMBL", "CHEMBL"),
];

// ============================================================================
// Normalization
// ============================================================================

/// Return new rows with GO, CHEBI and CHEMBL identifiers prefixed.
/// Row width is preserved, including a trailing unpaired field.
pub fn normalize_rows(rows: &[Row]) -> Result<Vec<Row>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| normalize_row(row, idx))
        .collect()
}

fn normalize_row(row: &Row, idx: usize) -> Result<Row> {
    let split = split_row(row, idx)?;
    let mut identifiers: Vec<String> =
        split.identifiers.iter().map(|id| id.to_string()).collect();

    for (namespace, prefix) in ID_PREFIXES {
        let Some(pos) = split.namespaces.iter().position(|ns| *ns == namespace) else {
            continue;
        };
        identifiers[pos].insert_str(0, prefix);
    }

    let mut out = Vec::with_capacity(row.len());
    out.push(split.name.to_string());
    for (namespace, identifier) in split.namespaces.iter().zip(identifiers) {
        out.push(namespace.to_string());
        out.push(identifier);
    }
    if let Some(field) = split.unpaired {
        out.push(field.to_string());
    }
    Ok(out)
}

/// Load a grounding map file and return its rows with IDs prefixed.
pub fn update_id_prefixes(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let rows = load_rows(path)?;
    normalize_rows(&rows)
}

// ============================================================================
// Tests
// ============================================================================
