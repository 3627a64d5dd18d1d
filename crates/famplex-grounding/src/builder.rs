//! Grounding map construction from loaded rows.

use crate::db_refs::{DbRefs, Grounding, GroundingMap, Row, TEXT_NAMESPACE};
use crate::dialect::{BuildOptions, RowWidthPolicy};
use crate::error::{GroundingError, Result};
use crate::rows::load_rows;
use std::path::Path;

// ============================================================================
// Row splitting
// ============================================================================

/// A row split into its entity name and namespace/identifier columns.
///
/// `namespaces` and `identifiers` always have equal length. A trailing field
/// left over when the row width is even is kept in `unpaired`.
#[derive(Debug)]
pub(crate) struct SplitRow<'a> {
    pub name: &'a str,
    pub namespaces: Vec<&'a str>,
    pub identifiers: Vec<&'a str>,
    pub unpaired: Option<&'a str>,
}

impl<'a> SplitRow<'a> {
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.namespaces
            .iter()
            .copied()
            .zip(self.identifiers.iter().copied())
    }
}

pub(crate) fn split_row(row: &Row, idx: usize) -> Result<SplitRow<'_>> {
    let (name, rest) = row
        .split_first()
        .ok_or(GroundingError::EmptyRow { row: idx })?;

    let chunks = rest.chunks_exact(2);
    let unpaired = chunks.remainder().first().map(String::as_str);
    let (namespaces, identifiers): (Vec<&str>, Vec<&str>) = chunks
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .unzip();

    Ok(SplitRow {
        name: name.as_str(),
        namespaces,
        identifiers,
        unpaired,
    })
}

// ============================================================================
// Building
// ============================================================================

fn check_width(row: &Row, idx: usize, expected: usize) -> Result<()> {
    if row.len() != expected {
        return Err(GroundingError::RaggedRow {
            row: idx,
            expected,
            found: row.len(),
        });
    }
    if row.len() % 2 == 0 {
        return Err(GroundingError::UnpairedField {
            row: idx,
            width: row.len(),
        });
    }
    Ok(())
}

/// Build a grounding map with the permissive width policy.
pub fn build_grounding_map(rows: &[Row]) -> Result<GroundingMap> {
    build_grounding_map_with(rows, &BuildOptions::default())
}

pub fn build_grounding_map_with(rows: &[Row], options: &BuildOptions) -> Result<GroundingMap> {
    let expected_width = rows.first().map(Vec::len).unwrap_or(0);
    let mut gmap = GroundingMap::new();

    for (idx, row) in rows.iter().enumerate() {
        let split = split_row(row, idx)?;
        if options.width_policy == RowWidthPolicy::Uniform {
            check_width(row, idx, expected_width)?;
        }
        if let Some(field) = split.unpaired {
            tracing::debug!(row = idx, field, "dropping trailing unpaired field");
        }

        let mut refs = DbRefs::new(split.name);
        for (namespace, identifier) in split.pairs() {
            match (namespace.is_empty(), identifier.is_empty()) {
                (true, true) => continue,
                (false, false) => {}
                _ => {
                    tracing::warn!(
                        row = idx,
                        namespace,
                        identifier,
                        "skipping half-blank reference pair"
                    );
                    continue;
                }
            }
            if namespace == TEXT_NAMESPACE {
                tracing::warn!(row = idx, identifier, "ignoring explicit TEXT reference");
                continue;
            }
            refs.insert(namespace, identifier);
        }

        let name = split.name.to_string();
        if gmap.insert(name, Grounding::from_db_refs(refs)).is_some() {
            tracing::debug!(row = idx, name = split.name, "duplicate entity name, later row wins");
        }
    }

    tracing::debug!(
        entries = gmap.len(),
        grounded = gmap.grounded_count(),
        "built grounding map"
    );
    Ok(gmap)
}

/// Load a grounding map file and build its lookup table.
pub fn load_grounding_map(path: impl AsRef<Path>) -> Result<GroundingMap> {
    let rows = load_rows(path)?;
    build_grounding_map(&rows)
}

// ============================================================================
// Tests
// ============================================================================
