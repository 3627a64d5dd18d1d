//! FamPlex grounding map support.
//!
//! A grounding map is a CSV file (comma-delimited, double-quoted, CRLF
//! terminated) whose rows associate an entity name with up to three
//! namespace/identifier pairs:
//!
//! ```text
//! ABC1,HGNC,21,,,,
//! MAPK1,GO,0004707,UP,P28482,,
//! XYZ,,,,,,
//! ```
//!
//! This crate:
//! - loads rows from such a file ([`load_rows`]) and writes them back ([`write_rows`])
//! - builds a name -> [`Grounding`] lookup table ([`build_grounding_map`])
//! - rewrites GO/CHEBI/CHEMBL identifiers to prefixed form ([`normalize_rows`])
//!
//! Everything is loaded into memory; each call builds a fresh result.

pub mod builder;
pub mod db_refs;
pub mod dialect;
pub mod error;
pub mod normalize;
pub mod rows;

pub use builder::{build_grounding_map, build_grounding_map_with, load_grounding_map};
pub use db_refs::{DbRefs, Grounding, GroundingMap, Row, TEXT_NAMESPACE};
pub use dialect::{BuildOptions, CsvDialect, RowWidthPolicy};
pub use error::{GroundingError, Result};
pub use normalize::{normalize_rows, update_id_prefixes, ID_PREFIXES};
pub use rows::{load_rows, load_rows_with, parse_rows, write_rows, write_rows_to};
