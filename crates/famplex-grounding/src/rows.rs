//! Row loading and writing.
//!
//! The whole file is read into memory and split into records on terminators
//! (CRLF, LF or CR) outside quoted fields. Each record is tokenized with the
//! `csv` crate in flexible mode, so rows of differing width come back as-is.
//! Width policy is the builder's concern.
//!
//! A blank line is an empty row; the builder and normalizer reject it.

use crate::db_refs::Row;
use crate::dialect::CsvDialect;
use crate::error::{GroundingError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// ============================================================================
// Loading
// ============================================================================

/// Load all rows of a grounding map file using the default dialect.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    load_rows_with(path, &CsvDialect::default())
}

pub fn load_rows_with(path: impl AsRef<Path>, dialect: &CsvDialect) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| GroundingError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_rows(&bytes, dialect)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded grounding map rows");
    Ok(rows)
}

/// Tokenize in-memory grounding map text.
pub fn parse_rows(input: &[u8], dialect: &CsvDialect) -> Result<Vec<Row>> {
    split_records(input, dialect)?
        .iter()
        .map(|record| parse_record(record, dialect))
        .collect()
}

/// One record's bytes, without its terminator.
struct RawRecord<'a> {
    line: u64,
    bytes: &'a [u8],
}

fn split_records<'a>(input: &'a [u8], dialect: &CsvDialect) -> Result<Vec<RawRecord<'a>>> {
    let mut records = Vec::new();
    let mut line: u64 = 1;
    let mut start = 0;
    let mut start_line = 1;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0;

    while i < input.len() {
        let b = input[i];
        if in_quotes {
            if b == dialect.quote {
                if input.get(i + 1) == Some(&dialect.quote) {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            } else if b == b'\n' {
                line += 1;
            }
        } else if b == b'\r' || b == b'\n' {
            records.push(RawRecord {
                line: start_line,
                bytes: &input[start..i],
            });
            if b == b'\r' && input.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            line += 1;
            start = i + 1;
            start_line = line;
            field_start = true;
        } else if field_start && b == dialect.quote {
            in_quotes = true;
            field_start = false;
        } else {
            field_start = b == dialect.delimiter;
        }
        i += 1;
    }

    // The csv reader accepts an unterminated quoted field at EOF; reject it here.
    if in_quotes {
        return Err(GroundingError::Parse {
            line: start_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if start < input.len() {
        records.push(RawRecord {
            line: start_line,
            bytes: &input[start..],
        });
    }
    Ok(records)
}

fn parse_record(record: &RawRecord<'_>, dialect: &CsvDialect) -> Result<Row> {
    if record.bytes.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = dialect.reader_builder().from_reader(record.bytes);
    let mut fields = csv::StringRecord::new();
    reader
        .read_record(&mut fields)
        .map_err(|err| GroundingError::Parse {
            line: record.line,
            message: err.to_string(),
        })?;
    Ok(fields.iter().map(str::to_string).collect())
}

// ============================================================================
// Writing
// ============================================================================

/// Write rows with CRLF terminators and minimal quoting.
pub fn write_rows(path: impl AsRef<Path>, rows: &[Row]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| GroundingError::Write { source })?;
    write_rows_to(file, rows, &CsvDialect::default())?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "wrote grounding map rows");
    Ok(())
}

pub fn write_rows_to<W: Write>(writer: W, rows: &[Row], dialect: &CsvDialect) -> Result<()> {
    let mut wtr = dialect.writer_builder().from_writer(writer);
    for (idx, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(GroundingError::EmptyRow { row: idx });
        }
        wtr.write_record(row)?;
    }
    wtr.flush().map_err(|source| GroundingError::Write { source })
}

// ============================================================================
// Tests
// ============================================================================
