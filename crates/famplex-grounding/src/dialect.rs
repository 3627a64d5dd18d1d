//! File dialect and build options.
//!
//! Grounding map files are comma-delimited, double-quote-quoted and
//! CRLF-terminated, with minimal quoting. Both structs deserialize with
//! defaults so a pipeline config can override a single field.

use serde::{Deserialize, Serialize};

// ============================================================================
// File dialect
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvDialect {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for CsvDialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvDialect {
    pub(crate) fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(true)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::None);
        builder
    }

    pub(crate) fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(true)
            .has_headers(false)
            .flexible(true)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::CRLF);
        builder
    }
}

// ============================================================================
// Build options
// ============================================================================

/// How the builder treats rows of inconsistent width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowWidthPolicy {
    /// Accept any width; a trailing unpaired field is dropped.
    #[default]
    Permissive,
    /// Every row must have the first row's width, and that width must be odd.
    Uniform,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub width_policy: RowWidthPolicy,
}

impl BuildOptions {
    pub fn uniform() -> Self {
        Self {
            width_policy: RowWidthPolicy::Uniform,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
