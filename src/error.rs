//! Error types for line-oriented CSV parsing

use thiserror::Error;

/// Result type for linecsv operations
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors produced while reading or querying CSV lines
///
/// End of stream is not an error; see [`LineRead`](crate::csv::LineRead).
#[derive(Error, Debug)]
pub enum CsvError {
    /// A line carried an odd number of `"` characters
    #[error("excess or missing \" in quoted-field (line {line})")]
    QuoteImbalance {
        /// 1-based number of the offending physical line
        line: u64,
    },

    /// A field was requested outside `0..count`
    #[error("wrong number of fields: index {index} out of range for {count} field(s)")]
    FieldIndexOutOfRange {
        /// Requested field index
        index: usize,
        /// Number of fields in the last parsed line
        count: usize,
    },

    /// Underlying stream failure, passed through untouched
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CsvError {
    /// Check if this is a quote balance failure
    pub fn is_quote_imbalance(&self) -> bool {
        matches!(self, CsvError::QuoteImbalance { .. })
    }

    /// Check if this is an out-of-range field access
    pub fn is_field_index_out_of_range(&self) -> bool {
        matches!(self, CsvError::FieldIndexOutOfRange { .. })
    }
}
