//! Stateful line-by-line CSV parser

use super::tokenizer::{quotes_balanced, split_fields, trim_line_ending};
use crate::error::{CsvError, Result};
use std::io::{self, BufRead};

/// Outcome of a single [`LineParser::read_line`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// A newline-terminated line; more input may follow
    Line(String),
    /// The final line of the stream, which had no trailing newline
    Last(String),
    /// Nothing left to read
    EndOfStream,
}

impl LineRead {
    /// Get the line content, if any
    pub fn line(&self) -> Option<&str> {
        match self {
            LineRead::Line(line) | LineRead::Last(line) => Some(line),
            LineRead::EndOfStream => None,
        }
    }

    /// Take the line content, if any
    pub fn into_line(self) -> Option<String> {
        match self {
            LineRead::Line(line) | LineRead::Last(line) => Some(line),
            LineRead::EndOfStream => None,
        }
    }

    /// True when no further reads can produce data
    pub fn is_end_of_stream(&self) -> bool {
        !matches!(self, LineRead::Line(_))
    }
}

/// Incremental CSV parser holding the fields of the last line read
///
/// The parser does not own its input: every call to [`read_line`](Self::read_line)
/// receives the stream, so the caller keeps control of its lifecycle. Pass the
/// same `BufRead` on every call, otherwise bytes buffered past a line end are lost.
///
/// A single instance must not be shared between threads without external
/// synchronization.
///
/// # Examples
///
/// ```
/// use linecsv::csv::{LineParser, LineRead};
///
/// let mut input = "name,note\nalice,\"likes \"\"tea\"\", mostly\"".as_bytes();
/// let mut parser = LineParser::new();
///
/// assert!(matches!(parser.read_line(&mut input).unwrap(), LineRead::Line(_)));
/// assert_eq!(parser.field(1).unwrap(), "note");
///
/// let last = parser.read_line(&mut input).unwrap();
/// assert!(last.is_end_of_stream());
/// assert_eq!(parser.field_count(), 2);
/// assert_eq!(parser.field(1).unwrap(), "likes \"tea\", mostly");
///
/// assert_eq!(parser.read_line(&mut input).unwrap(), LineRead::EndOfStream);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    last_line: Option<String>,
    fields: Vec<String>,
    field_count: usize,
    lines_read: u64,
}

impl LineParser {
    /// Create a parser in the empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the next line from `reader` and split it into fields
    ///
    /// Trailing `\r`/`\n` are stripped before validation. A line with an odd
    /// number of `"` fails with [`CsvError::QuoteImbalance`]; the line is
    /// consumed but the parser keeps the fields of the previous good line.
    ///
    /// Returns [`LineRead::Last`] for a final line without a newline and
    /// [`LineRead::EndOfStream`] once the stream is exhausted.
    pub fn read_line<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> Result<LineRead> {
        let mut buf = Vec::new();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(LineRead::EndOfStream);
        }

        // Undecodable lines still count toward line numbers
        self.lines_read += 1;
        let mut line =
            String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let terminated = line.ends_with('\n');
        trim_line_ending(&mut line);

        if !quotes_balanced(&line) {
            return Err(CsvError::QuoteImbalance {
                line: self.lines_read,
            });
        }

        self.fields = split_fields(&line);
        self.field_count = self.fields.len();
        self.last_line = Some(line.clone());

        if terminated {
            Ok(LineRead::Line(line))
        } else {
            Ok(LineRead::Last(line))
        }
    }

    /// Get a field of the last successfully parsed line
    pub fn field(&self, index: usize) -> Result<&str> {
        if index >= self.field_count {
            return Err(CsvError::FieldIndexOutOfRange {
                index,
                count: self.field_count,
            });
        }
        Ok(&self.fields[index])
    }

    /// Number of fields in the last successfully parsed line, 0 before any
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// All fields of the last successfully parsed line
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The last successfully parsed line, line ending stripped
    pub fn last_line(&self) -> Option<&str> {
        self.last_line.as_deref()
    }

    /// Physical lines consumed so far, rejected ones included
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}
