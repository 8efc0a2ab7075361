//! # linecsv
//!
//! Line-oriented CSV tokenizer. Reads a text stream one line at a time and
//! splits each line into comma-delimited fields, honoring double-quoted fields.
//!
//! ## Features
//!
//! - **Incremental**: one line in memory at a time, any [`std::io::BufRead`] as input
//! - **Quoted fields**: commas inside quotes are literal, `""` is an escaped quote
//! - **Quote validation**: lines with an odd number of `"` are rejected
//! - **Clean termination**: end of stream is a value, not an error
//!
//! ## Quick Start
//!
//! ```
//! use linecsv::csv::{LineParser, LineRead};
//!
//! let mut input = "a,\"b,c\",d\nlast".as_bytes();
//! let mut parser = LineParser::new();
//!
//! loop {
//!     match parser.read_line(&mut input).unwrap() {
//!         LineRead::Line(_) => assert_eq!(parser.field_count(), 3),
//!         LineRead::Last(line) => {
//!             assert_eq!(line, "last");
//!             break;
//!         }
//!         LineRead::EndOfStream => break,
//!     }
//! }
//! ```
//!
//! ## Limitations
//!
//! - Quoted fields cannot span lines
//! - The delimiter is always `,` and the quote character always `"`

pub mod csv;
pub mod csv_reader;
pub mod error;

pub use csv::{LineParser, LineRead};
pub use csv_reader::CsvLineReader;
pub use error::{CsvError, Result};
