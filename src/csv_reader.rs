//! Row-oriented CSV reading over any buffered stream

use crate::csv::{LineParser, LineRead};
use crate::error::{CsvError, Result};
use log::{debug, warn};
use std::io::BufRead;

/// CSV reader yielding one row of fields per line
///
/// Wraps a [`LineParser`] together with the stream it reads from. Memory
/// usage is bounded by the longest line.
///
/// # Examples
///
/// ```
/// use linecsv::CsvLineReader;
///
/// let data = "id,name\n1,\"Smith, Alice\"\n2,Bob";
/// let mut reader = CsvLineReader::new(data.as_bytes()).has_header(true);
///
/// let rows: Vec<Vec<String>> = reader.rows().collect::<Result<_, _>>().unwrap();
/// assert_eq!(reader.headers(), Some(&["id".to_string(), "name".to_string()][..]));
/// assert_eq!(rows, vec![vec!["1", "Smith, Alice"], vec!["2", "Bob"]]);
/// ```
///
/// # Skipping malformed lines
///
/// ```
/// use linecsv::CsvLineReader;
///
/// let data = "a,b\n\"broken,line\nc,d\n";
/// let mut reader = CsvLineReader::new(data.as_bytes()).skip_malformed(true);
///
/// let rows: Vec<Vec<String>> = reader.rows().collect::<Result<_, _>>().unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(reader.skipped_count(), 1);
/// ```
pub struct CsvLineReader<R> {
    reader: R,
    parser: LineParser,

    // State
    row_count: u64,
    skipped_count: u64,
    finished: bool,
    headers: Option<Vec<String>>,

    // Configuration
    has_header: bool,
    skip_malformed: bool,
}

impl<R: BufRead> CsvLineReader<R> {
    /// Create a reader over a buffered stream
    ///
    /// Wrap files and sockets in [`std::io::BufReader`] first.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            parser: LineParser::new(),
            row_count: 0,
            skipped_count: 0,
            finished: false,
            headers: None,
            has_header: false,
            skip_malformed: false,
        }
    }

    /// Indicate that the first row contains headers (builder pattern)
    ///
    /// The first successfully parsed row is stored and accessible via
    /// `headers()`; it is not returned by `read_row()`.
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Skip lines with unbalanced quotes instead of failing (builder pattern)
    ///
    /// Skipped lines are logged at `warn` level and counted.
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }

    /// Get header row if available
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// Read a single data row
    ///
    /// Returns `Ok(None)` at end of stream. An I/O error ends the reader;
    /// a quote error does not, the next call continues with the following line.
    pub fn read_row(&mut self) -> Result<Option<Vec<String>>> {
        loop {
            if self.finished {
                return Ok(None);
            }

            let read = match self.parser.read_line(&mut self.reader) {
                Ok(read) => read,
                Err(e) if self.skip_malformed && e.is_quote_imbalance() => {
                    warn!("Skipping malformed CSV line: {}", e);
                    self.skipped_count += 1;
                    continue;
                }
                Err(e) => {
                    if matches!(e, CsvError::Io(_)) {
                        self.finished = true;
                    }
                    return Err(e);
                }
            };

            match read {
                LineRead::EndOfStream => {
                    self.finish();
                    return Ok(None);
                }
                LineRead::Last(_) => self.finish(),
                LineRead::Line(_) => {}
            }

            let fields = self.parser.fields().to_vec();

            if self.has_header && self.headers.is_none() {
                debug!("Captured CSV header with {} field(s)", fields.len());
                self.headers = Some(fields);
                continue;
            }

            self.row_count += 1;
            return Ok(Some(fields));
        }
    }

    /// Get iterator over rows
    pub fn rows(&mut self) -> CsvRowIterator<'_, R> {
        CsvRowIterator { reader: self }
    }

    /// Number of data rows returned so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Number of malformed lines skipped so far
    pub fn skipped_count(&self) -> u64 {
        self.skipped_count
    }

    /// The underlying parser, holding the fields of the last good line
    pub fn parser(&self) -> &LineParser {
        &self.parser
    }

    /// Unwrap the reader, returning the stream
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn finish(&mut self) {
        self.finished = true;
        debug!(
            "CSV stream exhausted after {} line(s): {} row(s), {} skipped",
            self.parser.lines_read(),
            self.row_count,
            self.skipped_count
        );
    }
}

/// Iterator over CSV rows
pub struct CsvRowIterator<'a, R> {
    reader: &'a mut CsvLineReader<R>,
}

impl<'a, R: BufRead> Iterator for CsvRowIterator<'a, R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_row().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read};

    #[test]
    fn test_read_rows() -> Result<()> {
        let data = "Name,Age,City\nAlice,30,NYC\nBob,25,SF\n";
        let mut reader = CsvLineReader::new(data.as_bytes());

        let mut rows = vec![];
        for row_result in reader.rows() {
            rows.push(row_result?);
        }

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Name", "Age", "City"]);
        assert_eq!(rows[1], vec!["Alice", "30", "NYC"]);
        assert_eq!(reader.row_count(), 3);
        assert_eq!(reader.headers(), None);
        Ok(())
    }

    #[test]
    fn test_read_with_headers() -> Result<()> {
        let data = "ID,Name\n1,Alice\n2,Bob";
        let mut reader = CsvLineReader::new(data.as_bytes()).has_header(true);
        assert_eq!(reader.headers(), None); // Not read yet

        let rows: Vec<_> = reader.rows().collect::<Result<_>>()?;

        assert_eq!(
            reader.headers(),
            Some(&["ID".to_string(), "Name".to_string()][..])
        );
        assert_eq!(rows, vec![vec!["1", "Alice"], vec!["2", "Bob"]]);
        assert_eq!(reader.row_count(), 2);
        Ok(())
    }

    #[test]
    fn test_header_only() -> Result<()> {
        let mut reader = CsvLineReader::new("a,b\n".as_bytes()).has_header(true);
        assert_eq!(reader.read_row()?, None);
        assert_eq!(reader.headers().map(<[String]>::len), Some(2));
        Ok(())
    }

    #[test]
    fn test_quote_error_surfaces_and_reading_continues() -> Result<()> {
        let data = "a,b\n\"bad\nc,d\n";
        let mut reader = CsvLineReader::new(data.as_bytes());

        assert_eq!(reader.read_row()?, Some(vec!["a".into(), "b".into()]));
        let err = reader.read_row().unwrap_err();
        assert!(matches!(err, CsvError::QuoteImbalance { line: 2 }));
        assert_eq!(reader.read_row()?, Some(vec!["c".into(), "d".into()]));
        assert_eq!(reader.read_row()?, None);
        Ok(())
    }

    #[test]
    fn test_skip_malformed() -> Result<()> {
        let data = "\"bad\nok,1\nalso \"bad\nok,2";
        let mut reader = CsvLineReader::new(data.as_bytes()).skip_malformed(true);

        let rows: Vec<_> = reader.rows().collect::<Result<_>>()?;
        assert_eq!(rows, vec![vec!["ok", "1"], vec!["ok", "2"]]);
        assert_eq!(reader.skipped_count(), 2);
        assert_eq!(reader.parser().lines_read(), 4);
        Ok(())
    }

    #[test]
    fn test_skipped_line_is_not_header() -> Result<()> {
        let data = "\"bad\nh1,h2\nv1,v2\n";
        let mut reader = CsvLineReader::new(data.as_bytes())
            .has_header(true)
            .skip_malformed(true);

        assert_eq!(reader.read_row()?, Some(vec!["v1".into(), "v2".into()]));
        assert_eq!(
            reader.headers(),
            Some(&["h1".to_string(), "h2".to_string()][..])
        );
        Ok(())
    }

    #[test]
    fn test_empty_stream() -> Result<()> {
        let mut reader = CsvLineReader::new(io::empty());
        assert_eq!(reader.read_row()?, None);
        assert_eq!(reader.rows().count(), 0);
        assert_eq!(reader.parser().field_count(), 0);
        Ok(())
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_io_error_ends_iteration() {
        let mut reader = CsvLineReader::new(BufReader::new(FailingReader));

        let results: Vec<_> = reader.rows().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(CsvError::Io(_))));
    }

    #[test]
    fn test_into_inner_keeps_unread_input() -> Result<()> {
        let data = "a\nb\nc\n";
        let mut reader = CsvLineReader::new(data.as_bytes());
        reader.read_row()?;

        let rest = reader.into_inner();
        assert_eq!(rest, b"b\nc\n");
        Ok(())
    }
}
