//! Field splitting for a single CSV line
//!
//! The delimiter is always `,` and the quote character is always `"`.
//! A doubled quote inside a quoted field is an escaped literal quote.

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Split a quote-balanced line into fields
///
/// A line with N unquoted commas yields N+1 fields; an empty line yields
/// a single empty field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            // `""` inside a quoted field is one literal quote
            QUOTE if quoted && chars.next_if_eq(&QUOTE).is_some() => field.push(QUOTE),
            QUOTE => quoted = !quoted,
            DELIMITER if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }

    fields.push(field);
    fields
}

/// Check that a line holds an even number of quote characters
pub fn quotes_balanced(line: &str) -> bool {
    line.bytes().filter(|&b| b == QUOTE as u8).count() % 2 == 0
}

/// Remove any trailing run of `\r` and `\n`
pub fn trim_line_ending(line: &mut String) {
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
}
