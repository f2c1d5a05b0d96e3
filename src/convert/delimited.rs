//! CSV and TSV conversion.
//!
//! Parsing follows standard CSV quoting (double quotes, doubled to escape) via
//! the `csv` crate. Records may have any number of fields; width differences
//! are handled when the table is rendered.
//!
//! A blank line is an empty record, not a separator to skip: inside the data it
//! renders as an all-empty row, and as the first line it leaves the table
//! without a header (so the result is empty). The terminator of the final
//! record never adds a row.

use super::MalformedLine;
use super::table::to_markdown_table;

/// Convert delimited text to a markdown table.
///
/// The first record is the header. Empty input, or input whose first line is
/// blank, yields an empty string.
pub fn convert_delimited(content: &str, delimiter: u8) -> Result<String, MalformedLine> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let bytes = content.as_bytes();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut consumed = 0;

    loop {
        let more = reader.read_record(&mut record).map_err(|e| malformed_record(content, &e))?;
        let end = if more {
            usize::try_from(reader.position().byte()).map_or(bytes.len(), |b| b.min(bytes.len()))
        } else {
            bytes.len()
        };

        // the reader silently skips blank lines; recover them from the raw bytes
        let blank_lines = count_leading_blank_lines(bytes, consumed, end);
        rows.extend(std::iter::repeat_n(Vec::new(), blank_lines));

        if !more {
            break;
        }
        rows.push(record.iter().map(str::to_string).collect());
        consumed = end;
    }

    let mut rows = rows.into_iter();
    let Some(headers) = rows.next() else {
        return Ok(String::new());
    };
    let data: Vec<Vec<String>> = rows.collect();

    Ok(to_markdown_table(&headers, &data))
}

/// Convert comma-separated text to a markdown table.
pub fn convert_csv(content: &str) -> Result<String, MalformedLine> {
    convert_delimited(content, b',')
}

/// Convert tab-separated text to a markdown table.
pub fn convert_tsv(content: &str) -> Result<String, MalformedLine> {
    convert_delimited(content, b'\t')
}

/// Count blank lines at the start of `bytes[start..end]`.
///
/// `start` is just past the previous record. A `\n` completing that record's
/// `\r\n` terminator is not a blank line.
fn count_leading_blank_lines(bytes: &[u8], start: usize, end: usize) -> usize {
    let mut pos = start;
    if pos > 0 && bytes[pos - 1] == b'\r' && bytes.get(pos) == Some(&b'\n') && pos < end {
        pos += 1;
    }

    let mut count = 0;
    while pos < end {
        match bytes[pos] {
            b'\n' => pos += 1,
            b'\r' => {
                pos += 1;
                if pos < end && bytes[pos] == b'\n' {
                    pos += 1;
                }
            }
            _ => break,
        }
        count += 1;
    }
    count
}

fn malformed_record(content: &str, error: &csv::Error) -> MalformedLine {
    let line_number = error.position().map_or(1, |p| usize::try_from(p.line()).unwrap_or(1)).max(1);
    let line = content.lines().nth(line_number - 1).unwrap_or_default();
    MalformedLine::new(line_number, line.trim(), error.to_string())
}
