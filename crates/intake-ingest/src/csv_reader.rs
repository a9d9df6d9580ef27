use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

use intake_model::CsvFile;

/// Upload ceiling: files past this size are rejected before tokenizing.
pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;
/// Upload ceiling: data rows past this count are rejected.
pub const MAX_ROWS: usize = 10_000;

const CANDIDATE_DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Pick the delimiter with the highest count in the first non-empty line.
/// Ties and no-hits fall back to a comma.
fn sniff_delimiter(text: &str) -> char {
    let first_line = text.lines().find(|line| !line.trim().is_empty());
    let Some(line) = first_line else {
        return ',';
    };
    let mut best = ',';
    let mut best_count = 0usize;
    for candidate in CANDIDATE_DELIMITERS {
        let count = line.matches(candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Tokenize uploaded CSV bytes into an immutable [`CsvFile`] snapshot.
///
/// The first non-empty record is the header row. Cells and headers are
/// trimmed, BOM markers stripped, fully empty records skipped, and short
/// rows padded to the header width.
pub fn parse_csv_bytes(bytes: &[u8]) -> Result<CsvFile> {
    if bytes.len() > MAX_FILE_BYTES {
        bail!(
            "file is {} bytes, exceeding the {} byte upload limit",
            bytes.len(),
            MAX_FILE_BYTES
        );
    }
    let text = std::str::from_utf8(bytes).context("file is not valid UTF-8")?;
    let delimiter = sniff_delimiter(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_reader(text.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(
            CsvFile::new(Vec::new(), Vec::new()).with_source_info(bytes.len(), delimiter)
        );
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let rows: Vec<Vec<String>> = raw_rows.into_iter().skip(1).collect();
    if rows.len() > MAX_ROWS {
        bail!(
            "file has {} data rows, exceeding the {} row limit",
            rows.len(),
            MAX_ROWS
        );
    }
    debug!(
        columns = headers.len(),
        rows = rows.len(),
        delimiter = %delimiter,
        "csv tokenized"
    );
    Ok(CsvFile::new(headers, rows).with_source_info(bytes.len(), delimiter))
}

/// Read and tokenize a CSV file from disk.
pub fn read_csv_file(path: &Path) -> Result<CsvFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read csv: {}", path.display()))?;
    parse_csv_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_pads_short_rows() {
        let csv = "Name,Phone,Email\nJane Doe,555-1234,\nBob\n";
        let file = parse_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(file.headers, vec!["Name", "Phone", "Email"]);
        assert_eq!(file.row_count(), 2);
        assert_eq!(file.rows[1], vec!["Bob", "", ""]);
        assert_eq!(file.delimiter, ',');
    }

    #[test]
    fn sniffs_semicolon_delimiter() {
        let csv = "Name;Phone\nJane;555-1234\n";
        let file = parse_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(file.delimiter, ';');
        assert_eq!(file.headers, vec!["Name", "Phone"]);
        assert_eq!(file.rows[0], vec!["Jane", "555-1234"]);
    }

    #[test]
    fn strips_bom_and_whitespace() {
        let csv = "\u{feff}Name , Phone\n Jane ,555-1234\n";
        let file = parse_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(file.headers, vec!["Name", "Phone"]);
        assert_eq!(file.rows[0][0], "Jane");
    }

    #[test]
    fn skips_fully_empty_rows() {
        let csv = "Name,Phone\n,,\nJane,555-1234\n";
        let file = parse_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(file.row_count(), 1);
    }

    #[test]
    fn empty_input_yields_empty_snapshot() {
        let file = parse_csv_bytes(b"").unwrap();
        assert!(file.headers.is_empty());
        assert_eq!(file.row_count(), 0);
    }

    #[test]
    fn rejects_oversized_row_counts() {
        let mut csv = String::from("Name\n");
        for idx in 0..=MAX_ROWS {
            csv.push_str(&format!("row{idx}\n"));
        }
        let err = parse_csv_bytes(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row limit"));
    }
}
