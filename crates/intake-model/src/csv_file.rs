use serde::{Deserialize, Serialize};

/// Immutable snapshot of an uploaded CSV file.
///
/// Every row carries exactly `headers.len()` cells; short rows are padded
/// with empty strings at the parser boundary and the constructor upholds
/// the same invariant for programmatically built snapshots. A re-upload
/// replaces the whole value, nothing is mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvFile {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub byte_size: usize,
    pub delimiter: char,
    pub encoding: String,
}

impl CsvFile {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut file = Self {
            headers,
            rows,
            byte_size: 0,
            delimiter: ',',
            encoding: "utf-8".to_string(),
        };
        file.pad_rows();
        file
    }

    pub fn with_source_info(mut self, byte_size: usize, delimiter: char) -> Self {
        self.byte_size = byte_size;
        self.delimiter = delimiter;
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a header, matching exact first and case-insensitively as
    /// a fallback.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h == header)
            .or_else(|| {
                self.headers
                    .iter()
                    .position(|h| h.eq_ignore_ascii_case(header))
            })
    }

    /// Cell at (row, column) or an empty string when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn pad_rows(&mut self) {
        let width = self.headers.len();
        for row in &mut self.rows {
            if row.len() < width {
                row.resize(width, String::new());
            } else if row.len() > width {
                row.truncate(width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_are_padded() {
        let file = CsvFile::new(
            vec!["Name".to_string(), "Phone".to_string()],
            vec![vec!["Jane".to_string()]],
        );
        assert_eq!(file.rows[0].len(), 2);
        assert_eq!(file.cell(0, 1), "");
    }

    #[test]
    fn column_lookup_falls_back_to_case_insensitive() {
        let file = CsvFile::new(vec!["Name".to_string()], vec![]);
        assert_eq!(file.column_index("Name"), Some(0));
        assert_eq!(file.column_index("name"), Some(0));
        assert_eq!(file.column_index("missing"), None);
    }
}
