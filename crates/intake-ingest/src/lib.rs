//! CSV parse boundary: tokenization, normalization, upload limits.

pub mod csv_reader;

pub use csv_reader::{MAX_FILE_BYTES, MAX_ROWS, parse_csv_bytes, read_csv_file};
