//! Delimited-text loading.
//!
//! Reads the whole file, validates its quoting, tokenizes it with the `csv`
//! crate and splits off the header row.

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{WktError, WktResult};
use crate::models::ParsedTable;
use crate::options::ResolvedConfig;

use super::quoting::check_quoting;

/// Loads a file into a [`ParsedTable`] using a resolved configuration.
///
/// # Returns
///
/// Returns the table on success, or an error if:
/// - The file cannot be opened or read (`Io`)
/// - Quoting is malformed, rows have differing field counts, or the text
///   is not valid UTF-8 (`Format`)
///
/// An empty file yields an empty table whether or not a header is expected.
pub fn load<P: AsRef<Path>>(path: P, config: &ResolvedConfig) -> WktResult<ParsedTable> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    debug!(
        path = %path_str,
        delimiter = ?config.delimiter(),
        has_header = config.has_header(),
        "Reading WKT file"
    );

    let content = read_all(path).map_err(|source| {
        warn!(path = %path_str, error = %source, "Failed to read WKT file");
        WktError::Io {
            path: path_str.clone(),
            source,
        }
    })?;

    if let Err(err) = check_quoting(&content, config.delimiter) {
        warn!(path = %path_str, line = err.line, error = err.message, "Malformed quoting");
        return Err(WktError::Format {
            path: path_str,
            line: Some(err.line),
            message: err.message.to_string(),
        });
    }

    let records = decode(&content, config.delimiter, &path_str)?;

    let (header, rows) = if config.has_header {
        let mut records = records.into_iter();
        let header = records.next().unwrap_or_default();
        (header, records.collect())
    } else {
        (Vec::new(), records)
    };

    debug!(
        path = %path_str,
        columns = header.len(),
        rows = rows.len(),
        "Finished reading WKT file"
    );

    Ok(ParsedTable::new(path_str, header, rows))
}

/// Reads the entire file; the handle is closed when this returns.
fn read_all(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    Ok(content)
}

/// Tokenizes the content into rows of raw field values.
fn decode(content: &[u8], delimiter: u8, path: &str) -> WktResult<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(false)
        .from_reader(Cursor::new(content));

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| {
            let err = decode_error(err, path);
            warn!(path = %path, error = %err, "Failed to decode WKT file");
            err
        })?;
        records.push(record.iter().map(str::to_owned).collect());
    }

    Ok(records)
}

fn decode_error(err: csv::Error, path: &str) -> WktError {
    let line = err.position().map(|pos| pos.line());
    let message = match err.into_kind() {
        csv::ErrorKind::Io(source) => {
            return WktError::Io {
                path: path.to_string(),
                source,
            };
        }
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("found record with {len} fields, expected {expected_len}"),
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
        kind => format!("{kind:?}"),
    };

    WktError::Format {
        path: path.to_string(),
        line,
        message,
    }
}
