//! Builder-style reader.

use std::fmt;
use std::path::Path;

use crate::error::WktResult;
use crate::models::ParsedTable;
use crate::options::{self, ParseOption};

/// A reusable reader that records options in call order.
///
/// Reading with a `WktReader` is equivalent to calling [`crate::read`] with
/// the same options in the same order.
///
/// # Example
///
/// ```no_run
/// use wktfile::reader::WktReader;
///
/// let table = WktReader::new()
///     .comma_delimiter()
///     .no_header()
///     .read("./testdata/test_points.csv")?;
/// println!("Read {} rows", table.len());
/// # Ok::<(), wktfile::error::WktError>(())
/// ```
#[derive(Default)]
pub struct WktReader {
    options: Vec<Box<dyn ParseOption>>,
}

impl WktReader {
    /// Creates a reader with only the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arbitrary option.
    pub fn option(mut self, option: impl ParseOption + 'static) -> Self {
        self.options.push(Box::new(option));
        self
    }

    /// Selects `|` as the field delimiter.
    pub fn pipe_delimiter(self) -> Self {
        self.option(options::pipe_delimiter)
    }

    /// Selects `,` as the field delimiter.
    pub fn comma_delimiter(self) -> Self {
        self.option(options::comma_delimiter)
    }

    /// Selects tab as the field delimiter.
    pub fn tab_delimiter(self) -> Self {
        self.option(options::tab_delimiter)
    }

    /// Selects an arbitrary single character as the field delimiter.
    pub fn delimiter(self, delimiter: char) -> Self {
        self.option(options::custom_delimiter(delimiter))
    }

    /// Marks the first row as a header.
    pub fn has_header(self) -> Self {
        self.option(options::has_header)
    }

    /// Marks the file as having no header row.
    pub fn no_header(self) -> Self {
        self.option(options::no_header)
    }

    /// Reads a file with the recorded options.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> WktResult<ParsedTable> {
        let options: Vec<&dyn ParseOption> =
            self.options.iter().map(|option| option.as_ref()).collect();
        super::read(path, &options)
    }
}

impl fmt::Debug for WktReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WktReader")
            .field("options", &self.options.len())
            .finish()
    }
}
