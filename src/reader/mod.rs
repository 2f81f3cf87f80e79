//! Reading WKT files into [`ParsedTable`]s.
//!
//! Control flows one way: options are resolved into a configuration,
//! then the loader reads the file with it. Nothing is cached between
//! calls, so separate reads may run on separate threads.

mod builder;
mod loader;
pub(crate) mod quoting;

use std::path::Path;

use crate::error::WktResult;
use crate::models::ParsedTable;
use crate::options::{self, ParseOption};

pub use builder::WktReader;
pub use loader::load;

/// Reads a WKT file with the default options overridden by `options`.
///
/// # Example
///
/// ```no_run
/// use wktfile::options::comma_delimiter;
///
/// let table = wktfile::read("./testdata/test_points.csv", &[&comma_delimiter])?;
/// assert_eq!(table.header(), ["point_id", "wkt"]);
/// # Ok::<(), wktfile::error::WktError>(())
/// ```
pub fn read<P: AsRef<Path>>(path: P, options: &[&dyn ParseOption]) -> WktResult<ParsedTable> {
    let config = options::resolve(options)?;
    load(path, &config)
}
