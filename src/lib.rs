//! Reader for delimited WKT files.
//!
//! This crate reads a delimited text file whose cells may hold Well-Known
//! Text geometry strings into an in-memory table. The delimiter defaults to
//! `|` and the first row is treated as a header; both can be changed with
//! options. Geometry strings are kept as raw text.
//!
//! # Example
//!
//! ```no_run
//! use wktfile::options::{comma_delimiter, no_header};
//!
//! let table = wktfile::read("./testdata/test_points.wkt", &[])?;
//! for row in table.rows() {
//!     println!("{}: {}", row[0], row[1]);
//! }
//!
//! let raw = wktfile::read("./testdata/test_points.csv", &[&comma_delimiter, &no_header])?;
//! assert!(raw.header().is_empty());
//! # Ok::<(), wktfile::error::WktError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod options;
pub mod reader;

pub use error::{ErrorKind, WktError, WktResult};
pub use models::ParsedTable;
pub use reader::{read, WktReader};
