//! Data models returned by the reader.

mod table;

pub use table::ParsedTable;
