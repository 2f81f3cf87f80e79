//! The parsed table returned by a successful read.

use serde::Serialize;

/// The in-memory contents of a WKT file.
///
/// A table is built once, at the end of a successful read. Every row has
/// the same number of fields, and the header (when present) has that
/// number of fields too. WKT values are kept as the raw field text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTable {
    source_path: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub(crate) fn new(source_path: String, header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            source_path,
            header,
            rows,
        }
    }

    /// Returns the path the table was read from.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Returns the header fields, or an empty slice if the file had no header.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if the table has a non-empty header.
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    /// Returns the position of the named header field.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|field| field == name)
    }

    /// Returns the values of the named column, in row order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// let table = wktfile::read("./testdata/test_points.wkt", &[])?;
    /// for wkt in table.column("wkt").into_iter().flatten() {
    ///     println!("{wkt}");
    /// }
    /// # Ok::<(), wktfile::error::WktError>(())
    /// ```
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }

    /// Consumes the table, returning its header and rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.header, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn points_table() -> ParsedTable {
        ParsedTable::new(
            "points.wkt".to_string(),
            strings(&["point_id", "wkt"]),
            vec![
                strings(&["1", "POINT(-72.5 43.7)"]),
                strings(&["2", "POINT(-73.3 44.9)"]),
            ],
        )
    }

    #[test]
    fn test_accessors() {
        let table = points_table();
        assert_eq!(table.source_path(), "points.wkt");
        assert_eq!(table.header(), strings(&["point_id", "wkt"]).as_slice());
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(table.has_header());
    }

    #[test]
    fn test_column_lookup() {
        let table = points_table();
        assert_eq!(table.column_index("wkt"), Some(1));
        assert_eq!(table.column_index("missing"), None);

        let wkts: Vec<&str> = table.column("wkt").unwrap().collect();
        assert_eq!(wkts, vec!["POINT(-72.5 43.7)", "POINT(-73.3 44.9)"]);
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn test_headerless_table() {
        let table = ParsedTable::new(
            "points.wkt".to_string(),
            Vec::new(),
            vec![strings(&["1", "POINT(0 0)"])],
        );
        assert!(!table.has_header());
        assert!(table.column("wkt").is_none());
    }

    #[test]
    fn test_into_parts() {
        let (header, rows) = points_table().into_parts();
        assert_eq!(header, strings(&["point_id", "wkt"]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(points_table()).unwrap();
        assert_eq!(json["source_path"], "points.wkt");
        assert_eq!(json["header"][1], "wkt");
        assert_eq!(json["rows"][1][1], "POINT(-73.3 44.9)");
    }
}
