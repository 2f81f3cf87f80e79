//! Parse configuration types and the standard options.
//!
//! An option is anything implementing [`ParseOption`]. Every closure or
//! function of the shape `Fn(&mut ParseConfig) -> WktResult<()>` is an
//! option, so callers can write their own next to the standard ones.

use crate::error::WktResult;

/// Parse configuration while options are being applied.
///
/// A fresh `ParseConfig` starts with nothing set. Options fill it in and
/// the resolver turns it into a [`ResolvedConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseConfig {
    delimiter: Option<char>,
    has_header: Option<bool>,
}

impl ParseConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delimiter set so far, if any.
    pub fn delimiter(&self) -> Option<char> {
        self.delimiter
    }

    /// Returns the header flag set so far, if any.
    pub fn has_header(&self) -> Option<bool> {
        self.has_header
    }

    /// Sets the field delimiter.
    pub fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = Some(delimiter);
    }

    /// Sets whether the first row of the file is a header.
    pub fn set_has_header(&mut self, has_header: bool) {
        self.has_header = Some(has_header);
    }
}

/// A fully resolved configuration, read-only during loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub(crate) delimiter: u8,
    pub(crate) has_header: bool,
}

impl ResolvedConfig {
    /// Returns the field delimiter.
    pub fn delimiter(&self) -> char {
        char::from(self.delimiter)
    }

    /// Returns true if the first row of the file is a header.
    pub fn has_header(&self) -> bool {
        self.has_header
    }
}

/// A mutator applied to a [`ParseConfig`] before any I/O happens.
///
/// Returning an error aborts resolution; no partially applied
/// configuration is ever used.
pub trait ParseOption {
    /// Applies this option to the configuration.
    fn apply(&self, config: &mut ParseConfig) -> WktResult<()>;
}

impl<F> ParseOption for F
where
    F: Fn(&mut ParseConfig) -> WktResult<()>,
{
    fn apply(&self, config: &mut ParseConfig) -> WktResult<()> {
        self(config)
    }
}

/// Selects `|` as the field delimiter. This is the default.
pub fn pipe_delimiter(config: &mut ParseConfig) -> WktResult<()> {
    config.set_delimiter('|');
    Ok(())
}

/// Selects `,` as the field delimiter.
pub fn comma_delimiter(config: &mut ParseConfig) -> WktResult<()> {
    config.set_delimiter(',');
    Ok(())
}

/// Selects tab as the field delimiter.
pub fn tab_delimiter(config: &mut ParseConfig) -> WktResult<()> {
    config.set_delimiter('\t');
    Ok(())
}

/// Selects an arbitrary single character as the field delimiter.
///
/// # Example
///
/// ```
/// use wktfile::options::{custom_delimiter, ParseConfig, ParseOption};
///
/// let mut config = ParseConfig::new();
/// custom_delimiter(';').apply(&mut config).unwrap();
/// assert_eq!(config.delimiter(), Some(';'));
/// ```
pub fn custom_delimiter(delimiter: char) -> impl Fn(&mut ParseConfig) -> WktResult<()> {
    move |config: &mut ParseConfig| {
        config.set_delimiter(delimiter);
        Ok(())
    }
}

/// Marks the first row of the file as a header. This is the default.
pub fn has_header(config: &mut ParseConfig) -> WktResult<()> {
    config.set_has_header(true);
    Ok(())
}

/// Marks the file as having no header row.
pub fn no_header(config: &mut ParseConfig) -> WktResult<()> {
    config.set_has_header(false);
    Ok(())
}
