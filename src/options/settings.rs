//! Parse settings loaded from YAML files.
//!
//! This module provides the [`ParseSettings`] type, an option whose values
//! come from a settings file instead of code.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{WktError, WktResult};

use super::types::{ParseConfig, ParseOption};

/// Parse options read from a YAML file.
///
/// Only the fields present in the file override the configuration; absent
/// fields leave whatever earlier options set.
///
/// # File Format
///
/// ```yaml
/// delimiter: comma   # pipe, comma, tab, or any single character
/// has_header: false
/// ```
///
/// # Example
///
/// ```no_run
/// use wktfile::options::ParseSettings;
///
/// let settings = ParseSettings::load("./testdata/comma_no_header.yaml")?;
/// let table = wktfile::read("./testdata/test_points.csv", &[&settings])?;
/// println!("Read {} rows", table.len());
/// # Ok::<(), wktfile::error::WktError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseSettings {
    /// The delimiter, by name or as a single character.
    #[serde(default)]
    pub delimiter: Option<String>,
    /// Whether the first row is a header.
    #[serde(default)]
    pub has_header: Option<bool>,
}

impl ParseSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns the settings on success, or an error if:
    /// - The file cannot be read (`Io`)
    /// - The file is not valid YAML or has unknown keys (`SettingsParse`)
    pub fn load<P: AsRef<Path>>(path: P) -> WktResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|source| WktError::Io {
            path: path_str.clone(),
            source,
        })?;

        Self::from_yaml(&content).map_err(|e| WktError::SettingsParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Parses settings from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Maps the configured delimiter name to a character.
    fn delimiter_char(name: &str) -> WktResult<char> {
        match name {
            "pipe" => Ok('|'),
            "comma" => Ok(','),
            "tab" => Ok('\t'),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(WktError::configuration(format!(
                        "delimiter {name:?} is neither pipe, comma, tab nor a single character"
                    ))),
                }
            }
        }
    }
}

impl ParseOption for ParseSettings {
    fn apply(&self, config: &mut ParseConfig) -> WktResult<()> {
        if let Some(name) = &self.delimiter {
            config.set_delimiter(Self::delimiter_char(name)?);
        }
        if let Some(has_header) = self.has_header {
            config.set_has_header(has_header);
        }
        Ok(())
    }
}
