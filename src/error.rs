//! Error types for the WKT file reader.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving options and
//! reading a file.

use std::io;

use thiserror::Error;

/// The main error type for the WKT file reader.
///
/// Every fallible operation in the crate returns this error type. A failed
/// read never yields a partially populated table.
///
/// # Example
///
/// ```
/// use wktfile::error::WktError;
///
/// let error = WktError::Configuration {
///     message: "delimiter must be a single ASCII character".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid configuration: delimiter must be a single ASCII character"
/// );
/// ```
#[derive(Debug, Error)]
pub enum WktError {
    /// An option rejected the configuration, or the resolved
    /// configuration is unusable.
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// A description of what was rejected.
        message: String,
    },

    /// The file could not be opened or read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// The path that failed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file content is not well-formed delimited text.
    #[error("Malformed file '{path}'{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Format {
        /// The path of the malformed file.
        path: String,
        /// The 1-based line where the problem was detected, when known.
        line: Option<u64>,
        /// A description of the problem.
        message: String,
    },

    /// A settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParse {
        /// The path to the settings file.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// Broad classification of a [`WktError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configuration was rejected.
    Configuration,
    /// The file could not be read.
    Io,
    /// The file content was malformed.
    Format,
}

impl WktError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WktError::Configuration { .. } | WktError::SettingsParse { .. } => {
                ErrorKind::Configuration
            }
            WktError::Io { .. } => ErrorKind::Io,
            WktError::Format { .. } => ErrorKind::Format,
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        WktError::Configuration {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return WktError.
pub type WktResult<T> = Result<T, WktError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_displays_message() {
        let error = WktError::configuration("no delimiter set");
        assert_eq!(error.to_string(), "Invalid configuration: no delimiter set");
    }

    #[test]
    fn test_io_displays_path_and_source() {
        let error = WktError::Io {
            path: "/missing/points.wkt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read '/missing/points.wkt': not found"
        );
    }

    #[test]
    fn test_format_displays_line_when_known() {
        let error = WktError::Format {
            path: "points.wkt".to_string(),
            line: Some(3),
            message: "found record with 3 fields, expected 2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed file 'points.wkt' at line 3: found record with 3 fields, expected 2"
        );
    }

    #[test]
    fn test_format_omits_line_when_unknown() {
        let error = WktError::Format {
            path: "points.wkt".to_string(),
            line: None,
            message: "invalid UTF-8".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed file 'points.wkt': invalid UTF-8"
        );
    }

    #[test]
    fn test_settings_parse_displays_path_and_message() {
        let error = WktError::SettingsParse {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse settings file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_kind_classifies_each_variant() {
        assert_eq!(
            WktError::configuration("x").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            WktError::SettingsParse {
                path: "s.yaml".to_string(),
                message: "x".to_string(),
            }
            .kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            WktError::Io {
                path: "p".to_string(),
                source: io::Error::other("x"),
            }
            .kind(),
            ErrorKind::Io
        );
        assert_eq!(
            WktError::Format {
                path: "p".to_string(),
                line: None,
                message: "x".to_string(),
            }
            .kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error;

        let error = WktError::Io {
            path: "p".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.source().is_some());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<WktError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_configuration() -> WktResult<()> {
            Err(WktError::configuration("rejected"))
        }

        fn propagates_error() -> WktResult<()> {
            returns_configuration()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
