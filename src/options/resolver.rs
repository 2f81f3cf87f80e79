//! Option resolution.
//!
//! Applies the baseline options, then the caller's options in order, and
//! validates the result into a [`ResolvedConfig`].

use tracing::debug;

use crate::error::{WktError, WktResult};
use crate::reader::quoting::QUOTE;

use super::types::{has_header, pipe_delimiter, ParseConfig, ParseOption, ResolvedConfig};

/// Baseline options applied before any caller option, in this order.
pub const DEFAULT_OPTIONS: [fn(&mut ParseConfig) -> WktResult<()>; 2] =
    [pipe_delimiter, has_header];

/// Resolves a configuration from the baseline plus the given options.
///
/// # Returns
///
/// Returns the resolved configuration, or an error if:
/// - Any option fails (the first failure is returned as-is)
/// - The resulting delimiter is not a single ASCII character, or is the
///   quote character or a line terminator
///
/// # Example
///
/// ```
/// use wktfile::options::{comma_delimiter, no_header, resolve};
///
/// let config = resolve(&[&comma_delimiter, &no_header])?;
/// assert_eq!(config.delimiter(), ',');
/// assert!(!config.has_header());
/// # Ok::<(), wktfile::error::WktError>(())
/// ```
pub fn resolve(options: &[&dyn ParseOption]) -> WktResult<ResolvedConfig> {
    let mut config = ParseConfig::new();

    for default in DEFAULT_OPTIONS {
        default(&mut config)?;
    }

    for option in options {
        option.apply(&mut config)?;
    }

    let resolved = validate(&config)?;
    debug!(
        delimiter = ?resolved.delimiter(),
        has_header = resolved.has_header(),
        "Resolved parse configuration"
    );

    Ok(resolved)
}

/// Checks that every field is set and the delimiter is usable.
fn validate(config: &ParseConfig) -> WktResult<ResolvedConfig> {
    let delimiter = config
        .delimiter()
        .ok_or_else(|| WktError::configuration("no delimiter set"))?;
    let has_header = config
        .has_header()
        .ok_or_else(|| WktError::configuration("header presence not set"))?;

    if !delimiter.is_ascii() {
        return Err(WktError::configuration(format!(
            "delimiter {delimiter:?} must be a single ASCII character"
        )));
    }
    if delimiter == char::from(QUOTE) || delimiter == '\r' || delimiter == '\n' {
        return Err(WktError::configuration(format!(
            "delimiter {delimiter:?} conflicts with quoting or line endings"
        )));
    }

    Ok(ResolvedConfig {
        delimiter: delimiter as u8,
        has_header,
    })
}
