//! Parse options and their resolution.
//!
//! Options are applied in order onto a [`ParseConfig`]: first the
//! [`DEFAULT_OPTIONS`] baseline (pipe delimiter, header row), then the
//! caller's options, each of which may override either value.
//!
//! # Example
//!
//! ```
//! use wktfile::options::{custom_delimiter, no_header, resolve};
//!
//! let semicolon = custom_delimiter(';');
//! let config = resolve(&[&semicolon, &no_header]).unwrap();
//! assert_eq!(config.delimiter(), ';');
//! assert!(!config.has_header());
//! ```

mod resolver;
mod settings;
mod types;

pub use resolver::{resolve, DEFAULT_OPTIONS};
pub use settings::ParseSettings;
pub use types::{
    comma_delimiter, custom_delimiter, has_header, no_header, pipe_delimiter, tab_delimiter,
    ParseConfig, ParseOption, ResolvedConfig,
};
