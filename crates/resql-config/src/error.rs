//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving the configuration.
///
/// Every fallible step of the resolution pipeline returns one of these
/// instead of mutating a shared diagnostic buffer, so an error always
/// carries the section, key and offending value that produced it.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `(section, key)` pair is not in the option registry.
    #[error("Unknown config, section={section}, key={key}, value={value}")]
    UnknownOption {
        /// Section as it appeared in the source.
        section: String,
        /// Key as it appeared in the source.
        key: String,
        /// The value that was being applied.
        value: String,
    },

    /// A boolean option was given something other than `true` or `false`.
    #[error("Boolean value must be 'true' or 'false', section={section}, key={key}, value={value}")]
    InvalidBoolean {
        /// Section of the offending option.
        section: String,
        /// Key of the offending option.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// An integer option did not parse as a base-10 unsigned 64-bit value.
    #[error("Failed to parse, section={section}, key={key}, value={value}")]
    InvalidInteger {
        /// Section of the offending option.
        section: String,
        /// Key of the offending option.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// Configuration file not found.
    ///
    /// The only warning-level kind: startup tolerates a missing file at
    /// the default path and continues with defaults.
    #[error("There is no config file at {}", .path.display())]
    FileMissing {
        /// Path that was probed.
        path: PathBuf,
    },

    /// Configuration file exists but could not be read.
    #[error("Failed to read config file {}", .path.display())]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is malformed or contains an invalid value.
    #[error("{}:{line}: {source}", .path.display())]
    FileParse {
        /// Path to the file.
        path: PathBuf,
        /// Line the failure was detected on (1-based).
        line: usize,
        /// The scanner or merge failure at that line.
        #[source]
        source: Box<ConfigError>,
    },

    /// Malformed line in the INI input.
    #[error("{0}")]
    Syntax(String),

    /// An explicit `-c=` / `--config=` with an empty path.
    #[error("Invalid config file path")]
    InvalidConfigPath,
}

impl ConfigError {
    /// Create a new unknown-option error.
    pub fn unknown_option(
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::UnknownOption {
            section: section.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a new invalid-boolean error.
    pub fn invalid_boolean(
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidBoolean {
            section: section.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a new invalid-integer error.
    pub fn invalid_integer(
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidInteger {
            section: section.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a new read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Whether this error must abort startup.
    ///
    /// Everything except [`ConfigError::FileMissing`] is fatal; a missing
    /// file at the default path is reported as a warning and resolution
    /// continues with the values gathered so far.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::FileMissing { .. })
    }
}
