#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the wcdox crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Merging and reading configuration never fails. Errors only surface at the
//! boundary: reading files, decoding documents, and decoding the merged
//! configuration into its typed form.

use std::path::{Path, PathBuf};

/// Unified error type returned by the loaders, the store, and the CLI.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading input documents.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the document.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors raised for user configuration files.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps JSON decoding errors raised for the custom elements manifest.
    #[error("failed to parse manifest: {source}")]
    Manifest {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// Returned when the merged configuration does not match the expected
    /// shape, for example a string where a heading level is expected.
    #[error("invalid configuration: {source}")]
    Config {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// Wraps serialization errors when writing JSON output.
    #[error("failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Wraps I/O errors that occur while writing rendered output.
    #[error("failed to write output to {path:?}: {source}")]
    Output {
        /// Location of the output file.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Returned when a request cannot be satisfied, such as an unknown tag.
    #[error("invalid request: {message}")]
    Validation {
        /// Human readable message describing the problem.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the document that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Output`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the output file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn output_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Output {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Manifest`] variant from a JSON decoding failure.
pub fn manifest_error(source: serde_json::Error) -> Error {
    Error::Manifest {
        source
    }
}

/// Creates an [`Error::Config`] variant from a JSON decoding failure.
pub fn config_error(source: serde_json::Error) -> Error {
    Error::Config {
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn validation_constructor_populates_message() {
        let error = Error::validation("unknown tag");
        match error {
            Error::Validation {
                ref message
            } => {
                assert_eq!(message, "unknown tag");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::validation("display me");
        assert_eq!(error.to_string(), error.to_display_string());
        assert_eq!(error.to_string(), "invalid request: display me");
    }

    #[test]
    fn io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/custom-elements.json");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::io_error(path, io_error);

        match error {
            Error::Io {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}")
        }
    }

    #[test]
    fn output_io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/docs.html");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = super::output_io_error(path, io_error);

        match error {
            Error::Output {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected output error, got {other:?}")
        }
    }

    #[test]
    fn serde_yaml_conversion_maps_to_parse_variant() {
        let error = serde_yaml::from_str::<usize>("not-a-number").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Parse { .. }));
    }

    #[test]
    fn manifest_and_config_helpers_keep_distinct_variants() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        assert!(matches!(super::manifest_error(invalid), Error::Manifest { .. }));

        let invalid = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = super::config_error(invalid);
        assert!(error.to_string().starts_with("invalid configuration:"));
    }
}
