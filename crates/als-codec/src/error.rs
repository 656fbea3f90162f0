//! Error types for Live set import and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing Live set files.
///
/// Every error aborts the current import or export; no partial project is
/// ever returned.
#[derive(Debug, Error)]
pub enum AlsError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Container is empty, unreadable or not a gzip frame.
    #[error("invalid container: {message}")]
    Decompression { message: String },

    /// Decompressed text is not a well-formed tree.
    #[error("malformed document: {message}")]
    MalformedTree { message: String },

    /// A node or attribute required by the active version is absent.
    #[error("missing field: {path}")]
    MissingField { path: String },

    /// Attribute text does not coerce to the requested type.
    #[error("invalid value for {attribute}: '{text}' is not a valid {expected}")]
    InvalidValue {
        attribute: String,
        text: String,
        expected: &'static str,
    },

    /// Creator string names no supported version.
    #[error("unsupported version: {creator}")]
    UnsupportedVersion { creator: String },

    /// Element in the tracks container is not a known track kind.
    #[error("invalid track kind: {tag}")]
    InvalidTrackKind { tag: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Live set operations.
pub type Result<T> = std::result::Result<T, AlsError>;

impl AlsError {
    /// Create a Decompression error.
    pub fn decompression(message: impl Into<String>) -> Self {
        Self::Decompression {
            message: message.into(),
        }
    }

    /// Create a MalformedTree error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTree {
            message: message.into(),
        }
    }

    /// Create a MissingField error.
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    /// Create an InvalidValue error.
    pub fn invalid_value(
        attribute: impl Into<String>,
        text: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidValue {
            attribute: attribute.into(),
            text: text.into(),
            expected,
        }
    }

    /// Create an UnsupportedVersion error.
    pub fn unsupported_version(creator: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            creator: creator.into(),
        }
    }

    /// Create an InvalidTrackKind error.
    pub fn invalid_track_kind(tag: impl Into<String>) -> Self {
        Self::InvalidTrackKind { tag: tag.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlsError::missing_field("Ableton/LiveSet/Tracks");
        assert_eq!(format!("{err}"), "missing field: Ableton/LiveSet/Tracks");

        let err = AlsError::invalid_value("Value", "maybe", "boolean");
        assert_eq!(
            format!("{err}"),
            "invalid value for Value: 'maybe' is not a valid boolean"
        );

        let err = AlsError::unsupported_version("Ableton Live 7.0.0");
        assert_eq!(format!("{err}"), "unsupported version: Ableton Live 7.0.0");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: AlsError = io_err.into();
        assert!(matches!(err, AlsError::Io(_)));
    }
}
