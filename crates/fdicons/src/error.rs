//! Error types for theme discovery and index parsing.

use std::path::PathBuf;

/// Result type alias for fdicons operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading theme and preference files.
///
/// None of these cross the [`IconDatabase`](crate::IconDatabase) boundary:
/// the database logs them and carries on with whatever it could read.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of a sectioned key/value file could not be parsed.
    #[error("Failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error means the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let err = Error::io(
            "/nope/theme.conf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.is_not_found());

        let err = Error::parse("/x/index.theme", "unterminated section");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display() {
        let err = Error::parse("/icons/Foo/index.theme", "unterminated section");
        assert_eq!(
            err.to_string(),
            "Failed to parse '/icons/Foo/index.theme': unterminated section"
        );
    }
}
