//! Error types.

use thiserror::Error;

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors returned while generating a configuration.
///
/// Every variant is fatal for the run: the generator stops at the first
/// error and produces no output.
#[derive(Debug, Error)]
pub enum GenError {
    /// The source directory could not be listed.
    #[error("Cannot read source directory '{path}': {source}")]
    SourceDir {
        /// The directory that was requested.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A source file could not be read (missing permissions, non-UTF-8 content).
    #[error("Cannot read source file '{path}': {source}")]
    ReadFile {
        /// Path of the unreadable file.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A line assigned an option other than `domain` or `server`.
    #[error("Unknown option '{option}' in file '{file}'")]
    UnknownOption {
        /// The offending option name.
        option: String,
        /// The file containing it.
        file: String,
    },

    /// A non-blank line that is neither a comment nor an assignment.
    #[error("Unrecognized line '{line}' in file '{file}'")]
    UnrecognizedLine {
        /// Line content with any comment removed.
        line: String,
        /// The file containing it.
        file: String,
    },
}

impl GenError {
    /// Returns `true` if the error comes from source file content rather
    /// than from the filesystem.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownOption { .. } | Self::UnrecognizedLine { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_option_names_file_and_option() {
        let e = GenError::UnknownOption {
            option: "foo".into(),
            file: "data/acme".into(),
        };
        assert_eq!(e.to_string(), "Unknown option 'foo' in file 'data/acme'");
        assert!(e.is_parse_error());
    }

    #[test]
    fn io_errors_are_not_parse_errors() {
        let e = GenError::SourceDir {
            path: "data".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!e.is_parse_error());
        assert!(e.to_string().starts_with("Cannot read source directory 'data'"));
    }

    #[test]
    fn messages_share_casing() {
        let io = || std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let errors = [
            GenError::SourceDir {
                path: "data".into(),
                source: io(),
            },
            GenError::ReadFile {
                path: "data/acme".into(),
                source: io(),
            },
            GenError::UnknownOption {
                option: "foo".into(),
                file: "data/acme".into(),
            },
            GenError::UnrecognizedLine {
                line: "junk".into(),
                file: "data/acme".into(),
            },
        ];
        for e in errors {
            let message = e.to_string();
            assert!(message.starts_with(char::is_uppercase), "{message}");
        }
    }
}
