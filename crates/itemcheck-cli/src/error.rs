//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `itemcheck` binary. Every
//! variant maps to a stable exit code via [`CliError::exit_code`]:
//!
//! - Exit code **2**: the input could not be read or is not an item document.
//! - Exit code **1**: the input was read and at least one record violated a
//!   rule of the requested group.
use std::fmt;
use std::path::PathBuf;

/// All error conditions that the `itemcheck` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, when known (disk files only).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error.
    IoError {
        /// A label for the source or sink.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not JSON, or not an item / array of items.
    ParseFailed {
        /// What went wrong, with position information where available.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// At least one record has violations.
    ///
    /// The violations have already been printed.
    ValidationFailed {
        /// Number of records with at least one violation.
        invalid_records: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,

            Self::ValidationFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("error: invalid item document: {detail}")
            }
            Self::ValidationFailed { invalid_records: 1 } => {
                "error: validation failed for 1 record".to_owned()
            }
            Self::ValidationFailed { invalid_records } => {
                format!("error: validation failed for {invalid_records} records")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("items.json"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/items.json"),
            },
            CliError::FileTooLarge {
                source: "big.json".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "bad.json".to_owned(),
                byte_offset: 3,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "items.json".to_owned(),
                detail: "device full".to_owned(),
            },
            CliError::ParseFailed {
                detail: "expected value".to_owned(),
            },
        ];
        for e in &errors {
            assert_eq!(e.exit_code(), 2, "{e:?}");
        }
    }

    #[test]
    fn validation_failed_is_exit_1() {
        let e = CliError::ValidationFailed { invalid_records: 3 };
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("catalogue.json"),
        };
        let msg = e.message();
        assert!(msg.contains("catalogue.json"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_without_actual_mentions_limit() {
        let e = CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: 512,
            actual: None,
        };
        assert!(e.message().contains("512"));
    }

    #[test]
    fn validation_failed_message_pluralizes() {
        assert_eq!(
            CliError::ValidationFailed { invalid_records: 1 }.message(),
            "error: validation failed for 1 record"
        );
        assert_eq!(
            CliError::ValidationFailed { invalid_records: 2 }.message(),
            "error: validation failed for 2 records"
        );
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::ParseFailed {
            detail: "line 1, column 1: expected value".to_owned(),
        };
        assert_eq!(format!("{e}"), e.message());
    }
}
